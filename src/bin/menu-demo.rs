//! Demo host for the context menu: a fake editor line that opens the menu as
//! you type. The filtering and selection logic below plays the role of the
//! host application's completion machinery; the library only renders.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

use tui_context_menu::components::helpers::anchored_rect;
use tui_context_menu::components::ContextMenuView;
use tui_context_menu::config;
use tui_context_menu::container::ContextMenuContainer;
use tui_context_menu::state::{
    map_state_to_props, CandidateEntry, MenuState, MenuStore, MAX_DISPLAYED_ENTRIES,
};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn candidates() -> Vec<CandidateEntry> {
    vec![
        CandidateEntry::new("push", "fn(&mut self, T)", "method")
            .with_documentation("Appends an element to the back of the collection."),
        CandidateEntry::new("push_str", "fn(&mut self, &str)", "method")
            .with_documentation("Appends a given string slice onto the end of this String."),
        CandidateEntry::new("pop", "fn(&mut self) -> Option<T>", "method")
            .with_documentation("Removes the last element and returns it, or None if empty."),
        CandidateEntry::new("len", "fn(&self) -> usize", "method")
            .with_documentation("Returns the number of elements in the collection."),
        CandidateEntry::new("is_empty", "fn(&self) -> bool", "method"),
        CandidateEntry::new("iter", "fn(&self) -> Iter<'_, T>", "method")
            .with_documentation("Returns an iterator over the slice."),
        CandidateEntry::new("insert", "fn(&mut self, usize, T)", "method"),
        CandidateEntry::new("clear", "fn(&mut self)", "method")
            .with_documentation("Clears the collection, removing all values."),
        CandidateEntry::new("contains", "fn(&self, &T) -> bool", "method"),
        CandidateEntry::new("capacity", "fn(&self) -> usize", "method"),
        CandidateEntry::new("extend", "fn(&mut self, I)", "method"),
        CandidateEntry::new("retain", "fn(&mut self, F)", "method"),
        CandidateEntry::new("String", "std::string", "struct")
            .with_documentation("A UTF-8 encoded, growable string."),
        CandidateEntry::new("println!", "macro", "snippet")
            .with_documentation("Prints to the standard output, with a newline."),
        CandidateEntry::new("PartialEq", "trait", "interface"),
        CandidateEntry::new("crate", "keyword", "keyword"),
    ]
}

/// Stand-in for the host's menu state machine: owns the typed text, filters
/// the candidate list, moves the selection, and pushes snapshots into the
/// store. Trims its filtered list with the same constant the view caps at.
struct DemoHost {
    config: config::UiConfig,
    candidates: Vec<CandidateEntry>,
    filter: String,
    selected_index: usize,
    menu_open: bool,
    accepted: Option<String>,
}

impl DemoHost {
    fn new(config: config::UiConfig) -> Self {
        Self {
            config,
            candidates: candidates(),
            filter: String::new(),
            selected_index: 0,
            menu_open: false,
            accepted: None,
        }
    }

    fn filtered(&self) -> Vec<CandidateEntry> {
        self.candidates
            .iter()
            .filter(|c| {
                c.label
                    .to_ascii_lowercase()
                    .contains(&self.filter.to_ascii_lowercase())
            })
            .take(MAX_DISPLAYED_ENTRIES)
            .cloned()
            .collect()
    }

    fn sync(&mut self, store: &MenuStore) {
        if !self.menu_open {
            store.close();
            return;
        }
        let filtered = self.filtered();
        if !filtered.is_empty() {
            self.selected_index = self.selected_index.min(filtered.len() - 1);
        }
        store.open(MenuState {
            filter: self.filter.clone(),
            filtered_entries: filtered,
            selected_index: self.selected_index,
            foreground: self.config.foreground_color(),
            background: self.config.background_color(),
        });
    }

    /// Returns false when the demo should quit.
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Esc => {
                if self.menu_open {
                    self.menu_open = false;
                } else {
                    return false;
                }
            }
            KeyCode::Down => self.selected_index = self.selected_index.saturating_add(1),
            KeyCode::Up => self.selected_index = self.selected_index.saturating_sub(1),
            KeyCode::Enter => {
                if let Some(entry) = self.filtered().get(self.selected_index) {
                    self.accepted = Some(entry.label.clone());
                }
                self.menu_open = false;
            }
            KeyCode::Backspace => {
                self.filter.pop();
                if self.filter.is_empty() {
                    self.menu_open = false;
                }
            }
            KeyCode::Char(c) => {
                self.filter.push(c);
                self.menu_open = true;
                self.selected_index = 0;
            }
            _ => {}
        }
        true
    }
}

fn draw(f: &mut Frame, host: &DemoHost, menu: &ContextMenuContainer, store: &MenuStore) {
    let area = f.area();

    let editor_line = Line::from(vec![
        Span::styled(" > ", Style::default().add_modifier(Modifier::DIM)),
        Span::raw(host.filter.clone()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    if area.height > 1 {
        f.render_widget(Paragraph::new(editor_line), Rect::new(0, 1, area.width, 1));
    }

    let status = match &host.accepted {
        Some(label) => format!(" accepted: {label}"),
        None => " type to open the menu; ↑↓ select, Enter accept, Esc close".to_string(),
    };
    if area.height > 0 {
        f.render_widget(
            Paragraph::new(Span::styled(status, Style::default().add_modifier(Modifier::DIM))),
            Rect::new(0, area.height - 1, area.width, 1),
        );
    }

    // Anchor the popup one row under the fake cursor.
    let props = map_state_to_props(store.snapshot());
    let size = ContextMenuView::new(&props).size();
    let anchor_x = 3 + host.filter.chars().count() as u16;
    let popup = anchored_rect(anchor_x, 2, size, area);
    f.render_widget(menu, popup);
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    let store = Arc::new(MenuStore::new());
    let menu = ContextMenuContainer::new(store.clone());
    let mut host = DemoHost::new(config::load_config());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut host, &menu, &store).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    host: &mut DemoHost,
    menu: &ContextMenuContainer,
    store: &MenuStore,
) -> Result<()> {
    // Blocking reader thread feeding the async loop, so slow draws never
    // drop key presses.
    let (event_tx, mut event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    let mut redraw = store.subscribe();
    host.sync(store);

    loop {
        terminal.draw(|f| draw(f, host, menu, store))?;

        tokio::select! {
            Some(res) = event_rx.recv() => {
                match res? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if !host.handle_key(key.code, key.modifiers) {
                            return Ok(());
                        }
                        host.sync(store);
                    }
                    Event::Resize(..) => {}
                    _ => {}
                }
            }
            // Store updates from elsewhere (none in this demo, but this is
            // the subscription contract a real host would rely on).
            changed = redraw.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
            }
        }
    }
}

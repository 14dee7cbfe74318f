use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::documentation::DocumentationPanel;
use super::item::MenuItem;
use crate::state::{CandidateEntry, MenuProps, MAX_DISPLAYED_ENTRIES};
use crate::theme::border_color;

/// Documentation of the entry at `selected_index`, or `None` when the list
/// is empty or the index is out of range. Pure lookup, no side effects.
#[must_use]
pub fn documentation_for(entries: &[CandidateEntry], selected_index: usize) -> Option<&str> {
    entries.get(selected_index)?.documentation.as_deref()
}

/// The pop-up completion/context menu.
///
/// A pure function of [`MenuProps`]: hidden props produce no output at all,
/// visible props produce a bordered list of at most
/// [`MAX_DISPLAYED_ENTRIES`] candidates with the selected entry marked and
/// its documentation rendered underneath. All colors come from the props;
/// the border/highlight color is derived from them via
/// [`border_color`].
///
/// The view renders into whatever area the caller hands it; hosts combine
/// [`ContextMenuView::size`] with
/// [`helpers::anchored_rect`](super::helpers::anchored_rect) to place the
/// popup near their cursor.
pub struct ContextMenuView<'a> {
    pub props: &'a MenuProps,
}

impl<'a> ContextMenuView<'a> {
    #[must_use]
    pub fn new(props: &'a MenuProps) -> Self {
        Self { props }
    }

    fn capped_entries(&self) -> &'a [CandidateEntry] {
        let len = self.props.entries.len().min(MAX_DISPLAYED_ENTRIES);
        &self.props.entries[..len]
    }

    /// Preferred popup size in cells, borders included.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        let entries = self.capped_entries();
        let content_width = entries.iter().map(|e| MenuItem::width(e)).max().unwrap_or(0);
        let width = (content_width as u16).saturating_add(2);

        let doc_height = DocumentationPanel::height(
            documentation_for(entries, self.props.selected_index),
            width.saturating_sub(2),
        );
        let height = (entries.len() as u16)
            .saturating_add(doc_height)
            .saturating_add(2);

        (width, height)
    }
}

impl Widget for ContextMenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let props = self.props;
        if !props.visible || area.width == 0 || area.height == 0 {
            return;
        }

        let highlight = border_color(props.background, props.foreground);

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(highlight).bg(props.background))
            .style(Style::default().fg(props.foreground).bg(props.background));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let entries = self.capped_entries();
        let mut y = inner.y;
        for (i, entry) in entries.iter().enumerate() {
            if y >= inner.bottom() {
                break;
            }
            let line = MenuItem {
                entry,
                base: &props.base,
                is_selected: i == props.selected_index,
                foreground: props.foreground,
                background: props.background,
                highlight,
            }
            .to_line();
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }

        let doc_area = Rect::new(
            inner.x,
            y,
            inner.width,
            inner.bottom().saturating_sub(y),
        );
        DocumentationPanel {
            documentation: documentation_for(entries, props.selected_index),
            foreground: props.foreground,
            background: props.background,
            border: highlight,
        }
        .render(doc_area, buf);
    }
}

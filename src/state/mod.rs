use ratatui::style::Color;

pub mod adapter;
pub mod store;

// Re-exports
pub use adapter::{map_state_to_props, MenuProps};
pub use store::{MenuSnapshotSource, MenuStore};

/// Maximum number of candidate entries the menu ever renders.
///
/// Hosts that pre-trim their filtered candidate lists (e.g. a completion
/// reducer) must reference this constant instead of hard-coding their own
/// limit, so the list producer and the view can never drift apart.
pub const MAX_DISPLAYED_ENTRIES: usize = 10;

/// One selectable completion/context-menu option.
///
/// Entries are produced by the host's completion machinery and are immutable
/// from the menu's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateEntry {
    /// Text shown in the list and matched against the filter.
    pub label: String,
    /// Short trailing annotation (type signature, origin module, ...).
    pub detail: String,
    /// Longer description shown in the documentation panel when selected.
    pub documentation: Option<String>,
    /// Icon name key, resolved through `theme::glyphs` (e.g. "function").
    pub icon: String,
}

impl CandidateEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, detail: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            documentation: None,
            icon: icon.into(),
        }
    }

    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

/// Snapshot of the active menu, as produced by the host's menu state machine.
///
/// The menu components only ever read snapshots of this state; all mutation
/// (filtering, ranking, selection movement, open/close) happens outside, in
/// whatever owns the [`store::MenuStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    /// Current typed/search text, highlighted inside entry labels.
    pub filter: String,
    /// Candidate entries, already filtered and ordered by the host.
    pub filtered_entries: Vec<CandidateEntry>,
    /// Index of the selected entry. May be out of range; the view then
    /// treats the menu as having no selection.
    pub selected_index: usize,
    pub foreground: Color,
    pub background: Color,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            filtered_entries: Vec::new(),
            selected_index: 0,
            foreground: Color::Reset,
            background: Color::Reset,
        }
    }
}

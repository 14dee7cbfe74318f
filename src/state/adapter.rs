use super::{CandidateEntry, MenuState};
use ratatui::style::Color;

// Immutable empty-entries value for the hidden props. `Vec::new` does not
// allocate, so every hidden render reuses the same zero-capacity vector.
const NO_ENTRIES: Vec<CandidateEntry> = Vec::new();

/// Flat, fully resolved input to [`ContextMenuView`].
///
/// Derived from a [`MenuState`] snapshot on every render and thrown away
/// afterwards. Assembled field by field so every value the view consumes is
/// explicit; nothing is spread through from the entry structs.
///
/// [`ContextMenuView`]: crate::components::ContextMenuView
#[derive(Debug, Clone, PartialEq)]
pub struct MenuProps {
    pub visible: bool,
    /// The filter text, highlighted wherever it occurs in entry labels.
    pub base: String,
    pub entries: Vec<CandidateEntry>,
    pub selected_index: usize,
    pub foreground: Color,
    pub background: Color,
}

impl MenuProps {
    /// Props for the hidden menu: safe defaults, renders nothing.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            base: String::new(),
            entries: NO_ENTRIES,
            selected_index: 0,
            foreground: Color::Reset,
            background: Color::Reset,
        }
    }
}

/// Derives view props from a menu state snapshot.
///
/// Total: `None` (no active menu) maps to the hidden props, anything else is
/// copied across verbatim. No validation happens here; an out-of-range
/// `selected_index` is the view's problem to degrade on.
#[must_use]
pub fn map_state_to_props(menu: Option<MenuState>) -> MenuProps {
    match menu {
        None => MenuProps::hidden(),
        Some(menu) => MenuProps {
            visible: true,
            base: menu.filter,
            entries: menu.filtered_entries,
            selected_index: menu.selected_index,
            foreground: menu.foreground,
            background: menu.background,
        },
    }
}

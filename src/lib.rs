//! Pop-up completion/context menu widget for ratatui editors.
//!
//! The crate renders a filtered, keyboard-navigable candidate list with
//! icons, matched-text emphasis, and a documentation panel for the selected
//! entry. It is strictly presentational: the host owns the menu state
//! machine (filtering, ranking, selection movement, open/close) and pushes
//! immutable [`state::MenuState`] snapshots into a [`state::MenuStore`]; the
//! widgets here only read snapshots and map them to cells.
//!
//! Two entry points:
//! - [`components::ContextMenuView`], a pure widget over
//!   [`state::MenuProps`], for embedding or testing without a live store;
//! - [`container::ContextMenuContainer`], which binds the view to any
//!   [`state::MenuSnapshotSource`] and derives props at render time.
//!
//! ```no_run
//! use std::sync::Arc;
//! use ratatui::style::Color;
//! use tui_context_menu::container::ContextMenuContainer;
//! use tui_context_menu::state::{CandidateEntry, MenuState, MenuStore};
//!
//! let store = Arc::new(MenuStore::new());
//! let menu = ContextMenuContainer::new(store.clone());
//!
//! // The host's completion machinery opens the menu with filtered entries:
//! store.open(MenuState {
//!     filter: "pu".into(),
//!     filtered_entries: vec![
//!         CandidateEntry::new("push", "fn(&mut self, T)", "method"),
//!     ],
//!     selected_index: 0,
//!     foreground: Color::Rgb(0xd8, 0xde, 0xe9),
//!     background: Color::Rgb(0x2e, 0x34, 0x40),
//! });
//! // ...then renders `&menu` into an anchored Rect on every frame.
//! ```

pub mod components;
pub mod config;
pub mod container;
pub mod state;
pub mod theme;

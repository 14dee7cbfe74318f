pub mod context_menu;
pub mod documentation;
pub mod helpers;
pub mod item;

// Re-exports
pub use context_menu::{documentation_for, ContextMenuView};
pub use documentation::DocumentationPanel;
pub use item::MenuItem;

use std::sync::Arc;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::components::ContextMenuView;
use crate::state::{map_state_to_props, MenuSnapshotSource};

/// Store-bound context menu: snapshots the source at render time, derives
/// props, and hands them to [`ContextMenuView`]. Purely structural, no state
/// of its own; when the source reports no active menu it renders nothing.
///
/// Holding its own `Arc<dyn MenuSnapshotSource>` keeps the menu on its own
/// dedicated store, decoupled from whatever state container drives the rest
/// of the host application.
pub struct ContextMenuContainer {
    source: Arc<dyn MenuSnapshotSource>,
}

impl ContextMenuContainer {
    #[must_use]
    pub fn new(source: Arc<dyn MenuSnapshotSource>) -> Self {
        Self { source }
    }
}

impl Widget for &ContextMenuContainer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let props = map_state_to_props(self.source.snapshot());
        ContextMenuView::new(&props).render(area, buf);
    }
}

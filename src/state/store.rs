use super::MenuState;
use tokio::sync::watch;

/// Read-only snapshot access to the menu state.
///
/// The container widget is written against this trait rather than against
/// [`MenuStore`] so embedders can bind the view to their own state holder,
/// and tests can substitute a mock.
#[cfg_attr(test, mockall::automock)]
pub trait MenuSnapshotSource: Send + Sync {
    /// Current menu state, or `None` when no menu is active.
    fn snapshot(&self) -> Option<MenuState>;
}

/// Dedicated state container for the context menu.
///
/// Deliberately scoped apart from the rest of the application's state: the
/// menu opens and closes far more often than anything else changes, and
/// keeping it in its own store means menu updates never force unrelated
/// subscribers to re-render.
///
/// Backed by a `tokio::sync::watch` channel, which gives subscribers
/// last-write-wins delivery: a subscriber always observes the newest
/// snapshot, and intermediate snapshots under rapid updates may be skipped.
pub struct MenuStore {
    state: watch::Sender<Option<MenuState>>,
}

impl MenuStore {
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    /// Replaces the active menu state, opening the menu if it was closed.
    pub fn open(&self, menu: MenuState) {
        self.state.send_replace(Some(menu));
    }

    /// Closes the menu. Subscribers observe a `None` snapshot.
    pub fn close(&self) {
        self.state.send_replace(None);
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<MenuState> {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes. The receiver is used purely as a redraw
    /// signal; renderers still read via [`MenuStore::snapshot`] at draw time.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<MenuState>> {
        self.state.subscribe()
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuSnapshotSource for MenuStore {
    fn snapshot(&self) -> Option<MenuState> {
        MenuStore::snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CandidateEntry;

    fn menu_with_filter(filter: &str) -> MenuState {
        MenuState {
            filter: filter.to_string(),
            filtered_entries: vec![CandidateEntry::new("print", "macro", "snippet")],
            ..MenuState::default()
        }
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let store = MenuStore::new();
        assert_eq!(store.snapshot(), None);

        store.open(menu_with_filter("pr"));
        assert_eq!(store.snapshot().unwrap().filter, "pr");

        store.close();
        assert_eq!(store.snapshot(), None);
    }

    #[tokio::test]
    async fn test_subscribers_see_newest_snapshot() {
        let store = MenuStore::new();
        let mut rx = store.subscribe();

        // Two rapid updates: the subscriber may never see the first one,
        // but after `changed()` it must observe the latest.
        store.open(menu_with_filter("p"));
        store.open(menu_with_filter("pr"));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().filter, "pr");
    }

    #[tokio::test]
    async fn test_close_notifies_subscribers() {
        let store = MenuStore::new();
        store.open(menu_with_filter("x"));

        let mut rx = store.subscribe();
        store.close();

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[test]
    fn test_open_without_subscribers_does_not_panic() {
        let store = MenuStore::new();
        store.open(menu_with_filter("a"));
        store.close();
    }
}

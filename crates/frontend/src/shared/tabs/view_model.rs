//! ViewModel owning the selection of one tab view

use super::Tab;
use crate::shared::icons::Icon;
use contracts::shared::tabs::{TabConfigError, TabSelection, TabSet};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TabViewVm {
    pub tabs: Arc<TabSet<Icon>>,
    state: RwSignal<TabSelection>,
    current: Memo<String>,
}

impl TabViewVm {
    /// Rejects duplicate or empty ids and an initial selection that is not
    /// one of `tabs`.
    pub fn new(tabs: Vec<Tab>, initial: &str) -> Result<Self, TabConfigError> {
        let tabs = TabSet::new(tabs)?;
        let selection = TabSelection::new(&tabs, initial)?;
        log::debug!(
            "tab view [{}] starts on '{}'",
            tabs.ids().collect::<Vec<_>>().join(", "),
            initial
        );

        let state = RwSignal::new(selection);
        let current = Memo::new(move |_| state.with(|s| s.current().to_string()));

        Ok(Self {
            tabs: Arc::new(tabs),
            state,
            current,
        })
    }

    // === Derived signals ===

    /// Current selection; does not notify when a tab is re-selected.
    pub fn selection(&self) -> Memo<String> {
        self.current
    }

    pub fn current(&self) -> String {
        self.state.with_untracked(|s| s.current().to_string())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.state.with_untracked(|s| s.is_active(id))
    }

    pub fn active_label(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.resolve(self.tabs.as_ref()).map(|tab| tab.label.clone()))
    }

    // === Commands ===

    /// Applies a select intent from the navigation strip. Ids outside the
    /// tab set are applied too; nothing is highlighted until a known tab is
    /// selected again.
    pub fn select(&self, id: &str) {
        if !self.tabs.contains(id) {
            log::warn!("selecting '{}', which is not one of this view's tabs", id);
        }
        self.state.maybe_update(|s| {
            let changed = s.select(id);
            if changed {
                log::debug!("tab '{}' selected", id);
            }
            changed
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_tabs() -> Vec<Tab> {
        vec![
            Tab::new("upcoming", "Upcoming", Icon("calendar")),
            Tab::new("events", "My Events", Icon("star")),
            Tab::new("discover", "Discover", Icon("compass")),
        ]
    }

    #[test]
    fn test_rejects_unknown_initial_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let err = TabViewVm::new(events_tabs(), "past").unwrap_err();
            assert!(matches!(
                err,
                TabConfigError::UnknownInitialSelection { ref id, .. } if id == "past"
            ));
        });
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let owner = Owner::new();
        owner.with(|| {
            let mut tabs = events_tabs();
            tabs.push(Tab::new("events", "Hosting", Icon("star")));
            let err = TabViewVm::new(tabs, "upcoming").unwrap_err();
            assert!(matches!(err, TabConfigError::DuplicateId { ref id, .. } if id == "events"));
        });
    }

    #[test]
    fn test_select_updates_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = TabViewVm::new(events_tabs(), "upcoming").unwrap();
            assert_eq!(vm.selection().get_untracked(), "upcoming");

            vm.select("discover");

            assert_eq!(vm.selection().get_untracked(), "discover");
            assert_eq!(vm.current(), "discover");
            assert!(vm.is_active("discover"));
            assert!(!vm.is_active("upcoming"));
            assert_eq!(vm.active_label().as_deref(), Some("Discover"));
        });
    }

    #[test]
    fn test_reselect_keeps_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = TabViewVm::new(events_tabs(), "events").unwrap();
            vm.select("events");
            vm.select("events");
            assert_eq!(vm.selection().get_untracked(), "events");
        });
    }

    #[test]
    fn test_reselect_does_not_notify() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let owner = Owner::new();
        owner.with(|| {
            let vm = TabViewVm::new(events_tabs(), "upcoming").unwrap();
            let runs = Arc::new(AtomicUsize::new(0));
            let counted = {
                let runs = runs.clone();
                let state = vm.state;
                Memo::new(move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    state.with(|s| s.current().to_string())
                })
            };

            assert_eq!(counted.get_untracked(), "upcoming");
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            vm.select("upcoming");
            assert_eq!(counted.get_untracked(), "upcoming");
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            vm.select("events");
            assert_eq!(counted.get_untracked(), "events");
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_unknown_select_degrades() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = TabViewVm::new(events_tabs(), "upcoming").unwrap();
            vm.select("archived");
            assert_eq!(vm.current(), "archived");
            assert!(vm.tabs.ids().all(|id| !vm.is_active(id)));
            assert_eq!(vm.active_label(), None);
        });
    }

    #[test]
    fn test_clones_share_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = TabViewVm::new(events_tabs(), "upcoming").unwrap();
            let strip_handle = vm.clone();
            strip_handle.select("events");
            assert_eq!(vm.current(), "events");
        });
    }
}

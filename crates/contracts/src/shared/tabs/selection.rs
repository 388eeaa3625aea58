use super::error::TabConfigError;
use super::tab_set::{Tab, TabSet};

/// The currently active tab id of one tab view.
///
/// Membership in the tab set is checked only when the selection is created.
/// `select` accepts any id; a selection that falls outside the set simply
/// highlights nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    current: String,
}

impl TabSelection {
    pub fn new<V>(tabs: &TabSet<V>, initial: &str) -> Result<Self, TabConfigError> {
        if !tabs.contains(initial) {
            return Err(TabConfigError::UnknownInitialSelection {
                id: initial.to_string(),
                known: tabs.ids().collect::<Vec<_>>().join(", "),
            });
        }
        Ok(Self {
            current: initial.to_string(),
        })
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.current == id
    }

    /// Moves the selection to `id`. Returns `false` when `id` was already
    /// selected, in which case nothing changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.current == id {
            return false;
        }
        self.current.clear();
        self.current.push_str(id);
        true
    }

    /// The selected tab, if the selection still names one.
    pub fn resolve<'a, V>(&self, tabs: &'a TabSet<V>) -> Option<&'a Tab<V>> {
        tabs.get(&self.current)
    }

    /// Feeds the current selection to a content router.
    pub fn route<R>(&self, router: impl Fn(&str) -> R) -> R {
        router(&self.current)
    }
}

use super::error::TabConfigError;
use std::collections::HashMap;

/// One tab descriptor. `visual` is whatever the caller renders next to the
/// label (an icon in the web client); the tab core never looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab<V> {
    pub id: String,
    pub label: String,
    pub visual: V,
}

impl<V> Tab<V> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, visual: V) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            visual,
        }
    }
}

/// Ordered tab list with unique ids.
///
/// Built once per page and never mutated; a different list means a new
/// `TabSet`. Order is kept exactly as supplied.
#[derive(Debug, Clone)]
pub struct TabSet<V> {
    tabs: Vec<Tab<V>>,
    index: HashMap<String, usize>,
}

impl<V> TabSet<V> {
    /// Builds the set, rejecting empty and duplicate ids instead of
    /// dropping them.
    pub fn new(tabs: Vec<Tab<V>>) -> Result<Self, TabConfigError> {
        let mut index = HashMap::with_capacity(tabs.len());
        for (position, tab) in tabs.iter().enumerate() {
            if tab.id.is_empty() {
                return Err(TabConfigError::EmptyId { position });
            }
            if let Some(&first) = index.get(&tab.id) {
                return Err(TabConfigError::DuplicateId {
                    id: tab.id.clone(),
                    first,
                    second: position,
                });
            }
            index.insert(tab.id.clone(), position);
        }
        Ok(Self { tabs, index })
    }

    /// True when no two descriptors share an id.
    pub fn has_unique_ids(tabs: &[Tab<V>]) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(tabs.len());
        tabs.iter().all(|tab| seen.insert(tab.id.as_str()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tab<V>> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Tab<V>> {
        self.index.get(id).map(|&i| &self.tabs[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn first(&self) -> Option<&Tab<V>> {
        self.tabs.first()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|tab| tab.id.as_str())
    }
}

impl<'a, V> IntoIterator for &'a TabSet<V> {
    type Item = &'a Tab<V>;
    type IntoIter = std::slice::Iter<'a, Tab<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str) -> Tab<()> {
        Tab::new(id, id.to_uppercase(), ())
    }

    #[test]
    fn test_preserves_order() {
        let set = TabSet::new(vec![tab("c"), tab("a"), tab("b")]).unwrap();
        let ids: Vec<_> = set.ids().collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.first().map(|t| t.id.as_str()), Some("c"));
    }

    #[test]
    fn test_lookup_by_id() {
        let set = TabSet::new(vec![tab("library"), tab("playlists")]).unwrap();
        assert_eq!(set.get("playlists").map(|t| t.label.as_str()), Some("PLAYLISTS"));
        assert_eq!(set.position("playlists"), Some(1));
        assert!(set.contains("library"));
        assert!(!set.contains("uploads"));
        assert!(set.get("uploads").is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = TabSet::new(vec![tab("a"), tab("b"), tab("a")]).unwrap_err();
        assert_eq!(
            err,
            TabConfigError::DuplicateId {
                id: "a".to_string(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = TabSet::new(vec![tab("a"), tab("")]).unwrap_err();
        assert_eq!(err, TabConfigError::EmptyId { position: 1 });
    }

    #[test]
    fn test_uniqueness_check() {
        assert!(TabSet::has_unique_ids(&[tab("a"), tab("b")]));
        assert!(!TabSet::has_unique_ids(&[tab("a"), tab("a")]));
        assert!(TabSet::<()>::has_unique_ids(&[]));
    }

    #[test]
    fn test_empty_set_is_allowed() {
        let set = TabSet::<()>::new(vec![]).unwrap();
        assert!(set.is_empty());
        assert!(set.first().is_none());
    }
}

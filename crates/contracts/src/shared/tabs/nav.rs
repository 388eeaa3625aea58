use super::tab_set::{Tab, TabSet};

/// One entry of the navigation strip as it should be drawn.
#[derive(Debug, PartialEq, Eq)]
pub struct NavItem<'a, V> {
    pub tab: &'a Tab<V>,
    pub active: bool,
}

/// Navigation strip model: every tab in set order, `active` iff its id
/// equals `selection`. At most one item is active.
pub fn nav_items<'a, V>(tabs: &'a TabSet<V>, selection: &str) -> Vec<NavItem<'a, V>> {
    tabs.iter()
        .map(|tab| NavItem {
            tab,
            active: tab.id == selection,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_tabs() -> TabSet<&'static str> {
        TabSet::new(vec![
            Tab::new("connections", "Connections", "users"),
            Tab::new("requests", "Requests", "user-plus"),
            Tab::new("suggestions", "Suggestions", "sparkles"),
        ])
        .unwrap()
    }

    fn active_ids<'a>(items: &[NavItem<'a, &'static str>]) -> Vec<&'a str> {
        items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.tab.id.as_str())
            .collect()
    }

    #[test]
    fn test_exactly_one_active() {
        let tabs = network_tabs();
        for id in tabs.ids() {
            let items = nav_items(&tabs, id);
            assert_eq!(active_ids(&items), [id]);
        }
    }

    #[test]
    fn test_order_does_not_follow_selection() {
        let tabs = network_tabs();
        let items = nav_items(&tabs, "suggestions");
        let ids: Vec<_> = items.iter().map(|item| item.tab.id.as_str()).collect();
        assert_eq!(ids, ["connections", "requests", "suggestions"]);
    }

    #[test]
    fn test_unknown_selection_highlights_nothing() {
        let tabs = network_tabs();
        let items = nav_items(&tabs, "blocked");
        assert_eq!(items.len(), 3);
        assert!(active_ids(&items).is_empty());
    }

    #[test]
    fn test_visual_is_passed_through() {
        let tabs = network_tabs();
        let items = nav_items(&tabs, "requests");
        assert_eq!(items[1].tab.visual, "user-plus");
    }
}

use super::tabs::{DiscoverEventsTab, MyEventsTab, UpcomingTab};
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::icons::Icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_TABBED;
use crate::shared::tabs::{unknown_tab, Tab, TabConfigErrorBox, TabView, TabViewVm};
use contracts::shared::tabs::TabConfigError;
use leptos::prelude::*;

pub fn events_tabs() -> Vec<Tab> {
    vec![
        Tab::new("upcoming", "Upcoming", Icon("calendar")),
        Tab::new("events", "My Events", Icon("star")),
        Tab::new("discover", "Discover", Icon("compass")),
    ]
}

pub fn events_tab_view(initial: &str) -> Result<TabViewVm, TabConfigError> {
    TabViewVm::new(events_tabs(), initial)
}

pub fn events_router(id: &str) -> AnyView {
    match id {
        "upcoming" => view! { <UpcomingTab /> }.into_any(),
        "events" => view! { <MyEventsTab /> }.into_any(),
        "discover" => view! { <DiscoverEventsTab /> }.into_any(),
        other => unknown_tab(other),
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    let body = match events_tab_view(&config.pages.events) {
        Ok(vm) => view! { <TabView vm=vm router=events_router /> }.into_any(),
        Err(error) => view! { <TabConfigErrorBox page="events" error=error /> }.into_any(),
    };

    view! {
        <PageFrame page_id="a003_events--tabbed" category=PAGE_CAT_TABBED>
            <PageHeader title="Events" subtitle="Gigs, sessions and workshops" />
            <div class="page__content">{body}</div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_tabs_scenario() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = events_tab_view("upcoming").unwrap();
            assert_eq!(vm.active_label().as_deref(), Some("Upcoming"));

            vm.select("events");
            assert_eq!(vm.active_label().as_deref(), Some("My Events"));

            vm.select("discover");
            assert_eq!(vm.current(), "discover");
        });
    }

    #[test]
    fn test_events_rejects_unknown_initial() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(events_tab_view("past").is_err());
        });
    }
}

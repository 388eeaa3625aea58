use super::tabs::{ConnectionsTab, RequestsTab, SuggestionsTab};
use crate::domain::a005_network::model::pending_requests;
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::icons::Icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_TABBED;
use crate::shared::tabs::{unknown_tab, Tab, TabConfigErrorBox, TabView, TabViewVm};
use contracts::shared::tabs::TabConfigError;
use leptos::prelude::*;

pub fn network_tabs() -> Vec<Tab> {
    vec![
        Tab::new("connections", "Connections", Icon("users")),
        Tab::new("requests", "Requests", Icon("user-plus")),
        Tab::new("suggestions", "Suggestions", Icon("star")),
    ]
}

pub fn network_tab_view(initial: &str) -> Result<TabViewVm, TabConfigError> {
    TabViewVm::new(network_tabs(), initial)
}

#[component]
pub fn NetworkPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    // Outlives tab switches so decisions survive leaving the Requests tab.
    let requests = RwSignal::new(pending_requests());

    let router = move |id: &str| -> AnyView {
        match id {
            "connections" => view! { <ConnectionsTab /> }.into_any(),
            "requests" => view! { <RequestsTab requests=requests /> }.into_any(),
            "suggestions" => view! { <SuggestionsTab /> }.into_any(),
            other => unknown_tab(other),
        }
    };

    let body = match network_tab_view(&config.pages.network) {
        Ok(vm) => view! { <TabView vm=vm router=router /> }.into_any(),
        Err(error) => view! { <TabConfigErrorBox page="network" error=error /> }.into_any(),
    };

    view! {
        <PageFrame page_id="a005_network--tabbed" category=PAGE_CAT_TABBED>
            <PageHeader title="Network" subtitle="The people you play with" />
            <div class="page__content">{body}</div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_unknown_select_keeps_tabs() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = network_tab_view("connections").unwrap();
            vm.select("blocked");
            assert_eq!(vm.current(), "blocked");
            assert_eq!(vm.active_label(), None);

            vm.select("requests");
            assert_eq!(vm.active_label().as_deref(), Some("Requests"));
        });
    }

    #[test]
    fn test_network_labels() {
        let labels: Vec<String> = network_tabs().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, ["Connections", "Requests", "Suggestions"]);
    }
}

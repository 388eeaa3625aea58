//! Discover page: recommendations, charts and genre browsing

use super::tabs::{ForYouTab, GenresTab, NewArtistsTab, TrendingTab};
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::icons::Icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_TABBED;
use crate::shared::tabs::{unknown_tab, Tab, TabConfigErrorBox, TabView, TabViewVm};
use contracts::shared::tabs::TabConfigError;
use leptos::prelude::*;

pub fn discover_tabs() -> Vec<Tab> {
    vec![
        Tab::new("for_you", "For You", Icon("heart")),
        Tab::new("trending", "Trending", Icon("trending-up")),
        Tab::new("new_artists", "New Artists", Icon("zap")),
        Tab::new("genres", "Genres", Icon("tag")),
    ]
}

pub fn discover_tab_view(initial: &str) -> Result<TabViewVm, TabConfigError> {
    TabViewVm::new(discover_tabs(), initial)
}

pub fn discover_router(id: &str) -> AnyView {
    match id {
        "for_you" => view! { <ForYouTab /> }.into_any(),
        "trending" => view! { <TrendingTab /> }.into_any(),
        "new_artists" => view! { <NewArtistsTab /> }.into_any(),
        "genres" => view! { <GenresTab /> }.into_any(),
        other => unknown_tab(other),
    }
}

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    let body = match discover_tab_view(&config.pages.discover) {
        Ok(vm) => view! { <TabView vm=vm router=discover_router /> }.into_any(),
        Err(error) => view! { <TabConfigErrorBox page="discover" error=error /> }.into_any(),
    };

    view! {
        <PageFrame page_id="a002_discover--tabbed" category=PAGE_CAT_TABBED>
            <PageHeader title="Discover" subtitle="Musicians, tracks and scenes picked for you" />
            <div class="page__content">{body}</div>
        </PageFrame>
    }
}

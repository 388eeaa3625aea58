use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Loaded configuration, read by the pages for their initial tabs.
    provide_context(config);

    // Side panel visibility shared by the signed-in chrome.
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}

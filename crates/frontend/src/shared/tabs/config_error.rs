use crate::shared::icons::icon;
use contracts::shared::tabs::TabConfigError;
use leptos::prelude::*;

/// Shown in place of a tab view whose definition was rejected. Logs the
/// defect once so it reaches the console as well as the page.
#[component]
pub fn TabConfigErrorBox(page: &'static str, error: TabConfigError) -> impl IntoView {
    log::error!("{} page: invalid tab configuration: {}", page, error);

    view! {
        <div class="warning-box warning-box--error" role="alert">
            <span class="warning-box__icon">{icon("alert-triangle")}</span>
            <span class="warning-box__text">
                {format!("This page could not be set up: {}", error)}
            </span>
        </div>
    }
}

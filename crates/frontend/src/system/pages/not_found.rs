use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <div class="warning-box">
                <span class="warning-box__icon">{icon("alert-triangle")}</span>
                <span class="warning-box__text">"This page does not exist."</span>
            </div>
            <A href="/">"Back to the start"</A>
        </div>
    }
}

//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Side panel toggle
//! - Brand
//! - Section links
//! - Sign-out

use super::SECTIONS;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let navigate = use_navigate();

    let is_side_visible = move || ctx.side_open.get();

    let sign_out = move |_| {
        log::info!("signed out");
        navigate("/", Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_side()
                    title=move || if is_side_visible() { "Hide side panel" } else { "Show side panel" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{config.app.title.clone()}</span>
            </div>

            <nav class="top-header__nav">
                {SECTIONS.iter().map(|(path, label, icon_name)| view! {
                    <A href=*path attr:class="top-header__link">
                        {icon(icon_name)}
                        <span>{*label}</span>
                    </A>
                }).collect_view()}
            </nav>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}

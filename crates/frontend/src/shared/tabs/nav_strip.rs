use crate::shared::icons::Icon;
use contracts::shared::tabs::{nav_items, NavItem, TabSet};
use leptos::prelude::*;
use std::sync::Arc;

/// Row of tab buttons. Highlights the tab whose id equals `selection` and
/// reports activations through `on_select`; it never changes the selection
/// itself.
#[component]
pub fn NavStrip(
    tabs: Arc<TabSet<Icon>>,
    #[prop(into)] selection: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="nav-strip" role="tablist">
            {move || selection.with(|current| {
                nav_items(tabs.as_ref(), current)
                    .into_iter()
                    .map(|item| nav_button(item, on_select))
                    .collect_view()
            })}
        </div>
    }
}

fn nav_button(item: NavItem<'_, Icon>, on_select: Callback<String>) -> impl IntoView {
    let id = item.tab.id.clone();
    let click_id = id.clone();
    let selected = if item.active { "true" } else { "false" };

    view! {
        <button
            type="button"
            role="tab"
            class="nav-strip__tab"
            class:nav-strip__tab--active=item.active
            aria-selected=selected
            data-tab-id=id
            on:click=move |_| on_select.run(click_id.clone())
        >
            {item.tab.visual.view()}
            <span class="nav-strip__label">{item.tab.label.clone()}</span>
        </button>
    }
}

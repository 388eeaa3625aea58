use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Collapsible side column; hidden while `side_open` is false.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.side_open.get();

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </aside>
    }
}

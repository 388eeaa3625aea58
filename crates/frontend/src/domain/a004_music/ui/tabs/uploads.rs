use crate::domain::a004_music::model::{library, uploads};
use crate::shared::components::ui::{Button, ButtonSize};
use crate::shared::components::TrackRow;
use crate::shared::icons::icon;
use crate::shared::number_format::format_count;
use leptos::prelude::*;

#[component]
pub fn UploadsTab() -> impl IntoView {
    let own = uploads(&library());
    let total_plays: u64 = own.iter().map(|t| t.plays).sum();

    view! {
        <div class="uploads__summary">
            <span>{format!("{} plays across your uploads", format_count(total_plays))}</span>
            <Button
                size=ButtonSize::Small
                on_click=Callback::new(|_| log::info!("upload requested; uploads are not available in this client"))
            >
                {icon("upload")} " Upload track"
            </Button>
        </div>
        <div class="track-list">
            {own.into_iter().map(|track| view! { <TrackRow track=track /> }).collect_view()}
        </div>
    }
}

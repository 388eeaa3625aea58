use crate::domain::a004_music::model::library;
use crate::shared::components::TrackRow;
use leptos::prelude::*;

#[component]
pub fn LibraryTab() -> impl IntoView {
    view! {
        <div class="track-list">
            {library().into_iter().map(|track| view! { <TrackRow track=track /> }).collect_view()}
        </div>
    }
}

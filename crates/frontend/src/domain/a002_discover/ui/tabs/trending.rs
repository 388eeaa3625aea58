use super::super::super::model::trending_tracks;
use crate::shared::components::TrackRow;
use leptos::prelude::*;

#[component]
pub fn TrendingTab() -> impl IntoView {
    view! {
        <div class="track-list">
            {trending_tracks().into_iter().enumerate().map(|(i, track)| view! {
                <TrackRow track=track position=i + 1 />
            }).collect_view()}
        </div>
    }
}

use crate::shared::icons::icon;
use crate::shared::number_format::pluralize;
use contracts::domain::a003_track::{format_duration, Track};
use leptos::prelude::*;

#[component]
pub fn TrackRow(track: Track, #[prop(optional)] position: Option<usize>) -> impl IntoView {
    view! {
        <div class="track-row" data-track-id=track.id.clone()>
            {position.map(|p| view! { <span class="track-row__position">{p}</span> })}
            <button type="button" class="track-row__play" title="Play">
                {icon("play")}
            </button>
            <div class="track-row__text">
                <div class="track-row__title">{track.title.clone()}</div>
                <div class="track-row__artist">{track.artist.clone()}</div>
            </div>
            <span class="track-row__plays">{pluralize(track.plays, "play", "plays")}</span>
            <span class="track-row__duration">{format_duration(track.duration_secs)}</span>
        </div>
    }
}

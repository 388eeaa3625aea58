use crate::domain::a004_music::model::{library, playlists};
use crate::shared::icons::icon;
use crate::shared::number_format::pluralize;
use contracts::domain::a003_track::format_duration;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn PlaylistsTab() -> impl IntoView {
    let library = library();

    view! {
        <div class="card-grid">
            {playlists().into_iter().map(|playlist| {
                let summary = if playlist.is_empty() {
                    "Empty".to_string()
                } else {
                    format!(
                        "{} · {}",
                        pluralize(playlist.len() as u64, "track", "tracks"),
                        format_duration(playlist.total_secs(&library)),
                    )
                };
                view! {
                    <Card>
                        <div class="playlist-card" data-playlist-id=playlist.id.clone()>
                            <span class="playlist-card__icon">{icon("list")}</span>
                            <div class="playlist-card__name">{playlist.name.clone()}</div>
                            <div class="playlist-card__meta">
                                {format!("by {}", playlist.curator)}
                            </div>
                            <div class="playlist-card__summary">{summary}</div>
                        </div>
                    </Card>
                }
            }).collect_view()}
        </div>
    }
}

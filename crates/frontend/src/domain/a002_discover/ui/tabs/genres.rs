use super::super::super::model::genres;
use crate::shared::icons::icon;
use crate::shared::number_format::format_count;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn GenresTab() -> impl IntoView {
    view! {
        <div class="card-grid card-grid--compact">
            {genres().into_iter().map(|genre| view! {
                <Card>
                    <div class="genre-tile">
                        <span class="genre-tile__icon">{icon(genre.icon)}</span>
                        <span class="genre-tile__name">{genre.name}</span>
                        <span class="genre-tile__count">
                            {format!("{} musicians", format_count(genre.musicians))}
                        </span>
                    </div>
                </Card>
            }).collect_view()}
        </div>
    }
}

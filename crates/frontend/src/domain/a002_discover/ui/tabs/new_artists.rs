use super::super::super::model::new_artists;
use crate::shared::components::{ConnectButton, MusicianCard};
use leptos::prelude::*;

#[component]
pub fn NewArtistsTab() -> impl IntoView {
    view! {
        <p class="tab-view__intro">"Joined in the last two weeks"</p>
        <div class="card-grid">
            {new_artists().into_iter().map(|musician| {
                let name = musician.name.clone();
                view! {
                    <MusicianCard musician=musician>
                        <ConnectButton musician_name=name />
                    </MusicianCard>
                }
            }).collect_view()}
        </div>
    }
}

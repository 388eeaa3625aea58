use super::super::super::model::recommended_musicians;
use crate::shared::components::{ConnectButton, MusicianCard};
use leptos::prelude::*;

#[component]
pub fn ForYouTab() -> impl IntoView {
    view! {
        <div class="card-grid">
            {recommended_musicians().into_iter().map(|musician| {
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

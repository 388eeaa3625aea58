use crate::domain::a005_network::model::suggestions;
use crate::shared::components::{ConnectButton, MusicianCard};
use leptos::prelude::*;

#[component]
pub fn SuggestionsTab() -> impl IntoView {
    view! {
        <div class="card-grid">
            {suggestions().into_iter().map(|musician| {
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

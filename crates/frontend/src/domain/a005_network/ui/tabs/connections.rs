use crate::domain::a005_network::model::connections;
use crate::shared::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::shared::components::MusicianCard;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ConnectionsTab() -> impl IntoView {
    view! {
        <div class="card-grid">
            {connections().into_iter().map(|musician| view! {
                <MusicianCard musician=musician>
                    <Button variant=ButtonVariant::Secondary size=ButtonSize::Small>
                        {icon("send")} " Message"
                    </Button>
                </MusicianCard>
            }).collect_view()}
        </div>
    }
}

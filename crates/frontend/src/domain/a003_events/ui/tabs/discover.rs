use super::event_list;
use crate::domain::a003_events::model::{all_events, suggested};
use leptos::prelude::*;

/// Events near the user that they have not responded to.
#[component]
pub fn DiscoverEventsTab() -> impl IntoView {
    event_list(suggested(&all_events()), "Nothing new nearby")
}

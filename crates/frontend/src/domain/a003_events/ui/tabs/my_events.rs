use super::event_list;
use crate::domain::a003_events::model::{all_events, my_events};
use leptos::prelude::*;

#[component]
pub fn MyEventsTab() -> impl IntoView {
    event_list(
        my_events(&all_events()),
        "You are not hosting or going to anything yet",
    )
}

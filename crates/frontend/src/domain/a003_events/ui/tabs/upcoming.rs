use super::event_list;
use crate::domain::a003_events::model::{all_events, upcoming};
use chrono::Local;
use leptos::prelude::*;

#[component]
pub fn UpcomingTab() -> impl IntoView {
    let now = Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string();
    event_list(upcoming(&all_events(), &now), "No upcoming events")
}

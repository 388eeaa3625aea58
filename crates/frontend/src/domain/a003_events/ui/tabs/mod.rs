pub mod discover;
pub mod my_events;
pub mod upcoming;

pub use discover::DiscoverEventsTab;
pub use my_events::MyEventsTab;
pub use upcoming::UpcomingTab;

use crate::shared::components::EventCard;
use contracts::domain::a002_event::Event;
use leptos::prelude::*;

fn event_list(events: Vec<Event>, empty: &'static str) -> AnyView {
    if events.is_empty() {
        return view! { <div class="placeholder">{empty}</div> }.into_any();
    }
    view! {
        <div class="event-list">
            {events.into_iter().map(|event| view! { <EventCard event=event /> }).collect_view()}
        </div>
    }
    .into_any()
}

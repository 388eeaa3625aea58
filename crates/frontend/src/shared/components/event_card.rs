use crate::shared::date_utils::format_event_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::pluralize;
use contracts::domain::a002_event::{Event, EventRole};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Card};

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let role_badge = (event.role != EventRole::None).then(|| {
        let color = match event.role {
            EventRole::Hosting => BadgeColor::Brand,
            EventRole::Going => BadgeColor::Success,
            _ => BadgeColor::Informative,
        };
        view! {
            <Badge appearance=BadgeAppearance::Tint color=color>
                {event.role.label()}
            </Badge>
        }
    });

    view! {
        <Card>
            <div class="event-card" data-event-id=event.id.clone()>
                <div class="event-card__when">{format_event_datetime(&event.starts_at)}</div>
                <div class="event-card__title">{event.title.clone()} {role_badge}</div>
                <div class="event-card__where">
                    {icon("map-pin")}
                    {format!("{}, {}", event.venue, event.city)}
                </div>
                <div class="event-card__meta">
                    {format!("{} · {}", event.genre, pluralize(event.attendees as u64, "attendee", "attendees"))}
                </div>
            </div>
        </Card>
    }
}

//! Sample events. Timestamps are local wall-clock times in ISO form so they
//! sort as strings.

use contracts::domain::a002_event::{Event, EventRole};

fn event(
    id: &str,
    title: &str,
    venue: &str,
    city: &str,
    starts_at: &str,
    genre: &str,
    attendees: u32,
    role: EventRole,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        venue: venue.to_string(),
        city: city.to_string(),
        starts_at: starts_at.to_string(),
        genre: genre.to_string(),
        attendees,
        role,
    }
}

pub fn all_events() -> Vec<Event> {
    vec![
        event("e-301", "Open Jam Night", "The Canteen", "Bristol", "2026-11-03T20:00:00", "Jazz", 42, EventRole::Going),
        event("e-302", "Low Tides album launch", "Thekla", "Bristol", "2026-11-07T19:30:00", "Indie", 310, EventRole::Interested),
        event("e-303", "Bass Clinic: Slap & Pop", "Roll for the Soul", "Bristol", "2026-11-12T18:00:00", "Workshop", 18, EventRole::Hosting),
        event("e-304", "Folk Session", "The Bell", "Bath", "2026-11-14T20:30:00", "Folk", 25, EventRole::None),
        event("e-305", "Neo-soul Sunday", "Gold Lounge", "Cardiff", "2026-11-16T17:00:00", "Soul", 96, EventRole::None),
        event("e-306", "Songwriters in the Round", "Strange Brew", "Bristol", "2026-11-21T19:00:00", "Acoustic", 54, EventRole::Going),
        event("e-307", "Modular Synth Meetup", "Arnolfini", "Bristol", "2026-11-28T14:00:00", "Electronic", 33, EventRole::None),
    ]
}

/// Events the user is hosting or going to, soonest first.
pub fn my_events(events: &[Event]) -> Vec<Event> {
    let mut mine: Vec<Event> = events.iter().filter(|e| e.role.is_mine()).cloned().collect();
    mine.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
    mine
}

/// Events starting at or after `now`, soonest first.
pub fn upcoming(events: &[Event], now: &str) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|e| e.starts_at.as_str() >= now)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
    upcoming
}

/// Events the user has no relation to yet, most popular first.
pub fn suggested(events: &[Event]) -> Vec<Event> {
    let mut other: Vec<Event> = events
        .iter()
        .filter(|e| e.role == EventRole::None)
        .cloned()
        .collect();
    other.sort_by(|a, b| b.attendees.cmp(&a.attendees));
    other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_my_events_only_hosting_and_going() {
        let mine = my_events(&all_events());
        let ids: Vec<&str> = mine.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e-301", "e-303", "e-306"]);
    }

    #[test]
    fn test_upcoming_drops_past_events() {
        let events = all_events();
        let later = upcoming(&events, "2026-11-15T00:00:00");
        assert_eq!(later.first().map(|e| e.id.as_str()), Some("e-305"));
        assert_eq!(later.len(), 3);
    }

    #[test]
    fn test_suggested_by_popularity() {
        let ids: Vec<String> = suggested(&all_events()).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["e-305", "e-307", "e-304"]);
    }
}

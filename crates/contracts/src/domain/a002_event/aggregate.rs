use serde::{Deserialize, Serialize};

/// How the signed-in musician relates to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventRole {
    Hosting,
    Going,
    Interested,
    None,
}

impl EventRole {
    pub fn label(&self) -> &'static str {
        match self {
            EventRole::Hosting => "Hosting",
            EventRole::Going => "Going",
            EventRole::Interested => "Interested",
            EventRole::None => "",
        }
    }

    /// Events the musician has committed to show up under "My Events".
    pub fn is_mine(&self) -> bool {
        matches!(self, EventRole::Hosting | EventRole::Going)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub city: String,
    /// ISO 8601 local date-time, e.g. `2026-11-03T20:00:00`.
    pub starts_at: String,
    pub genre: String,
    pub attendees: u32,
    pub role: EventRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mine_covers_hosting_and_going() {
        assert!(EventRole::Hosting.is_mine());
        assert!(EventRole::Going.is_mine());
        assert!(!EventRole::Interested.is_mine());
        assert!(!EventRole::None.is_mine());
    }
}

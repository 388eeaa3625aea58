//! Sample network of the signed-in musician.

use contracts::domain::a004_musician::{ConnectionRequest, Musician, RequestDecision};

fn musician(id: &str, name: &str, instrument: &str, city: &str, genres: &[&str], mutual: u32) -> Musician {
    Musician {
        id: id.to_string(),
        name: name.to_string(),
        instrument: instrument.to_string(),
        city: city.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        mutual_connections: mutual,
    }
}

pub fn connections() -> Vec<Musician> {
    vec![
        musician("m-601", "Omar Reyes", "Drums", "Bristol", &["Jazz", "Funk"], 12),
        musician("m-602", "Hana Sato", "Trumpet", "Bristol", &["Jazz"], 8),
        musician("m-603", "Rhys Morgan", "Guitar", "Cardiff", &["Indie", "Folk"], 3),
        musician("m-604", "Bea Lindqvist", "Vocals", "Bath", &["Soul"], 5),
    ]
}

pub fn pending_requests() -> Vec<ConnectionRequest> {
    vec![
        ConnectionRequest {
            id: "r-701".to_string(),
            from: musician("m-611", "Kwame Asante", "Sax", "Bristol", &["Afrobeat", "Jazz"], 2),
            message: Some("Saw you at the Canteen jam, fancy a session?".to_string()),
            decision: RequestDecision::Pending,
        },
        ConnectionRequest {
            id: "r-702".to_string(),
            from: musician("m-612", "Ellie Frost", "Violin", "Bath", &["Folk"], 0),
            message: None,
            decision: RequestDecision::Pending,
        },
        ConnectionRequest {
            id: "r-703".to_string(),
            from: musician("m-613", "Dev Patel", "Producer", "London", &["Electronic"], 1),
            message: Some("Looking for a bassist for a remix project".to_string()),
            decision: RequestDecision::Pending,
        },
    ]
}

pub fn suggestions() -> Vec<Musician> {
    vec![
        musician("m-621", "Carys Hughes", "Harp", "Cardiff", &["Folk", "Classical"], 4),
        musician("m-622", "Luca Romano", "Keys", "Bristol", &["Jazz", "Neo-soul"], 6),
        musician("m-623", "Zainab Ali", "Drums", "Bristol", &["Metal"], 1),
    ]
}

/// Records `decision` on the pending request `id`. Returns false when no
/// pending request has that id.
pub fn decide(requests: &mut [ConnectionRequest], id: &str, decision: RequestDecision) -> bool {
    match requests
        .iter_mut()
        .find(|r| r.id == id && r.decision == RequestDecision::Pending)
    {
        Some(request) => {
            request.decision = decision;
            true
        }
        None => false,
    }
}

pub fn pending_count(requests: &[ConnectionRequest]) -> usize {
    requests
        .iter()
        .filter(|r| r.decision == RequestDecision::Pending)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_only_once() {
        let mut requests = pending_requests();
        assert_eq!(pending_count(&requests), 3);

        assert!(decide(&mut requests, "r-701", RequestDecision::Accepted));
        assert!(!decide(&mut requests, "r-701", RequestDecision::Dismissed));
        assert_eq!(requests[0].decision, RequestDecision::Accepted);
        assert_eq!(pending_count(&requests), 2);
    }

    #[test]
    fn test_decide_unknown_request() {
        let mut requests = pending_requests();
        assert!(!decide(&mut requests, "r-999", RequestDecision::Accepted));
        assert_eq!(pending_count(&requests), 3);
    }
}

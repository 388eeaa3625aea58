use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Musician {
    pub id: String,
    pub name: String,
    pub instrument: String,
    pub city: String,
    pub genres: Vec<String>,
    pub mutual_connections: u32,
}

impl Musician {
    /// Up to two letters for the avatar placeholder.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Up to two upper-cased initials, used for avatars.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestDecision {
    Pending,
    Accepted,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub id: String,
    pub from: Musician,
    pub message: Option<String>,
    pub decision: RequestDecision,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn musician(name: &str) -> Musician {
        Musician {
            id: "m1".to_string(),
            name: name.to_string(),
            instrument: "Drums".to_string(),
            city: "Leeds".to_string(),
            genres: vec![],
            mutual_connections: 0,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(musician("Omar Reyes").initials(), "OR");
        assert_eq!(musician("dj kestrel nightjar").initials(), "DK");
        assert_eq!(musician("Prism").initials(), "P");
        assert_eq!(musician("").initials(), "");
    }
}

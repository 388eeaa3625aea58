//! Sample content shown on the Discover page.

use contracts::domain::a003_track::Track;
use contracts::domain::a004_musician::Musician;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub name: &'static str,
    pub musicians: u64,
    pub icon: &'static str,
}

fn musician(
    id: &str,
    name: &str,
    instrument: &str,
    city: &str,
    genres: &[&str],
    mutual_connections: u32,
) -> Musician {
    Musician {
        id: id.to_string(),
        name: name.to_string(),
        instrument: instrument.to_string(),
        city: city.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        mutual_connections,
    }
}

fn track(id: &str, title: &str, artist: &str, duration_secs: u32, plays: u64) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        duration_secs,
        plays,
        own: false,
    }
}

/// Musicians recommended from shared genres and mutual connections.
pub fn recommended_musicians() -> Vec<Musician> {
    vec![
        musician("m-101", "Omar Reyes", "Drums", "Bristol", &["Jazz", "Funk"], 4),
        musician("m-102", "Saoirse Quinn", "Fiddle", "Galway", &["Folk"], 1),
        musician("m-103", "Tomasz Wilk", "Keys", "Bath", &["Neo-soul", "Jazz"], 7),
        musician("m-104", "Ada Mensah", "Vocals", "Cardiff", &["Soul", "Gospel"], 0),
    ]
}

/// Most played tracks this week, best first.
pub fn trending_tracks() -> Vec<Track> {
    vec![
        track("t-201", "Harbour Lights", "The Low Tides", 247, 128_400),
        track("t-202", "Paper Planes at Dusk", "Mira Sol", 198, 96_120),
        track("t-203", "Coldharbour Lane", "Brixton Brass Co.", 312, 54_870),
        track("t-204", "Small Hours", "Kestrel", 221, 12_406),
        track("t-205", "Second Line", "Omar Reyes Trio", 385, 9_990),
    ]
}

/// Musicians who joined in the last two weeks.
pub fn new_artists() -> Vec<Musician> {
    vec![
        musician("m-111", "Lena Hart", "Cello", "Bristol", &["Classical", "Ambient"], 2),
        musician("m-112", "Jules Okafor", "Guitar", "London", &["Afrobeat"], 0),
        musician("m-113", "Priya Natarajan", "Tabla", "Leicester", &["Fusion"], 3),
    ]
}

pub fn genres() -> Vec<Genre> {
    vec![
        Genre { name: "Jazz", musicians: 18_240, icon: "music" },
        Genre { name: "Folk", musicians: 9_312, icon: "heart" },
        Genre { name: "Electronic", musicians: 24_705, icon: "zap" },
        Genre { name: "Soul", musicians: 7_480, icon: "star" },
        Genre { name: "Metal", musicians: 11_002, icon: "trending-up" },
        Genre { name: "Classical", musicians: 6_215, icon: "disc" },
    ]
}

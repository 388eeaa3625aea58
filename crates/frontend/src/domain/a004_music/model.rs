//! Sample library for the Music page.

use contracts::domain::a003_track::{Playlist, Track};

fn track(id: &str, title: &str, artist: &str, duration_secs: u32, plays: u64, own: bool) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        duration_secs,
        plays,
        own,
    }
}

/// Saved tracks and the user's own uploads.
pub fn library() -> Vec<Track> {
    vec![
        track("t-401", "Harbour Lights", "The Low Tides", 247, 128_400, false),
        track("t-402", "Walking on Stokes Croft", "Nina Vale", 204, 1_830, true),
        track("t-403", "Second Line", "Omar Reyes Trio", 385, 9_990, false),
        track("t-404", "Groundwork (demo)", "Nina Vale", 176, 412, true),
        track("t-405", "Small Hours", "Kestrel", 221, 12_406, false),
        track("t-406", "Undertow", "Nina Vale & Omar Reyes", 298, 3_077, true),
    ]
}

pub fn playlists() -> Vec<Playlist> {
    vec![
        Playlist {
            id: "p-501".to_string(),
            name: "Practice grooves".to_string(),
            curator: "Nina Vale".to_string(),
            track_ids: vec!["t-403".to_string(), "t-405".to_string(), "t-401".to_string()],
        },
        Playlist {
            id: "p-502".to_string(),
            name: "Set list: Canteen, Nov".to_string(),
            curator: "Nina Vale".to_string(),
            track_ids: vec!["t-402".to_string(), "t-406".to_string(), "t-404".to_string()],
        },
        Playlist {
            id: "p-503".to_string(),
            name: "Ideas".to_string(),
            curator: "Nina Vale".to_string(),
            track_ids: vec![],
        },
    ]
}

pub fn uploads(library: &[Track]) -> Vec<Track> {
    library.iter().filter(|t| t.own).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploads_are_own_tracks() {
        let own = uploads(&library());
        assert_eq!(own.len(), 3);
        assert!(own.iter().all(|t| t.artist.contains("Nina Vale")));
    }

    #[test]
    fn test_playlists_reference_library_tracks() {
        let library = library();
        for playlist in playlists() {
            for id in &playlist.track_ids {
                assert!(library.iter().any(|t| &t.id == id), "{} not in library", id);
            }
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration_secs: u32,
    pub plays: u64,
    /// Uploaded by the signed-in musician.
    pub own: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub curator: String,
    pub track_ids: Vec<String>,
}

impl Playlist {
    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }

    /// Sum of the durations of the playlist's tracks found in `library`.
    pub fn total_secs(&self, library: &[Track]) -> u32 {
        self.track_ids
            .iter()
            .filter_map(|id| library.iter().find(|t| &t.id == id))
            .map(|t| t.duration_secs)
            .sum()
    }
}

/// `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(secs: u32) -> String {
    let (h, m, s) = (secs / 3600, secs % 3600 / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, secs: u32) -> Track {
        Track {
            id: id.to_string(),
            title: id.to_string(),
            artist: "Nina Vale".to_string(),
            duration_secs: secs,
            plays: 0,
            own: true,
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(599), "9:59");
        assert_eq!(format_duration(3723), "1:02:03");
    }

    #[test]
    fn test_playlist_total_skips_missing_tracks() {
        let library = vec![track("t1", 200), track("t2", 150)];
        let playlist = Playlist {
            id: "p1".to_string(),
            name: "Late set".to_string(),
            curator: "Nina Vale".to_string(),
            track_ids: vec!["t1".to_string(), "gone".to_string(), "t2".to_string()],
        };
        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.total_secs(&library), 350);
    }
}

pub mod aggregate;

pub use aggregate::{format_duration, Playlist, Track};

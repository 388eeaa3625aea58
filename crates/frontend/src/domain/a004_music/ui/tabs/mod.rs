pub mod library;
pub mod playlists;
pub mod uploads;

pub use library::LibraryTab;
pub use playlists::PlaylistsTab;
pub use uploads::UploadsTab;

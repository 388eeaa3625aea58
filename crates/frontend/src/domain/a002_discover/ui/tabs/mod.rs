pub mod for_you;
pub mod genres;
pub mod new_artists;
pub mod trending;

pub use for_you::ForYouTab;
pub use genres::GenresTab;
pub use new_artists::NewArtistsTab;
pub use trending::TrendingTab;

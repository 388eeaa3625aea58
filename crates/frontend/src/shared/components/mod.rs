pub mod connect_button;
pub mod event_card;
pub mod musician_card;
pub mod page_header;
pub mod track_row;
pub mod ui;

pub use connect_button::ConnectButton;
pub use event_card::EventCard;
pub use musician_card::MusicianCard;
pub use page_header::PageHeader;
pub use track_row::TrackRow;

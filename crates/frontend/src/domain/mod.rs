pub mod a001_feed;
pub mod a002_discover;
pub mod a003_events;
pub mod a004_music;
pub mod a005_network;

pub mod a001_post;
pub mod a002_event;
pub mod a003_track;
pub mod a004_musician;

pub mod page;
pub mod tabs;

pub use page::{music_router, music_tab_view, music_tabs, MusicPage};

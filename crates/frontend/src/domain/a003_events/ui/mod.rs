pub mod page;
pub mod tabs;

pub use page::{events_router, events_tab_view, events_tabs, EventsPage};

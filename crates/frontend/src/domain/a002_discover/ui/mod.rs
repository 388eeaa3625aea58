pub mod page;
pub mod tabs;

pub use page::{discover_router, discover_tab_view, discover_tabs, DiscoverPage};

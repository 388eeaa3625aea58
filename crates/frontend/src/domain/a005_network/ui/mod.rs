pub mod page;
pub mod tabs;

pub use page::{network_tab_view, network_tabs, NetworkPage};

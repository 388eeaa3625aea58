//! Tab view used by the Discover, Events, Music and Network pages.
//!
//! Contains:
//! - `view_model` - `TabViewVm`, the per-page selection holder
//! - `nav_strip` - `NavStrip`, the row of tab buttons
//! - `tab_view` - `TabView`, strip + routed body
//! - `config_error` - local error box for a rejected tab definition
//!
//! The pure tab set / selection logic lives in `contracts::shared::tabs`.

pub mod config_error;
pub mod nav_strip;
pub mod tab_view;
pub mod view_model;

pub use config_error::TabConfigErrorBox;
pub use nav_strip::NavStrip;
pub use tab_view::{unknown_tab, TabView};
pub use view_model::TabViewVm;

/// Tab descriptor as used by the web client.
pub type Tab = contracts::shared::tabs::Tab<crate::shared::icons::Icon>;

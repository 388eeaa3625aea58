//! Tab core shared by every tabbed page.
//!
//! Contains:
//! - `tab_set` - immutable, ordered, uniquely-keyed list of tab descriptors
//! - `selection` - the single-selection state machine owned by one tab view
//! - `nav` - pure render model of the navigation strip
//! - `error` - configuration defects detected at construction

pub mod error;
pub mod nav;
pub mod selection;
pub mod tab_set;

pub use error::TabConfigError;
pub use nav::{nav_items, NavItem};
pub use selection::TabSelection;
pub use tab_set::{Tab, TabSet};

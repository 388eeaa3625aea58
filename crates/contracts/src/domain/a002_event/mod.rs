pub mod aggregate;

pub use aggregate::{Event, EventRole};

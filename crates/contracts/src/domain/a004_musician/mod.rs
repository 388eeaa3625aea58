pub mod aggregate;

pub use aggregate::{initials, ConnectionRequest, Musician, RequestDecision};

//! Renderer-independent types shared by the MusicNet client: the tab core,
//! domain records and form validation.

pub mod domain;
pub mod shared;
pub mod system;

pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod tabs;

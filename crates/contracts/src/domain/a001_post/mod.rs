pub mod aggregate;

pub use aggregate::{NewPost, Post, MAX_POST_LEN};

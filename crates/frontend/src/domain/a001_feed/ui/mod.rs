pub mod composer;
pub mod page;
pub mod post_card;

pub use composer::Composer;
pub use page::FeedPage;
pub use post_card::PostCard;

pub mod connections;
pub mod requests;
pub mod suggestions;

pub use connections::ConnectionsTab;
pub use requests::RequestsTab;
pub use suggestions::SuggestionsTab;

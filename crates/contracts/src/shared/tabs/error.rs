use thiserror::Error;

/// Defects in a page's tab definition. Raised when the tab set or the tab
/// view is constructed, never afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabConfigError {
    #[error("tab at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("duplicate tab id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("initial selection '{id}' is not one of the tabs [{known}]")]
    UnknownInitialSelection { id: String, known: String },
}

//! Error Types
//!
//! Validation failures surfaced to the user, and storage backend failures.

use thiserror::Error;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Failures of the underlying key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize items: {0}")]
    Serialize(String),
}

/// Errors returned by controller operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Submitted text is blank
    #[error("input is empty")]
    EmptyInput,
    /// Text already present in storage
    #[error("item `{0}` already exists")]
    DuplicateItem(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ListError {
    /// Notice shown to the user when a submit is rejected
    pub fn user_message(&self) -> String {
        match self {
            ListError::EmptyInput => "Please add an item".to_string(),
            ListError::DuplicateItem(_) => "That item already exists!".to_string(),
            ListError::Storage(e) => format!("Could not save your list: {}", e),
        }
    }

    /// Validation errors abort a submit without touching state
    pub fn is_validation(&self) -> bool {
        matches!(self, ListError::EmptyInput | ListError::DuplicateItem(_))
    }
}

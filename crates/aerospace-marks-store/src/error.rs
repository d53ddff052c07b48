//! Error types for mark storage operations

use thiserror::Error;

/// Errors that can occur when reading or writing marks
#[derive(Debug, Error)]
pub enum StoreError {
    /// The mark does not exist in the store.
    ///
    /// A normal, branchable outcome: callers distinguish "mark never
    /// existed" from a storage failure by matching on this variant.
    #[error("no window found for mark '{mark}'")]
    MarkNotFound { mark: String },

    /// The mark text is already attached to a window
    #[error("mark '{mark}' is already in use")]
    MarkTaken { mark: String },

    /// Failed to create the database directory
    #[error("failed to prepare mark database directory: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying SQLite operation failed
    #[error("mark database error: {0}")]
    Sql(#[from] rusqlite::Error),
}

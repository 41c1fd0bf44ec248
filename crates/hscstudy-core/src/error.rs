//! Error types for HSC Study

use thiserror::Error;

/// Main error type for HSC Study operations
#[derive(Error, Debug)]
pub enum StudyError {
    /// General I/O error (dataset files, data directory)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Section name is not one of prose, poetry, writing, novel
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Display mode name is not one of the five presenter modes
    #[error("Unknown display mode: {0}")]
    UnknownMode(String),

    /// Malformed quiz answer specification
    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),
}

impl From<serde_json::Error> for StudyError {
    fn from(error: serde_json::Error) -> Self {
        StudyError::Serialization(error.to_string())
    }
}

/// Result type alias using StudyError
pub type StudyResult<T> = Result<T, StudyError>;

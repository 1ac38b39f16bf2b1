//! Document store error types.

use thiserror::Error;

/// Errors that can occur when using the document store.
#[derive(Error, Debug)]
pub enum DbError {
    /// Failed to serialize or deserialize a document.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A store lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    Lock,
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Serialization(e.to_string())
    }
}

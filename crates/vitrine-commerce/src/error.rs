//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Required input was missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The caller lacks administrator rights.
    #[error("Administrator rights required")]
    Authorization,

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The document store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl From<vitrine_db::DbError> for CommerceError {
    fn from(e: vitrine_db::DbError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Storage(e.to_string())
    }
}

//! Auth error types.

use thiserror::Error;

/// Errors surfaced by the session layer.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The session has passed its expiry.
    #[error("Session expired")]
    SessionExpired,

    /// The caller lacks the required role.
    #[error("Insufficient role")]
    Unauthorized,
}

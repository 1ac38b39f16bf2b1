//! Session management.

use crate::user::User;
use crate::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use vitrine_commerce::catalog::Authorizer;

/// Session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh session id.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        Self(format!("sess_{:x}_{:x}", nanos, counter))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session handed to us by the session provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session id.
    pub id: SessionId,
    /// The user this session belongs to.
    pub user: User,
    /// Remembered cart id, when the shopper has one.
    #[serde(default)]
    pub cart_id: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of expiry.
    pub expires_at: i64,
}

impl Session {
    /// Default session duration: 7 days.
    pub const DEFAULT_DURATION_SECS: i64 = 7 * 24 * 60 * 60;

    /// Open a session for a user with the default duration.
    pub fn for_user(user: User) -> Self {
        let now = current_timestamp();
        Self {
            id: SessionId::generate(),
            user,
            cart_id: None,
            created_at: now,
            expires_at: now + Self::DEFAULT_DURATION_SECS,
        }
    }

    /// Open a guest session.
    pub fn guest() -> Self {
        Self::for_user(User::guest())
    }

    /// Override the duration.
    pub fn with_duration(mut self, duration_secs: i64) -> Self {
        self.expires_at = self.created_at + duration_secs;
        self
    }

    /// Associate a remembered cart.
    pub fn with_cart(mut self, cart_id: impl Into<String>) -> Self {
        self.cart_id = Some(cart_id.into());
        self
    }

    /// Whether the session has passed its expiry.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Whether the session is still usable.
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Validate the session, erroring when expired.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.is_expired() {
            Err(AuthError::SessionExpired)
        } else {
            Ok(())
        }
    }
}

impl Authorizer for Session {
    /// Administration requires a live session and the admin role; an
    /// expired session carries no rights at all.
    fn is_admin(&self) -> bool {
        self.is_valid() && self.user.is_admin()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

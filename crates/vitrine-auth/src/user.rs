//! User types.
//!
//! Authentication itself is delegated to the external identity
//! provider; what reaches this crate is the user object carried on a
//! session, whose `role` string is all the catalog ever consults.

use serde::{Deserialize, Serialize};
use vitrine_commerce::ids::UserId;

/// Role string granting catalog administration.
pub const ADMIN_ROLE: &str = "admin";

/// A user as the session provider represents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User id.
    pub id: UserId,
    /// Email, absent for guests.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Role string, e.g. "customer" or "admin".
    pub role: String,
}

impl User {
    /// A signed-in customer.
    pub fn customer(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: Some(email.into()),
            name: None,
            role: "customer".to_string(),
        }
    }

    /// A store administrator.
    pub fn admin(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: Some(email.into()),
            name: None,
            role: ADMIN_ROLE.to_string(),
        }
    }

    /// A guest user tracked only by a generated id.
    pub fn guest() -> Self {
        Self {
            id: UserId::generate(),
            email: None,
            name: None,
            role: "customer".to_string(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether the role string grants administration.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

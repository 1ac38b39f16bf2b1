//! Session and role surface for Vitrine.
//!
//! Authentication is delegated to an external session provider; this
//! crate models what arrives on each request (a session with a user
//! whose `role` string may grant catalog administration) and plugs it
//! into the catalog's `Authorizer` seam.

mod error;
mod session;
mod user;

pub use error::AuthError;
pub use session::{Session, SessionId};
pub use user::{User, ADMIN_ROLE};

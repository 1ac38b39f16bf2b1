//! Catalog HTTP surface for Vitrine.
//!
//! Framework-neutral handlers over `http` request/response types. The
//! actual server and router are external collaborators; they resolve
//! the session, read the body, and hand both to [`products::handle`].

pub mod config;
pub mod error;
pub mod products;
pub mod query;
pub mod response;

pub use config::ApiConfig;
pub use error::ApiError;
pub use products::{handle, ApiState};

//! Newtype ids for type-safe identifiers.
//!
//! Newtypes keep a `ProductId` from being handed to something expecting
//! a `CartId`. Variant ids stay plain `i64` because they only need to be
//! unique within their parent product and travel as integers on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh unique id.
            pub fn generate() -> Self {
                Self(format!("{:x}", next_unique()))
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CartId);
define_id!(UserId);

/// Generate the next unique variant id.
///
/// Variant ids must be unique and stable once assigned; collisions
/// across processes are avoided by mixing the wall clock into the value.
pub fn next_variant_id() -> i64 {
    next_unique()
}

/// A nanosecond timestamp sharded with a process-wide counter.
///
/// The counter occupies the low bits so ids minted in the same
/// nanosecond still differ; the result stays positive for the i64 range.
fn next_unique() -> i64 {
    static COUNTER: AtomicI64 = AtomicI64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    ((nanos << 12) | (counter & 0xfff)) & i64::MAX
}

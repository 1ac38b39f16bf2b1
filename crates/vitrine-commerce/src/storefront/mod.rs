//! Storefront view-layer state.

mod detail;

pub use detail::{AddToCart, ProductDetail};

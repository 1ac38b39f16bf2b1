//! Storefront domain types and logic for Vitrine.
//!
//! This crate holds everything the storefront actually decides, with
//! I/O pushed behind seams:
//!
//! - **Cart**: a pure state-transition reducer over line items, a
//!   session cart store wrapping it, and a bridge that hydrates a
//!   remembered cart from the remote endpoint
//! - **Catalog**: products with color/SKU variants, the variant
//!   aggregator that derives the product's displayed price and stock
//!   on every write, listing queries, and the CRUD service over the
//!   product collection
//! - **Storefront**: product detail view state feeding the cart
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//!
//! let mut cart = CartStore::new();
//! let line = CartLine::new("prod-1-77", "Trail Pack (green)", Money::new(8_000, Currency::USD))
//!     .with_stock(5);
//! cart.add_item(line, 2);
//! println!("Total: {}", cart.total_price()?);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        load_remembered_cart, CartAction, CartLine, CartState, CartStore, RememberedCart,
        RememberedCartLine, RemoteCartSource,
    };

    // Catalog
    pub use crate::catalog::{
        aggregate_variants, Anonymous, Authorizer, CatalogService, CatalogSummary,
        DocumentProductStore, ListPage, ListQuery, NewProduct, PriceOrder, Product, ProductPatch,
        ProductStore, ProductVariant, VariantDraft, VariantTotals,
    };

    // Storefront
    pub use crate::storefront::{AddToCart, ProductDetail};
}

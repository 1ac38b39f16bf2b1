//! Catalog module.
//!
//! Products with color/SKU variants, the aggregator that derives the
//! product summary from its variants, listing queries, and the CRUD
//! service over the product collection.

mod aggregate;
mod listing;
mod product;
mod service;
mod store;

pub use aggregate::{aggregate_variants, VariantTotals};
pub use listing::{
    CatalogSummary, ListPage, ListQuery, PriceOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use product::{Product, ProductVariant, VariantDraft};
pub use service::{
    Anonymous, Authorizer, CatalogService, NewProduct, ProductPatch, ProductStore,
};
pub use store::DocumentProductStore;

//! Catalog CRUD service.
//!
//! Thin orchestration over the product collection: authorization first,
//! then validation, then aggregation, then the write. The document
//! store's per-document atomicity is the only write safety relied on;
//! two concurrent updates to the same product resolve last-write-wins.

use crate::catalog::aggregate::aggregate_variants;
use crate::catalog::listing::{CatalogSummary, ListPage, ListQuery, PriceOrder};
use crate::catalog::product::{current_timestamp, Product, VariantDraft};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use vitrine_db::DbError;

/// The product collection, at the document database's interface.
pub trait ProductStore {
    /// Insert a new product document.
    fn insert(&self, product: &Product) -> Result<(), DbError>;
    /// Fetch a product by id.
    fn get(&self, id: &ProductId) -> Result<Option<Product>, DbError>;
    /// Atomically replace an existing product document. Returns `false`
    /// when no document with that id exists.
    fn replace(&self, product: &Product) -> Result<bool, DbError>;
    /// Delete a product by id. Returns `false` when absent.
    fn delete(&self, id: &ProductId) -> Result<bool, DbError>;
    /// Every product document.
    fn all(&self) -> Result<Vec<Product>, DbError>;
}

/// What the catalog needs to know about the caller.
///
/// The session provider implements this; the service never inspects
/// credentials itself.
pub trait Authorizer {
    /// Whether the caller holds administrator rights.
    fn is_admin(&self) -> bool;
}

/// A caller with no session at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl Authorizer for Anonymous {
    fn is_admin(&self) -> bool {
        false
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Top-level price; also the aggregator fallback when the variant
    /// list is empty.
    pub price: Option<Money>,
    /// Brand name.
    #[serde(default)]
    pub brand: Option<String>,
    /// Image URIs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Discounted list price.
    #[serde(default)]
    pub discount: Option<Money>,
    /// Category slug.
    #[serde(default)]
    pub category: Option<String>,
    /// Initial variants, possibly empty.
    #[serde(default)]
    pub variants: Vec<VariantDraft>,
}

/// A partial update to a product. Absent fields are left untouched;
/// a present `variants` list re-runs the aggregator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New top-level price.
    pub price: Option<Money>,
    /// New brand.
    pub brand: Option<String>,
    /// New image list.
    pub images: Option<Vec<String>>,
    /// New discounted list price.
    pub discount: Option<Money>,
    /// New category.
    pub category: Option<String>,
    /// Replacement variant list.
    pub variants: Option<Vec<VariantDraft>>,
}

/// CRUD surface over the product collection.
#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    store: S,
}

impl<S: ProductStore> CatalogService<S> {
    /// Create a service over the given product store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List products with pagination, filters and ordering.
    pub fn list(&self, query: &ListQuery) -> Result<ListPage, CommerceError> {
        let catalog = self.store.all()?;
        // The summary spans the whole catalog no matter what filter is
        // active; the storefront shows it alongside every listing.
        let summary = CatalogSummary::tally(&catalog);

        let mut matched: Vec<Product> =
            catalog.into_iter().filter(|p| query.matches(p)).collect();

        match query.price_order {
            Some(PriceOrder::LowToHigh) => {
                matched.sort_by_key(|p| (p.price.amount_cents, -p.created_at));
            }
            Some(PriceOrder::HighToLow) => {
                matched.sort_by_key(|p| (-p.price.amount_cents, -p.created_at));
            }
            None => matched.sort_by_key(|p| -p.created_at),
        }

        let page = query.normalized_page();
        let limit = query.normalized_limit();
        let total = matched.len() as i64;
        let total_pages = (total + limit - 1) / limit;
        let offset = ((page - 1) * limit) as usize;

        let items: Vec<Product> = matched
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        Ok(ListPage {
            items,
            total,
            page,
            limit,
            total_pages,
            summary,
        })
    }

    /// Fetch one product by id.
    pub fn get(&self, id: &ProductId) -> Result<Product, CommerceError> {
        self.store
            .get(id)?
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Create a product. Administrator only.
    pub fn create(
        &self,
        caller: &dyn Authorizer,
        input: NewProduct,
    ) -> Result<Product, CommerceError> {
        self.require_admin(caller)?;

        if input.name.trim().is_empty() {
            return Err(CommerceError::Validation("name is required".into()));
        }
        if input.description.trim().is_empty() {
            return Err(CommerceError::Validation("description is required".into()));
        }
        let Some(price) = input.price else {
            return Err(CommerceError::Validation("price is required".into()));
        };

        let (variants, totals) = aggregate_variants(input.variants, price);
        let now = current_timestamp();
        let product = Product {
            id: ProductId::generate(),
            name: input.name,
            description: input.description,
            brand: input.brand,
            images: input.images,
            price: totals.price,
            sale_price: totals.price,
            stock: totals.stock,
            quantity: totals.stock,
            discount: input.discount,
            category: input.category,
            variants,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(&product)?;
        tracing::debug!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Patch a product. Administrator only; re-aggregates only when the
    /// patch replaces the variant list.
    pub fn update(
        &self,
        caller: &dyn Authorizer,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Product, CommerceError> {
        self.require_admin(caller)?;

        let mut product = self.get(id)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
            product.sale_price = price;
        }
        if let Some(brand) = patch.brand {
            product.brand = Some(brand);
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(discount) = patch.discount {
            product.discount = Some(discount);
        }
        if let Some(category) = patch.category {
            product.category = Some(category);
        }
        if let Some(drafts) = patch.variants {
            let (variants, totals) = aggregate_variants(drafts, product.price);
            product.variants = variants;
            product.price = totals.price;
            product.sale_price = totals.price;
            product.stock = totals.stock;
            product.quantity = totals.stock;
        }
        product.updated_at = current_timestamp();

        if !self.store.replace(&product)? {
            // The document vanished between the read and the write;
            // surface the same error as a straight miss.
            return Err(CommerceError::ProductNotFound(id.to_string()));
        }
        tracing::debug!(product_id = %product.id, "product updated");
        Ok(product)
    }

    /// Delete a product. Administrator only.
    pub fn delete(&self, caller: &dyn Authorizer, id: &ProductId) -> Result<(), CommerceError> {
        self.require_admin(caller)?;

        if !self.store.delete(id)? {
            return Err(CommerceError::ProductNotFound(id.to_string()));
        }
        tracing::debug!(product_id = %id, "product deleted");
        Ok(())
    }

    fn require_admin(&self, caller: &dyn Authorizer) -> Result<(), CommerceError> {
        if caller.is_admin() {
            Ok(())
        } else {
            Err(CommerceError::Authorization)
        }
    }
}

/// Build a `NewProduct` with just the required fields, for callers that
/// fill the rest in builder style.
impl NewProduct {
    /// A product with name, description and price set.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: Some(price),
            brand: None,
            images: Vec::new(),
            discount: None,
            category: None,
            variants: Vec::new(),
        }
    }

    /// Set the initial variants.
    pub fn with_variants(mut self, variants: Vec<VariantDraft>) -> Self {
        self.variants = variants;
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the discounted list price.
    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount = Some(discount);
        self
    }
}

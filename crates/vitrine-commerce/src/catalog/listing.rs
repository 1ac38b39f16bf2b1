//! Catalog listing queries and results.

use crate::catalog::product::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Default page size for catalog listings.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Price ordering for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceOrder {
    /// Cheapest first.
    LowToHigh,
    /// Most expensive first.
    HighToLow,
}

impl PriceOrder {
    /// Parse the wire parameter value.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "low-to-high" => Some(PriceOrder::LowToHigh),
            "high-to-low" => Some(PriceOrder::HighToLow),
            _ => None,
        }
    }

    /// The wire parameter value.
    pub fn as_param(&self) -> &'static str {
        match self {
            PriceOrder::LowToHigh => "low-to-high",
            PriceOrder::HighToLow => "high-to-low",
        }
    }
}

/// A catalog listing query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-indexed page; values below 1 are clamped up.
    pub page: i64,
    /// Page size; clamped to `[1, MAX_PAGE_SIZE]`.
    pub limit: i64,
    /// Case-insensitive substring match on the product name.
    pub text: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Price ordering; newest-first when absent.
    pub price_order: Option<PriceOrder>,
    /// Keep only products whose list price is at or below this.
    pub max_price: Option<Money>,
}

impl ListQuery {
    /// First page at the default size, no filters.
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            text: None,
            category: None,
            price_order: None,
            max_price: None,
        }
    }

    /// Set the page.
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the text filter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the price ordering.
    pub fn with_price_order(mut self, order: PriceOrder) -> Self {
        self.price_order = Some(order);
        self
    }

    /// Set the price ceiling.
    pub fn with_max_price(mut self, max_price: Money) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// The page, clamped to at least 1.
    pub fn normalized_page(&self) -> i64 {
        self.page.max(1)
    }

    /// The page size, clamped to `[1, MAX_PAGE_SIZE]`.
    pub fn normalized_limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    /// Whether the product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(text) = &self.text {
            if !product
                .name
                .to_lowercase()
                .contains(&text.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if product.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            // The discounted price counts when one applies, the base
            // price otherwise.
            if product.list_price().amount_cents > max.amount_cents {
                return false;
            }
        }
        true
    }
}

/// Stock and promotion counts across the whole catalog.
///
/// Computed catalog-wide, independent of whatever filter produced the
/// page it rides along with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    /// Products with stock above zero.
    pub in_stock: i64,
    /// Products with no stock.
    pub out_of_stock: i64,
    /// Products with an applicable discount.
    pub discounted: i64,
}

impl CatalogSummary {
    /// Tally the summary over a product collection.
    pub fn tally<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let mut summary = CatalogSummary::default();
        for product in products {
            if product.is_in_stock() {
                summary.in_stock += 1;
            } else {
                summary.out_of_stock += 1;
            }
            if product.has_discount() {
                summary.discounted += 1;
            }
        }
        summary
    }
}

/// One page of a catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    /// Products on this page.
    pub items: Vec<Product>,
    /// Total products matching the filter.
    pub total: i64,
    /// 1-indexed page number.
    pub page: i64,
    /// Page size used.
    pub limit: i64,
    /// Number of pages the filtered set spans.
    pub total_pages: i64,
    /// Catalog-wide stock and promotion counts.
    pub summary: CatalogSummary,
}

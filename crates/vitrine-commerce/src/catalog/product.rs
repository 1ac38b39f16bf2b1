//! Product and variant types.
//!
//! A product owns its variants; variants have no identity outside the
//! parent document. The product's `price`, `sale_price`, `stock` and
//! `quantity` are denormalized summaries of the variants, recomputed by
//! the aggregator on every write that touches the variant list, so the
//! listing and filtering paths never aggregate at query time.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable configuration of a product, e.g. one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant id, unique within the product.
    pub variant_id: i64,
    /// Stock keeping unit.
    pub sku: String,
    /// Display label, e.g. "38L".
    #[serde(default)]
    pub label: String,
    /// Color name.
    #[serde(default)]
    pub color: String,
    /// Base price.
    pub price: Money,
    /// Promotional price; zero means no promotion.
    #[serde(default)]
    pub promotional_price: Money,
    /// Promotional price when set, base price otherwise.
    pub effective_price: Money,
    /// Units in stock for this variant.
    #[serde(default)]
    pub stock_total: i64,
    /// Image URI for this variant.
    #[serde(default)]
    pub image_url: String,
    /// Whether the variant is shown to shoppers.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Shipping weight.
    #[serde(default)]
    pub weight: f64,
}

impl ProductVariant {
    /// Whether a promotional price applies.
    pub fn is_on_promotion(&self) -> bool {
        self.promotional_price.is_positive()
    }

    /// Whether any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock_total > 0
    }
}

/// A raw variant record as supplied on create or update, before the
/// aggregator assigns ids and effective prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDraft {
    /// Existing variant id, preserved when present.
    #[serde(default)]
    pub variant_id: Option<i64>,
    /// Stock keeping unit.
    pub sku: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Color name.
    #[serde(default)]
    pub color: String,
    /// Base price.
    pub price: Money,
    /// Promotional price; zero means no promotion.
    #[serde(default)]
    pub promotional_price: Money,
    /// Units in stock.
    #[serde(default)]
    pub stock_total: i64,
    /// Image URI.
    #[serde(default)]
    pub image_url: String,
    /// Whether the variant is shown to shoppers.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Shipping weight.
    #[serde(default)]
    pub weight: f64,
}

fn default_visible() -> bool {
    true
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Brand name.
    #[serde(default)]
    pub brand: Option<String>,
    /// Image URIs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Displayed price, derived from the variants.
    pub price: Money,
    /// Mirrors `price`; kept for the storefront wire format.
    #[serde(rename = "salePrice")]
    pub sale_price: Money,
    /// Total units in stock, derived from the variants.
    #[serde(default)]
    pub stock: i64,
    /// Mirrors `stock`; kept for the storefront wire format.
    #[serde(default)]
    pub quantity: i64,
    /// Administrator-set discounted list price, if any.
    #[serde(default)]
    pub discount: Option<Money>,
    /// Category slug.
    #[serde(default)]
    pub category: Option<String>,
    /// Purchasable configurations; `variant_id` unique within the list.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Whether any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether a discount below the base price currently applies.
    pub fn has_discount(&self) -> bool {
        self.discount
            .map(|d| d.amount_cents < self.price.amount_cents)
            .unwrap_or(false)
    }

    /// The price a shopper pays from the listing: the discounted price
    /// when one applies, the base price otherwise.
    pub fn list_price(&self) -> Money {
        match self.discount {
            Some(d) if d.amount_cents < self.price.amount_cents => d,
            _ => self.price,
        }
    }

    /// Look up a variant by id.
    pub fn variant(&self, variant_id: i64) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.variant_id == variant_id)
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(price_cents: i64, discount_cents: Option<i64>) -> Product {
        Product {
            id: ProductId::new("prod-1"),
            name: "Trail Pack".into(),
            description: "A pack".into(),
            brand: None,
            images: Vec::new(),
            price: Money::new(price_cents, Currency::USD),
            sale_price: Money::new(price_cents, Currency::USD),
            stock: 0,
            quantity: 0,
            discount: discount_cents.map(|c| Money::new(c, Currency::USD)),
            category: None,
            variants: Vec::new(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_list_price_prefers_lower_discount() {
        let p = product(10_000, Some(8_000));
        assert!(p.has_discount());
        assert_eq!(p.list_price().amount_cents, 8_000);
    }

    #[test]
    fn test_discount_above_price_is_ignored() {
        let p = product(10_000, Some(12_000));
        assert!(!p.has_discount());
        assert_eq!(p.list_price().amount_cents, 10_000);
    }

    #[test]
    fn test_sale_price_serializes_camel_case() {
        let json = serde_json::to_value(product(500, None)).unwrap();
        assert!(json.get("salePrice").is_some());
        assert!(json.get("sale_price").is_none());
    }
}

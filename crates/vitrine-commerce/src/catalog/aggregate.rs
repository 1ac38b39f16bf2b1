//! Variant aggregation.
//!
//! Runs inside the write path whenever a product is created or its
//! variant list is replaced. There is exactly one way for the derived
//! product fields to be computed, and it is this function; no call site
//! gets to skip it or roll its own.

use crate::catalog::product::{ProductVariant, VariantDraft};
use crate::ids::next_variant_id;
use crate::money::Money;

/// Product-level summary derived from a variant list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantTotals {
    /// Minimum effective price across the variants, or the caller's
    /// fallback when the list is empty.
    pub price: Money,
    /// Sum of variant stock.
    pub stock: i64,
}

/// Materialize variant drafts and derive the product summary.
///
/// Each draft gets its effective price (promotional when positive, base
/// otherwise) and keeps its variant id when it already has one; fresh
/// ids come from the shared generator and stay stable from then on.
/// `fallback_price` is the caller-supplied top-level price, used only
/// when the list is empty.
pub fn aggregate_variants(
    drafts: Vec<VariantDraft>,
    fallback_price: Money,
) -> (Vec<ProductVariant>, VariantTotals) {
    let variants: Vec<ProductVariant> = drafts
        .into_iter()
        .map(|draft| {
            let effective_price = if draft.promotional_price.is_positive() {
                draft.promotional_price
            } else {
                draft.price
            };
            ProductVariant {
                variant_id: draft.variant_id.unwrap_or_else(next_variant_id),
                sku: draft.sku,
                label: draft.label,
                color: draft.color,
                price: draft.price,
                promotional_price: draft.promotional_price,
                effective_price,
                stock_total: draft.stock_total,
                image_url: draft.image_url,
                visible: draft.visible,
                weight: draft.weight,
            }
        })
        .collect();

    let stock = variants.iter().map(|v| v.stock_total).sum();
    let price = variants
        .iter()
        .map(|v| v.effective_price)
        .min_by_key(|price| price.amount_cents)
        .unwrap_or(fallback_price);

    (variants, VariantTotals { price, stock })
}

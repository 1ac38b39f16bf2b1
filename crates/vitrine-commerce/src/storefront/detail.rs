//! Product detail view state.
//!
//! Tracks the shopper's variant selection and desired quantity for one
//! product, and turns "add to cart" gestures into cart store calls. The
//! stock conditions surfaced here are the user-facing side of the
//! cart's silent-rejection policy: the gesture gets a message, the cart
//! itself never errors.

use crate::cart::{CartLine, CartStore};
use crate::catalog::{Product, ProductVariant};
use serde::{Deserialize, Serialize};

/// Outcome of an add-to-cart gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddToCart {
    /// The line was added or merged; carries the cart line id.
    Added { line_id: String },
    /// The selected variant has no stock; the cart was not touched.
    OutOfStock,
    /// The desired quantity exceeds the variant's stock.
    InsufficientStock { available: i64 },
}

/// View state for one product's detail page.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: Product,
    selected: usize,
    quantity: i64,
}

impl ProductDetail {
    /// Open the detail view: first variant selected, quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            selected: 0,
            quantity: 1,
        }
    }

    /// The product being shown.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Index of the selected variant.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected variant, if the product has any.
    pub fn selected_variant(&self) -> Option<&ProductVariant> {
        self.product.variants.get(self.selected)
    }

    /// Desired quantity.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Select a variant by index; out-of-range selections are ignored.
    /// The quantity is re-clamped against the new variant's stock.
    pub fn select_variant(&mut self, index: usize) {
        if index < self.product.variants.len() {
            self.selected = index;
            self.quantity = self.clamp_quantity(self.quantity);
        }
    }

    /// Set the desired quantity, bounded to `[1, stock]`.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = self.clamp_quantity(quantity);
    }

    /// Add the selection to the cart.
    ///
    /// The cart line id combines product and variant id, so distinct
    /// variants of one product occupy distinct lines.
    pub fn add_to_cart(&self, cart: &mut CartStore) -> AddToCart {
        let Some(variant) = self.selected_variant() else {
            return AddToCart::OutOfStock;
        };
        if variant.stock_total == 0 {
            return AddToCart::OutOfStock;
        }
        if self.quantity > variant.stock_total {
            return AddToCart::InsufficientStock {
                available: variant.stock_total,
            };
        }

        let line_id = format!("{}-{}", self.product.id, variant.variant_id);
        let name = if variant.label.is_empty() {
            self.product.name.clone()
        } else {
            format!("{} ({})", self.product.name, variant.label)
        };
        let image = if variant.image_url.is_empty() {
            self.product.images.first().cloned().unwrap_or_default()
        } else {
            variant.image_url.clone()
        };

        let line = CartLine::new(line_id.clone(), name, variant.effective_price)
            .with_image(image)
            .with_stock(variant.stock_total);
        cart.add_item(line, self.quantity);

        AddToCart::Added { line_id }
    }

    fn clamp_quantity(&self, quantity: i64) -> i64 {
        let max = self
            .selected_variant()
            .map(|v| v.stock_total)
            .unwrap_or(0)
            .max(1);
        quantity.clamp(1, max)
    }
}

//! Cart line item type.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One entry in a cart, identified by a line id unique within the cart.
///
/// For catalog products the id is a composite of product and variant id,
/// so distinct variants of the same product occupy distinct lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line id, unique within the cart.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URI, may be empty.
    #[serde(default)]
    pub image: String,
    /// Maximum purchasable quantity. Absent means unlimited.
    #[serde(default)]
    pub stock: Option<i64>,
    /// Quantity in the cart.
    #[serde(default)]
    pub quantity: i64,
}

impl CartLine {
    /// Create a line with no image, no stock bound and zero quantity.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            stock: None,
            quantity: 0,
        }
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the stock bound.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// The effective stock bound, if one applies.
    ///
    /// A stock of zero is no bound at all as far as the cart is
    /// concerned; the storefront refuses zero-stock adds before they
    /// ever reach the cart.
    pub fn stock_bound(&self) -> Option<i64> {
        match self.stock {
            Some(0) | None => None,
            bound => bound,
        }
    }

    /// Line total: unit price times quantity.
    pub fn total(&self) -> Option<Money> {
        self.price.try_multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_zero_stock_is_not_a_bound() {
        let line = CartLine::new("a", "Thing", Money::new(100, Currency::USD)).with_stock(0);
        assert_eq!(line.stock_bound(), None);
    }

    #[test]
    fn test_missing_stock_is_not_a_bound() {
        let line = CartLine::new("a", "Thing", Money::new(100, Currency::USD));
        assert_eq!(line.stock_bound(), None);
    }

    #[test]
    fn test_positive_stock_is_a_bound() {
        let line = CartLine::new("a", "Thing", Money::new(100, Currency::USD)).with_stock(3);
        assert_eq!(line.stock_bound(), Some(3));
    }

    #[test]
    fn test_total() {
        let line = CartLine::new("a", "Thing", Money::new(250, Currency::USD)).with_quantity(4);
        assert_eq!(line.total().unwrap().amount_cents, 1000);
    }
}

//! Pure cart state transitions.
//!
//! The cart is a state machine: every interaction is a [`CartAction`]
//! applied to a [`CartState`], producing the next state. No transition
//! errors; a request the cart cannot honor (an add that would exceed
//! stock, an update to an absent line) returns the state unchanged.
//! The storefront surfaces those rejections to the shopper where the
//! gesture warrants it, never the reducer.

use crate::cart::CartLine;
use serde::{Deserialize, Serialize};

/// The full contents of one session's cart, in insertion order.
///
/// Line ids are unique within `items`; a line with zero quantity is
/// never stored, it is removed instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    /// Cart lines, oldest first.
    pub items: Vec<CartLine>,
}

/// A cart state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartAction {
    /// Add `quantity` units of `item`, merging into an existing line
    /// with the same id.
    Add { item: CartLine, quantity: i64 },
    /// Remove the line with the given id.
    Remove { id: String },
    /// Set the quantity of the line with the given id; zero or less
    /// removes the line.
    SetQuantity { id: String, quantity: i64 },
    /// Empty the cart.
    Clear,
    /// Replace the whole item list, without validation.
    Replace { items: Vec<CartLine> },
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action, producing the next state.
    pub fn apply(self, action: CartAction) -> CartState {
        match action {
            CartAction::Add { item, quantity } => self.add(item, quantity),
            CartAction::Remove { id } => self.remove(&id),
            CartAction::SetQuantity { id, quantity } => self.set_quantity(&id, quantity),
            CartAction::Clear => CartState::new(),
            CartAction::Replace { items } => CartState { items },
        }
    }

    /// Look up a line by id.
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn add(mut self, item: CartLine, quantity: i64) -> CartState {
        // Callers default the add quantity to 1; anything non-positive
        // degrades to a no-op like every other invalid request.
        if quantity <= 0 {
            return self;
        }

        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            let next = existing.quantity + quantity;
            if matches!(existing.stock_bound(), Some(bound) if next > bound) {
                return self;
            }
            existing.quantity = next;
            return self;
        }

        if matches!(item.stock_bound(), Some(bound) if quantity > bound) {
            return self;
        }
        let mut line = item;
        line.quantity = quantity;
        self.items.push(line);
        self
    }

    fn remove(mut self, id: &str) -> CartState {
        self.items.retain(|line| line.id != id);
        self
    }

    fn set_quantity(self, id: &str, quantity: i64) -> CartState {
        if quantity <= 0 {
            return self.remove(id);
        }

        let mut next = self;
        if let Some(line) = next.items.iter_mut().find(|line| line.id == id) {
            if quantity < line.quantity {
                // A decrease is always honored.
                line.quantity = quantity;
            } else if matches!(line.stock_bound(), Some(bound) if line.quantity < bound) {
                // An increase is permitted while the current quantity is
                // below stock. The new quantity itself is not checked
                // here; callers bound it upstream. Load-bearing for
                // compatibility with the existing storefront, flagged in
                // the tests below for product-owner review.
                line.quantity = quantity;
            }
        }
        next
    }
}

//! Session cart store.

use crate::cart::{CartAction, CartLine, CartState};
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// The cart for one active session.
///
/// Wraps the reducer behind named operations and a derived total-price
/// query. One instance lives per session, in memory only; it is
/// constructed empty and simply ends with the session.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Current lines, oldest first.
    pub fn items(&self) -> &[CartLine] {
        &self.state.items
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Add `quantity` units of `item`.
    pub fn add_item(&mut self, item: CartLine, quantity: i64) {
        self.dispatch(CartAction::Add { item, quantity });
    }

    /// Remove the line with the given id.
    pub fn remove_item(&mut self, id: &str) {
        self.dispatch(CartAction::Remove { id: id.to_string() });
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        self.dispatch(CartAction::SetQuantity {
            id: id.to_string(),
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Replace the item list wholesale, e.g. when hydrating a
    /// remembered cart.
    pub fn replace_items(&mut self, items: Vec<CartLine>) {
        self.dispatch(CartAction::Replace { items });
    }

    /// Apply one action through the reducer.
    pub fn dispatch(&mut self, action: CartAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
        tracing::debug!(items = self.state.items.len(), "cart updated");
    }

    /// Total price across the cart: sum of unit price times quantity.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let currency = self
            .state
            .items
            .first()
            .map(|line| line.price.currency)
            .unwrap_or(Currency::default());

        let totals = self
            .state
            .items
            .iter()
            .map(|line| line.total().ok_or(CommerceError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;

        Money::try_sum(totals, currency).ok_or(CommerceError::Overflow)
    }
}

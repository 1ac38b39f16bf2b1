//! Cart module.
//!
//! The cart is three layers: a pure reducer over line items, a
//! session-scoped store wrapping it, and a bridge that hydrates a
//! remembered cart from the remote endpoint.

mod line;
mod reducer;
pub mod remote;
mod store;

pub use line::CartLine;
pub use reducer::{CartAction, CartState};
pub use remote::{load_remembered_cart, RememberedCart, RememberedCartLine, RemoteCartSource};
pub use store::CartStore;

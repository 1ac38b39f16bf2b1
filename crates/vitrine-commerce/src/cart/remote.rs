//! Remembered-cart fetch and translation.
//!
//! A shopper returning with a cart id gets their cart back from the
//! remote cart endpoint. The external representation differs from the
//! cart's own line shape, so the payload is translated on the way in.
//! Any failure along the way degrades to an empty cart; the shopper
//! starts fresh rather than seeing an error.

use crate::cart::CartLine;
use crate::money::{Currency, Money};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A line item as the remote cart endpoint represents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RememberedCartLine {
    /// Line id.
    pub id: String,
    /// Display title; becomes the line name.
    pub title: String,
    /// Unit price as a decimal number.
    pub unit_price: f64,
    /// Quantity in the remembered cart.
    #[serde(default)]
    pub quantity: i64,
    /// Optional image URI.
    #[serde(default)]
    pub image: Option<String>,
}

impl RememberedCartLine {
    /// Translate into the cart's own line shape.
    ///
    /// Remembered lines carry no stock bound; stock is re-checked when
    /// the shopper next interacts with the line.
    pub fn into_line(self, currency: Currency) -> CartLine {
        CartLine {
            id: self.id,
            name: self.title,
            price: Money::from_decimal(self.unit_price, currency),
            image: self.image.unwrap_or_default(),
            stock: None,
            quantity: self.quantity,
        }
    }
}

/// Payload of the remote cart endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RememberedCart {
    /// Remembered line items.
    #[serde(default)]
    pub items: Vec<RememberedCartLine>,
}

/// Raw response from the remote cart endpoint.
#[derive(Debug, Clone)]
pub struct CartFetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, possibly empty.
    pub body: Vec<u8>,
}

impl CartFetchResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport-level failure reaching the remote cart endpoint.
#[derive(Error, Debug)]
pub enum RemoteCartError {
    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// The remote cart endpoint, at its interface.
///
/// The single suspending call in the cart path. No retry and no
/// timeout are layered on top; a failure simply yields an empty cart.
#[async_trait]
pub trait RemoteCartSource {
    /// Fetch the remembered cart with the given id.
    async fn fetch_cart(&self, cart_id: &str) -> Result<CartFetchResponse, RemoteCartError>;
}

/// Fetch a remembered cart and translate it into cart lines.
///
/// A 200 and a 404 are both "possibly empty cart": the body is parsed
/// if it looks like a cart payload and ignored otherwise. Any other
/// status, a transport failure, or an unparsable body yields an empty
/// cart and a log line for operators.
pub async fn load_remembered_cart<S>(source: &S, cart_id: &str, currency: Currency) -> Vec<CartLine>
where
    S: RemoteCartSource + ?Sized,
{
    let response = match source.fetch_cart(cart_id).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(cart_id, error = %e, "remembered cart fetch failed, starting empty");
            return Vec::new();
        }
    };

    if response.status != 200 && response.status != 404 {
        tracing::warn!(
            cart_id,
            status = response.status,
            "unexpected status from cart endpoint, starting empty"
        );
        return Vec::new();
    }

    if response.body.is_empty() {
        return Vec::new();
    }

    match serde_json::from_slice::<RememberedCart>(&response.body) {
        Ok(cart) => cart
            .items
            .into_iter()
            .map(|line| line.into_line(currency))
            .collect(),
        Err(e) => {
            tracing::warn!(cart_id, error = %e, "unparsable cart payload, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Result<CartFetchResponse, RemoteCartError>);

    #[async_trait]
    impl RemoteCartSource for FixedSource {
        async fn fetch_cart(&self, _cart_id: &str) -> Result<CartFetchResponse, RemoteCartError> {
            match &self.0 {
                Ok(response) => Ok(response.clone()),
                Err(RemoteCartError::Transport(msg)) => {
                    Err(RemoteCartError::Transport(msg.clone()))
                }
            }
        }
    }

    fn payload() -> Vec<u8> {
        serde_json::to_vec(&RememberedCart {
            items: vec![RememberedCartLine {
                id: "line-1".into(),
                title: "Canvas Tote".into(),
                unit_price: 19.9,
                quantity: 2,
                image: None,
            }],
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_ok_response_is_translated() {
        let source = FixedSource(Ok(CartFetchResponse::new(200, payload())));
        let lines = load_remembered_cart(&source, "cart-1", Currency::USD).await;

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "line-1");
        assert_eq!(lines[0].name, "Canvas Tote");
        assert_eq!(lines[0].price.amount_cents, 1990);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].image, "");
        assert_eq!(lines[0].stock, None);
    }

    #[tokio::test]
    async fn test_not_found_is_an_empty_cart() {
        let source = FixedSource(Ok(CartFetchResponse::new(404, Vec::new())));
        let lines = load_remembered_cart(&source, "cart-1", Currency::USD).await;
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_an_empty_cart() {
        let source = FixedSource(Ok(CartFetchResponse::new(500, b"boom".to_vec())));
        let lines = load_remembered_cart(&source, "cart-1", Currency::USD).await;
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_empty_cart() {
        let source = FixedSource(Err(RemoteCartError::Transport("connection refused".into())));
        let lines = load_remembered_cart(&source, "cart-1", Currency::USD).await;
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_garbage_body_is_an_empty_cart() {
        let source = FixedSource(Ok(CartFetchResponse::new(200, b"<html>".to_vec())));
        let lines = load_remembered_cart(&source, "cart-1", Currency::USD).await;
        assert!(lines.is_empty());
    }
}

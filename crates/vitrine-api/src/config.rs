//! API configuration.

use serde::{Deserialize, Serialize};
use vitrine_commerce::money::Currency;

/// Configuration for the catalog API.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Page size used when a listing request does not name one.
    pub default_limit: i64,
    /// Currency the storefront prices in; also used when translating
    /// remembered-cart payloads.
    pub currency: Currency,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_limit: vitrine_commerce::catalog::DEFAULT_PAGE_SIZE,
            currency: Currency::USD,
        }
    }
}

impl ApiConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

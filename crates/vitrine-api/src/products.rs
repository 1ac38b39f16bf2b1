//! Catalog HTTP handlers.
//!
//! The routing layer is an external collaborator; what this module
//! exports is one dispatch function over framework-neutral `http`
//! types, plus a handler per verb. Sessions arrive already resolved by
//! the session provider.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::query::{first, parse_pairs};
use crate::response;
use http::{Method, Request, Response, StatusCode};
use serde::Deserialize;
use vitrine_auth::Session;
use vitrine_commerce::catalog::{
    Anonymous, Authorizer, CatalogService, ListQuery, NewProduct, PriceOrder, ProductPatch,
    ProductStore,
};
use vitrine_commerce::ids::ProductId;
use vitrine_commerce::money::Money;

/// Everything a catalog request needs.
#[derive(Debug, Clone)]
pub struct ApiState<S> {
    /// The catalog service.
    pub catalog: CatalogService<S>,
    /// API configuration.
    pub config: ApiConfig,
}

impl<S: ProductStore> ApiState<S> {
    /// Create the state for a store and configuration.
    pub fn new(catalog: CatalogService<S>, config: ApiConfig) -> Self {
        Self { catalog, config }
    }
}

/// Dispatch one catalog request.
pub fn handle<S: ProductStore>(
    state: &ApiState<S>,
    session: Option<&Session>,
    request: &Request<Vec<u8>>,
) -> Response<Vec<u8>> {
    let caller: &dyn Authorizer = match session {
        Some(session) => session,
        None => &Anonymous,
    };
    let query = request.uri().query().unwrap_or("");

    match (request.method(), request.uri().path()) {
        (&Method::GET, "/products") => list_products(state, query),
        (&Method::POST, "/products") => create_product(state, caller, request.body()),
        (&Method::PUT, "/products") => update_product(state, caller, request.body()),
        (&Method::DELETE, "/products") => delete_product(state, caller, query),
        _ => response::error(ApiError::NotFound(request.uri().path().to_string())),
    }
}

/// `GET /products?page&limit&q&category&priceFilter&maxPrice`
pub fn list_products<S: ProductStore>(state: &ApiState<S>, raw_query: &str) -> Response<Vec<u8>> {
    let pairs = parse_pairs(raw_query);

    let mut query = ListQuery::new()
        .with_page(parse_i64(first(&pairs, "page")).unwrap_or(1))
        .with_limit(parse_i64(first(&pairs, "limit")).unwrap_or(state.config.default_limit));
    if let Some(text) = first(&pairs, "q").filter(|t| !t.is_empty()) {
        query = query.with_text(text);
    }
    if let Some(category) = first(&pairs, "category").filter(|c| !c.is_empty()) {
        query = query.with_category(category);
    }
    if let Some(order) = first(&pairs, "priceFilter").and_then(PriceOrder::from_param) {
        query = query.with_price_order(order);
    }
    if let Some(cents) = parse_i64(first(&pairs, "maxPrice")) {
        query = query.with_max_price(Money::new(cents, state.config.currency));
    }

    match state.catalog.list(&query) {
        Ok(page) => response::json(StatusCode::OK, &page),
        Err(e) => response::error(e.into()),
    }
}

/// `POST /products`, administrator only.
pub fn create_product<S: ProductStore>(
    state: &ApiState<S>,
    caller: &dyn Authorizer,
    body: &[u8],
) -> Response<Vec<u8>> {
    let input: NewProduct = match serde_json::from_slice(body) {
        Ok(input) => input,
        Err(e) => return response::error(ApiError::Validation(format!("invalid body: {}", e))),
    };

    match state.catalog.create(caller, input) {
        Ok(product) => response::json(StatusCode::CREATED, &product),
        Err(e) => response::error(e.into()),
    }
}

/// Body of `PUT /products`: the product id plus the patch fields.
#[derive(Debug, Deserialize)]
struct UpdateRequest {
    id: Option<String>,
    #[serde(flatten)]
    patch: ProductPatch,
}

/// `PUT /products`, administrator only.
pub fn update_product<S: ProductStore>(
    state: &ApiState<S>,
    caller: &dyn Authorizer,
    body: &[u8],
) -> Response<Vec<u8>> {
    let request: UpdateRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => return response::error(ApiError::Validation(format!("invalid body: {}", e))),
    };
    let Some(id) = request.id.filter(|id| !id.is_empty()) else {
        return response::error(ApiError::Validation("id is required".into()));
    };

    match state
        .catalog
        .update(caller, &ProductId::new(id), request.patch)
    {
        Ok(product) => response::json(StatusCode::OK, &product),
        Err(e) => response::error(e.into()),
    }
}

/// `DELETE /products?id=`, administrator only.
pub fn delete_product<S: ProductStore>(
    state: &ApiState<S>,
    caller: &dyn Authorizer,
    raw_query: &str,
) -> Response<Vec<u8>> {
    let pairs = parse_pairs(raw_query);
    let Some(id) = first(&pairs, "id").filter(|id| !id.is_empty()) else {
        return response::error(ApiError::Validation("id is required".into()));
    };

    match state.catalog.delete(caller, &ProductId::new(id)) {
        Ok(()) => response::json(StatusCode::OK, &serde_json::json!({ "deleted": id })),
        Err(e) => response::error(e.into()),
    }
}

fn parse_i64(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.parse().ok())
}

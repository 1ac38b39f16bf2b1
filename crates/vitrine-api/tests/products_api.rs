//! End-to-end flow over the catalog surface: an administrator curates
//! the catalog through the HTTP handlers, a shopper browses it and
//! fills a cart from the product detail view.

use http::{Method, Request, Response, StatusCode};
use vitrine_api::{handle, ApiConfig, ApiState};
use vitrine_auth::{Session, User};
use vitrine_commerce::catalog::{CatalogService, DocumentProductStore};
use vitrine_commerce::cart::CartStore;
use vitrine_commerce::ids::{ProductId, UserId};
use vitrine_commerce::storefront::{AddToCart, ProductDetail};
use vitrine_db::Store;

fn state() -> ApiState<DocumentProductStore> {
    ApiState::new(
        CatalogService::new(DocumentProductStore::new(&Store::new())),
        ApiConfig::default(),
    )
}

fn request(method: Method, uri: &str, body: serde_json::Value) -> Request<Vec<u8>> {
    let bytes = if body.is_null() {
        Vec::new()
    } else {
        serde_json::to_vec(&body).expect("serializable body")
    };
    let mut request = Request::new(bytes);
    *request.method_mut() = method;
    *request.uri_mut() = uri.parse().expect("valid test uri");
    request
}

fn body_json(response: &Response<Vec<u8>>) -> serde_json::Value {
    serde_json::from_slice(response.body()).expect("JSON body")
}

fn pack_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Trail Pack",
        "description": "38 liter hiking pack",
        "category": "bags",
        "price": { "amount_cents": 9999, "currency": "USD" },
        "variants": [
            {
                "sku": "TP-GRN",
                "label": "green",
                "color": "green",
                "price": { "amount_cents": 10000, "currency": "USD" },
                "promotional_price": { "amount_cents": 8000, "currency": "USD" },
                "stock_total": 5
            },
            {
                "sku": "TP-BLU",
                "label": "blue",
                "color": "blue",
                "price": { "amount_cents": 12000, "currency": "USD" },
                "stock_total": 0
            }
        ]
    })
}

#[test]
fn admin_curates_and_shopper_fills_a_cart() {
    let state = state();
    let admin = Session::for_user(User::admin(UserId::new("u-admin"), "ops@example.com"));
    let shopper = Session::for_user(User::customer(UserId::new("u-jo"), "jo@example.com"));

    // A shopper cannot create products.
    let denied = handle(
        &state,
        Some(&shopper),
        &request(Method::POST, "/products", pack_payload()),
    );
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

    // The administrator can; the aggregator derives price and stock.
    let created = handle(
        &state,
        Some(&admin),
        &request(Method::POST, "/products", pack_payload()),
    );
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(&created);
    assert_eq!(created["price"]["amount_cents"], 8000);
    assert_eq!(created["salePrice"]["amount_cents"], 8000);
    assert_eq!(created["stock"], 5);
    let product_id = created["id"].as_str().expect("product id").to_string();

    // The listing shows it, with the catalog-wide summary alongside.
    let listed = handle(
        &state,
        None,
        &request(Method::GET, "/products?q=trail&priceFilter=low-to-high", serde_json::Value::Null),
    );
    assert_eq!(listed.status(), StatusCode::OK);
    let listed = body_json(&listed);
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["summary"]["inStock"], 1);
    assert_eq!(listed["summary"]["outOfStock"], 0);

    // The detail view drives the cart from the same catalog service.
    let product = state
        .catalog
        .get(&ProductId::new(product_id.clone()))
        .expect("created product");
    let mut view = ProductDetail::new(product);
    let mut cart = CartStore::new();

    view.set_quantity(2);
    assert!(matches!(view.add_to_cart(&mut cart), AddToCart::Added { .. }));
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_price().expect("total").amount_cents, 16000);

    // The blue variant has no stock; the cart stays as it was.
    view.select_variant(1);
    assert_eq!(view.add_to_cart(&mut cart), AddToCart::OutOfStock);
    assert_eq!(cart.item_count(), 2);

    // The administrator retires the product.
    let deleted = handle(
        &state,
        Some(&admin),
        &request(
            Method::DELETE,
            &format!("/products?id={}", product_id),
            serde_json::Value::Null,
        ),
    );
    assert_eq!(deleted.status(), StatusCode::OK);

    let listed = handle(&state, None, &request(Method::GET, "/products", serde_json::Value::Null));
    assert_eq!(body_json(&listed)["total"], 0);
}

#[test]
fn update_replaces_variants_and_reaggregates() {
    let state = state();
    let admin = Session::for_user(User::admin(UserId::new("u-admin"), "ops@example.com"));

    let created = handle(
        &state,
        Some(&admin),
        &request(Method::POST, "/products", pack_payload()),
    );
    let created = body_json(&created);
    let product_id = created["id"].as_str().expect("product id");
    let green_variant_id = created["variants"][0]["variant_id"]
        .as_i64()
        .expect("variant id");

    let patch = serde_json::json!({
        "id": product_id,
        "variants": [
            {
                "variant_id": green_variant_id,
                "sku": "TP-GRN",
                "label": "green",
                "color": "green",
                "price": { "amount_cents": 10000, "currency": "USD" },
                "stock_total": 9
            }
        ]
    });
    let updated = handle(&state, Some(&admin), &request(Method::PUT, "/products", patch));
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(&updated);

    // Promotion gone, stock resummed, variant id stable.
    assert_eq!(updated["price"]["amount_cents"], 10000);
    assert_eq!(updated["stock"], 9);
    assert_eq!(updated["quantity"], 9);
    assert_eq!(updated["variants"][0]["variant_id"], green_variant_id);

    // An expired admin session holds no rights.
    let expired = Session::for_user(User::admin(UserId::new("u-old"), "old@example.com"))
        .with_duration(-60);
    let denied = handle(
        &state,
        Some(&expired),
        &request(
            Method::DELETE,
            &format!("/products?id={}", product_id),
            serde_json::Value::Null,
        ),
    );
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
}

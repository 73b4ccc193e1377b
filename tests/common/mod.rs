//! Shared fixtures for the wiremock-backed integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use storefront_sdk::client::StorefrontClient;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// A client pointed at the mock server, authenticated with [`TOKEN`].
pub fn client(server: &MockServer) -> StorefrontClient {
    StorefrontClient::builder()
        .base_url(&format!("{}/api", server.uri()))
        .auth_token(TOKEN)
        .build()
        .expect("failed to build test client")
}

/// Same, with no credential.
pub fn anonymous_client(server: &MockServer) -> StorefrontClient {
    StorefrontClient::builder()
        .base_url(&format!("{}/api", server.uri()))
        .build()
        .expect("failed to build test client")
}

/// Catalog item with size (S=10, M=11) and color (red=20, blue=21).
pub fn shirt_json() -> Value {
    json!({
        "id": 1,
        "title": "Linen Shirt",
        "price": "40.00",
        "discount_price": null,
        "category": "S",
        "label": "P",
        "slug": "linen-shirt",
        "description": "A shirt",
        "image": "/media/shirt.jpg",
        "variations": [
            {
                "id": 1,
                "name": "size",
                "item_variations": [
                    { "id": 10, "value": "S", "attachment": null },
                    { "id": 11, "value": "M", "attachment": null }
                ]
            },
            {
                "id": 2,
                "name": "color",
                "item_variations": [
                    { "id": 20, "value": "red", "attachment": null },
                    { "id": 21, "value": "blue", "attachment": null }
                ]
            }
        ]
    })
}

/// One shirt line (size M, color red) with the given quantity.
pub fn shirt_line(id: i64, quantity: i64) -> Value {
    let mut item = shirt_json();
    if let Some(fields) = item.as_object_mut() {
        fields.remove("variations");
    }
    json!({
        "id": id,
        "item": item,
        "item_variations": [
            {
                "id": 11,
                "value": "M",
                "attachment": null,
                "variation": { "id": 1, "name": "size" }
            },
            {
                "id": 20,
                "value": "red",
                "attachment": null,
                "variation": { "id": 2, "name": "color" }
            }
        ],
        "quantity": quantity,
        "final_price": format!("{}.00", 40 * quantity)
    })
}

pub fn order_json(lines: Vec<Value>, total: &str, coupon: Option<(&str, &str)>) -> Value {
    json!({
        "id": 3,
        "order_items": lines,
        "total": total,
        "coupon": coupon.map(|(code, amount)| json!({ "id": 1, "code": code, "amount": amount }))
    })
}

pub fn address_json(id: i64, address_type: &str, default: bool) -> Value {
    json!({
        "id": id,
        "user": 1,
        "street_address": format!("{id} Main St"),
        "apartment_address": "",
        "country": "US",
        "zip": "10001",
        "address_type": address_type,
        "default": default
    })
}

//! Integration tests for the addresses sub-client and the current-user cache.

mod common;

use common::{address_json, client};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_sdk::domain::address::{AddressBook, AddressForm, AddressType, FormMode};
use storefront_sdk::error::ErrorKind;
use storefront_sdk::shared::{AddressId, UserId};

async fn mount_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "userID": 1 })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_filters_by_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .and(query_param("address_type", "S"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([address_json(4, "S", true)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let list = client
        .addresses()
        .list(Some(AddressType::Shipping))
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].address_type, AddressType::Shipping);
    assert!(list[0].default);
}

#[tokio::test]
async fn create_sends_user_and_form_fields() {
    let server = MockServer::start().await;
    mount_user(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/addresses/"))
        .and(body_json(json!({
            "user": 1,
            "street_address": "7 Elm St",
            "apartment_address": "",
            "country": "DE",
            "zip": "10115",
            "address_type": "B",
            "default": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "user": 1,
            "street_address": "7 Elm St",
            "apartment_address": "",
            "country": "DE",
            "zip": "10115",
            "address_type": "B",
            "default": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = AddressForm::create(AddressType::Billing);
    form.street_address = "7 Elm St".into();
    form.country = "DE".into();
    form.zip = "10115".into();
    form.toggle_default();

    let client = client(&server);
    let saved = client.addresses().save(&form).await.unwrap();
    assert_eq!(saved.id, AddressId::from(7));
    assert_eq!(client.auth().user_id().await.unwrap(), UserId::from(1));
}

#[tokio::test]
async fn save_from_updates_then_reloads_and_clears_selection() {
    let server = MockServer::start().await;
    mount_user(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/addresses/3/update/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(address_json(3, "B", false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .and(query_param("address_type", "B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            address_json(3, "B", false),
            address_json(5, "B", true)
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut book = AddressBook::new(AddressType::Billing);
    client.addresses().refresh(&mut book).await.unwrap();
    assert!(book.select(&AddressId::from(3)));

    let form = book.form();
    assert_eq!(form.mode, FormMode::Update(AddressId::from(3)));
    client.addresses().save_from(&mut book, &form).await.unwrap();

    assert_eq!(book.addresses.len(), 2);
    assert!(book.selected.is_none());
    assert!(!book.loading);
}

#[tokio::test]
async fn delete_from_reloads_and_failed_reload_keeps_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([address_json(3, "S", false)])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/addresses/3/delete/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client(&server);
    let mut book = AddressBook::new(AddressType::Shipping);
    client.addresses().refresh(&mut book).await.unwrap();
    assert!(book.select(&AddressId::from(3)));

    let err = client
        .addresses()
        .delete_from(&mut book, &AddressId::from(3))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Server { status: 503, .. }));
    assert_eq!(book.addresses.len(), 1);
    assert!(book.error.is_some());
    // The deleted address is no longer selected even though the reload failed.
    assert!(book.selected.is_none());
    assert_eq!(book.form().mode, FormMode::Create);
}

#[tokio::test]
async fn countries_are_fetched_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/countries/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "US": "United States",
            "AT": "Austria"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let first = client.addresses().countries().await.unwrap();
    let second = client.clone().addresses().countries().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.options()[0].name, "Austria");
    assert_eq!(first.name("US"), Some("United States"));
}

#[tokio::test]
async fn payment_history_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "amount": 70.0, "timestamp": "2024-03-01T10:15:00Z" }
        ])))
        .mount(&server)
        .await;

    let client = client(&server);
    let payments = client.payments().history().await.unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, rust_decimal::Decimal::from(70));
}

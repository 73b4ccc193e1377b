//! Integration tests for the checkout flow.

mod common;

use common::{address_json, client};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_sdk::domain::checkout::{
    CheckoutStatus, PaymentToken, PaymentTokenizer, TokenizeError,
};
use storefront_sdk::error::{ErrorKind, SdkError};
use storefront_sdk::shared::AddressId;

/// Tokenizer stub that counts calls.
struct StubTokenizer {
    result: Result<&'static str, &'static str>,
    calls: AtomicUsize,
}

impl StubTokenizer {
    fn ok(token: &'static str) -> Self {
        Self {
            result: Ok(token),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            result: Err(message),
            calls: AtomicUsize::new(0),
        }
    }
}

impl PaymentTokenizer for StubTokenizer {
    async fn tokenize(&self) -> Result<PaymentToken, TokenizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .map(PaymentToken::new)
            .map_err(TokenizeError::new)
    }
}

async fn mount_addresses(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .and(query_param("address_type", "B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            address_json(1, "B", false),
            address_json(2, "B", true)
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .and(query_param("address_type", "S"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            address_json(3, "S", true)
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn prepare_preselects_default_addresses() {
    let server = MockServer::start().await;
    mount_addresses(&server).await;

    let client = client(&server);
    let flow = client.checkout().prepare().await.unwrap();

    assert_eq!(flow.selection.billing, Some(AddressId::from(2)));
    assert_eq!(flow.selection.shipping, Some(AddressId::from(3)));
    assert!(flow.can_pay());
    assert_eq!(flow.status, CheckoutStatus::Idle);
}

#[tokio::test]
async fn pay_submits_token_and_selected_addresses() {
    let server = MockServer::start().await;
    mount_addresses(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/"))
        .and(body_json(json!({
            "stripeToken": "tok_visa",
            "selectedBillingAddress": 2,
            "selectedShippingAddress": 3
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut flow = client.checkout().prepare().await.unwrap();
    let tokenizer = StubTokenizer::ok("tok_visa");

    let message = client.checkout().pay(&mut flow, &tokenizer).await.unwrap();
    assert_eq!(message, "Your order was successful!");
    assert_eq!(flow.status, CheckoutStatus::Success(message));
}

#[tokio::test]
async fn blank_server_message_falls_back_to_default() {
    let server = MockServer::start().await;
    mount_addresses(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "  " })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut flow = client.checkout().prepare().await.unwrap();
    let tokenizer = StubTokenizer::ok("tok_visa");

    let message = client.checkout().pay(&mut flow, &tokenizer).await.unwrap();
    assert_eq!(message, "Your order was successful!");
}

#[tokio::test]
async fn tokenize_failure_sends_no_checkout_request() {
    let server = MockServer::start().await;
    mount_addresses(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut flow = client.checkout().prepare().await.unwrap();
    let tokenizer = StubTokenizer::failing("Your card number is incomplete.");

    let err = client.checkout().pay(&mut flow, &tokenizer).await.unwrap_err();
    assert!(matches!(err, SdkError::Payment(_)));
    assert_eq!(
        flow.status,
        CheckoutStatus::Failed(ErrorKind::Payment("Your card number is incomplete.".into()))
    );
    assert_eq!(tokenizer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn pay_without_shipping_address_does_not_tokenize() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .and(query_param("address_type", "B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([address_json(1, "B", true)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .and(query_param("address_type", "S"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut flow = client.checkout().prepare().await.unwrap();
    assert!(!flow.can_pay());

    let tokenizer = StubTokenizer::ok("tok_visa");
    let err = client.checkout().pay(&mut flow, &tokenizer).await.unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    assert_eq!(tokenizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn declined_charge_can_be_retried() {
    let server = MockServer::start().await;
    mount_addresses(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "message": "Your card was declined." })),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Order placed" })),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let mut flow = client.checkout().prepare().await.unwrap();
    let tokenizer = StubTokenizer::ok("tok_visa");

    client.checkout().pay(&mut flow, &tokenizer).await.unwrap_err();
    assert_eq!(
        flow.status,
        CheckoutStatus::Failed(ErrorKind::Validation("Your card was declined.".into()))
    );

    let message = client.checkout().pay(&mut flow, &tokenizer).await.unwrap();
    assert_eq!(message, "Order placed");
    assert_eq!(tokenizer.calls.load(Ordering::SeqCst), 2);
}

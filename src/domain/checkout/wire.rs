use crate::shared::AddressId;
use serde::{Deserialize, Serialize};

/// `POST checkout/`
#[derive(Serialize, Debug, Clone)]
pub struct CheckoutRequest<'a> {
    #[serde(rename = "stripeToken")]
    pub token: &'a str,
    #[serde(rename = "selectedBillingAddress")]
    pub billing_address: &'a AddressId,
    #[serde(rename = "selectedShippingAddress")]
    pub shipping_address: &'a AddressId,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub message: Option<String>,
}

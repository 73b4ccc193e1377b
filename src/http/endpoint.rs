//! Endpoint table — one variant per logical REST operation.
//!
//! An [`Endpoint`] knows its method, its path relative to the API base URL and
//! whether it needs the user's bearer credential. [`RequestDescriptor`] is the
//! fully-qualified result the HTTP layer sends.

use crate::domain::address::AddressType;
use crate::shared::{AddressId, ItemId, OrderItemId};
use reqwest::Method;

/// Whether a request carries the user's credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Catalog reads. Sent without `Authorization`.
    Public,
    /// Cart, order, address, payment and user endpoints. Fails fast without a token.
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Products,
    Product { id: ItemId },
    AddToCart,
    OrderSummary,
    Checkout,
    AddCoupon,
    AddressList { address_type: Option<AddressType> },
    AddressCreate,
    AddressUpdate { id: AddressId },
    AddressDelete { id: AddressId },
    OrderItemDelete { id: OrderItemId },
    OrderItemUpdateQuantity,
    Countries,
    User,
    Payments,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Products
            | Endpoint::Product { .. }
            | Endpoint::OrderSummary
            | Endpoint::AddressList { .. }
            | Endpoint::Countries
            | Endpoint::User
            | Endpoint::Payments => Method::GET,
            Endpoint::AddToCart
            | Endpoint::Checkout
            | Endpoint::AddCoupon
            | Endpoint::AddressCreate
            | Endpoint::OrderItemUpdateQuantity => Method::POST,
            Endpoint::AddressUpdate { .. } => Method::PUT,
            Endpoint::AddressDelete { .. } | Endpoint::OrderItemDelete { .. } => Method::DELETE,
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Endpoint::Products | Endpoint::Product { .. } => Access::Public,
            _ => Access::Authenticated,
        }
    }

    /// Path relative to the API base, identifiers URL-encoded.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Products => "products/".to_string(),
            Endpoint::Product { id } => format!("products/{}/", encode(id.as_str())),
            Endpoint::AddToCart => "add-to-cart/".to_string(),
            Endpoint::OrderSummary => "order-summary/".to_string(),
            Endpoint::Checkout => "checkout/".to_string(),
            Endpoint::AddCoupon => "add-coupon/".to_string(),
            Endpoint::AddressList { address_type } => match address_type {
                Some(t) => format!("addresses/?address_type={}", t.code()),
                None => "addresses/".to_string(),
            },
            Endpoint::AddressCreate => "addresses/".to_string(),
            Endpoint::AddressUpdate { id } => format!("addresses/{}/update/", encode(id.as_str())),
            Endpoint::AddressDelete { id } => format!("addresses/{}/delete/", encode(id.as_str())),
            Endpoint::OrderItemDelete { id } => {
                format!("order-items/{}/delete/", encode(id.as_str()))
            }
            Endpoint::OrderItemUpdateQuantity => "order-items/update-quantity/".to_string(),
            Endpoint::Countries => "countries/".to_string(),
            Endpoint::User => "user/".to_string(),
            Endpoint::Payments => "payments/".to_string(),
        }
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// A fully-qualified request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub access: Access,
    pub body: Option<serde_json::Value>,
}

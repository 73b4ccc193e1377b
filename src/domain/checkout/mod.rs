//! Checkout domain — payment tokenization, address choice, and the
//! submit/result flow.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use crate::domain::address::{default_address_id, Address};
use crate::shared::AddressId;
use std::fmt;
use std::future::Future;
use thiserror::Error;

pub use state::{CheckoutFlow, CheckoutStatus};

// ─── Payment tokenization ────────────────────────────────────────────────────

/// Opaque single-use token produced by the payment widget.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentToken(String);

impl PaymentToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PaymentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PaymentToken(..)")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TokenizeError {
    pub message: String,
}

impl TokenizeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns the card details held by a payment widget into a [`PaymentToken`].
pub trait PaymentTokenizer {
    fn tokenize(&self) -> impl Future<Output = Result<PaymentToken, TokenizeError>>;
}

// ─── Address selection ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSelection {
    pub billing: Option<AddressId>,
    pub shipping: Option<AddressId>,
}

impl AddressSelection {
    /// Pre-select each type's default address.
    pub fn from_defaults(billing: &[Address], shipping: &[Address]) -> Self {
        Self {
            billing: default_address_id(billing),
            shipping: default_address_id(shipping),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.billing.is_some() && self.shipping.is_some()
    }
}

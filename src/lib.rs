//! # Storefront SDK
//!
//! A Rust client for the storefront REST API: catalog reads, a server-synced
//! cart, billing/shipping addresses, and checkout. Supports native and WASM
//! targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Identifiers, domain models, state containers (always available, WASM-safe)
//! 2. **HTTP API** — `Endpoint` table and `StorefrontHttp` with bearer-token access control
//! 3. **High-Level Client** — `StorefrontClient` with nested sub-clients, the cart store
//!    and caching
//!
//! The cart never holds locally computed state: every mutation is sent to the
//! server and followed by a re-fetch of the order summary, and the result is
//! dispatched into the [`CartStore`](domain::order::CartStore).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_sdk::prelude::*;
//!
//! let client = StorefrontClient::builder()
//!     .base_url("https://shop.example.com/api")
//!     .auth_token(token)
//!     .build()?;
//!
//! let item = client.catalog().get(&ItemId::from(1)).await?;
//! let selection = VariationSelection::new().with("size", 11);
//! let order = client.cart().add_item(&item, &selection).await?;
//! println!("{} lines, total {}", order.items.len(), format_price(&order.total));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network defaults.
pub mod network;

/// Session credential and current user.
pub mod auth;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Endpoint table and HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StorefrontClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        format_price, AddressId, ItemId, ItemVariationId, OrderId, OrderItemId, PaymentId,
        UserId, VariationId,
    };

    // Domain types — catalog
    pub use crate::domain::catalog::{Item, ItemVariation, Variation, VariationSelection};

    // Domain types — order + cart state
    pub use crate::domain::order::{
        CartAction, CartSnapshot, CartStatus, Coupon, Order, OrderItem, OrderItemVariation,
    };

    // Domain types — address
    pub use crate::domain::address::{
        default_address_id, Address, AddressBook, AddressForm, AddressType, Countries,
        CountryOption, FormMode,
    };

    // Domain types — checkout, payment
    pub use crate::domain::checkout::{
        AddressSelection, CheckoutFlow, CheckoutStatus, PaymentToken, PaymentTokenizer,
        TokenizeError,
    };
    pub use crate::domain::payment::Payment;

    // Errors
    pub use crate::error::{ErrorKind, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AddressesClient, AuthClient, CartClient, CatalogClient, CheckoutClient, PaymentsClient,
        StorefrontClient, StorefrontClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::order::CartStore;
    #[cfg(feature = "http")]
    pub use crate::http::{Endpoint, StorefrontHttp};
}

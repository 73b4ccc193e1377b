//! High-level client — `StorefrontClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::auth::client::Auth;
use crate::domain::address::client::Addresses;
use crate::domain::address::Countries;
use crate::domain::catalog::client::Catalog;
use crate::domain::catalog::Item;
use crate::domain::checkout::client::Checkout;
use crate::domain::order::client::Cart;
use crate::domain::order::CartStore;
use crate::domain::payment::client::Payments;
use crate::error::SdkError;
use crate::http::StorefrontHttp;
use crate::shared::{ItemId, UserId};

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::address::client::Addresses as AddressesClient;
pub use crate::domain::catalog::client::Catalog as CatalogClient;
pub use crate::domain::checkout::client::Checkout as CheckoutClient;
pub use crate::domain::order::client::Cart as CartClient;
pub use crate::domain::payment::client::Payments as PaymentsClient;

/// The primary entry point for the storefront SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.cart()`, `client.addresses()`, etc. Clones share the cart store,
/// the credential and every cache.
pub struct StorefrontClient {
    pub(crate) http: StorefrontHttp,
    /// The single owner of the current order snapshot.
    pub(crate) cart_store: CartStore,
    /// Item cache: id → (Item, fetched_at)
    pub(crate) item_cache: Arc<RwLock<HashMap<ItemId, (Item, Instant)>>>,
    pub(crate) item_cache_ttl: Duration,
    /// Country list, fetched once.
    pub(crate) countries: Arc<RwLock<Option<Countries>>>,
    /// Current user id, fetched once per token.
    pub(crate) user_id: Arc<RwLock<Option<UserId>>>,
}

impl StorefrontClient {
    pub fn builder() -> StorefrontClientBuilder {
        StorefrontClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog { client: self }
    }

    pub fn cart(&self) -> Cart<'_> {
        Cart { client: self }
    }

    pub fn addresses(&self) -> Addresses<'_> {
        Addresses { client: self }
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }

    pub fn checkout(&self) -> Checkout<'_> {
        Checkout { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    /// The low-level HTTP client, for request inspection via `describe`.
    pub fn http(&self) -> &StorefrontHttp {
        &self.http
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.item_cache.write().await.clear();
        *self.countries.write().await = None;
        *self.user_id.write().await = None;
    }
}

impl Clone for StorefrontClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            cart_store: self.cart_store.clone(),
            item_cache: self.item_cache.clone(),
            item_cache_ttl: self.item_cache_ttl,
            countries: self.countries.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StorefrontClientBuilder {
    base_url: String,
    auth_token: Option<String>,
    timeout: Duration,
    item_cache_ttl: Duration,
}

impl Default for StorefrontClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
            item_cache_ttl: Duration::from_secs(crate::network::DEFAULT_ITEM_CACHE_TTL_SECS),
        }
    }
}

impl StorefrontClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Pre-set the bearer token on construction.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Per-request timeout (native only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn item_cache_ttl(mut self, ttl: Duration) -> Self {
        self.item_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<StorefrontClient, SdkError> {
        let http =
            StorefrontHttp::new(&self.base_url, self.timeout)?.with_auth_token(self.auth_token);
        Ok(StorefrontClient {
            http,
            cart_store: CartStore::new(),
            item_cache: Arc::new(RwLock::new(HashMap::new())),
            item_cache_ttl: self.item_cache_ttl,
            countries: Arc::new(RwLock::new(None)),
            user_id: Arc::new(RwLock::new(None)),
        })
    }
}

//! Cart sub-client — order summary fetch and cart mutations.
//!
//! Every mutation follows the same sync cycle: dispatch `Start`, send the
//! mutation, and on success re-fetch the order summary so the store only ever
//! holds server-confirmed state. A failed mutation dispatches `Fail` and is
//! returned without re-fetching.

use crate::client::StorefrontClient;
use crate::domain::catalog::{Item, VariationSelection};
use crate::domain::order::wire::{
    AddCouponRequest, AddToCartRequest, OrderResponse, UpdateQuantityRequest,
};
use crate::domain::order::{CartAction, CartSnapshot, CartStore, Order, OrderItem, ValidationError};
use crate::error::{HttpError, SdkError};
use crate::http::Endpoint;
use crate::shared::OrderItemId;

pub struct Cart<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Cart<'a> {
    /// The shared store this sub-client writes to.
    pub fn store(&self) -> &CartStore {
        &self.client.cart_store
    }

    pub async fn snapshot(&self) -> CartSnapshot {
        self.client.cart_store.snapshot().await
    }

    /// Load the active order. A 404 means the user has no cart yet and lands in
    /// the store as `Fail(NotFound)`.
    pub async fn fetch(&self) -> Result<Order, SdkError> {
        let store = &self.client.cart_store;
        store.dispatch(CartAction::Start).await;

        match self.load().await {
            Ok(order) => {
                tracing::debug!(order = %order.id, lines = order.items.len(), "Cart loaded");
                store.dispatch(CartAction::Success(order.clone())).await;
                Ok(order)
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::debug!("No active order");
                } else {
                    tracing::warn!("Cart fetch failed: {}", e);
                }
                store.dispatch(CartAction::Fail(e.kind())).await;
                Err(e)
            }
        }
    }

    /// Add one unit of a product, identified by slug, with the chosen
    /// variation options.
    pub async fn add_to_cart(
        &self,
        slug: &str,
        selection: &VariationSelection,
    ) -> Result<Order, SdkError> {
        let body = AddToCartRequest {
            slug,
            variations: selection.variation_ids(),
        };
        self.mutate("add_to_cart", &Endpoint::AddToCart, Some(&body))
            .await
    }

    /// Like [`add_to_cart`](Self::add_to_cart), but checks the selection
    /// against the item's declared variations first. Nothing is sent when the
    /// selection is invalid.
    pub async fn add_item(
        &self,
        item: &Item,
        selection: &VariationSelection,
    ) -> Result<Order, SdkError> {
        let store = &self.client.cart_store;
        store.dispatch(CartAction::Start).await;

        if let Err(e) = selection.validate(item) {
            let err = SdkError::Validation(e.to_string());
            tracing::warn!(slug = %item.slug, "Rejected selection: {}", e);
            store.dispatch(CartAction::Fail(err.kind())).await;
            return Err(err);
        }

        let body = AddToCartRequest {
            slug: &item.slug,
            variations: selection.variation_ids(),
        };
        self.send_then_refresh("add_item", &Endpoint::AddToCart, Some(&body))
            .await
    }

    /// One more unit of an existing line, re-added with its own variations.
    pub async fn increment_quantity(&self, order_item: &OrderItem) -> Result<Order, SdkError> {
        let selection = VariationSelection::from_order_item(order_item);
        self.add_to_cart(&order_item.item.slug, &selection).await
    }

    /// One less unit. The server removes the line when it reaches zero.
    pub async fn decrement_quantity(&self, slug: &str) -> Result<Order, SdkError> {
        let body = UpdateQuantityRequest { slug };
        self.mutate(
            "decrement_quantity",
            &Endpoint::OrderItemUpdateQuantity,
            Some(&body),
        )
        .await
    }

    /// Remove a line. A line that is already gone counts as removed.
    pub async fn remove_item(&self, id: &OrderItemId) -> Result<Order, SdkError> {
        let store = &self.client.cart_store;
        store.dispatch(CartAction::Start).await;

        let endpoint = Endpoint::OrderItemDelete { id: id.clone() };
        match self.client.http.request_unit(&endpoint, None::<&()>).await {
            Ok(()) => {}
            Err(HttpError::NotFound(_)) => {
                tracing::debug!(order_item = %id, "Order item already removed");
            }
            Err(e) => return self.fail("remove_item", e.into()).await,
        }
        self.fetch().await
    }

    /// Apply a coupon code. An unknown code leaves the order unchanged and
    /// fails with [`SdkError::InvalidCoupon`].
    pub async fn apply_coupon(&self, code: &str) -> Result<Order, SdkError> {
        let store = &self.client.cart_store;
        store.dispatch(CartAction::Start).await;

        let code = code.trim();
        if code.is_empty() {
            return self
                .fail(
                    "apply_coupon",
                    SdkError::Validation("Coupon code is required".to_string()),
                )
                .await;
        }

        let body = AddCouponRequest { code };
        match self
            .client
            .http
            .request_unit(&Endpoint::AddCoupon, Some(&body))
            .await
        {
            Ok(()) => self.fetch().await,
            Err(HttpError::NotFound(_)) => {
                self.fail("apply_coupon", SdkError::InvalidCoupon(code.to_string()))
                    .await
            }
            Err(e) => self.fail("apply_coupon", e.into()).await,
        }
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn load(&self) -> Result<Order, SdkError> {
        let resp: OrderResponse = self.client.http.get(&Endpoint::OrderSummary).await?;
        Order::try_from(resp).map_err(|e: ValidationError| SdkError::Validation(e.to_string()))
    }

    async fn mutate<B: serde::Serialize>(
        &self,
        op: &'static str,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<Order, SdkError> {
        self.client.cart_store.dispatch(CartAction::Start).await;
        self.send_then_refresh(op, endpoint, body).await
    }

    async fn send_then_refresh<B: serde::Serialize>(
        &self,
        op: &'static str,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<Order, SdkError> {
        tracing::debug!(op, "Cart mutation");
        match self.client.http.request_unit(endpoint, body).await {
            Ok(()) => self.fetch().await,
            Err(e) => self.fail(op, e.into()).await,
        }
    }

    async fn fail(&self, op: &'static str, err: SdkError) -> Result<Order, SdkError> {
        tracing::warn!(op, "Cart mutation failed: {}", err);
        self.client
            .cart_store
            .dispatch(CartAction::Fail(err.kind()))
            .await;
        Err(err)
    }
}

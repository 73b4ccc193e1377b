//! Cart state — the single owner of the current order snapshot.
//!
//! Mutations go through [`CartAction`] only. The pure transition lives on
//! [`CartSnapshot::apply`]; [`CartStore`] wraps it in a shared lock so every
//! dispatch is one atomic write.

use super::Order;
use crate::error::ErrorKind;

/// The three transitions the cart accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Start,
    Success(Order),
    Fail(ErrorKind),
}

/// Derived view of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Point-in-time copy of the cart.
///
/// `order` survives failures: a failed fetch or mutation leaves the last
/// server-confirmed order in place next to the error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    pub loading: bool,
    pub order: Option<Order>,
    pub error: Option<ErrorKind>,
}

impl CartSnapshot {
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Start => {
                self.loading = true;
                self.error = None;
            }
            CartAction::Success(order) => {
                self.loading = false;
                self.order = Some(order);
                self.error = None;
            }
            CartAction::Fail(error) => {
                self.loading = false;
                self.error = Some(error);
            }
        }
    }

    pub fn status(&self) -> CartStatus {
        if self.loading {
            CartStatus::Loading
        } else if self.error.is_some() {
            CartStatus::Failed
        } else if self.order.is_some() {
            CartStatus::Ready
        } else {
            CartStatus::Idle
        }
    }

    /// The server answered 404 on the order summary: the user has no cart yet.
    ///
    /// A 404 from a mutation while an order is loaded does not count.
    pub fn has_no_active_order(&self) -> bool {
        self.order.is_none() && matches!(self.error, Some(ErrorKind::NotFound(_)))
    }
}

// ─── Shared store ────────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub use store::CartStore;

#[cfg(feature = "http")]
mod store {
    use super::{CartAction, CartSnapshot};
    use async_lock::RwLock;
    use std::sync::Arc;

    /// Shared, cloneable cart store. Clones see the same snapshot.
    #[derive(Clone, Default)]
    pub struct CartStore {
        inner: Arc<RwLock<CartSnapshot>>,
    }

    impl CartStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn dispatch(&self, action: CartAction) {
            tracing::debug!(action = action_name(&action), "cart dispatch");
            self.inner.write().await.apply(action);
        }

        pub async fn snapshot(&self) -> CartSnapshot {
            self.inner.read().await.clone()
        }
    }

    fn action_name(action: &CartAction) -> &'static str {
        match action {
            CartAction::Start => "start",
            CartAction::Success(_) => "success",
            CartAction::Fail(_) => "fail",
        }
    }
}

//! Order domain — the server-held cart, its lines and coupon, and the
//! client-side cart store.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::domain::catalog::{self, Item};
use crate::shared::{ItemVariationId, OrderId, OrderItemId, VariationId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub use state::{CartAction, CartSnapshot, CartStatus};
#[cfg(feature = "http")]
pub use state::CartStore;

// ─── Order ───────────────────────────────────────────────────────────────────

/// A server-confirmed order snapshot. Totals are the server's, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub coupon: Option<Coupon>,
}

impl Order {
    pub fn item(&self, id: &OrderItemId) -> Option<&OrderItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// First line for a product slug.
    pub fn item_by_slug(&self, slug: &str) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.item.slug == slug)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ─── OrderItem ───────────────────────────────────────────────────────────────

/// One product line. `quantity` is always ≥ 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub item: Item,
    pub variations: Vec<OrderItemVariation>,
    pub quantity: u32,
    pub final_price: Decimal,
}

impl OrderItem {
    pub fn variation_ids(&self) -> BTreeSet<ItemVariationId> {
        self.variations.iter().map(|v| v.id.clone()).collect()
    }

    /// e.g. `"size: M, color: red"`
    pub fn describe_variations(&self) -> String {
        self.variations
            .iter()
            .map(|v| format!("{}: {}", v.variation_name, v.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A chosen variation option on an order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemVariation {
    pub id: ItemVariationId,
    pub value: String,
    pub attachment: Option<String>,
    pub variation_id: VariationId,
    pub variation_name: String,
}

// ─── Coupon ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub amount: Decimal,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    Item(catalog::ValidationError),
    InvalidQuantity { order_item: OrderItemId, quantity: i64 },
    EmptyCouponCode,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Order validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::Item(err) => write!(f, "Item: {}", err),
            ValidationError::InvalidQuantity {
                order_item,
                quantity,
            } => write!(f, "Order item {order_item} has quantity {quantity}"),
            ValidationError::EmptyCouponCode => write!(f, "Coupon without a code"),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::Item(e) => Some(e),
            _ => None,
        }
    }
}

//! Wire types for the order summary and cart mutation requests.

use crate::domain::catalog::wire::ItemResponse;
use crate::shared::{serde_util, ItemVariationId, OrderId, OrderItemId, VariationId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Responses ───────────────────────────────────────────────────────────────

/// `GET order-summary/`: the user's active (not yet ordered) order.
#[derive(Deserialize, Debug, Clone)]
pub struct OrderResponse {
    pub id: OrderId,
    #[serde(default)]
    pub order_items: Vec<OrderItemResponse>,
    #[serde(with = "serde_util::flexible_decimal")]
    pub total: Decimal,
    #[serde(default)]
    pub coupon: Option<CouponResponse>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OrderItemResponse {
    pub id: OrderItemId,
    pub item: ItemResponse,
    #[serde(default)]
    pub item_variations: Vec<OrderItemVariationResponse>,
    pub quantity: i64,
    #[serde(with = "serde_util::flexible_decimal")]
    pub final_price: Decimal,
}

/// A chosen option, with its parent variation inlined.
#[derive(Deserialize, Debug, Clone)]
pub struct OrderItemVariationResponse {
    pub id: ItemVariationId,
    pub value: String,
    #[serde(default)]
    pub attachment: Option<String>,
    pub variation: VariationRefResponse,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VariationRefResponse {
    pub id: VariationId,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CouponResponse {
    pub code: String,
    #[serde(with = "serde_util::flexible_decimal")]
    pub amount: Decimal,
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// `POST add-to-cart/`
#[derive(Serialize, Debug, Clone)]
pub struct AddToCartRequest<'a> {
    pub slug: &'a str,
    pub variations: Vec<ItemVariationId>,
}

/// `POST order-items/update-quantity/`, removes one unit.
#[derive(Serialize, Debug, Clone)]
pub struct UpdateQuantityRequest<'a> {
    pub slug: &'a str,
}

/// `POST add-coupon/`
#[derive(Serialize, Debug, Clone)]
pub struct AddCouponRequest<'a> {
    pub code: &'a str,
}

//! Wire types for catalog responses (`products/`, `products/{id}/`).

use crate::shared::{serde_util, ItemId, ItemVariationId, VariationId};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One product as serialized by the list and detail endpoints.
///
/// The list endpoint omits `variations`.
#[derive(Deserialize, Debug, Clone)]
pub struct ItemResponse {
    pub id: ItemId,
    pub title: Option<String>,
    #[serde(with = "serde_util::flexible_decimal")]
    pub price: Decimal,
    #[serde(default, with = "serde_util::flexible_decimal::option")]
    pub discount_price: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub variations: Vec<VariationResponse>,
}

/// A variation axis with its allowed options.
#[derive(Deserialize, Debug, Clone)]
pub struct VariationResponse {
    pub id: VariationId,
    pub name: String,
    #[serde(default)]
    pub item_variations: Vec<ItemVariationResponse>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ItemVariationResponse {
    pub id: ItemVariationId,
    pub value: String,
    #[serde(default)]
    pub attachment: Option<String>,
}

//! Conversions: order summary wire types → Order domain types.

use super::wire;
use super::{Coupon, Order, OrderItem, OrderItemVariation, ValidationError};
use crate::domain::catalog::Item;

impl TryFrom<wire::OrderResponse> for Order {
    type Error = ValidationError;

    fn try_from(source: wire::OrderResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let mut items = Vec::with_capacity(source.order_items.len());
        for line in source.order_items {
            match OrderItem::try_from(line) {
                Ok(item) => items.push(item),
                Err(err) => errors.push(err),
            }
        }

        let coupon = match source.coupon {
            Some(c) if c.code.trim().is_empty() => {
                errors.push(ValidationError::EmptyCouponCode);
                None
            }
            Some(c) => Some(Coupon {
                code: c.code,
                amount: c.amount,
            }),
            None => None,
        };

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id.to_string(), errors));
        }

        Ok(Order {
            id: source.id,
            items,
            total: source.total,
            coupon,
        })
    }
}

impl TryFrom<wire::OrderItemResponse> for OrderItem {
    type Error = ValidationError;

    fn try_from(source: wire::OrderItemResponse) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(source.quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| ValidationError::InvalidQuantity {
                order_item: source.id.clone(),
                quantity: source.quantity,
            })?;

        let item = Item::try_from(source.item).map_err(ValidationError::Item)?;

        Ok(OrderItem {
            id: source.id,
            item,
            variations: source.item_variations.into_iter().map(Into::into).collect(),
            quantity,
            final_price: source.final_price,
        })
    }
}

impl From<wire::OrderItemVariationResponse> for OrderItemVariation {
    fn from(source: wire::OrderItemVariationResponse) -> Self {
        OrderItemVariation {
            id: source.id,
            value: source.value,
            attachment: source.attachment.filter(|a| !a.trim().is_empty()),
            variation_id: source.variation.id,
            variation_name: source.variation.name,
        }
    }
}

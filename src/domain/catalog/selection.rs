//! Variation selection — variation name → chosen option id.
//!
//! Keys are drawn from the item's declared variation names, so the set is closed
//! per item. Flattening follows key order, which makes the transmitted id list
//! independent of the order choices were made in.

use super::Item;
use crate::domain::order::OrderItem;
use crate::shared::ItemVariationId;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationSelection {
    choices: BTreeMap<String, ItemVariationId>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Item has no variation named {0:?}")]
    UnknownVariation(String),

    #[error("Option {option} is not a valid {variation:?}")]
    UnknownOption {
        variation: String,
        option: ItemVariationId,
    },

    #[error("Please specify the required variations: {}", .0.join(", "))]
    Missing(Vec<String>),
}

impl VariationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(
        mut self,
        variation: impl Into<String>,
        option: impl Into<ItemVariationId>,
    ) -> Self {
        self.set(variation, option);
        self
    }

    /// Choose an option for a variation, replacing any previous choice.
    pub fn set(&mut self, variation: impl Into<String>, option: impl Into<ItemVariationId>) {
        self.choices.insert(variation.into(), option.into());
    }

    pub fn get(&self, variation: &str) -> Option<&ItemVariationId> {
        self.choices.get(variation)
    }

    pub fn clear(&mut self, variation: &str) {
        self.choices.remove(variation);
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Chosen option ids, ordered by variation name.
    pub fn variation_ids(&self) -> Vec<ItemVariationId> {
        self.choices.values().cloned().collect()
    }

    /// Check every choice against the item's declared variations, and that
    /// every declared variation has a choice.
    pub fn validate(&self, item: &Item) -> Result<(), SelectionError> {
        for (name, option) in &self.choices {
            let variation = item
                .variation(name)
                .ok_or_else(|| SelectionError::UnknownVariation(name.clone()))?;
            if variation.option(option).is_none() {
                return Err(SelectionError::UnknownOption {
                    variation: name.clone(),
                    option: option.clone(),
                });
            }
        }

        let missing: Vec<String> = item
            .variations
            .iter()
            .filter(|v| !self.choices.contains_key(&v.name))
            .map(|v| v.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(SelectionError::Missing(missing));
        }

        Ok(())
    }

    /// The selection an existing order line was added with.
    pub fn from_order_item(order_item: &OrderItem) -> Self {
        let mut selection = Self::new();
        for v in &order_item.variations {
            selection.set(v.variation_name.clone(), v.id.clone());
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ItemVariation, Variation};
    use crate::shared::{ItemId, VariationId};
    use rust_decimal::Decimal;

    fn shirt() -> Item {
        let option = |id: i64, value: &str| ItemVariation {
            id: ItemVariationId::from(id),
            value: value.to_string(),
            attachment: None,
        };
        Item {
            id: ItemId::from(1),
            title: "Shirt".into(),
            slug: "shirt".into(),
            price: Decimal::new(2000, 2),
            discount_price: None,
            category: None,
            label: None,
            description: String::new(),
            image: None,
            variations: vec![
                Variation {
                    id: VariationId::from(1),
                    name: "size".into(),
                    options: vec![option(10, "S"), option(11, "M")],
                },
                Variation {
                    id: VariationId::from(2),
                    name: "color".into(),
                    options: vec![option(20, "red"), option(21, "blue")],
                },
            ],
        }
    }

    #[test]
    fn test_flatten_is_independent_of_insertion_order() {
        let a = VariationSelection::new().with("size", 11).with("color", 20);
        let b = VariationSelection::new().with("color", 20).with("size", 11);
        assert_eq!(a, b);
        assert_eq!(a.variation_ids(), b.variation_ids());
        // "color" sorts before "size"
        assert_eq!(
            a.variation_ids(),
            vec![ItemVariationId::from(20), ItemVariationId::from(11)]
        );
    }

    #[test]
    fn test_set_replaces_previous_choice() {
        let mut s = VariationSelection::new().with("size", 10);
        s.set("size", 11);
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("size"), Some(&ItemVariationId::from(11)));
    }

    #[test]
    fn test_complete_selection_validates() {
        let s = VariationSelection::new().with("size", 10).with("color", 21);
        assert!(s.validate(&shirt()).is_ok());
    }

    #[test]
    fn test_unknown_variation_rejected() {
        let s = VariationSelection::new()
            .with("size", 10)
            .with("color", 21)
            .with("fabric", 99);
        assert_eq!(
            s.validate(&shirt()),
            Err(SelectionError::UnknownVariation("fabric".into()))
        );
    }

    #[test]
    fn test_option_from_other_axis_rejected() {
        let s = VariationSelection::new().with("size", 20).with("color", 21);
        assert!(matches!(
            s.validate(&shirt()),
            Err(SelectionError::UnknownOption { ref variation, .. }) if variation == "size"
        ));
    }

    #[test]
    fn test_missing_variation_rejected() {
        let s = VariationSelection::new().with("size", 10);
        assert_eq!(
            s.validate(&shirt()),
            Err(SelectionError::Missing(vec!["color".into()]))
        );
    }

    #[test]
    fn test_item_without_variations_accepts_empty_selection() {
        let mut item = shirt();
        item.variations.clear();
        assert!(VariationSelection::new().validate(&item).is_ok());
    }
}

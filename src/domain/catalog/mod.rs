//! Catalog domain — items, variation axes, variation selection.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod selection;
pub mod wire;

use crate::shared::{ItemId, ItemVariationId, VariationId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use selection::{SelectionError, VariationSelection};

// ─── Item ────────────────────────────────────────────────────────────────────

/// A validated catalog item. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub slug: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub category: Option<String>,
    pub label: Option<String>,
    pub description: String,
    pub image: Option<String>,
    /// Empty for items that came from the list endpoint.
    pub variations: Vec<Variation>,
}

impl Item {
    pub fn variation(&self, name: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.name == name)
    }

    pub fn is_discounted(&self) -> bool {
        self.discount_price.is_some()
    }

    /// The price to show: the server's discount price when present.
    pub fn display_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }
}

/// A named option axis (e.g. "Size") with a closed set of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: VariationId,
    pub name: String,
    pub options: Vec<ItemVariation>,
}

impl Variation {
    pub fn option(&self, id: &ItemVariationId) -> Option<&ItemVariation> {
        self.options.iter().find(|o| &o.id == id)
    }
}

/// One allowed value of a variation axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVariation {
    pub id: ItemVariationId,
    pub value: String,
    pub attachment: Option<String>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingTitle,
    MissingSlug,
    EmptyVariationName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Item validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingTitle => write!(f, "Missing title"),
            ValidationError::MissingSlug => write!(f, "Missing slug"),
            ValidationError::EmptyVariationName => write!(f, "Variation without a name"),
        }
    }
}

impl std::error::Error for ValidationError {}

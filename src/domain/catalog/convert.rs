//! Conversion: ItemResponse → Item (TryFrom + validation).

use super::wire;
use super::{Item, ItemVariation, ValidationError, Variation};

impl TryFrom<wire::ItemResponse> for Item {
    type Error = ValidationError;

    fn try_from(source: wire::ItemResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let title = non_empty(source.title).unwrap_or_else(|| {
            errors.push(ValidationError::MissingTitle);
            String::new()
        });
        let slug = non_empty(source.slug).unwrap_or_else(|| {
            errors.push(ValidationError::MissingSlug);
            String::new()
        });

        let mut variations = Vec::with_capacity(source.variations.len());
        for v in source.variations {
            if v.name.trim().is_empty() {
                errors.push(ValidationError::EmptyVariationName);
                continue;
            }
            variations.push(v.into());
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id.to_string(), errors));
        }

        Ok(Item {
            id: source.id,
            title,
            slug,
            price: source.price,
            discount_price: source.discount_price,
            category: non_empty(source.category),
            label: non_empty(source.label),
            description: source.description.unwrap_or_default(),
            image: non_empty(source.image),
            variations,
        })
    }
}

impl From<wire::VariationResponse> for Variation {
    fn from(source: wire::VariationResponse) -> Self {
        Variation {
            id: source.id,
            name: source.name,
            options: source.item_variations.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<wire::ItemVariationResponse> for ItemVariation {
    fn from(source: wire::ItemVariationResponse) -> Self {
        ItemVariation {
            id: source.id,
            value: source.value,
            attachment: non_empty(source.attachment),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

//! Conversions: address wire types → Address domain types.

use super::wire::AddressResponse;
use super::{Address, ValidationError};

impl TryFrom<AddressResponse> for Address {
    type Error = ValidationError;

    fn try_from(source: AddressResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        if source.street_address.trim().is_empty() {
            errors.push(ValidationError::MissingStreet);
        }
        if source.country.trim().is_empty() {
            errors.push(ValidationError::MissingCountry);
        }
        if source.zip.trim().is_empty() {
            errors.push(ValidationError::MissingZip);
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id.to_string(), errors));
        }

        Ok(Address {
            id: source.id,
            user: source.user,
            street_address: source.street_address,
            apartment_address: source.apartment_address,
            country: source.country,
            zip: source.zip,
            address_type: source.address_type,
            default: source.default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::AddressType;

    #[test]
    fn test_address_converts() {
        let resp: AddressResponse = serde_json::from_value(serde_json::json!({
            "id": 5,
            "user": 1,
            "street_address": "1 Main St",
            "apartment_address": "",
            "country": "US",
            "zip": "10001",
            "address_type": "S",
            "default": true
        }))
        .unwrap();
        let address = Address::try_from(resp).unwrap();
        assert_eq!(address.address_type, AddressType::Shipping);
        assert!(address.default);
    }

    #[test]
    fn test_missing_fields_collected() {
        let resp: AddressResponse = serde_json::from_value(serde_json::json!({
            "id": 5,
            "user": 1,
            "street_address": " ",
            "country": "",
            "zip": "10001",
            "address_type": "B"
        }))
        .unwrap();
        match Address::try_from(resp) {
            Err(ValidationError::Multiple(id, errors)) => {
                assert_eq!(id, "5");
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected Multiple, got {other:?}"),
        }
    }
}

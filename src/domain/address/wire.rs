//! Wire types for addresses and countries.

use super::AddressType;
use crate::shared::{AddressId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize, Debug, Clone)]
pub struct AddressResponse {
    pub id: AddressId,
    pub user: UserId,
    pub street_address: String,
    #[serde(default)]
    pub apartment_address: String,
    pub country: String,
    pub zip: String,
    pub address_type: AddressType,
    #[serde(default)]
    pub default: bool,
}

/// Create/update payload. The owning user id is always sent.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AddressRequest {
    pub user: UserId,
    pub street_address: String,
    pub apartment_address: String,
    pub country: String,
    pub zip: String,
    pub address_type: AddressType,
    pub default: bool,
}

/// `GET countries/`: country code → display name.
pub type CountriesResponse = BTreeMap<String, String>;

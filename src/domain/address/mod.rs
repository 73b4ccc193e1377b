//! Address domain — billing/shipping addresses, the address form, countries.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::{AddressId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use state::AddressBook;

// ─── AddressType ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    #[serde(rename = "B")]
    Billing,
    #[serde(rename = "S")]
    Shipping,
}

impl AddressType {
    /// Single-letter code used on the wire and in the list filter.
    pub fn code(&self) -> &'static str {
        match self {
            AddressType::Billing => "B",
            AddressType::Shipping => "S",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressType::Billing => write!(f, "billing"),
            AddressType::Shipping => write!(f, "shipping"),
        }
    }
}

// ─── Address ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub user: UserId,
    pub street_address: String,
    pub apartment_address: String,
    pub country: String,
    pub zip: String,
    pub address_type: AddressType,
    pub default: bool,
}

impl Address {
    /// One-line label for pickers, e.g. `"1 Main St, Apt 2, US, 10001"`.
    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street_address, self.apartment_address, self.country, self.zip
        )
    }
}

/// The first address flagged as default, if any.
pub fn default_address_id(addresses: &[Address]) -> Option<AddressId> {
    addresses.iter().find(|a| a.default).map(|a| a.id.clone())
}

// ─── AddressForm ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(AddressId),
}

/// Editable address fields plus the create/update mode.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressForm {
    pub mode: FormMode,
    pub address_type: AddressType,
    pub street_address: String,
    pub apartment_address: String,
    pub country: String,
    pub zip: String,
    pub default: bool,
}

impl AddressForm {
    pub fn create(address_type: AddressType) -> Self {
        Self {
            mode: FormMode::Create,
            address_type,
            street_address: String::new(),
            apartment_address: String::new(),
            country: String::new(),
            zip: String::new(),
            default: false,
        }
    }

    pub fn edit(address: &Address) -> Self {
        Self {
            mode: FormMode::Update(address.id.clone()),
            address_type: address.address_type,
            street_address: address.street_address.clone(),
            apartment_address: address.apartment_address.clone(),
            country: address.country.clone(),
            zip: address.zip.clone(),
            default: address.default,
        }
    }

    pub fn toggle_default(&mut self) {
        self.default = !self.default;
    }

    pub fn is_update(&self) -> bool {
        matches!(self.mode, FormMode::Update(_))
    }

    pub fn to_request(&self, user: UserId) -> wire::AddressRequest {
        wire::AddressRequest {
            user,
            street_address: self.street_address.clone(),
            apartment_address: self.apartment_address.clone(),
            country: self.country.clone(),
            zip: self.zip.clone(),
            address_type: self.address_type,
            default: self.default,
        }
    }
}

// ─── Countries ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    pub code: String,
    pub name: String,
}

/// Country code → display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countries {
    by_code: BTreeMap<String, String>,
}

impl Countries {
    pub fn name(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }

    /// Picker options sorted by display name, then code.
    pub fn options(&self) -> Vec<CountryOption> {
        let mut options: Vec<CountryOption> = self
            .by_code
            .iter()
            .map(|(code, name)| CountryOption {
                code: code.clone(),
                name: name.clone(),
            })
            .collect();
        options.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
        options
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl From<BTreeMap<String, String>> for Countries {
    fn from(by_code: BTreeMap<String, String>) -> Self {
        Self { by_code }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingStreet,
    MissingCountry,
    MissingZip,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Address validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingStreet => write!(f, "Missing street address"),
            ValidationError::MissingCountry => write!(f, "Missing country"),
            ValidationError::MissingZip => write!(f, "Missing zip"),
        }
    }
}

impl std::error::Error for ValidationError {}

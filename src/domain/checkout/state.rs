//! Checkout flow state.
//!
//! `Idle → Submitting → {Success, Failed}`. A failed flow can be submitted
//! again, which restarts it at `Submitting`.

use super::AddressSelection;
use crate::domain::address::Address;
use crate::error::ErrorKind;
use crate::shared::AddressId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStatus {
    Idle,
    Submitting,
    Success(String),
    Failed(ErrorKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutFlow {
    pub billing_options: Vec<Address>,
    pub shipping_options: Vec<Address>,
    pub selection: AddressSelection,
    pub status: CheckoutStatus,
}

impl CheckoutFlow {
    /// A flow over the given options, with each type's default pre-selected.
    pub fn new(billing_options: Vec<Address>, shipping_options: Vec<Address>) -> Self {
        let selection = AddressSelection::from_defaults(&billing_options, &shipping_options);
        Self {
            billing_options,
            shipping_options,
            selection,
            status: CheckoutStatus::Idle,
        }
    }

    /// Pick a billing address. Ignored for ids not among the options.
    pub fn select_billing(&mut self, id: &AddressId) -> bool {
        let known = self.billing_options.iter().any(|a| &a.id == id);
        if known {
            self.selection.billing = Some(id.clone());
        }
        known
    }

    pub fn select_shipping(&mut self, id: &AddressId) -> bool {
        let known = self.shipping_options.iter().any(|a| &a.id == id);
        if known {
            self.selection.shipping = Some(id.clone());
        }
        known
    }

    /// Both address types exist and one of each is chosen.
    pub fn can_pay(&self) -> bool {
        !self.billing_options.is_empty()
            && !self.shipping_options.is_empty()
            && self.selection.is_complete()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == CheckoutStatus::Submitting
    }

    pub fn start(&mut self) {
        self.status = CheckoutStatus::Submitting;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.status = CheckoutStatus::Success(message.into());
    }

    pub fn fail(&mut self, error: ErrorKind) {
        self.status = CheckoutStatus::Failed(error);
    }
}

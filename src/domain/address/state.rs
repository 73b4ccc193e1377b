//! Address book state — the profile page's list of one address type.
//!
//! App-owned; the address sub-client drives it through `refresh`,
//! `save_from` and `delete_from`.

use super::{Address, AddressForm, AddressType};
use crate::error::ErrorKind;
use crate::shared::AddressId;

#[derive(Debug, Clone, PartialEq)]
pub struct AddressBook {
    pub address_type: AddressType,
    pub addresses: Vec<Address>,
    pub selected: Option<AddressId>,
    pub loading: bool,
    pub error: Option<ErrorKind>,
}

impl AddressBook {
    pub fn new(address_type: AddressType) -> Self {
        Self {
            address_type,
            addresses: Vec::new(),
            selected: None,
            loading: false,
            error: None,
        }
    }

    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, addresses: Vec<Address>) {
        self.loading = false;
        self.error = None;
        self.addresses = addresses;
        if let Some(id) = &self.selected {
            if !self.addresses.iter().any(|a| &a.id == id) {
                self.selected = None;
            }
        }
    }

    /// Record a failure. The list already loaded stays in place.
    pub fn fail(&mut self, error: ErrorKind) {
        self.loading = false;
        self.error = Some(error);
    }

    /// Select an address for editing. Ignored for ids not in the list.
    pub fn select(&mut self, id: &AddressId) -> bool {
        if self.addresses.iter().any(|a| &a.id == id) {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_address(&self) -> Option<&Address> {
        let id = self.selected.as_ref()?;
        self.addresses.iter().find(|a| &a.id == id)
    }

    /// Switch between billing and shipping. Drops the list and selection.
    pub fn switch_type(&mut self, address_type: AddressType) {
        self.address_type = address_type;
        self.addresses.clear();
        self.selected = None;
        self.error = None;
    }

    /// A form for the selected address, or an empty create form.
    pub fn form(&self) -> AddressForm {
        match self.selected_address() {
            Some(address) => AddressForm::edit(address),
            None => AddressForm::create(self.address_type),
        }
    }
}

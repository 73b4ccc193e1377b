//! Addresses sub-client — list, create/update, delete, countries.

use crate::client::StorefrontClient;
use crate::domain::address::wire::{AddressResponse, CountriesResponse};
use crate::domain::address::{
    Address, AddressBook, AddressForm, AddressType, Countries, FormMode, ValidationError,
};
use crate::error::SdkError;
use crate::http::Endpoint;
use crate::shared::AddressId;

pub struct Addresses<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Addresses<'a> {
    /// The user's addresses, optionally filtered by type.
    pub async fn list(&self, address_type: Option<AddressType>) -> Result<Vec<Address>, SdkError> {
        let resp: Vec<AddressResponse> = self
            .client
            .http
            .get(&Endpoint::AddressList { address_type })
            .await?;
        resp.into_iter()
            .map(|a| {
                Address::try_from(a)
                    .map_err(|e: ValidationError| SdkError::Validation(e.to_string()))
            })
            .collect()
    }

    /// Create or update, depending on the form's mode.
    pub async fn save(&self, form: &AddressForm) -> Result<Address, SdkError> {
        let user = self.client.auth().user_id().await?;
        let body = form.to_request(user);
        let endpoint = match &form.mode {
            FormMode::Create => Endpoint::AddressCreate,
            FormMode::Update(id) => Endpoint::AddressUpdate { id: id.clone() },
        };
        tracing::debug!(mode = ?form.mode, address_type = %form.address_type, "Saving address");

        let resp: AddressResponse = self.client.http.request(&endpoint, Some(&body)).await?;
        Address::try_from(resp).map_err(|e| SdkError::Validation(e.to_string()))
    }

    pub async fn delete(&self, id: &AddressId) -> Result<(), SdkError> {
        self.client
            .http
            .request_unit(&Endpoint::AddressDelete { id: id.clone() }, None::<&()>)
            .await?;
        Ok(())
    }

    /// Country code → name. Fetched once per client.
    pub async fn countries(&self) -> Result<Countries, SdkError> {
        if let Some(countries) = self.client.countries.read().await.as_ref() {
            return Ok(countries.clone());
        }

        let resp: CountriesResponse = self.client.http.get(&Endpoint::Countries).await?;
        let countries = Countries::from(resp);
        *self.client.countries.write().await = Some(countries.clone());
        Ok(countries)
    }

    // ── Address book helpers ─────────────────────────────────────────────

    /// Reload the book's list for its current type.
    pub async fn refresh(&self, book: &mut AddressBook) -> Result<(), SdkError> {
        book.start();
        match self.list(Some(book.address_type)).await {
            Ok(addresses) => {
                book.loaded(addresses);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(address_type = %book.address_type, "Address list failed: {}", e);
                book.fail(e.kind());
                Err(e)
            }
        }
    }

    /// Save the form, clear the selection, then reload the list.
    pub async fn save_from(
        &self,
        book: &mut AddressBook,
        form: &AddressForm,
    ) -> Result<Address, SdkError> {
        book.start();
        let saved = match self.save(form).await {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!("Address save failed: {}", e);
                book.fail(e.kind());
                return Err(e);
            }
        };
        book.clear_selection();
        self.refresh(book).await?;
        Ok(saved)
    }

    /// Delete, clear the selection, then reload the list.
    pub async fn delete_from(
        &self,
        book: &mut AddressBook,
        id: &AddressId,
    ) -> Result<(), SdkError> {
        book.start();
        if let Err(e) = self.delete(id).await {
            tracing::warn!(address = %id, "Address delete failed: {}", e);
            book.fail(e.kind());
            return Err(e);
        }
        book.clear_selection();
        self.refresh(book).await
    }
}

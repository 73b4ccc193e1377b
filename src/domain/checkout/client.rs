//! Checkout sub-client — address preparation and payment submission.

use crate::client::StorefrontClient;
use crate::domain::address::AddressType;
use crate::domain::checkout::wire::{CheckoutRequest, CheckoutResponse};
use crate::domain::checkout::{CheckoutFlow, PaymentTokenizer};
use crate::error::SdkError;
use crate::http::Endpoint;

const DEFAULT_SUCCESS_MESSAGE: &str = "Your order was successful!";

pub struct Checkout<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Checkout<'a> {
    /// Load billing and shipping addresses, with each type's default
    /// pre-selected.
    pub async fn prepare(&self) -> Result<CheckoutFlow, SdkError> {
        let addresses = self.client.addresses();
        let billing = addresses.list(Some(AddressType::Billing)).await?;
        let shipping = addresses.list(Some(AddressType::Shipping)).await?;
        tracing::debug!(
            billing = billing.len(),
            shipping = shipping.len(),
            "Checkout addresses loaded"
        );
        Ok(CheckoutFlow::new(billing, shipping))
    }

    /// Tokenize the card and submit the order for the selected addresses.
    ///
    /// Nothing is tokenized or sent unless both addresses are selected. A
    /// tokenization failure stops before the checkout request. The outcome is
    /// recorded on `flow.status` and returned.
    pub async fn pay(
        &self,
        flow: &mut CheckoutFlow,
        tokenizer: &impl PaymentTokenizer,
    ) -> Result<String, SdkError> {
        let chosen = match (&flow.selection.billing, &flow.selection.shipping) {
            (Some(b), Some(s)) if flow.can_pay() => Some((b.clone(), s.clone())),
            _ => None,
        };
        let Some((billing, shipping)) = chosen else {
            let err = SdkError::Validation(
                "Select a billing and a shipping address before paying".to_string(),
            );
            flow.fail(err.kind());
            return Err(err);
        };

        flow.start();

        let token = match tokenizer.tokenize().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Payment tokenization failed: {}", e);
                let err = SdkError::Payment(e.message);
                flow.fail(err.kind());
                return Err(err);
            }
        };

        let body = CheckoutRequest {
            token: token.as_str(),
            billing_address: &billing,
            shipping_address: &shipping,
        };
        tracing::debug!(billing = %billing, shipping = %shipping, "Submitting checkout");

        match self
            .client
            .http
            .request_or_default::<CheckoutResponse, _>(&Endpoint::Checkout, Some(&body))
            .await
        {
            Ok(resp) => {
                let message = resp
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                flow.succeed(message.clone());
                Ok(message)
            }
            Err(e) => {
                let err = SdkError::from(e);
                tracing::warn!("Checkout failed: {}", err);
                flow.fail(err.kind());
                Err(err)
            }
        }
    }
}

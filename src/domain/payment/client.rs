//! Payments sub-client.

use crate::client::StorefrontClient;
use crate::domain::payment::wire::PaymentResponse;
use crate::domain::payment::Payment;
use crate::error::SdkError;
use crate::http::Endpoint;

pub struct Payments<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Payments<'a> {
    /// The user's past payments.
    pub async fn history(&self) -> Result<Vec<Payment>, SdkError> {
        let resp: Vec<PaymentResponse> = self.client.http.get(&Endpoint::Payments).await?;
        Ok(resp.into_iter().map(Payment::from).collect())
    }
}

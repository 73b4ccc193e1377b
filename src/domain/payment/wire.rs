use crate::shared::{serde_util, PaymentId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// `GET payments/` entry.
#[derive(Deserialize, Debug, Clone)]
pub struct PaymentResponse {
    pub id: PaymentId,
    #[serde(with = "serde_util::flexible_decimal")]
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

//! Payment history.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::PaymentId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A completed charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl From<wire::PaymentResponse> for Payment {
    fn from(source: wire::PaymentResponse) -> Self {
        Self {
            id: source.id,
            amount: source.amount,
            timestamp: source.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_from_wire() {
        let resp: wire::PaymentResponse = serde_json::from_value(serde_json::json!({
            "id": 2,
            "amount": 59.5,
            "timestamp": "2024-03-01T10:15:00Z"
        }))
        .unwrap();
        let payment = Payment::from(resp);
        assert_eq!(payment.id, PaymentId::from(2));
        assert_eq!(payment.amount, Decimal::new(595, 1));
        assert_eq!(payment.timestamp.to_rfc3339(), "2024-03-01T10:15:00+00:00");
    }
}

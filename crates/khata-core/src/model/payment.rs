use serde::{Deserialize, Serialize};

use crate::collection::{Partitioned, Record};
use crate::errors::{KhataError, Result};
use khata_core_types::Period;

/// A maintenance payment received from a flat
///
/// Partitioned by the calendar month of the payment date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Receipt number handed to the member (e.g. "R2044")
    pub receipt_number: String,

    /// The flat the payment was received from
    pub flat_number: String,

    /// ISO date the payment was received ("2024-03-15")
    pub date: String,

    /// Amount received
    pub amount: f64,

    /// Payment mode ("cash", "cheque", "upi", "neft")
    pub mode: String,

    /// Instrument reference (cheque number, UPI transaction id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Bill this payment settles, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_number: Option<String>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Payment {
    /// Create a payment record for one receipt
    pub fn new(
        receipt_number: impl Into<String>,
        flat_number: impl Into<String>,
        date: impl Into<String>,
        amount: f64,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            receipt_number: receipt_number.into(),
            flat_number: flat_number.into(),
            date: date.into(),
            amount,
            mode: mode.into(),
            reference: None,
            bill_number: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for Payment {
    const COLLECTION: &'static str = "payments";
    const ID_TAG: &'static str = "payment";

    fn natural_key(&self) -> Option<String> {
        Some(self.receipt_number.clone())
    }
}

impl Partitioned for Payment {
    const PARTITION_FIELD: &'static str = "date";

    /// Calendar year and zero-padded month of the payment date
    fn partition(&self) -> Result<Period> {
        Period::from_date_str(&self.date)
            .map_err(|source| KhataError::invalid_period(Self::COLLECTION, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_from_iso_date() {
        let payment = Payment::new("R2044", "A-101", "2024-03-15", 2500.0, "upi");
        let period = payment.partition().unwrap();
        assert_eq!(period.year_segment(), "2024");
        assert_eq!(period.month_segment(), "03");
    }

    #[test]
    fn test_unparsable_date_is_rejected() {
        let payment = Payment::new("R2044", "A-101", "yesterday", 2500.0, "cash");
        assert!(matches!(
            payment.partition(),
            Err(KhataError::InvalidPeriod { collection: "payments", .. })
        ));
    }

    #[test]
    fn test_id_derives_from_receipt_number() {
        let payment = Payment::new("R2044", "A-101", "2024-03-15", 2500.0, "cash");
        assert_eq!(
            crate::collection::derive_record_id(&payment),
            "payment-R2044"
        );
    }
}

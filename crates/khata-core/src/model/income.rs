use serde::{Deserialize, Serialize};

use crate::collection::{Partitioned, Record};
use crate::errors::{KhataError, Result};
use khata_core_types::Period;

/// Income outside maintenance billing (hall rental, interest, scrap sale)
///
/// Partitioned by the calendar month of the receipt date. The receipt
/// number is optional; records without one fall back to a millis-based id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherIncome {
    /// Receipt number, when one was issued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_number: Option<String>,

    /// ISO date the income was received
    pub date: String,

    /// Income source ("hall rental", "bank interest", ...)
    pub source: String,

    /// Amount received
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl OtherIncome {
    /// Create an income record
    pub fn new(date: impl Into<String>, source: impl Into<String>, amount: f64) -> Self {
        Self {
            receipt_number: None,
            date: date.into(),
            source: source.into(),
            amount,
            description: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for OtherIncome {
    const COLLECTION: &'static str = "otherIncome";
    const ID_TAG: &'static str = "income";

    fn natural_key(&self) -> Option<String> {
        self.receipt_number.clone()
    }
}

impl Partitioned for OtherIncome {
    const PARTITION_FIELD: &'static str = "date";

    fn partition(&self) -> Result<Period> {
        Period::from_date_str(&self.date)
            .map_err(|source| KhataError::invalid_period(Self::COLLECTION, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::derive_record_id;

    #[test]
    fn test_id_falls_back_to_millis_without_receipt() {
        let income = OtherIncome::new("2024-05-01", "hall rental", 5000.0);
        let id = derive_record_id(&income);
        assert!(id.starts_with("income-"));
        assert!(id.strip_prefix("income-").unwrap().parse::<i64>().is_ok());
    }

    #[test]
    fn test_id_uses_receipt_number_when_present() {
        let mut income = OtherIncome::new("2024-05-01", "hall rental", 5000.0);
        income.receipt_number = Some("OI-17".to_string());
        assert_eq!(derive_record_id(&income), "income-OI-17");
    }
}

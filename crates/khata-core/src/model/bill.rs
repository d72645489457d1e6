use serde::{Deserialize, Serialize};

use crate::collection::{Partitioned, Record};
use crate::errors::{KhataError, Result};
use khata_core_types::Period;

/// A maintenance bill raised against one flat for one billing period
///
/// Bills carry their period as an explicit "YYYY-MM" string (the billing
/// month is chosen by the accountant, not read off a clock), which is also
/// the partition key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Bill number, unique per society (e.g. "B1001")
    pub bill_number: String,

    /// The flat this bill is raised against
    pub flat_number: String,

    /// Billing period as "YYYY-MM"
    pub period: String,

    /// Total amount due
    pub amount: f64,

    /// Maintenance component of the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_charge: Option<f64>,

    /// Sinking fund component of the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sinking_fund: Option<f64>,

    /// Arrears carried forward from earlier periods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrears: Option<f64>,

    /// ISO date the bill falls due
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Payment status ("unpaid", "paid", "partial")
    pub status: String,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Bill {
    /// Create an unpaid bill for one flat and period
    pub fn new(
        bill_number: impl Into<String>,
        flat_number: impl Into<String>,
        period: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            bill_number: bill_number.into(),
            flat_number: flat_number.into(),
            period: period.into(),
            amount,
            maintenance_charge: None,
            sinking_fund: None,
            arrears: None,
            due_date: None,
            status: "unpaid".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    /// True once the bill is fully settled
    pub fn is_paid(&self) -> bool {
        self.status == "paid"
    }
}

impl Record for Bill {
    const COLLECTION: &'static str = "bills";
    const ID_TAG: &'static str = "bill";

    fn natural_key(&self) -> Option<String> {
        Some(self.bill_number.clone())
    }
}

impl Partitioned for Bill {
    const PARTITION_FIELD: &'static str = "period";

    /// Split the explicit "YYYY-MM" period field; no date parsing
    fn partition(&self) -> Result<Period> {
        Period::parse(&self.period)
            .map_err(|source| KhataError::invalid_period(Self::COLLECTION, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bill_is_unpaid() {
        let bill = Bill::new("B1001", "A-101", "2024-03", 2500.0);
        assert_eq!(bill.status, "unpaid");
        assert!(!bill.is_paid());
        assert!(bill.created_at.is_none());
    }

    #[test]
    fn test_partition_from_period_string() {
        let bill = Bill::new("B1001", "A-101", "2024-03", 2500.0);
        let period = bill.partition().unwrap();
        assert_eq!(period.year_segment(), "2024");
        assert_eq!(period.month_segment(), "03");
    }

    #[test]
    fn test_malformed_period_is_rejected() {
        let bill = Bill::new("B1001", "A-101", "NaN-NaN", 2500.0);
        assert!(matches!(
            bill.partition(),
            Err(KhataError::InvalidPeriod { collection: "bills", .. })
        ));
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let bill = Bill::new("B1001", "A-101", "2024-03", 2500.0);
        let json = serde_json::to_value(&bill).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("arrears"));
        assert!(!obj.contains_key("created_at"));
    }
}

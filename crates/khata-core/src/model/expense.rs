use serde::{Deserialize, Serialize};

use crate::collection::{Partitioned, Record};
use crate::errors::{KhataError, Result};
use khata_core_types::Period;

/// A society expense (repairs, security, utilities, ...)
///
/// Partitioned by the calendar month of the expense date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense voucher number (e.g. "E310")
    pub expense_number: String,

    /// ISO date the expense was incurred
    pub date: String,

    /// Expense head ("security", "housekeeping", "repairs", ...)
    pub category: String,

    /// Amount paid out
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Vendor or payee name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_to: Option<String>,

    /// Payment mode ("cash", "cheque", "upi", "neft")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Expense {
    /// Create an expense record for one voucher
    pub fn new(
        expense_number: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            expense_number: expense_number.into(),
            date: date.into(),
            category: category.into(),
            amount,
            description: None,
            paid_to: None,
            mode: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for Expense {
    const COLLECTION: &'static str = "expenses";
    const ID_TAG: &'static str = "expense";

    fn natural_key(&self) -> Option<String> {
        Some(self.expense_number.clone())
    }
}

impl Partitioned for Expense {
    const PARTITION_FIELD: &'static str = "date";

    fn partition(&self) -> Result<Period> {
        Period::from_date_str(&self.date)
            .map_err(|source| KhataError::invalid_period(Self::COLLECTION, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_from_date() {
        let expense = Expense::new("E310", "2024-07-01", "security", 18000.0);
        let period = expense.partition().unwrap();
        assert_eq!(period.year_segment(), "2024");
        assert_eq!(period.month_segment(), "07");
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let expense = Expense::new("E310", "", "security", 18000.0);
        assert!(expense.partition().is_err());
    }
}

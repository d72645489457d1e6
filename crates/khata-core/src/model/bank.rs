use serde::{Deserialize, Serialize};

use crate::collection::Record;

/// A society bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    /// Short account id used as the record key (e.g. "hdfc-savings")
    pub bank_id: String,

    /// Bank name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    pub account_number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifsc: Option<String>,

    /// The running balance, mutated as transactions are recorded
    pub balance: f64,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Bank {
    /// Open a bank account record with a starting balance
    pub fn new(
        bank_id: impl Into<String>,
        name: impl Into<String>,
        account_number: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            bank_id: bank_id.into(),
            name: name.into(),
            branch: None,
            account_number: account_number.into(),
            ifsc: None,
            balance,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for Bank {
    const COLLECTION: &'static str = "banks";
    const ID_TAG: &'static str = "bank";

    fn natural_key(&self) -> Option<String> {
        Some(self.bank_id.clone())
    }
}

/// One ledger entry against a bank account
///
/// Transactions have no natural key unless the bank statement supplies a
/// reference, so ids usually fall back to the millis form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    /// Statement reference, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// The account this entry belongs to
    pub bank_id: String,

    /// ISO date of the transaction
    pub date: String,

    /// "credit" or "debit"
    pub kind: String,

    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl BankTransaction {
    /// Record a credit into an account
    pub fn credit(bank_id: impl Into<String>, date: impl Into<String>, amount: f64) -> Self {
        Self::entry(bank_id, date, "credit", amount)
    }

    /// Record a debit out of an account
    pub fn debit(bank_id: impl Into<String>, date: impl Into<String>, amount: f64) -> Self {
        Self::entry(bank_id, date, "debit", amount)
    }

    fn entry(
        bank_id: impl Into<String>,
        date: impl Into<String>,
        kind: &str,
        amount: f64,
    ) -> Self {
        Self {
            reference: None,
            bank_id: bank_id.into(),
            date: date.into(),
            kind: kind.to_string(),
            amount,
            narration: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Signed effect of this entry on the account balance
    pub fn signed_amount(&self) -> f64 {
        if self.kind == "debit" {
            -self.amount
        } else {
            self.amount
        }
    }
}

impl Record for BankTransaction {
    const COLLECTION: &'static str = "bankTransactions";
    const ID_TAG: &'static str = "btxn";

    fn natural_key(&self) -> Option<String> {
        self.reference.clone()
    }
}

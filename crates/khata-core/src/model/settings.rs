use serde::{Deserialize, Serialize};

use crate::collection::Singleton;

/// Billing configuration — the rates bills are computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillConfig {
    /// Maintenance rate per square foot per month
    pub maintenance_rate: f64,

    /// Sinking fund rate per square foot per month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sinking_fund_rate: Option<f64>,

    /// Day of the month bills fall due (1..=28)
    pub due_day: u32,

    /// Flat late fee applied after the due day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_fee: Option<f64>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl BillConfig {
    /// Configure billing with a maintenance rate and due day
    pub fn new(maintenance_rate: f64, due_day: u32) -> Self {
        Self {
            maintenance_rate,
            sinking_fund_rate: None,
            due_day,
            late_fee: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Singleton for BillConfig {
    const DOC: &'static str = "billConfig";
}

/// Deployment-wide application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// "MM-DD" the financial year opens on (e.g. "04-01")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_year_start: Option<String>,

    /// ISO 4217 currency code
    pub currency: String,

    /// Next bill number in sequence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_sequence: Option<u32>,

    /// Next receipt number in sequence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_sequence: Option<u32>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl SystemSettings {
    /// Settings with a currency and everything else unset
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            financial_year_start: None,
            currency: currency.into(),
            bill_sequence: None,
            receipt_sequence: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Singleton for SystemSettings {
    const DOC: &'static str = "systemSettings";
}

//! Per-entity operations over a [`crate::store::TreeStore`]
//!
//! Each module validates its records, then delegates to the generic
//! partitioned / flat / singleton engines. There is no delete operation
//! anywhere in this facade.

pub mod bank_ops;
pub mod bill_ops;
pub mod expense_ops;
pub mod flat_ops;
pub mod income_ops;
pub mod member_ops;
pub mod payment_ops;
pub mod settings_ops;
pub mod society_ops;

use crate::errors::{KhataError, Result};

/// Reject an empty or whitespace-only required field
pub(crate) fn require(
    collection: &'static str,
    field: &str,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KhataError::InvalidRecord {
            collection,
            reason: format!("{field} cannot be empty"),
        });
    }
    Ok(())
}

/// Reject a negative or non-finite amount
pub(crate) fn require_amount(collection: &'static str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(KhataError::InvalidRecord {
            collection,
            reason: format!("amount must be a non-negative number, got {amount}"),
        });
    }
    Ok(())
}

//! Other-income operations
//!
//! Non-maintenance income partitioned by receipt month under
//! `otherIncome/{year}/{month}/{id}`.

use serde_json::{Map, Value};
use tracing::info;

use super::{require, require_amount};
use crate::collection::Record;
use crate::errors::Result;
use crate::model::OtherIncome;
use crate::partition;
use crate::store::TreeStore;

/// Persist an income record under the month it was received
///
/// Income without a receipt number gets a millis-based fallback id.
///
/// # Errors
///
/// * `InvalidRecord` - empty source, bad amount
/// * `InvalidPeriod` - unparsable date field (nothing is written)
/// * `StoreUnavailable` - the remote write failed
pub async fn save_income<S: TreeStore + ?Sized>(store: &S, income: &OtherIncome) -> Result<String> {
    require(OtherIncome::COLLECTION, "source", &income.source)?;
    require_amount(OtherIncome::COLLECTION, income.amount)?;
    let id = partition::save(store, income).await?;
    info!(source = %income.source, amount = income.amount, "other income saved");
    Ok(id)
}

/// Merge partial fields into an existing income record
pub async fn update_income<S: TreeStore + ?Sized>(
    store: &S,
    id: &str,
    fields: Map<String, Value>,
) -> Result<()> {
    partition::update::<S, OtherIncome>(store, id, fields).await
}

/// All other income across every partition, in store key order
pub async fn get_all_income<S: TreeStore + ?Sized>(store: &S) -> Result<Vec<OtherIncome>> {
    partition::get_all(store).await
}

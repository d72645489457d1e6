//! Maintenance bill operations
//!
//! Bills are partitioned by their explicit "YYYY-MM" period string under
//! `bills/{year}/{month}/{id}`.

use serde_json::{Map, Value};
use tracing::info;

use super::{require, require_amount};
use crate::collection::Record;
use crate::errors::Result;
use crate::model::Bill;
use crate::partition;
use crate::store::TreeStore;

/// Persist a bill under its billing period
///
/// # Errors
///
/// * `InvalidRecord` - empty bill number or flat number, bad amount
/// * `InvalidPeriod` - malformed period string (nothing is written)
/// * `StoreUnavailable` - the remote write failed
pub async fn save_bill<S: TreeStore + ?Sized>(store: &S, bill: &Bill) -> Result<String> {
    require(Bill::COLLECTION, "bill number", &bill.bill_number)?;
    require(Bill::COLLECTION, "flat number", &bill.flat_number)?;
    require_amount(Bill::COLLECTION, bill.amount)?;
    let id = partition::save(store, bill).await?;
    info!(bill_number = %bill.bill_number, period = %bill.period, "bill saved");
    Ok(id)
}

/// Merge partial fields into an existing bill (scan across partitions)
pub async fn update_bill<S: TreeStore + ?Sized>(
    store: &S,
    id: &str,
    fields: Map<String, Value>,
) -> Result<()> {
    partition::update::<S, Bill>(store, id, fields).await
}

/// All bills across every partition, in store key order
pub async fn get_all_bills<S: TreeStore + ?Sized>(store: &S) -> Result<Vec<Bill>> {
    partition::get_all(store).await
}

/// Look one bill up by id, searching every partition
pub async fn find_bill<S: TreeStore + ?Sized>(store: &S, id: &str) -> Result<Option<Bill>> {
    partition::find_by_id(store, id).await
}

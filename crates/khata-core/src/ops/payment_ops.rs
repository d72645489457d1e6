//! Payment operations
//!
//! Payments are partitioned by the calendar month of the payment date
//! under `payments/{year}/{month}/{id}`.

use serde_json::{Map, Value};
use tracing::info;

use super::{require, require_amount};
use crate::collection::Record;
use crate::errors::Result;
use crate::model::Payment;
use crate::partition;
use crate::store::TreeStore;

/// Persist a payment under the month it was received
///
/// # Errors
///
/// * `InvalidRecord` - empty receipt or flat number, bad amount
/// * `InvalidPeriod` - unparsable date field (nothing is written)
/// * `StoreUnavailable` - the remote write failed
pub async fn save_payment<S: TreeStore + ?Sized>(store: &S, payment: &Payment) -> Result<String> {
    require(Payment::COLLECTION, "receipt number", &payment.receipt_number)?;
    require(Payment::COLLECTION, "flat number", &payment.flat_number)?;
    require_amount(Payment::COLLECTION, payment.amount)?;
    let id = partition::save(store, payment).await?;
    info!(receipt = %payment.receipt_number, flat = %payment.flat_number, "payment saved");
    Ok(id)
}

/// Merge partial fields into an existing payment (scan across partitions)
pub async fn update_payment<S: TreeStore + ?Sized>(
    store: &S,
    id: &str,
    fields: Map<String, Value>,
) -> Result<()> {
    partition::update::<S, Payment>(store, id, fields).await
}

/// All payments across every partition, in store key order
pub async fn get_all_payments<S: TreeStore + ?Sized>(store: &S) -> Result<Vec<Payment>> {
    partition::get_all(store).await
}

/// Look one payment up by id, searching every partition
pub async fn find_payment<S: TreeStore + ?Sized>(store: &S, id: &str) -> Result<Option<Payment>> {
    partition::find_by_id(store, id).await
}

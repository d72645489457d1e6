//! Expense operations
//!
//! Expenses are partitioned by the calendar month of the expense date
//! under `expenses/{year}/{month}/{id}`.

use serde_json::{Map, Value};
use tracing::info;

use super::{require, require_amount};
use crate::collection::Record;
use crate::errors::Result;
use crate::model::Expense;
use crate::partition;
use crate::store::TreeStore;

/// Persist an expense under the month it was incurred
///
/// # Errors
///
/// * `InvalidRecord` - empty voucher number or category, bad amount
/// * `InvalidPeriod` - unparsable date field (nothing is written)
/// * `StoreUnavailable` - the remote write failed
pub async fn save_expense<S: TreeStore + ?Sized>(store: &S, expense: &Expense) -> Result<String> {
    require(Expense::COLLECTION, "expense number", &expense.expense_number)?;
    require(Expense::COLLECTION, "category", &expense.category)?;
    require_amount(Expense::COLLECTION, expense.amount)?;
    let id = partition::save(store, expense).await?;
    info!(voucher = %expense.expense_number, category = %expense.category, "expense saved");
    Ok(id)
}

/// Merge partial fields into an existing expense (scan across partitions)
pub async fn update_expense<S: TreeStore + ?Sized>(
    store: &S,
    id: &str,
    fields: Map<String, Value>,
) -> Result<()> {
    partition::update::<S, Expense>(store, id, fields).await
}

/// All expenses across every partition, in store key order
pub async fn get_all_expenses<S: TreeStore + ?Sized>(store: &S) -> Result<Vec<Expense>> {
    partition::get_all(store).await
}

/// Look one expense up by id, searching every partition
pub async fn find_expense<S: TreeStore + ?Sized>(store: &S, id: &str) -> Result<Option<Expense>> {
    partition::find_by_id(store, id).await
}

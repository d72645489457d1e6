//! Member outstanding-balance operations — `memberBalances/{id}`

use serde_json::{Map, Value};

use super::require;
use crate::collection::{self, Record};
use crate::errors::Result;
use crate::model::MemberBalance;
use crate::store::TreeStore;

/// Persist one member's outstanding balance, keyed by flat number
///
/// # Errors
///
/// * `InvalidRecord` - empty flat number
/// * `StoreUnavailable` - the remote write failed
pub async fn save_member_balance<S: TreeStore + ?Sized>(
    store: &S,
    balance: &MemberBalance,
) -> Result<String> {
    require(MemberBalance::COLLECTION, "flat number", &balance.flat_number)?;
    collection::save_flat(store, balance).await
}

/// Direct-path lookup by record id
pub async fn get_member_balance<S: TreeStore + ?Sized>(
    store: &S,
    id: &str,
) -> Result<Option<MemberBalance>> {
    collection::get_flat(store, id).await
}

/// Every member balance
pub async fn get_all_member_balances<S: TreeStore + ?Sized>(
    store: &S,
) -> Result<Vec<MemberBalance>> {
    collection::get_all_flat(store).await
}

/// Merge partial fields into an existing member balance
pub async fn update_member_balance<S: TreeStore + ?Sized>(
    store: &S,
    id: &str,
    fields: Map<String, Value>,
) -> Result<()> {
    collection::update_flat::<S, MemberBalance>(store, id, fields).await
}

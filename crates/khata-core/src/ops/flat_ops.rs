//! Flat register operations — single-level collection `flats/{id}`

use serde_json::{Map, Value};
use tracing::info;

use super::require;
use crate::collection::{self, Record};
use crate::errors::Result;
use crate::model::Flat;
use crate::store::TreeStore;

/// Persist a flat, keyed by its flat number
///
/// # Errors
///
/// * `InvalidRecord` - empty flat number or owner name
/// * `StoreUnavailable` - the remote write failed
pub async fn save_flat<S: TreeStore + ?Sized>(store: &S, flat: &Flat) -> Result<String> {
    require(Flat::COLLECTION, "flat number", &flat.flat_number)?;
    require(Flat::COLLECTION, "owner name", &flat.owner_name)?;
    let id = collection::save_flat(store, flat).await?;
    info!(flat = %flat.flat_number, "flat saved");
    Ok(id)
}

/// Direct-path lookup by record id (no partitioning)
pub async fn get_flat<S: TreeStore + ?Sized>(store: &S, id: &str) -> Result<Option<Flat>> {
    collection::get_flat(store, id).await
}

/// Every flat in the register
pub async fn get_all_flats<S: TreeStore + ?Sized>(store: &S) -> Result<Vec<Flat>> {
    collection::get_all_flat(store).await
}

/// Merge partial fields into an existing flat
pub async fn update_flat<S: TreeStore + ?Sized>(
    store: &S,
    id: &str,
    fields: Map<String, Value>,
) -> Result<()> {
    collection::update_flat::<S, Flat>(store, id, fields).await
}

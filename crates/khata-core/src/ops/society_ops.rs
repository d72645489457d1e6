//! Society info operations — singleton document at `societyInfo`

use serde_json::{Map, Value};

use crate::collection::{self, Singleton};
use crate::errors::{KhataError, Result};
use crate::model::SocietyInfo;
use crate::store::TreeStore;

/// Overwrite the society record
///
/// # Errors
///
/// * `InvalidRecord` - empty name or address
/// * `StoreUnavailable` - the remote write failed
pub async fn save_society_info<S: TreeStore + ?Sized>(
    store: &S,
    info: &SocietyInfo,
) -> Result<()> {
    if info.name.trim().is_empty() || info.address.trim().is_empty() {
        return Err(KhataError::InvalidRecord {
            collection: SocietyInfo::DOC,
            reason: "name and address cannot be empty".to_string(),
        });
    }
    collection::save_singleton(store, info).await
}

/// Read the society record, if it has been written
pub async fn get_society_info<S: TreeStore + ?Sized>(store: &S) -> Result<Option<SocietyInfo>> {
    collection::get_singleton(store).await
}

/// Merge partial fields into the society record
pub async fn update_society_info<S: TreeStore + ?Sized>(
    store: &S,
    fields: Map<String, Value>,
) -> Result<()> {
    collection::update_singleton::<S, SocietyInfo>(store, fields).await
}

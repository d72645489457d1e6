//! Record traits and the flat-collection / singleton engines
//!
//! Every domain record type declares where it lives (`COLLECTION`), how its
//! ids are tagged (`ID_TAG`), and its natural key. Collections with no
//! meaningful time growth (flats, banks, bank transactions, member
//! balances) are stored single-level as `collection/{id}`; singleton
//! documents (society info, bill configuration, system settings) live at a
//! fixed path. Time-bucketed collections use the partitioned engine in
//! [`crate::partition`].

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{KhataError, Result};
use crate::store::{server_timestamp, TreeStore};
use khata_core_types::TreePath;

/// A persistable domain record
pub trait Record: Serialize + DeserializeOwned + std::fmt::Debug + Send + Sync {
    /// Root path segment of the collection, e.g. `"bills"`
    const COLLECTION: &'static str;

    /// Type tag prefixed to every generated record id, e.g. `"bill"`
    const ID_TAG: &'static str;

    /// The caller-supplied natural key (receipt number, flat number, ...)
    ///
    /// `None` means the record has no natural key and gets a
    /// timestamp-based fallback id.
    fn natural_key(&self) -> Option<String>;
}

/// A record whose collection is sharded by calendar (year, month)
pub trait Partitioned: Record {
    /// Name of the date-bearing field the partition key is derived from
    ///
    /// Immutable through partial updates: a merge at the old path with a
    /// changed partition field would leave the record claiming a (year,
    /// month) other than the partition it is stored under.
    const PARTITION_FIELD: &'static str;

    /// Derive the partition key from the record's date-bearing field
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the field is absent or unparsable.
    /// The save path refuses to write anything in that case.
    fn partition(&self) -> Result<khata_core_types::Period>;
}

/// A singleton document stored at a fixed path
pub trait Singleton: Serialize + DeserializeOwned + std::fmt::Debug + Send + Sync {
    /// The fixed document path segment, e.g. `"societyInfo"`
    const DOC: &'static str;
}

/// Derive the id a record is stored under
///
/// Natural key when present (`bill-B1001`), otherwise the type tag plus the
/// current epoch millis. The fallback is NOT collision-free under rapid
/// successive calls without a natural key; treat as a known weakness.
pub fn derive_record_id<T: Record>(record: &T) -> String {
    match record.natural_key() {
        Some(key) => format!("{}-{}", T::ID_TAG, key),
        None => format!("{}-{}", T::ID_TAG, Utc::now().timestamp_millis()),
    }
}

/// Serialize a record into a JSON object
pub(crate) fn to_object<T: Serialize + std::fmt::Debug>(
    collection: &'static str,
    record: &T,
) -> Result<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(KhataError::InvalidRecord {
            collection,
            reason: format!("record serialized to {other} instead of an object"),
        }),
    }
}

/// Attach fresh server-timestamp sentinels for a newly written record
///
/// Overwrites any caller-supplied timestamps: they are server-assigned.
pub(crate) fn stamp_new(map: &mut Map<String, Value>) {
    map.insert("created_at".to_string(), server_timestamp());
    map.insert("updated_at".to_string(), server_timestamp());
}

/// Attach the server-timestamp bump every partial update must carry
pub(crate) fn stamp_update(fields: &mut Map<String, Value>) {
    fields.remove("created_at");
    fields.insert("updated_at".to_string(), server_timestamp());
}

// ===== Flat collections: collection/{id} =====

/// Persist a record into a single-level collection, overwriting its leaf
pub async fn save_flat<S, T>(store: &S, record: &T) -> Result<String>
where
    S: TreeStore + ?Sized,
    T: Record,
{
    let id = derive_record_id(record);
    let mut map = to_object(T::COLLECTION, record)?;
    stamp_new(&mut map);
    let path = TreePath::new([T::COLLECTION, &id])?;
    store.set(&path, Value::Object(map)).await?;
    debug!(collection = T::COLLECTION, record_id = %id, "saved record");
    Ok(id)
}

/// Direct-path lookup by id
pub async fn get_flat<S, T>(store: &S, id: &str) -> Result<Option<T>>
where
    S: TreeStore + ?Sized,
    T: Record,
{
    let path = TreePath::new([T::COLLECTION, id])?;
    match store.get(&path).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Read every record in a single-level collection
///
/// An empty or absent collection yields an empty vector, never an error.
pub async fn get_all_flat<S, T>(store: &S) -> Result<Vec<T>>
where
    S: TreeStore + ?Sized,
    T: Record,
{
    let path = TreePath::new([T::COLLECTION])?;
    let Some(tree) = store.get(&path).await? else {
        return Ok(Vec::new());
    };
    let Value::Object(map) = tree else {
        return Ok(Vec::new());
    };
    let mut records = Vec::with_capacity(map.len());
    for value in map.into_iter().map(|(_, v)| v) {
        records.push(serde_json::from_value(value)?);
    }
    Ok(records)
}

/// Merge partial fields into an existing record, bumping `updated_at`
///
/// # Errors
///
/// Returns `RecordNotFound` (and writes nothing) when no record with the
/// given id exists.
pub async fn update_flat<S, T>(store: &S, id: &str, mut fields: Map<String, Value>) -> Result<()>
where
    S: TreeStore + ?Sized,
    T: Record,
{
    let path = TreePath::new([T::COLLECTION, id])?;
    if store.get(&path).await?.is_none() {
        return Err(KhataError::not_found(T::COLLECTION, id));
    }
    stamp_update(&mut fields);
    store.update(&path, fields).await?;
    debug!(collection = T::COLLECTION, record_id = %id, "updated record");
    Ok(())
}

// ===== Singleton documents =====

/// Overwrite the singleton document, stamping fresh server timestamps
pub async fn save_singleton<S, T>(store: &S, doc: &T) -> Result<()>
where
    S: TreeStore + ?Sized,
    T: Singleton,
{
    let mut map = to_object(T::DOC, doc)?;
    stamp_new(&mut map);
    let path = TreePath::new([T::DOC])?;
    store.set(&path, Value::Object(map)).await?;
    debug!(doc = T::DOC, "saved singleton");
    Ok(())
}

/// Read the singleton document, if it has ever been written
pub async fn get_singleton<S, T>(store: &S) -> Result<Option<T>>
where
    S: TreeStore + ?Sized,
    T: Singleton,
{
    let path = TreePath::new([T::DOC])?;
    match store.get(&path).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Merge partial fields into the singleton, bumping `updated_at`
///
/// # Errors
///
/// Returns `RecordNotFound` when the document has never been written.
pub async fn update_singleton<S, T>(store: &S, mut fields: Map<String, Value>) -> Result<()>
where
    S: TreeStore + ?Sized,
    T: Singleton,
{
    let path = TreePath::new([T::DOC])?;
    if store.get(&path).await?.is_none() {
        return Err(KhataError::not_found(T::DOC, T::DOC));
    }
    stamp_update(&mut fields);
    store.update(&path, fields).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::is_server_timestamp;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Widget {
        name: Option<String>,
    }

    impl Record for Widget {
        const COLLECTION: &'static str = "widgets";
        const ID_TAG: &'static str = "widget";

        fn natural_key(&self) -> Option<String> {
            self.name.clone()
        }
    }

    #[test]
    fn test_id_from_natural_key_is_tag_prefixed() {
        let widget = Widget {
            name: Some("W-1".to_string()),
        };
        assert_eq!(derive_record_id(&widget), "widget-W-1");
    }

    #[test]
    fn test_fallback_id_uses_millis() {
        let widget = Widget { name: None };
        let id = derive_record_id(&widget);
        let suffix = id.strip_prefix("widget-").unwrap();
        assert!(suffix.parse::<i64>().is_ok(), "expected millis, got {id}");
    }

    #[test]
    fn test_stamp_new_overwrites_caller_timestamps() {
        let mut map = Map::new();
        map.insert("created_at".to_string(), serde_json::json!(1));
        stamp_new(&mut map);
        assert!(is_server_timestamp(&map["created_at"]));
        assert!(is_server_timestamp(&map["updated_at"]));
    }

    #[test]
    fn test_stamp_update_drops_created_at() {
        let mut fields = Map::new();
        fields.insert("created_at".to_string(), serde_json::json!(1));
        fields.insert("amount".to_string(), serde_json::json!(100));
        stamp_update(&mut fields);
        assert!(!fields.contains_key("created_at"));
        assert!(is_server_timestamp(&fields["updated_at"]));
        assert_eq!(fields["amount"], serde_json::json!(100));
    }

    #[test]
    fn test_to_object_rejects_non_objects() {
        let result = to_object("widgets", &42);
        assert!(matches!(result, Err(KhataError::InvalidRecord { .. })));
    }
}

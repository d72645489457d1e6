//! The partitioned-collection engine
//!
//! Time-bucketed collections (bills, payments, expenses, other income) are
//! stored as a two-level mapping: `collection/{year}/{month}/{recordId}`.
//! The partition key is derived from the record itself, so a record's
//! (year, month) always matches the path it is stored under — the id
//! search below depends on that invariant.
//!
//! Reads flatten the nested tree back into a flat sequence in store key
//! order. No chronological sorting is applied; callers needing it sort
//! post-hoc by a date field.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::collection::{derive_record_id, stamp_new, stamp_update, to_object, Partitioned};
use crate::errors::{KhataError, Result};
use crate::store::TreeStore;
use khata_core_types::TreePath;

/// Persist a record under its derived partition, overwriting the leaf
///
/// The partition is derived before anything is written: an absent or
/// unparsable date field rejects the whole operation with `InvalidPeriod`.
///
/// Returns the id the record was stored under.
pub async fn save<S, T>(store: &S, record: &T) -> Result<String>
where
    S: TreeStore + ?Sized,
    T: Partitioned,
{
    let period = record.partition()?;
    let id = derive_record_id(record);
    let mut map = to_object(T::COLLECTION, record)?;
    stamp_new(&mut map);
    let path = TreePath::new([
        T::COLLECTION,
        &period.year_segment(),
        &period.month_segment(),
        &id,
    ])?;
    store.set(&path, Value::Object(map)).await?;
    debug!(
        collection = T::COLLECTION,
        record_id = %id,
        period = %period,
        "saved partitioned record"
    );
    Ok(id)
}

/// Read the entire collection as a flat sequence
///
/// One subtree read, then a flatten over years, months within each year,
/// and records within each month, in store key order. An empty or absent
/// collection yields an empty vector, never an error.
pub async fn get_all<S, T>(store: &S) -> Result<Vec<T>>
where
    S: TreeStore + ?Sized,
    T: Partitioned,
{
    let path = TreePath::new([T::COLLECTION])?;
    let Some(tree) = store.get(&path).await? else {
        return Ok(Vec::new());
    };
    let mut records = Vec::new();
    for (_, value) in flatten(&tree) {
        records.push(serde_json::from_value(value.clone())?);
    }
    Ok(records)
}

/// Find one record by id, searching every partition
///
/// Read-all-then-filter: correct only while each record's (year, month)
/// matches its storage path, which `save` guarantees.
pub async fn find_by_id<S, T>(store: &S, id: &str) -> Result<Option<T>>
where
    S: TreeStore + ?Sized,
    T: Partitioned,
{
    let path = TreePath::new([T::COLLECTION])?;
    let Some(tree) = store.get(&path).await? else {
        return Ok(None);
    };
    for (leaf_id, value) in flatten(&tree) {
        if leaf_id == id {
            return Ok(Some(serde_json::from_value(value.clone())?));
        }
    }
    Ok(None)
}

/// Merge partial fields into an existing record, bumping `updated_at`
///
/// The id alone does not determine the path, so the whole collection is
/// loaded and every year/month leaf scanned for the matching id before the
/// merge is issued at the found path. O(total records in the collection)
/// per update — acceptable because a single society's books stay small.
/// There is no protection against a concurrent writer between the read and
/// the write.
///
/// The partition-bearing field is immutable here: merging it at the old
/// path would leave the record claiming a (year, month) other than the
/// partition it is stored under. Moving a record to another period means
/// saving it anew.
///
/// # Errors
///
/// Returns `InvalidRecord` when `fields` names the partition-bearing
/// field, `RecordNotFound` when no partition holds the id. Nothing is
/// written in either case.
pub async fn update<S, T>(store: &S, id: &str, mut fields: Map<String, Value>) -> Result<()>
where
    S: TreeStore + ?Sized,
    T: Partitioned,
{
    if fields.contains_key(T::PARTITION_FIELD) {
        return Err(KhataError::InvalidRecord {
            collection: T::COLLECTION,
            reason: format!(
                "{} cannot be changed through a partial update",
                T::PARTITION_FIELD
            ),
        });
    }
    let root = TreePath::new([T::COLLECTION])?;
    let tree = store.get(&root).await?;
    let Some((year, month)) = tree.as_ref().and_then(|t| locate(t, id)) else {
        return Err(KhataError::not_found(T::COLLECTION, id));
    };
    stamp_update(&mut fields);
    let path = root.child(year).and_then(|p| p.child(month))?.child(id)?;
    store.update(&path, fields).await?;
    debug!(collection = T::COLLECTION, record_id = %id, "updated partitioned record");
    Ok(())
}

/// Flatten a year → month → id tree into `(id, record)` pairs
///
/// Iterates in whatever key order the store returned. Non-object year or
/// month nodes cannot hold records and are skipped.
pub fn flatten(tree: &Value) -> Vec<(&String, &Value)> {
    let mut out = Vec::new();
    let Value::Object(years) = tree else {
        return out;
    };
    for (year, months) in years {
        let Value::Object(months) = months else {
            warn!(year = %year, "skipping non-object year node");
            continue;
        };
        for (month, leaves) in months {
            let Value::Object(leaves) = leaves else {
                warn!(year = %year, month = %month, "skipping non-object month node");
                continue;
            };
            for (id, record) in leaves {
                out.push((id, record));
            }
        }
    }
    out
}

/// Scan every partition for an id, returning its (year, month) segments
fn locate(tree: &Value, id: &str) -> Option<(String, String)> {
    let years = tree.as_object()?;
    for (year, months) in years {
        let Some(months) = months.as_object() else {
            continue;
        };
        for (month, leaves) in months {
            let Some(leaves) = leaves.as_object() else {
                continue;
            };
            if leaves.contains_key(id) {
                return Some((year.clone(), month.clone()));
            }
        }
    }
    None
}

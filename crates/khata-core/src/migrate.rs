//! One-shot migration of locally cached data into the remote store
//!
//! Before the remote store existed, the application kept its books in a
//! flat string-keyed cache on the device, one fixed key per collection.
//! `migrate_all` reads each key, parses the value as a record or a
//! sequence of records, and replays every record through the corresponding
//! save operation — so migrated records get the same validation,
//! partitioning, and server timestamps as freshly entered ones.
//!
//! Failure is per record: a record that fails to parse or save is logged
//! and counted, and migration moves on to the next. There is no rollback.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{info, warn};

use crate::errors::{KhataError, Result};
use crate::model::{
    Bank, BankTransaction, Bill, BillConfig, Expense, Flat, MemberBalance, OtherIncome, Payment,
    SocietyInfo, SystemSettings,
};
use crate::ops::{
    bank_ops, bill_ops, expense_ops, flat_ops, income_ops, member_ops, payment_ops, settings_ops,
    society_ops,
};
use crate::store::TreeStore;

/// The flat string-keyed client-side cache holding pre-migration data
///
/// Consumed, not owned, by this facade.
pub trait LocalCache {
    /// Read the raw cached value under a fixed collection key
    fn get(&self, key: &str) -> Option<String>;
}

impl LocalCache for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Fixed cache keys, one per collection
pub mod cache_keys {
    pub const SOCIETY_INFO: &str = "societyInfo";
    pub const FLATS: &str = "flats";
    pub const BILLS: &str = "bills";
    pub const PAYMENTS: &str = "payments";
    pub const EXPENSES: &str = "expenses";
    pub const BANKS: &str = "banks";
    pub const BANK_TRANSACTIONS: &str = "bankTransactions";
    pub const OTHER_INCOME: &str = "otherIncome";
    pub const MEMBER_BALANCES: &str = "memberBalances";
    pub const BILL_CONFIG: &str = "billConfig";
    pub const SYSTEM_SETTINGS: &str = "systemSettings";
}

/// One record (or key) that failed to migrate
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationFailure {
    /// The cache key the record came from
    pub cache_key: String,
    /// What went wrong
    pub detail: String,
}

/// Outcome of a migration run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationReport {
    /// Records successfully replayed into the remote store
    pub migrated: usize,
    /// Per-record failures, in the order they occurred
    pub failures: Vec<MigrationFailure>,
}

impl MigrationReport {
    /// Number of records (or unparsable keys) that failed
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// True when every cached record made it across
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn success(&mut self) {
        self.migrated += 1;
    }

    fn failure(&mut self, cache_key: &str, err: &KhataError) {
        warn!(cache_key, code = err.code(), %err, "migration record failed");
        self.failures.push(MigrationFailure {
            cache_key: cache_key.to_string(),
            detail: format!("[{}] {err}", err.code()),
        });
    }
}

/// Split a cached value into individual record objects
///
/// Collections were cached as JSON arrays, singletons as a single object.
fn parse_items(raw: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => Ok(items),
        obj @ Value::Object(_) => Ok(vec![obj]),
        other => Err(KhataError::Serialization {
            message: format!("cached value is {other}, expected object or array"),
        }),
    }
}

/// Replay every record under one cache key through one save operation
macro_rules! replay {
    ($cache:expr, $store:expr, $report:expr, $key:expr, $ty:ty, $save:expr) => {
        if let Some(raw) = $cache.get($key) {
            match parse_items(&raw) {
                Ok(items) => {
                    for item in items {
                        let outcome = match serde_json::from_value::<$ty>(item) {
                            Ok(record) => $save($store, &record).await.map(|_| ()),
                            Err(err) => Err(KhataError::from(err)),
                        };
                        match outcome {
                            Ok(()) => $report.success(),
                            Err(err) => $report.failure($key, &err),
                        }
                    }
                }
                Err(err) => $report.failure($key, &err),
            }
        }
    };
}

/// Migrate every cached collection into the remote store
///
/// Keys absent from the cache are skipped silently. Bank transactions are
/// replayed as plain records, not through `record_transaction`: the cached
/// bank balances already reflect them, and re-applying would double-count.
pub async fn migrate_all<C, S>(cache: &C, store: &S) -> MigrationReport
where
    C: LocalCache,
    S: TreeStore + ?Sized,
{
    let mut report = MigrationReport::default();

    replay!(cache, store, report, cache_keys::SOCIETY_INFO, SocietyInfo, society_ops::save_society_info);
    replay!(cache, store, report, cache_keys::FLATS, Flat, flat_ops::save_flat);
    replay!(cache, store, report, cache_keys::BILLS, Bill, bill_ops::save_bill);
    replay!(cache, store, report, cache_keys::PAYMENTS, Payment, payment_ops::save_payment);
    replay!(cache, store, report, cache_keys::EXPENSES, Expense, expense_ops::save_expense);
    replay!(cache, store, report, cache_keys::BANKS, Bank, bank_ops::save_bank);
    replay!(
        cache,
        store,
        report,
        cache_keys::BANK_TRANSACTIONS,
        BankTransaction,
        crate::collection::save_flat
    );
    replay!(cache, store, report, cache_keys::OTHER_INCOME, OtherIncome, income_ops::save_income);
    replay!(
        cache,
        store,
        report,
        cache_keys::MEMBER_BALANCES,
        MemberBalance,
        member_ops::save_member_balance
    );
    replay!(cache, store, report, cache_keys::BILL_CONFIG, BillConfig, settings_ops::save_bill_config);
    replay!(
        cache,
        store,
        report,
        cache_keys::SYSTEM_SETTINGS,
        SystemSettings,
        settings_ops::save_system_settings
    );

    info!(
        migrated = report.migrated,
        failed = report.failed(),
        "migration run complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_accepts_array_and_object() {
        let items = parse_items(r#"[{"a":1},{"a":2}]"#).unwrap();
        assert_eq!(items.len(), 2);
        let single = parse_items(r#"{"a":1}"#).unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_parse_items_rejects_scalars() {
        assert!(parse_items("42").is_err());
        assert!(parse_items("\"text\"").is_err());
        assert!(parse_items("not json at all").is_err());
    }

    #[test]
    fn test_report_counts() {
        let mut report = MigrationReport::default();
        report.success();
        report.success();
        report.failure(
            cache_keys::BILLS,
            &KhataError::not_found("bills", "bill-x"),
        );
        assert_eq!(report.migrated, 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.failures[0].cache_key, "bills");
    }
}

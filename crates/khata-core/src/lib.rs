//! khata core - the partitioned record store facade
//!
//! This crate provides the domain layer of khata, a bookkeeping facade
//! over a remote hierarchical key-value store:
//! - Domain records for society bookkeeping (bills, payments, expenses,
//!   flats, banks, balances, configuration)
//! - The `TreeStore` seam with server-assigned timestamp sentinels
//! - Generic partitioned / flat / singleton collection engines, including
//!   the year/month partition derivation and flatten logic
//! - Per-entity operations with validation-first semantics
//! - One-shot local-cache migration
//!
//! Store implementations live in `khata-store`; auth in `khata-auth`.

pub mod collection;
pub mod errors;
pub mod logging;
pub mod migrate;
pub mod model;
pub mod ops;
pub mod partition;
pub mod store;

// Re-export commonly used types
pub use collection::{derive_record_id, Partitioned, Record, Singleton};
pub use errors::{KhataError, Result};
pub use migrate::{migrate_all, LocalCache, MigrationReport};
pub use model::{
    Bank, BankTransaction, Bill, BillConfig, Expense, Flat, MemberBalance, OtherIncome, Payment,
    SocietyInfo, SystemSettings,
};
pub use store::{server_timestamp, TreeStore};

// Partition primitives come from khata-core-types
pub use khata_core_types::{Period, PeriodError, TreePath};

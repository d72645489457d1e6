//! Bank account and bank transaction operations
//!
//! Both collections are single-level. Recording a transaction touches two
//! paths — the account's balance and the transaction leaf — as two
//! independent writes. The store offers no atomicity across paths, so a
//! crash between the two leaves them inconsistent; reconciliation against
//! the bank statement is the recovery path.

use serde_json::{json, Map, Value};
use tracing::info;

use super::{require, require_amount};
use crate::collection::{self, Record};
use crate::errors::{KhataError, Result};
use crate::model::{Bank, BankTransaction};
use crate::store::TreeStore;

/// Persist a bank account, keyed by its short account id
///
/// # Errors
///
/// * `InvalidRecord` - empty bank id, name, or account number
/// * `StoreUnavailable` - the remote write failed
pub async fn save_bank<S: TreeStore + ?Sized>(store: &S, bank: &Bank) -> Result<String> {
    require(Bank::COLLECTION, "bank id", &bank.bank_id)?;
    require(Bank::COLLECTION, "name", &bank.name)?;
    require(Bank::COLLECTION, "account number", &bank.account_number)?;
    let id = collection::save_flat(store, bank).await?;
    info!(bank = %bank.bank_id, "bank saved");
    Ok(id)
}

/// Direct-path lookup by record id
pub async fn get_bank<S: TreeStore + ?Sized>(store: &S, id: &str) -> Result<Option<Bank>> {
    collection::get_flat(store, id).await
}

/// Every bank account
pub async fn get_all_banks<S: TreeStore + ?Sized>(store: &S) -> Result<Vec<Bank>> {
    collection::get_all_flat(store).await
}

/// Merge partial fields into an existing bank account
pub async fn update_bank<S: TreeStore + ?Sized>(
    store: &S,
    id: &str,
    fields: Map<String, Value>,
) -> Result<()> {
    collection::update_flat::<S, Bank>(store, id, fields).await
}

/// Every recorded bank transaction
pub async fn get_all_transactions<S: TreeStore + ?Sized>(
    store: &S,
) -> Result<Vec<BankTransaction>> {
    collection::get_all_flat(store).await
}

/// Record a transaction and move the account balance accordingly
///
/// Two writes: first the balance merge on the bank account, then the
/// transaction append. Not atomic (see module docs). Returns the id the
/// transaction was stored under.
///
/// # Errors
///
/// * `InvalidRecord` - bad amount, unknown kind, empty bank id
/// * `RecordNotFound` - the referenced bank account does not exist
/// * `StoreUnavailable` - either remote write failed
pub async fn record_transaction<S: TreeStore + ?Sized>(
    store: &S,
    txn: &BankTransaction,
) -> Result<String> {
    require(BankTransaction::COLLECTION, "bank id", &txn.bank_id)?;
    require_amount(BankTransaction::COLLECTION, txn.amount)?;
    if txn.kind != "credit" && txn.kind != "debit" {
        return Err(KhataError::InvalidRecord {
            collection: BankTransaction::COLLECTION,
            reason: format!("kind must be \"credit\" or \"debit\", got {:?}", txn.kind),
        });
    }

    let bank_record_id = format!("{}-{}", Bank::ID_TAG, txn.bank_id);
    let bank: Bank = get_bank(store, &bank_record_id)
        .await?
        .ok_or_else(|| KhataError::not_found(Bank::COLLECTION, &bank_record_id))?;

    let mut balance_fields = Map::new();
    balance_fields.insert(
        "balance".to_string(),
        json!(bank.balance + txn.signed_amount()),
    );
    update_bank(store, &bank_record_id, balance_fields).await?;

    let txn_id = collection::save_flat(store, txn).await?;
    info!(
        bank = %txn.bank_id,
        kind = %txn.kind,
        amount = txn.amount,
        "bank transaction recorded"
    );
    Ok(txn_id)
}

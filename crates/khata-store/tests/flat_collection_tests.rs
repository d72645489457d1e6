mod common;

use common::{fixed_store, sample_bank, sample_credit, sample_flat, ticking_store};
use khata_core::model::BankTransaction;
use khata_core::ops::{bank_ops, flat_ops, member_ops};
use khata_core::{KhataError, MemberBalance};
use serde_json::json;

fn fields(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().unwrap().clone()
}

// Flats are stored single-level, keyed by flat number, and looked up by
// direct path without any partition scan.
#[tokio::test]
async fn test_flat_saved_and_fetched_by_direct_path() {
    let store = fixed_store();
    let id = flat_ops::save_flat(&store, &sample_flat()).await.unwrap();
    assert_eq!(id, "flat-A-101");

    let snapshot = store.snapshot().await;
    assert!(snapshot["flats"]["flat-A-101"].is_object());

    let flat = flat_ops::get_flat(&store, "flat-A-101").await.unwrap().unwrap();
    assert_eq!(flat.owner_name, "R. Sharma");
}

#[tokio::test]
async fn test_get_missing_flat_is_none() {
    let store = fixed_store();
    let flat = flat_ops::get_flat(&store, "flat-Z-999").await.unwrap();
    assert!(flat.is_none());
}

#[tokio::test]
async fn test_update_flat_merges_fields() {
    let store = ticking_store();
    let id = flat_ops::save_flat(&store, &sample_flat()).await.unwrap();

    flat_ops::update_flat(&store, &id, fields(json!({"occupancy": "tenant"})))
        .await
        .unwrap();

    let flat = flat_ops::get_flat(&store, &id).await.unwrap().unwrap();
    assert_eq!(flat.occupancy, "tenant");
    assert_eq!(flat.owner_name, "R. Sharma");
    assert!(flat.updated_at > flat.created_at);
}

#[tokio::test]
async fn test_update_missing_flat_is_not_found() {
    let store = fixed_store();
    let result = flat_ops::update_flat(
        &store,
        "flat-Z-999",
        fields(json!({"occupancy": "vacant"})),
    )
    .await;
    assert!(matches!(result, Err(KhataError::RecordNotFound { .. })));
}

// Recording a transaction moves the bank balance and appends the entry —
// two independent writes on two paths.
#[tokio::test]
async fn test_record_transaction_moves_balance_and_appends_entry() {
    let store = fixed_store();
    bank_ops::save_bank(&store, &sample_bank()).await.unwrap();

    let txn_id = bank_ops::record_transaction(&store, &sample_credit(2500.0))
        .await
        .unwrap();

    let bank = bank_ops::get_bank(&store, "bank-hdfc-savings")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bank.balance, 102_500.0);

    let txns = bank_ops::get_all_transactions(&store).await.unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].amount, 2500.0);

    let snapshot = store.snapshot().await;
    assert!(snapshot["bankTransactions"][&txn_id].is_object());
}

#[tokio::test]
async fn test_debit_reduces_balance() {
    let store = fixed_store();
    bank_ops::save_bank(&store, &sample_bank()).await.unwrap();

    let debit = BankTransaction::debit("hdfc-savings", "2024-03-16", 40_000.0);
    bank_ops::record_transaction(&store, &debit).await.unwrap();

    let bank = bank_ops::get_bank(&store, "bank-hdfc-savings")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bank.balance, 60_000.0);
}

// Transactions without a statement reference get the millis fallback id.
#[tokio::test]
async fn test_transaction_without_reference_gets_millis_id() {
    let store = fixed_store();
    bank_ops::save_bank(&store, &sample_bank()).await.unwrap();

    let txn_id = bank_ops::record_transaction(&store, &sample_credit(100.0))
        .await
        .unwrap();
    let suffix = txn_id.strip_prefix("btxn-").unwrap();
    assert!(suffix.parse::<i64>().is_ok(), "expected millis id, got {txn_id}");
}

#[tokio::test]
async fn test_transaction_against_unknown_bank_is_not_found() {
    let store = fixed_store();
    let txn = BankTransaction::credit("no-such-bank", "2024-03-15", 100.0);
    let result = bank_ops::record_transaction(&store, &txn).await;
    assert!(matches!(result, Err(KhataError::RecordNotFound { .. })));
    // Nothing was appended either.
    assert!(bank_ops::get_all_transactions(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transaction_with_unknown_kind_is_rejected() {
    let store = fixed_store();
    bank_ops::save_bank(&store, &sample_bank()).await.unwrap();
    let mut txn = sample_credit(100.0);
    txn.kind = "transfer".to_string();
    let result = bank_ops::record_transaction(&store, &txn).await;
    assert!(matches!(result, Err(KhataError::InvalidRecord { .. })));
}

#[tokio::test]
async fn test_member_balances_keyed_by_flat_number() {
    let store = fixed_store();
    let id = member_ops::save_member_balance(&store, &MemberBalance::new("A-101", 4200.0))
        .await
        .unwrap();
    assert_eq!(id, "member-A-101");

    let balance = member_ops::get_member_balance(&store, "member-A-101")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(balance.outstanding, 4200.0);

    let all = member_ops::get_all_member_balances(&store).await.unwrap();
    assert_eq!(all.len(), 1);
}

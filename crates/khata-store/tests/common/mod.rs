#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use khata_core::model::{Bank, BankTransaction, Bill, Expense, Flat, Payment};
use khata_store::MemoryStore;

/// Millis value used by [`fixed_store`]
pub const FIXED_NOW: i64 = 1_700_000_000_000;

/// A store whose clock always reads [`FIXED_NOW`]
pub fn fixed_store() -> MemoryStore {
    MemoryStore::with_clock(|| FIXED_NOW)
}

/// A store whose clock advances one second per write
///
/// Makes `created_at` and a later `updated_at` distinguishable.
pub fn ticking_store() -> MemoryStore {
    let counter = Arc::new(AtomicI64::new(FIXED_NOW));
    MemoryStore::with_clock(move || counter.fetch_add(1_000, Ordering::SeqCst))
}

pub fn sample_bill() -> Bill {
    let mut bill = Bill::new("B1001", "A-101", "2024-03", 2500.0);
    bill.maintenance_charge = Some(2000.0);
    bill.sinking_fund = Some(500.0);
    bill
}

pub fn sample_payment(receipt: &str, date: &str) -> Payment {
    Payment::new(receipt, "A-101", date, 2500.0, "upi")
}

pub fn sample_expense(voucher: &str, date: &str) -> Expense {
    Expense::new(voucher, date, "security", 18000.0)
}

pub fn sample_flat() -> Flat {
    let mut flat = Flat::new("A-101", "R. Sharma");
    flat.area_sqft = Some(850.0);
    flat
}

pub fn sample_bank() -> Bank {
    Bank::new("hdfc-savings", "HDFC Bank", "50100012345", 100_000.0)
}

pub fn sample_credit(amount: f64) -> BankTransaction {
    BankTransaction::credit("hdfc-savings", "2024-03-15", amount)
}

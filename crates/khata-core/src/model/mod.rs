//! Domain records for society bookkeeping
//!
//! Every record carries `created_at`/`updated_at` as epoch-millis fields
//! stamped by the store at write time (server-assigned, never supplied by
//! the client); they are `None` until the record has round-tripped.

pub mod bank;
pub mod bill;
pub mod expense;
pub mod flat;
pub mod income;
pub mod member;
pub mod payment;
pub mod settings;
pub mod society;

pub use bank::{Bank, BankTransaction};
pub use bill::Bill;
pub use expense::Expense;
pub use flat::Flat;
pub use income::OtherIncome;
pub use member::MemberBalance;
pub use payment::Payment;
pub use settings::{BillConfig, SystemSettings};
pub use society::SocietyInfo;

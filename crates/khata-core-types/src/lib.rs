//! Core types shared across the khata facade
//!
//! This crate provides the primitives every other khata crate builds on:
//!
//! - **TreePath**: validated slash-delimited store paths
//! - **Period**: the (year, month) partition key for time-bucketed
//!   collections, with both entry forms ("YYYY-MM" strings and ISO dates)

pub mod path;
pub mod period;

pub use path::{PathError, TreePath};
pub use period::{Period, PeriodError};

//! Debtfolio Core - debt aggregation and derived metrics.
//!
//! This crate turns an in-memory list of loan records into the figures a debt
//! dashboard shows: total outstanding balance, per-loan paid-off fractions, and
//! position-colored chart slices. It performs no I/O and keeps no state.

pub mod constants;
pub mod debt;
pub mod display;
pub mod errors;
pub mod loans;
pub mod settings;

// Re-export the engine surface
pub use debt::*;
pub use loans::{LoanError, LoanIssue, LoanRecord};

// Re-export error types
pub use errors::Error;
pub use errors::Result;

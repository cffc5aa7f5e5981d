//! Debt aggregation module.
//!
//! Pure computations that turn an ordered sequence of loan records into a
//! portfolio summary, per-loan paid-off fractions, and chart slices.

mod debt_calculator;
mod debt_model;
mod debt_service;
mod debt_traits;

pub use debt_calculator::*;
pub use debt_model::*;
pub use debt_service::*;
pub use debt_traits::*;

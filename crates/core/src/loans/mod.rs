//! Loans module - input records, validation, and the loan error taxonomy.

mod loans_errors;
mod loans_model;
mod loans_validation;

pub use loans_errors::LoanError;
pub use loans_model::{LoanIssue, LoanRecord};
pub use loans_validation::{validate_loan, validate_loans};

#[cfg(test)]
mod loans_validation_tests;

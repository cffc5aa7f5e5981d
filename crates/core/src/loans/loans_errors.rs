//! Errors raised when a loan record breaks one of its invariants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A violated loan invariant, tagged with the identity of the offending record.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanError {
    /// `principal <= 0`; the paid-off fraction cannot be computed.
    #[error("Loan '{loan_id}' has invalid principal {principal}; principal must be greater than zero")]
    InvalidPrincipal { loan_id: String, principal: Decimal },

    /// `balance < 0` or `balance > principal`.
    #[error("Loan '{loan_id}' has balance {balance} outside the range 0..={principal}")]
    InvalidBalance {
        loan_id: String,
        balance: Decimal,
        principal: Decimal,
    },

    /// Chart slices were requested with no colors to assign.
    #[error("Chart palette must contain at least one color")]
    EmptyPalette,

    /// The id was already used by an earlier record in the same input.
    #[error("Loan id '{loan_id}' is used more than once (first at position {first_position})")]
    DuplicateId {
        loan_id: String,
        first_position: usize,
    },

    #[error("Loan '{loan_id}' has an empty name")]
    EmptyName { loan_id: String },

    #[error("Loan '{loan_id}' has negative monthly payment {monthly_payment}")]
    InvalidMonthlyPayment {
        loan_id: String,
        monthly_payment: Decimal,
    },
}

impl LoanError {
    /// Returns the id of the loan this error refers to, if any.
    pub fn loan_id(&self) -> Option<&str> {
        match self {
            LoanError::InvalidPrincipal { loan_id, .. }
            | LoanError::InvalidBalance { loan_id, .. }
            | LoanError::DuplicateId { loan_id, .. }
            | LoanError::EmptyName { loan_id }
            | LoanError::InvalidMonthlyPayment { loan_id, .. } => Some(loan_id),
            LoanError::EmptyPalette => None,
        }
    }

    /// Returns the stable string code of this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanError::InvalidPrincipal { .. } => "INVALID_PRINCIPAL",
            LoanError::InvalidBalance { .. } => "INVALID_BALANCE",
            LoanError::EmptyPalette => "EMPTY_PALETTE",
            LoanError::DuplicateId { .. } => "DUPLICATE_ID",
            LoanError::EmptyName { .. } => "EMPTY_NAME",
            LoanError::InvalidMonthlyPayment { .. } => "INVALID_MONTHLY_PAYMENT",
        }
    }
}

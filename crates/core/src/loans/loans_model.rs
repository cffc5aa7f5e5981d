//! Loan domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LoanError;

/// A single debt obligation, as supplied by the caller.
///
/// Records are read-only inputs: the engine never mutates them and recomputes
/// every derived value from scratch on each call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanRecord {
    /// Unique within one input sequence; join key for derived data
    pub id: String,
    /// Display label
    pub name: String,
    /// Original loan amount, must be positive
    pub principal: Decimal,
    /// Current outstanding amount, expected within `0..=principal`
    pub balance: Decimal,
    /// Scheduled payment, passed through for display only
    pub monthly_payment: Decimal,
}

impl LoanRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        principal: Decimal,
        balance: Decimal,
        monthly_payment: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            principal,
            balance,
            monthly_payment,
        }
    }

    /// Amount already repaid (`principal - balance`), None on overflow.
    pub fn amount_paid(&self) -> Option<Decimal> {
        self.principal.checked_sub(self.balance)
    }
}

/// A problem found with one record of an input sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanIssue {
    /// Id of the offending record
    pub loan_id: String,
    /// Zero-based index of the record in the input sequence
    pub position: usize,
    /// The violated invariant
    pub error: LoanError,
}

impl LoanIssue {
    pub fn new(loan_id: impl Into<String>, position: usize, error: LoanError) -> Self {
        Self {
            loan_id: loan_id.into(),
            position,
            error,
        }
    }
}

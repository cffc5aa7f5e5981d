//! Precondition checks for loan records.
//!
//! Validation never corrects data. It reports each violated invariant once per
//! offending record so the caller can decide whether to skip or halt.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::{LoanError, LoanIssue, LoanRecord};

/// Checks a single record against its field contracts.
///
/// Returns every violated invariant; an empty vector means the record is valid.
pub fn validate_loan(loan: &LoanRecord) -> Vec<LoanError> {
    let mut errors = Vec::new();

    if loan.name.trim().is_empty() {
        errors.push(LoanError::EmptyName {
            loan_id: loan.id.clone(),
        });
    }

    if loan.principal <= Decimal::ZERO {
        errors.push(LoanError::InvalidPrincipal {
            loan_id: loan.id.clone(),
            principal: loan.principal,
        });
    }

    // A balance above a non-positive principal is already covered by InvalidPrincipal.
    let exceeds_principal = loan.principal > Decimal::ZERO && loan.balance > loan.principal;
    if loan.balance < Decimal::ZERO || exceeds_principal {
        errors.push(LoanError::InvalidBalance {
            loan_id: loan.id.clone(),
            balance: loan.balance,
            principal: loan.principal,
        });
    }

    if loan.monthly_payment < Decimal::ZERO {
        errors.push(LoanError::InvalidMonthlyPayment {
            loan_id: loan.id.clone(),
            monthly_payment: loan.monthly_payment,
        });
    }

    errors
}

/// Checks a whole input sequence.
///
/// Reports per-record violations plus a `DuplicateId` for every record whose id
/// was already used by an earlier record. Issues are ordered by position.
pub fn validate_loans(loans: &[LoanRecord]) -> Vec<LoanIssue> {
    let mut issues = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(loans.len());

    for (position, loan) in loans.iter().enumerate() {
        if let Some(&first_position) = first_seen.get(loan.id.as_str()) {
            issues.push(LoanIssue::new(
                loan.id.clone(),
                position,
                LoanError::DuplicateId {
                    loan_id: loan.id.clone(),
                    first_position,
                },
            ));
        } else {
            first_seen.insert(loan.id.as_str(), position);
        }

        issues.extend(
            validate_loan(loan)
                .into_iter()
                .map(|error| LoanIssue::new(loan.id.clone(), position, error)),
        );
    }

    debug!(
        "Validated {} loan records, found {} issues",
        loans.len(),
        issues.len()
    );

    issues
}

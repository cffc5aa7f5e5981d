//! Stateless debt computations.
//!
//! Every function here is a pure function of its arguments: no I/O, no caching,
//! and inputs are never mutated. Safe to call from any number of threads.

use rust_decimal::Decimal;

use super::{ChartSlice, DerivedLoanMetrics, PortfolioSummary};
use crate::display::AmountFormatter;
use crate::loans::{LoanError, LoanRecord};

/// Sums the balances of all loans. Zero for an empty sequence.
pub fn compute_total_balance(loans: &[LoanRecord]) -> Decimal {
    loans.iter().map(|loan| loan.balance).sum()
}

/// Computes `1 - balance / principal` for one loan.
///
/// Fails with `InvalidPrincipal` when `principal <= 0`. The result is not
/// clamped; an out-of-range balance yields a fraction outside [0, 1], or
/// `InvalidBalance` when the ratio does not fit in a `Decimal`.
pub fn compute_paid_off_fraction(loan: &LoanRecord) -> Result<Decimal, LoanError> {
    if loan.principal <= Decimal::ZERO {
        return Err(LoanError::InvalidPrincipal {
            loan_id: loan.id.clone(),
            principal: loan.principal,
        });
    }

    loan.balance
        .checked_div(loan.principal)
        .and_then(|ratio| Decimal::ONE.checked_sub(ratio))
        .ok_or_else(|| invalid_balance(loan))
}

fn invalid_balance(loan: &LoanRecord) -> LoanError {
    LoanError::InvalidBalance {
        loan_id: loan.id.clone(),
        balance: loan.balance,
        principal: loan.principal,
    }
}

/// Derives per-loan metrics in input order.
pub fn derive_loan_metrics(loans: &[LoanRecord]) -> Result<Vec<DerivedLoanMetrics>, LoanError> {
    loans
        .iter()
        .map(|loan| {
            Ok(DerivedLoanMetrics {
                id: loan.id.clone(),
                paid_off_fraction: compute_paid_off_fraction(loan)?,
                amount_paid: loan.amount_paid().ok_or_else(|| invalid_balance(loan))?,
            })
        })
        .collect()
}

/// Aggregates portfolio-wide totals.
pub fn summarize_portfolio(loans: &[LoanRecord]) -> PortfolioSummary {
    let total_balance = compute_total_balance(loans);
    let total_principal: Decimal = loans.iter().map(|loan| loan.principal).sum();
    let total_monthly_payment: Decimal = loans.iter().map(|loan| loan.monthly_payment).sum();

    let overall_paid_off_fraction = if total_principal > Decimal::ZERO {
        total_balance
            .checked_div(total_principal)
            .and_then(|ratio| Decimal::ONE.checked_sub(ratio))
    } else {
        None
    };

    PortfolioSummary {
        total_balance,
        total_principal,
        total_paid_off: total_principal - total_balance,
        overall_paid_off_fraction,
        total_monthly_payment,
        loan_count: loans.len(),
    }
}

/// Builds one chart slice per loan, in input order.
///
/// Colors depend only on position: the loan at index `i` gets
/// `palette[i % palette.len()]`. Fails with `EmptyPalette` if there are no colors.
pub fn build_chart_slices<S: AsRef<str>>(
    loans: &[LoanRecord],
    palette: &[S],
    formatter: &dyn AmountFormatter,
) -> Result<Vec<ChartSlice>, LoanError> {
    if palette.is_empty() {
        return Err(LoanError::EmptyPalette);
    }

    let total_balance = compute_total_balance(loans);

    Ok(loans
        .iter()
        .enumerate()
        .map(|(position, loan)| {
            let color_index = position % palette.len();
            // None also when the ratio overflows a Decimal
            let share = if total_balance > Decimal::ZERO {
                loan.balance.checked_div(total_balance)
            } else {
                None
            };

            ChartSlice {
                loan_id: loan.id.clone(),
                label: format!("{}: {}", loan.name, formatter.format_amount(loan.balance)),
                value: loan.balance,
                color_index,
                color: palette[color_index].as_ref().to_string(),
                share,
            }
        })
        .collect())
}

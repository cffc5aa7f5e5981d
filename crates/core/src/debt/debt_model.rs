//! Debt aggregation output models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::loans::LoanIssue;

/// Per-loan derived values, one per input record and in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedLoanMetrics {
    /// Joins back to `LoanRecord::id`
    pub id: String,
    /// `1 - balance / principal`; in [0, 1] for valid records
    pub paid_off_fraction: Decimal,
    /// `principal - balance`
    pub amount_paid: Decimal,
}

/// Portfolio-wide totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of all balances
    pub total_balance: Decimal,
    pub total_principal: Decimal,
    /// total_principal - total_balance
    pub total_paid_off: Decimal,
    /// None when there is no principal to measure against or the ratio overflows
    pub overall_paid_off_fraction: Option<Decimal>,
    pub total_monthly_payment: Decimal,
    pub loan_count: usize,
}

/// One wedge of the proportional chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    pub loan_id: String,
    /// "{name}: {formatted balance}"
    pub label: String,
    /// Equal to the source balance
    pub value: Decimal,
    /// position mod palette length
    pub color_index: usize,
    /// Palette entry at color_index
    pub color: String,
    /// value / total balance; None when the total is zero or the ratio overflows
    pub share: Option<Decimal>,
}

/// Everything the engine computes for one input sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DebtOverview {
    pub summary: PortfolioSummary,
    pub metrics: Vec<DerivedLoanMetrics>,
    pub slices: Vec<ChartSlice>,
    /// Records left out of the computation and why
    pub issues: Vec<LoanIssue>,
}

//! Builds dashboard view models from debt overviews.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use log::{debug, warn};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{
    AmountFormatter, CurrencyFormatter, DashboardView, LegendEntry, ProgressRow, SummaryCard,
    ThemeColors,
};
use crate::constants::TOTAL_DEBT_TITLE;
use crate::debt::{DebtOverview, DebtServiceTrait};
use crate::errors::{Error, Result};
use crate::loans::{LoanError, LoanIssue, LoanRecord};

const LEGEND_FONT_SIZE: u32 = 12;

/// Trait for producing the complete dashboard view.
pub trait DashboardServiceTrait: Send + Sync {
    /// Runs the debt computation for `loans` and renders its view model.
    fn get_dashboard(&self, loans: &[LoanRecord]) -> Result<DashboardView>;
}

pub struct DashboardService {
    debt_service: Arc<dyn DebtServiceTrait>,
    formatter: Arc<dyn AmountFormatter>,
}

impl DashboardService {
    pub fn new(debt_service: Arc<dyn DebtServiceTrait>) -> Self {
        let formatter = Arc::new(CurrencyFormatter::new(
            debt_service.settings().currency.clone(),
        ));
        Self {
            debt_service,
            formatter,
        }
    }

    pub fn with_formatter(
        debt_service: Arc<dyn DebtServiceTrait>,
        formatter: Arc<dyn AmountFormatter>,
    ) -> Self {
        Self {
            debt_service,
            formatter,
        }
    }

    /// Renders an already computed overview.
    ///
    /// Metrics are joined back to their records by id; `loans` must be the
    /// sequence the overview was computed from.
    pub fn build_view(&self, loans: &[LoanRecord], overview: &DebtOverview) -> Result<DashboardView> {
        let settings = self.debt_service.settings();
        let theme = ThemeColors::for_mode(settings.theme);

        // First occurrence wins, matching the records the engine kept.
        let mut loans_by_id: HashMap<&str, &LoanRecord> = HashMap::with_capacity(loans.len());
        for loan in loans {
            loans_by_id.entry(loan.id.as_str()).or_insert(loan);
        }

        let rows = overview
            .metrics
            .iter()
            .map(|metrics| {
                let loan = loans_by_id.get(metrics.id.as_str()).ok_or_else(|| {
                    Error::Unexpected(format!("No loan record for metrics id '{}'", metrics.id))
                })?;

                let progress_fraction = if settings.clamp_progress {
                    metrics
                        .paid_off_fraction
                        .clamp(Decimal::ZERO, Decimal::ONE)
                } else {
                    metrics.paid_off_fraction
                };
                let paid_off_percent =
                    whole_percent(metrics.paid_off_fraction).ok_or_else(|| {
                        Error::Loan(LoanError::InvalidBalance {
                            loan_id: loan.id.clone(),
                            balance: loan.balance,
                            principal: loan.principal,
                        })
                    })?;

                Ok(ProgressRow {
                    id: loan.id.clone(),
                    name: loan.name.clone(),
                    progress: progress_fraction.to_f64().unwrap_or_default(),
                    paid_off_percent,
                    balance_label: format!(
                        "Balance: {}",
                        self.formatter.format_amount(loan.balance)
                    ),
                    monthly_payment_label: format!(
                        "Monthly Payment: {}",
                        self.formatter.format_amount(loan.monthly_payment)
                    ),
                    paid_off_label: format!("{}% Paid Off", paid_off_percent),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let chart = overview
            .slices
            .iter()
            .map(|slice| LegendEntry {
                loan_id: slice.loan_id.clone(),
                label: slice.label.clone(),
                value: slice.value.to_f64().unwrap_or_default(),
                color: slice.color.clone(),
                legend_font_color: theme.legend_font.clone(),
                legend_font_size: LEGEND_FONT_SIZE,
            })
            .collect();

        let warnings = skipped_record_warnings(&overview.issues);
        if !warnings.is_empty() {
            warn!("Dashboard rendered with {} warnings", warnings.len());
        }

        debug!(
            "Built dashboard view with {} rows and {} slices",
            overview.metrics.len(),
            overview.slices.len()
        );

        Ok(DashboardView {
            summary: SummaryCard {
                title: TOTAL_DEBT_TITLE.to_string(),
                amount: self.formatter.format_amount(overview.summary.total_balance),
                loan_count: overview.summary.loan_count,
            },
            chart,
            rows,
            warnings,
            theme,
        })
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, loans: &[LoanRecord]) -> Result<DashboardView> {
        let overview = self.debt_service.get_debt_overview(loans)?;
        self.build_view(loans, &overview)
    }
}

/// Rounds a fraction to a whole percentage, halves away from zero.
///
/// Returns None when the percentage does not fit in a `Decimal` or an `i64`.
pub fn whole_percent(fraction: Decimal) -> Option<i64> {
    fraction
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// One warning per skipped record, listing every invariant it broke.
fn skipped_record_warnings(issues: &[LoanIssue]) -> Vec<String> {
    let mut by_position: BTreeMap<usize, (&str, Vec<String>)> = BTreeMap::new();
    for issue in issues {
        by_position
            .entry(issue.position)
            .or_insert_with(|| (issue.loan_id.as_str(), Vec::new()))
            .1
            .push(issue.error.to_string());
    }

    by_position
        .into_values()
        .map(|(loan_id, reasons)| {
            format!("Loan '{}' was not shown: {}", loan_id, reasons.join("; "))
        })
        .collect()
}

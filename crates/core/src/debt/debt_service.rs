//! Debt aggregation service implementation.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};

use super::debt_calculator::{build_chart_slices, derive_loan_metrics, summarize_portfolio};
use super::{DebtOverview, DebtServiceTrait};
use crate::display::{AmountFormatter, CurrencyFormatter};
use crate::errors::Result;
use crate::loans::{validate_loans, LoanRecord};
use crate::settings::{DashboardSettings, InvalidRecordPolicy};

/// Service applying validation policy around the pure debt computations.
pub struct DebtService {
    settings: DashboardSettings,
    formatter: Arc<dyn AmountFormatter>,
}

impl DebtService {
    /// Creates a service with a currency formatter built from the settings.
    pub fn new(settings: DashboardSettings) -> Result<Self> {
        let formatter = Arc::new(CurrencyFormatter::new(settings.currency.clone()));
        Self::with_formatter(settings, formatter)
    }

    pub fn with_formatter(
        settings: DashboardSettings,
        formatter: Arc<dyn AmountFormatter>,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            formatter,
        })
    }
}

impl DebtServiceTrait for DebtService {
    fn get_debt_overview(&self, loans: &[LoanRecord]) -> Result<DebtOverview> {
        let issues = validate_loans(loans);

        if self.settings.invalid_record_policy == InvalidRecordPolicy::Halt {
            if let Some(issue) = issues.first() {
                warn!(
                    "Halting debt computation at position {}: {}",
                    issue.position, issue.error
                );
                return Err(issue.error.clone().into());
            }
        }

        for issue in &issues {
            warn!(
                "Skipping loan '{}' at position {}: {}",
                issue.loan_id, issue.position, issue.error
            );
        }

        let rejected: HashSet<usize> = issues.iter().map(|issue| issue.position).collect();
        let accepted: Vec<LoanRecord> = loans
            .iter()
            .enumerate()
            .filter(|(position, _)| !rejected.contains(position))
            .map(|(_, loan)| loan.clone())
            .collect();

        let summary = summarize_portfolio(&accepted);
        let metrics = derive_loan_metrics(&accepted)?;
        let slices = build_chart_slices(&accepted, &self.settings.palette, self.formatter.as_ref())?;

        debug!(
            "Computed debt overview: {} of {} loans, total balance {}",
            accepted.len(),
            loans.len(),
            summary.total_balance
        );

        Ok(DebtOverview {
            summary,
            metrics,
            slices,
            issues,
        })
    }

    fn settings(&self) -> &DashboardSettings {
        &self.settings
    }
}

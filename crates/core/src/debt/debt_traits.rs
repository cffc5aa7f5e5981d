//! Debt service traits.

use super::DebtOverview;
use crate::errors::Result;
use crate::loans::LoanRecord;
use crate::settings::DashboardSettings;

/// Trait defining the contract for debt aggregation.
pub trait DebtServiceTrait: Send + Sync {
    /// Computes the summary, per-loan metrics and chart slices for `loans`.
    ///
    /// Records that fail validation are handled according to the configured
    /// `InvalidRecordPolicy`: skipped and reported in `DebtOverview::issues`,
    /// or returned as the error of the whole call.
    fn get_debt_overview(&self, loans: &[LoanRecord]) -> Result<DebtOverview>;

    /// Settings this service was built with.
    fn settings(&self) -> &DashboardSettings;
}

//! View models handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::settings::ThemeMode;

/// Status bar content style; light content sits on dark backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    LightContent,
    DarkContent,
}

/// Colors resolved from a theme mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub mode: ThemeMode,
    pub background: String,
    pub status_bar: StatusBarStyle,
    pub summary_card_background: String,
    pub summary_text: String,
    pub progress_fill: String,
    pub progress_track: String,
    pub legend_font: String,
}

impl ThemeColors {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let (background, status_bar) = match mode {
            ThemeMode::Light => ("#F3F3F3", StatusBarStyle::DarkContent),
            ThemeMode::Dark => ("#222222", StatusBarStyle::LightContent),
        };

        Self {
            mode,
            background: background.to_string(),
            status_bar,
            summary_card_background: "#6200ea".to_string(),
            summary_text: "#ffffff".to_string(),
            progress_fill: "#4caf50".to_string(),
            progress_track: "#e0e0e0".to_string(),
            legend_font: "#555".to_string(),
        }
    }
}

/// Header card showing the total outstanding debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub title: String,
    pub amount: String,
    pub loan_count: usize,
}

/// Legend row and weight for one pie wedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub loan_id: String,
    pub label: String,
    pub value: f64,
    pub color: String,
    pub legend_font_color: String,
    pub legend_font_size: u32,
}

/// One row of the loan list with its progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRow {
    pub id: String,
    pub name: String,
    /// Fill ratio of the progress bar
    pub progress: f64,
    /// Paid-off fraction as a whole percentage
    pub paid_off_percent: i64,
    pub balance_label: String,
    pub monthly_payment_label: String,
    pub paid_off_label: String,
}

/// Complete dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub summary: SummaryCard,
    pub chart: Vec<LegendEntry>,
    pub rows: Vec<ProgressRow>,
    /// One message per record left out of the dashboard
    pub warnings: Vec<String>,
    pub theme: ThemeColors,
}

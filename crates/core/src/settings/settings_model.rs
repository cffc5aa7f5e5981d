use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CHART_PALETTE, DEFAULT_CURRENCY_SYMBOL, DISPLAY_DECIMAL_PRECISION,
    MAX_DISPLAY_DECIMAL_PRECISION,
};
use crate::errors::{Error, Result, ValidationError};
use crate::loans::LoanError;

/// Light or dark appearance, chosen by the caller rather than detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// What to do with records that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvalidRecordPolicy {
    /// Drop offending records, compute over the rest, and report them as issues.
    #[default]
    Skip,
    /// Fail the whole computation on the first offending record.
    Halt,
}

/// How digits of the integer part are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// Thousands, then pairs: 3,06,00,000
    #[default]
    Indian,
    /// Thousands throughout: 30,600,000
    Western,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: DigitGrouping,
    /// Trailing zeros are trimmed, so this is an upper bound
    pub max_fraction_digits: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            grouping: DigitGrouping::Indian,
            max_fraction_digits: DISPLAY_DECIMAL_PRECISION,
        }
    }
}

/// Configuration for one dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSettings {
    /// Chart colors, assigned to slices by position modulo length
    pub palette: Vec<String>,
    pub theme: ThemeMode,
    pub currency: CurrencyFormat,
    pub invalid_record_policy: InvalidRecordPolicy,
    /// Clamp progress indicators into [0, 1] when rendering
    pub clamp_progress: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            palette: DEFAULT_CHART_PALETTE.iter().map(|c| c.to_string()).collect(),
            theme: ThemeMode::default(),
            currency: CurrencyFormat::default(),
            invalid_record_policy: InvalidRecordPolicy::default(),
            clamp_progress: true,
        }
    }
}

impl DashboardSettings {
    /// Parses settings from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: DashboardSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(LoanError::EmptyPalette.into());
        }
        if let Some(position) = self.palette.iter().position(|c| c.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Palette color at position {} is blank",
                position
            ))));
        }
        if self.currency.max_fraction_digits > MAX_DISPLAY_DECIMAL_PRECISION {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "maxFractionDigits {} exceeds the supported maximum of {}",
                self.currency.max_fraction_digits, MAX_DISPLAY_DECIMAL_PRECISION
            ))));
        }
        Ok(())
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_policy(mut self, policy: InvalidRecordPolicy) -> Self {
        self.invalid_record_policy = policy;
        self
    }
}

use super::*;
use crate::errors::Error;
use crate::loans::LoanError;

#[test]
fn test_default_settings_describe_light_rupee_dashboard() {
    let settings = DashboardSettings::default();
    assert_eq!(
        settings.palette,
        vec!["#4caf50", "#2196f3", "#f44336", "#ff9800", "#9c27b0"]
    );
    assert_eq!(settings.theme, ThemeMode::Light);
    assert_eq!(settings.currency.symbol, "₹");
    assert_eq!(settings.currency.grouping, DigitGrouping::Indian);
    assert_eq!(settings.invalid_record_policy, InvalidRecordPolicy::Skip);
    assert!(settings.clamp_progress);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    let settings = DashboardSettings::from_json_str(
        r#"{"theme":"dark","currency":{"symbol":"$","grouping":"western"}}"#,
    )
    .unwrap();

    assert_eq!(settings.theme, ThemeMode::Dark);
    assert_eq!(settings.currency.symbol, "$");
    assert_eq!(settings.currency.grouping, DigitGrouping::Western);
    assert_eq!(settings.currency.max_fraction_digits, 3);
    assert_eq!(settings.palette.len(), 5);
}

#[test]
fn test_policy_parses_from_screaming_case() {
    let settings = DashboardSettings::from_json_str(r#"{"invalidRecordPolicy":"HALT"}"#).unwrap();
    assert_eq!(settings.invalid_record_policy, InvalidRecordPolicy::Halt);
}

#[test]
fn test_empty_palette_is_rejected() {
    let result = DashboardSettings::from_json_str(r#"{"palette":[]}"#);
    assert_eq!(result.unwrap_err(), Error::Loan(LoanError::EmptyPalette));
}

#[test]
fn test_blank_palette_entry_is_rejected() {
    let result = DashboardSettings::from_json_str(r##"{"palette":["#fff"," "]}"##);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_excessive_fraction_digits_are_rejected() {
    let mut settings = DashboardSettings::default();
    settings.currency.max_fraction_digits = 12;
    assert!(matches!(settings.validate(), Err(Error::Validation(_))));
}

#[test]
fn test_malformed_json_is_a_settings_error() {
    let result = DashboardSettings::from_json_str("{palette:");
    assert!(matches!(result, Err(Error::Settings(_))));
}

/// Colors cycled over chart slices by position
pub const DEFAULT_CHART_PALETTE: [&str; 5] = ["#4caf50", "#2196f3", "#f44336", "#ff9800", "#9c27b0"];

/// Currency symbol prefixed to formatted amounts
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Fraction digits kept when formatting amounts for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 3;

/// Upper bound accepted for configured fraction digits
pub const MAX_DISPLAY_DECIMAL_PRECISION: u32 = 8;

/// Title of the summary card
pub const TOTAL_DEBT_TITLE: &str = "Total Debt";

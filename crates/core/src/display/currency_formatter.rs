//! Locale-style currency formatting for raw decimal amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::settings::{CurrencyFormat, DigitGrouping};

/// Converts a raw amount into a display string.
pub trait AmountFormatter: Send + Sync {
    fn format_amount(&self, amount: Decimal) -> String;
}

/// Formats amounts as `{symbol}{grouped integer}[.{fraction}]`.
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    format: CurrencyFormat,
}

impl CurrencyFormatter {
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }
}

impl AmountFormatter for CurrencyFormatter {
    fn format_amount(&self, amount: Decimal) -> String {
        let rounded = amount
            .round_dp_with_strategy(
                self.format.max_fraction_digits,
                RoundingStrategy::MidpointAwayFromZero,
            )
            .normalize();

        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        let digits = rounded.abs().to_string();
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut formatted = format!(
            "{}{}{}",
            sign,
            self.format.symbol,
            group_integer_digits(integer, self.format.grouping)
        );
        if let Some(fraction) = fraction {
            formatted.push('.');
            formatted.push_str(fraction);
        }
        formatted
    }
}

/// Inserts group separators into a string of ASCII digits.
///
/// The last three digits always form one group; the rest are grouped in pairs
/// (Indian) or threes (Western).
pub fn group_integer_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / step + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);

    groups.join(",")
}

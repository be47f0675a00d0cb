//! Display formatting for monetary amounts in the fixed display currency.

use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const DEFAULT_SYMBOL: &str = "₫";
pub const DEFAULT_GROUPING_SEPARATOR: char = ',';

/// Renders amounts as whole-unit, digit-grouped strings with a suffix symbol.
///
/// The grouping separator must not be `.` or a digit, otherwise
/// [`parse_amount`] cannot recover the value from the rendered text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.into(),
            grouping_separator: DEFAULT_GROUPING_SEPARATOR,
        }
    }
}

impl CurrencyFormat {
    pub fn from_config(config: &Config) -> Self {
        Self {
            symbol: config.currency_symbol.clone(),
            grouping_separator: config.grouping_separator,
        }
    }

    /// Formats `amount` with no fractional digits, e.g. `50000.0` -> `50,000₫`.
    pub fn format(&self, amount: f64) -> String {
        let mut rounded = if amount.is_finite() { amount.round() } else { 0.0 };
        if rounded == 0.0 {
            // drop the sign of -0.0
            rounded = 0.0;
        }
        let mut body = format!("{:.0}", rounded);
        insert_grouping(&mut body, self.grouping_separator);
        format!("{}{}", body, self.symbol)
    }
}

/// Formats with the default display currency.
pub fn format_amount(amount: f64) -> String {
    CurrencyFormat::default().format(amount)
}

/// Recovers a number from display text. Every character other than a digit,
/// `.` or `-` is discarded first; anything unparseable yields `0.0`.
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-'))
        .collect();
    match leading_number(&cleaned) {
        Some(value) if value != 0.0 => value,
        _ => 0.0,
    }
}

/// Parses the longest decimal prefix of `text` (optional `-`, digits,
/// optional fraction). Returns `None` when the prefix holds no digit.
pub(crate) fn leading_number(text: &str) -> Option<f64> {
    let end = mantissa_end(text.as_bytes())?;
    text[..end].parse::<f64>().ok()
}

/// Like [`leading_number`], but also takes a leading `+` and an exponent
/// such as `1.5e3`. An exponent marker without digits is left unparsed.
pub(crate) fn leading_float(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let bytes = unsigned.as_bytes();
    let mut end = mantissa_end(bytes)?;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    unsigned[..end].parse::<f64>().ok()
}

/// End of the `-digits.digits` prefix, or `None` when it holds no digit.
fn mantissa_end(bytes: &[u8]) -> Option<usize> {
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    (digits > 0).then_some(end)
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

//! US-dollar presentation helpers shared by every view.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const SYMBOL: &str = "$";
const DECIMAL_SEPARATOR: char = '.';
const GROUPING_SEPARATOR: char = ',';

/// Display switches accepted by [`format_currency`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatOptions {
    pub show_decimals: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_decimals: true,
        }
    }
}

impl FormatOptions {
    /// Whole-dollar rendering used for targets and compact tiles.
    pub fn whole() -> Self {
        Self {
            show_decimals: false,
        }
    }

    fn precision(&self) -> usize {
        if self.show_decimals {
            2
        } else {
            0
        }
    }
}

/// Formats an amount as `$1,234.56` (or `$1,235` without decimals).
///
/// Rounding is half away from zero on the last shown digit of the amount's
/// shortest decimal form, so `1.005` shows as `$1.01`. Negative amounts carry
/// a leading minus sign (`-$55.50`) unless they round to zero.
pub fn format_currency(amount: f64, options: FormatOptions) -> String {
    let digits = rounded_digits(amount.abs(), options.precision());
    let is_zero = digits.bytes().all(|byte| byte == b'0' || byte == b'.');
    let body = format_number(&digits);
    if amount < 0.0 && !is_zero {
        format!("-{SYMBOL}{body}")
    } else {
        format!("{SYMBOL}{body}")
    }
}

/// Like [`format_currency`] but prefixes positive amounts with `+`.
pub fn format_signed_currency(amount: f64, options: FormatOptions) -> String {
    let formatted = format_currency(amount, options);
    if amount > 0.0 {
        format!("+{formatted}")
    } else {
        formatted
    }
}

/// Renders a percentage with two decimals, e.g. `10.45%`. Unlike amounts,
/// this rounds the binary value, as a progress label's `toFixed` would.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", round_to(value, 2))
}

fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// `value` rounded half away from zero to `precision` places, as plain digits.
fn rounded_digits(value: f64, precision: usize) -> String {
    let decimal = if value.is_finite() {
        Decimal::from_str(&value.to_string()).ok()
    } else {
        None
    };
    match decimal {
        Some(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(precision as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        // Out of decimal range: fall back to the float's own rounding.
        None => format!("{:.*}", precision, round_to(value, precision)),
    }
}

fn format_number(body: &str) -> String {
    match body.split_once(DECIMAL_SEPARATOR) {
        Some((int_part, fraction)) => {
            format!("{}{}{}", group_digits(int_part), DECIMAL_SEPARATOR, fraction)
        }
        None => group_digits(body),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_decimals_by_default() {
        assert_eq!(format_currency(4836.0, FormatOptions::default()), "$4,836.00");
        assert_eq!(format_currency(159.0, FormatOptions::default()), "$159.00");
        assert_eq!(format_currency(0.5, FormatOptions::default()), "$0.50");
    }

    #[test]
    fn whole_dollars_round_half_up() {
        assert_eq!(format_currency(2000.0, FormatOptions::whole()), "$2,000");
        assert_eq!(format_currency(2.5, FormatOptions::whole()), "$3");
        assert_eq!(format_currency(1234567.49, FormatOptions::whole()), "$1,234,567");
    }

    #[test]
    fn halves_round_on_the_decimal_form() {
        let cash = FormatOptions::default();
        assert_eq!(format_currency(1.005, cash), "$1.01");
        assert_eq!(format_currency(0.285, cash), "$0.29");
        assert_eq!(format_currency(10.075, cash), "$10.08");
        assert_eq!(format_currency(-1.005, cash), "-$1.01");
        assert_eq!(format_currency(1.004, cash), "$1.00");
    }

    #[test]
    fn negative_amounts_keep_sign_before_symbol() {
        assert_eq!(format_currency(-55.5, FormatOptions::default()), "-$55.50");
        assert_eq!(format_currency(-0.001, FormatOptions::default()), "$0.00");
    }

    #[test]
    fn signed_variant_marks_income() {
        assert_eq!(
            format_signed_currency(75.5, FormatOptions::default()),
            "+$75.50"
        );
        assert_eq!(
            format_signed_currency(-12.0, FormatOptions::default()),
            "-$12.00"
        );
        assert_eq!(format_signed_currency(0.0, FormatOptions::default()), "$0.00");
    }

    #[test]
    fn percentage_uses_two_decimals() {
        assert_eq!(format_percentage(10.45), "10.45%");
        assert_eq!(format_percentage(100.0), "100.00%");
    }
}

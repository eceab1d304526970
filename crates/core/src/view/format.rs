//! Display formatting for money and percentages.
//!
//! Both formatters round half-to-even to two places. A negative input keeps
//! its minus sign even when it rounds to zero (`-0.001` prints `-0.00`).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats `value` as `"<symbol> #,##0.00"`, e.g. `"₹ 1,234.50"` or `"₹ -20.00"`.
pub fn format_currency(value: Decimal, currency_symbol: &str) -> String {
    format!("{} {}", currency_symbol, format_fixed(value, true))
}

/// Formats `value` as `"#0.00"`, e.g. `"7.14"`.
pub fn format_percentage(value: Decimal) -> String {
    format_fixed(value, false)
}

fn format_fixed(value: Decimal, group_thousands: bool) -> String {
    let rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointNearestEven,
    );
    let negative = value.is_sign_negative() && !value.is_zero();
    let digits = format!(
        "{:.*}",
        DISPLAY_DECIMAL_PRECISION as usize,
        rounded.abs()
    );

    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let integer = if group_thousands {
        group_digits(integer)
    } else {
        integer.to_string()
    };

    let mut out = String::with_capacity(digits.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&integer);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_digits(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

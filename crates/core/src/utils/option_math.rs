//! Arithmetic over optional decimals.
//!
//! Every helper returns `None` when an operand is missing, a denominator is
//! zero, or the decimal operation would overflow. Callers compose these
//! instead of repeating presence checks per field.

use rust_decimal::Decimal;

use crate::constants::PERCENT_MULTIPLIER;

/// Apply `f` only when both operands are present.
pub fn lift2<A, B, R>(a: Option<A>, b: Option<B>, f: impl FnOnce(A, B) -> Option<R>) -> Option<R> {
    a.zip(b).and_then(|(a, b)| f(a, b))
}

pub fn checked_mul(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    lift2(a, b, |a, b| a.checked_mul(b))
}

pub fn checked_sub(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    lift2(a, b, |a, b| a.checked_sub(b))
}

/// `(numerator / denominator) * 100`, or `None` for a zero denominator.
pub fn percentage_of(numerator: Option<Decimal>, denominator: Option<Decimal>) -> Option<Decimal> {
    lift2(numerator, denominator, |n, d| {
        if d.is_zero() {
            return None;
        }
        n.checked_div(d)?
            .checked_mul(Decimal::from(PERCENT_MULTIPLIER))
    })
}

/// Sum of the present values, in iteration order.
///
/// Missing values are skipped rather than counted as zero; the result is
/// `None` only when nothing was present.
pub fn sum_present<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    let mut present = values.into_iter().flatten().peekable();
    present.peek()?;
    present.try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
}

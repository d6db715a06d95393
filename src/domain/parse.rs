//! Lenient parsing of the raw text fields of a job.
//!
//! Nothing in here fails: text that does not start with a number counts as zero.

use super::arith::{div, mul};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parses a user-entered amount such as `"$1,250.50"`.
///
/// Commas and dollar signs are removed first, then the longest leading numeric
/// prefix is read, so `"12."` is 12 and `"40 hrs"` is 40. Empty, non-numeric or
/// out-of-range input yields zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '$').collect();
    parse_leading_decimal(cleaned.trim()).unwrap_or(Decimal::ZERO)
}

/// Computes a percentage fee on `base`, rounded to the cent.
///
/// `fee_spec` is a rate like `"5%"` or `"2.5"`. A blank spec means no fee.
pub fn parse_percent_fee(base: &str, fee_spec: &str) -> Decimal {
    let spec = fee_spec.trim();
    if spec.is_empty() {
        return Decimal::ZERO;
    }
    let rate = parse_leading_decimal(spec.replacen('%', "", 1).trim()).unwrap_or(Decimal::ZERO);
    round_cents(div(mul(parse_amount(base), rate), Decimal::ONE_HUNDRED))
}

/// Rounds to two decimal places, midpoint away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn parse_leading_decimal(s: &str) -> Option<Decimal> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut negative = false;

    if let Some(&sign) = bytes.first()
        && (sign == b'+' || sign == b'-')
    {
        negative = sign == b'-';
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos + 1..end];
        }
    }

    let mut mantissa = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        mantissa.push('-');
    }
    mantissa.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        mantissa.push('.');
        mantissa.push_str(frac_digits);
    }

    if exponent.is_empty() {
        Decimal::from_str(&mantissa).ok()
    } else {
        Decimal::from_scientific(&format!("{}e{}", mantissa, exponent)).ok()
    }
}

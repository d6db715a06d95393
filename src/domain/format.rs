use super::parse::{parse_amount, round_cents};
use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a US-dollar amount, e.g. `$4,400.00` or `-$12.50`.
///
/// The sign follows the unrounded value, so `-0.001` renders as `-$0.00`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_cents(value);
    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let text = magnitude.to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if value < Decimal::ZERO { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Like [`format_currency`], for text that has not been parsed yet.
/// Anything non-numeric renders as `$0.00`.
pub fn format_currency_raw(raw: &str) -> String {
    format_currency(parse_amount(raw))
}

/// Renders a whole-number commission rate, e.g. `55%`.
pub fn format_rate(rate: u8) -> String {
    format!("{}%", rate)
}

/// Renders a percentage with one decimal place, e.g. `88.9%`.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    format!("{}%", rounded)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

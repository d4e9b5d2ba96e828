//! Display helpers shared by the calculators.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Compact counter for display: `950`, `2K`, `2.3M`.
///
/// Thousands are rounded to a whole number, millions to one decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.0}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// First character upper-cased, the rest lower-cased.
#[must_use]
pub fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Sentence case applied to each whitespace-delimited word.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(sentence_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round to `dp` decimal places, ties to even.
///
/// Works on the exact binary value of `value`, so `2.675` (stored just below
/// the midpoint) rounds to `2.67`.
#[must_use]
pub fn round_half_even(value: f64, dp: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Arithmetic mean, `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

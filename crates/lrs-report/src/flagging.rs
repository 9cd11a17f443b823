//! Out-of-range classification.

use lrs_model::RangeFlag;

use crate::numeric::parse_f64;

/// Parse a resolved range as a plain numeric interval `"<lo>-<hi>"`.
///
/// Categorical ranges ("Negative", "< 150", multi-line tables) do not
/// parse, which disables comparison for that row.
pub fn parse_numeric_interval(range: &str) -> Option<(f64, f64)> {
    let (lo, hi) = range.trim().split_once('-')?;
    Some((parse_f64(lo)?, parse_f64(hi)?))
}

/// Classify a value against a resolved range. Non-numeric ranges and
/// non-numeric values always classify as `None`.
pub fn classify(value: &str, range: &str) -> RangeFlag {
    let Some((lo, hi)) = parse_numeric_interval(range) else {
        return RangeFlag::None;
    };
    let Some(value) = parse_f64(value) else {
        return RangeFlag::None;
    };
    if value < lo {
        RangeFlag::Low
    } else if value > hi {
        RangeFlag::High
    } else {
        RangeFlag::None
    }
}

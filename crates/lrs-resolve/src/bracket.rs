//! Age bracket key parsing.
//!
//! Range tables key their entries by strings like `"0-30d"`, `"1-2m"`,
//! `"12-100y"`. Both bounds share the unit suffix; units map to day
//! multipliers d=1, m=30, y=365, and a missing unit means days. A key that
//! does not split into exactly two numeric parts around a single `-`
//! yields the all-matching bracket `[0, +∞)` — authored data is never
//! rejected at resolution time.

/// Inclusive age interval in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBracket {
    pub lower: i64,
    pub upper: i64,
}

impl AgeBracket {
    /// The fallback bracket for malformed keys; matches every age from
    /// birth upward.
    pub const ALL: AgeBracket = AgeBracket {
        lower: 0,
        upper: i64::MAX,
    };

    pub fn contains(&self, age_in_days: i64) -> bool {
        age_in_days >= self.lower && age_in_days <= self.upper
    }
}

/// Parse a bracket key into an inclusive day interval.
///
/// Falls back to [`AgeBracket::ALL`] on any malformed input.
pub fn parse_bracket_key(key: &str) -> AgeBracket {
    parse_strict(key).unwrap_or(AgeBracket::ALL)
}

fn parse_strict(key: &str) -> Option<AgeBracket> {
    let (lo_part, hi_part) = key.trim().split_once('-')?;
    // A second separator means the key is not a plain interval.
    if hi_part.contains('-') {
        return None;
    }
    let (hi_digits, multiplier) = split_unit(hi_part)?;
    // The upper bound's unit applies to both bounds; a stray unit on the
    // lower bound is tolerated and ignored.
    let (lo_digits, _) = split_unit(lo_part)?;
    let lo: f64 = lo_digits.trim().parse().ok()?;
    let hi: f64 = hi_digits.trim().parse().ok()?;
    Some(AgeBracket {
        lower: (lo * multiplier as f64).round() as i64,
        upper: (hi * multiplier as f64).round() as i64,
    })
}

/// Split a bound into its numeric text and the day multiplier of its unit
/// suffix.
fn split_unit(part: &str) -> Option<(&str, i64)> {
    let trimmed = part.trim();
    let split = trimmed
        .find(|ch: char| ch.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(split);
    let multiplier = match suffix.trim() {
        "" => 1,
        "d" | "D" => 1,
        "m" | "M" => 30,
        "y" | "Y" => 365,
        _ => return None,
    };
    Some((digits, multiplier))
}

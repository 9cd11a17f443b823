use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient gender as used for reference-range selection.
///
/// Range tables carry one bracket sequence per gender. Selection is
/// deliberately forgiving: anything that does not spell "male"
/// (case-insensitive) selects the female sequence, matching how legacy
/// report data was authored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    /// Parse a stored gender string. Never fails; unrecognized values
    /// (including empty) map to `Female`.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved patient demographics consumed by range resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientContext {
    /// Age in whole days at reporting time. Negative values are
    /// representable; they match no bracket and fall through to the
    /// resolver's fallback rule.
    pub age_in_days: i64,
    pub gender: Gender,
}

impl PatientContext {
    pub fn new(age_in_days: i64, gender: Gender) -> Self {
        Self {
            age_in_days,
            gender,
        }
    }

    /// Context from an age in whole years, using the 365-day year the
    /// stored data assumes.
    pub fn from_years(years: i64, gender: Gender) -> Self {
        Self::new(years * 365, gender)
    }
}

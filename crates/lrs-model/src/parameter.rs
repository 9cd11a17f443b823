use serde::{Deserialize, Serialize};

use crate::patient::Gender;

/// One `(age bracket key, range string)` entry of a gender's sequence.
///
/// The bracket key stays unparsed here. Parsing happens at resolution time
/// so malformed keys can degrade to the all-matching bracket instead of
/// failing ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Bracket key, e.g. `"0-30d"`, `"1-2m"`, `"12-100y"`.
    pub ages: String,
    /// Reference range text for that bracket.
    pub range: String,
}

/// Gender-keyed, ordered reference-range sequences.
///
/// Order is significant: the first matching bracket wins, and the last
/// entry is the fallback for ages past every bracket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTable {
    #[serde(default, alias = "Male", alias = "MALE")]
    pub male: Vec<AgeRange>,
    #[serde(default, alias = "Female", alias = "FEMALE")]
    pub female: Vec<AgeRange>,
}

impl RangeTable {
    /// The bracket sequence for a gender.
    pub fn for_gender(&self, gender: Gender) -> &[AgeRange] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

/// A parameter's reference range: either one literal string that applies
/// to every patient, or an age/gender table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeField {
    Literal(String),
    Table(RangeTable),
}

impl RangeField {
    pub fn literal(value: impl Into<String>) -> Self {
        RangeField::Literal(value.into())
    }
}

impl Default for RangeField {
    fn default() -> Self {
        RangeField::Literal(String::new())
    }
}

/// One measured (or derived) lab parameter as stored in the test catalog,
/// with the patient's value filled in before assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    /// Stored result value as entered; empty when the result is pending.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub range: RangeField,
    /// Optional arithmetic expression deriving this value from sibling
    /// parameters, e.g. `"total_bilirubin - direct_bilirubin"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Nested breakdown rows. At most one level deep.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subparameters: Vec<Parameter>,
}

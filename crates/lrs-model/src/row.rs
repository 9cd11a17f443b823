use serde::{Deserialize, Serialize};

/// Classification of a numeric value against a numeric reference range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeFlag {
    #[default]
    None,
    Low,
    High,
}

impl RangeFlag {
    /// Single-letter code appended to out-of-range values on the printed
    /// report.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            RangeFlag::Low => Some("L"),
            RangeFlag::High => Some("H"),
            RangeFlag::None => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        !matches!(self, RangeFlag::None)
    }
}

/// Kind of print row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowKind {
    /// Subheading title marker. Carries only `name`.
    Heading,
    #[default]
    Parameter,
    /// Nested breakdown row, one level below its parent parameter.
    SubParameter,
}

/// One print-ready line of the assembled report.
///
/// Consumed by external renderers (PDF layout, on-screen tables); no file
/// or wire format is implied beyond the serialized field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintRow {
    pub kind: RowKind,
    pub name: String,
    /// Formatted value text: `"-"` when empty, flag code appended when the
    /// value is numerically out of range.
    pub value: String,
    pub unit: String,
    /// Resolved reference range, with authoring-convention line breaks
    /// already normalized.
    pub range: String,
    pub flag: RangeFlag,
    /// 0 for parameters, 1 for sub-parameters.
    pub depth: u8,
}

impl PrintRow {
    /// Marker row introducing a subheading group.
    pub fn heading(title: impl Into<String>) -> Self {
        PrintRow {
            kind: RowKind::Heading,
            name: title.into(),
            value: String::new(),
            unit: String::new(),
            range: String::new(),
            flag: RangeFlag::None,
            depth: 0,
        }
    }
}

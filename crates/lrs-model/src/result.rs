use serde::{Deserialize, Serialize};

use crate::parameter::Parameter;

/// Presentation-only grouping of parameters inside one test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subheading {
    pub title: String,
    /// Stored names of the parameters rendered under this subheading.
    #[serde(default)]
    pub parameter_names: Vec<String>,
}

/// One booked test with its parameters, ready for assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub test_key: String,
    /// Display title from the catalog; falls back to the key when the
    /// definition is missing.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub subheadings: Vec<Subheading>,
}

impl TestResult {
    /// Degraded result for a test key with no catalog definition. The
    /// section renders empty instead of aborting the report.
    pub fn missing(test_key: impl Into<String>) -> Self {
        let test_key = test_key.into();
        TestResult {
            title: test_key.clone(),
            test_key,
            parameters: Vec::new(),
            subheadings: Vec::new(),
        }
    }
}

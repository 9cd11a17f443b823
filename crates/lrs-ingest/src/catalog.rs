//! Test catalog projection and lookup.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use lrs_model::{Parameter, Subheading, TestResult};

use crate::error::Result;

/// One test definition as stored in the catalog collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub subheadings: Vec<Subheading>,
}

/// The full test catalog, keyed by test key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCatalog {
    pub tests: BTreeMap<String, TestDefinition>,
}

impl TestCatalog {
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    pub fn get(&self, test_key: &str) -> Option<&TestDefinition> {
        self.tests.get(test_key)
    }

    /// Materialize one result per booked test key, in booking order.
    ///
    /// A key with no catalog definition degrades to an empty-parameter
    /// result; the section renders empty instead of aborting the report.
    pub fn results_for(&self, test_keys: &[String]) -> Vec<TestResult> {
        test_keys
            .iter()
            .map(|key| match self.tests.get(key) {
                Some(definition) => TestResult {
                    test_key: key.clone(),
                    title: definition.name.clone(),
                    parameters: definition.parameters.clone(),
                    subheadings: definition.subheadings.clone(),
                },
                None => {
                    warn!(test_key = %key, "test definition missing from catalog");
                    TestResult::missing(key.clone())
                }
            })
            .collect()
    }
}

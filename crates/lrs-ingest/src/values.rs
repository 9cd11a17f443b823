//! Previously stored result values.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use lrs_model::{Parameter, TestResult};

use crate::error::Result;

/// Stored parameter values, keyed by test key then parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredValues {
    pub tests: BTreeMap<String, BTreeMap<String, String>>,
}

impl StoredValues {
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Copy stored values onto materialized results.
    ///
    /// Matching is by exact parameter name, one sub-parameter level deep.
    /// Values naming no parameter are ignored.
    pub fn apply(&self, results: &mut [TestResult]) {
        for result in results.iter_mut() {
            let Some(values) = self.tests.get(&result.test_key) else {
                continue;
            };
            for parameter in &mut result.parameters {
                apply_value(parameter, values);
                for sub in &mut parameter.subparameters {
                    apply_value(sub, values);
                }
            }
        }
    }
}

fn apply_value(parameter: &mut Parameter, values: &BTreeMap<String, String>) {
    if let Some(value) = values.get(&parameter.name) {
        parameter.value = value.clone();
    }
}

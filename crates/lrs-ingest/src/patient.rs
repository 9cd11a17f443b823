//! Patient record projection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lrs_model::{Gender, PatientContext};

use crate::error::Result;

/// Patient record as stored by the intake collaborator.
///
/// Only the fields report generation needs are projected; everything else
/// stays with the external store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(default)]
    pub name: String,
    /// Age in whole years, when captured directly at intake.
    #[serde(default)]
    pub age: Option<i64>,
    /// Explicit age in days; takes precedence over `age` when present.
    #[serde(default)]
    pub total_days: Option<i64>,
    /// Date of birth, used when neither day count nor age is stored.
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Keys of booked tests, in booking order.
    #[serde(default)]
    pub tests: Vec<String>,
}

impl PatientRecord {
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Derive the resolution context for a report generated on
    /// `report_date`.
    ///
    /// Precedence: explicit day count, then years at 365 days each, then
    /// the distance from date of birth to the report date. A record with
    /// none of the three gets age zero.
    pub fn context(&self, report_date: NaiveDate) -> PatientContext {
        let gender = Gender::parse(self.gender.as_deref().unwrap_or(""));
        if let Some(days) = self.total_days {
            PatientContext::new(days, gender)
        } else if let Some(years) = self.age {
            PatientContext::from_years(years, gender)
        } else if let Some(dob) = self.dob {
            PatientContext::new((report_date - dob).num_days(), gender)
        } else {
            PatientContext::new(0, gender)
        }
    }
}

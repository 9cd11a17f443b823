//! Reference-range resolution.

use lrs_model::{PatientContext, RangeField};

use crate::bracket::parse_bracket_key;

/// Resolve a parameter's reference range for one patient.
///
/// Literal ranges pass through untouched. Table ranges select the bracket
/// sequence for the patient's gender, scan it in stored order, and return
/// the range of the first bracket containing the patient's age in days.
/// When no bracket matches, the last entry wins — legacy tables are
/// authored oldest-last — and an empty sequence resolves to the empty
/// string.
///
/// Total over its input domain: never panics, never returns an error.
pub fn resolve(range: &RangeField, ctx: &PatientContext) -> String {
    match range {
        RangeField::Literal(value) => value.clone(),
        RangeField::Table(table) => {
            let sequence = table.for_gender(ctx.gender);
            for entry in sequence {
                if parse_bracket_key(&entry.ages).contains(ctx.age_in_days) {
                    return entry.range.clone();
                }
            }
            sequence
                .last()
                .map(|entry| entry.range.clone())
                .unwrap_or_default()
        }
    }
}

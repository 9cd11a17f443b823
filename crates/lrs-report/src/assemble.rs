//! Report assembly: turn booked test results into print-ready rows.

use std::collections::BTreeMap;

use tracing::debug;

use lrs_formula::{evaluate, round2};
use lrs_model::{Parameter, PatientContext, PrintRow, RangeFlag, RowKind, TestResult};
use lrs_resolve::resolve;

use crate::flagging::classify;
use crate::numeric::{format_numeric, parse_f64};

/// Marker prepended to sub-parameter names on the printed report.
/// Renderers that indent structurally can use `depth` instead.
const SUB_PARAMETER_INDENT: &str = "  - ";

/// Placeholder printed for parameters with no stored value.
const EMPTY_VALUE: &str = "-";

/// One test's worth of print rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub test_key: String,
    pub title: String,
    pub rows: Vec<PrintRow>,
}

/// Assemble print rows for every booked test, in booking order.
///
/// The flat sequence is the concatenation of the per-test sections; use
/// [`assemble_sections`] when the renderer paginates per test.
pub fn assemble(patient: &PatientContext, results: &[TestResult]) -> Vec<PrintRow> {
    assemble_sections(patient, results)
        .into_iter()
        .flat_map(|section| section.rows)
        .collect()
}

/// Assemble one section per booked test.
pub fn assemble_sections(patient: &PatientContext, results: &[TestResult]) -> Vec<ReportSection> {
    results
        .iter()
        .map(|result| assemble_test(patient, result))
        .collect()
}

/// Assemble one test.
///
/// Parameters claimed by a subheading render under it, after the ungrouped
/// parameters; groups keep the original parameter order, not the order the
/// subheading lists the names in. A test with no parameters (missing
/// catalog definition) yields a section with no rows.
pub fn assemble_test(patient: &PatientContext, result: &TestResult) -> ReportSection {
    let parameters = evaluate_formulas(&result.parameters);
    let mut rows = Vec::new();

    if result.subheadings.is_empty() {
        for parameter in &parameters {
            push_parameter_rows(&mut rows, parameter, patient);
        }
    } else {
        // First subheading listing a name claims the parameter. Matching
        // is exact; unmatched names render nothing.
        let owners: Vec<Option<usize>> = parameters
            .iter()
            .map(|parameter| {
                result
                    .subheadings
                    .iter()
                    .position(|sub| sub.parameter_names.contains(&parameter.name))
            })
            .collect();
        for (parameter, owner) in parameters.iter().zip(&owners) {
            if owner.is_none() {
                push_parameter_rows(&mut rows, parameter, patient);
            }
        }
        for (index, subheading) in result.subheadings.iter().enumerate() {
            rows.push(PrintRow::heading(subheading.title.clone()));
            for (parameter, owner) in parameters.iter().zip(&owners) {
                if *owner == Some(index) {
                    push_parameter_rows(&mut rows, parameter, patient);
                }
            }
        }
    }

    ReportSection {
        test_key: result.test_key.clone(),
        title: if result.title.is_empty() {
            result.test_key.clone()
        } else {
            result.title.clone()
        },
        rows,
    }
}

fn push_parameter_rows(rows: &mut Vec<PrintRow>, parameter: &Parameter, patient: &PatientContext) {
    rows.push(build_row(parameter, patient, RowKind::Parameter, 0));
    // Sub-parameters nest exactly one level; anything deeper is ignored.
    for sub in &parameter.subparameters {
        rows.push(build_row(sub, patient, RowKind::SubParameter, 1));
    }
}

fn build_row(
    parameter: &Parameter,
    patient: &PatientContext,
    kind: RowKind,
    depth: u8,
) -> PrintRow {
    let range = normalize_range(&resolve(&parameter.range, patient));
    let flag = classify(&parameter.value, &range);
    let name = match kind {
        RowKind::SubParameter => format!("{SUB_PARAMETER_INDENT}{}", parameter.name),
        _ => parameter.name.clone(),
    };
    PrintRow {
        kind,
        name,
        value: format_value(&parameter.value, flag),
        unit: parameter.unit.clone(),
        range,
        flag,
        depth,
    }
}

/// Replace the legacy `"/n"` authoring convention with real line breaks.
fn normalize_range(range: &str) -> String {
    range.replace("/n", "\n")
}

/// Printed value text: `"-"` when empty, flag code appended when the value
/// is numerically out of range.
fn format_value(value: &str, flag: RangeFlag) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return EMPTY_VALUE.to_string();
    }
    match flag.suffix() {
        Some(code) => format!("{trimmed} {code}"),
        None => trimmed.to_string(),
    }
}

/// Evaluate derived parameters before any row is emitted.
///
/// Bindings are sibling values at the same nesting level, as they stand
/// when the formula's parameter is reached in the sequential pass. A
/// formula that fails to evaluate leaves the stored value untouched.
fn evaluate_formulas(parameters: &[Parameter]) -> Vec<Parameter> {
    let mut evaluated: Vec<Parameter> = parameters.to_vec();
    evaluate_scope(&mut evaluated);
    for parameter in &mut evaluated {
        evaluate_scope(&mut parameter.subparameters);
    }
    evaluated
}

fn evaluate_scope(parameters: &mut [Parameter]) {
    for index in 0..parameters.len() {
        let Some(formula) = parameters[index].formula.clone() else {
            continue;
        };
        let bindings: BTreeMap<String, f64> = parameters
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .filter_map(|(_, sibling)| {
                parse_f64(&sibling.value).map(|value| (sibling.name.clone(), value))
            })
            .collect();
        match evaluate(&formula, &bindings) {
            Some(value) => parameters[index].value = format_numeric(round2(value)),
            None => {
                debug!(
                    parameter = %parameters[index].name,
                    "formula evaluation skipped, stored value retained"
                );
            }
        }
    }
}

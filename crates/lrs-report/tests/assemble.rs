//! Assembly contract tests.

use lrs_model::{
    AgeRange, Gender, Parameter, PatientContext, RangeField, RangeTable, RangeFlag, RowKind,
    Subheading, TestResult,
};
use lrs_report::{ReportSummary, assemble, assemble_test};

fn adult() -> PatientContext {
    PatientContext::from_years(35, Gender::Female)
}

fn parameter(name: &str, value: &str, range: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        unit: "g/dL".to_string(),
        value: value.to_string(),
        range: RangeField::literal(range),
        ..Parameter::default()
    }
}

fn test_result(parameters: Vec<Parameter>) -> TestResult {
    TestResult {
        test_key: "cbc".to_string(),
        title: "Complete Blood Count".to_string(),
        parameters,
        subheadings: Vec::new(),
    }
}

#[test]
fn flags_numeric_values_and_appends_codes() {
    let result = test_result(vec![
        parameter("Low", "3.9", "4.0-7.0"),
        parameter("High", "7.1", "4.0-7.0"),
        parameter("Normal", "5.5", "4.0-7.0"),
    ]);
    let section = assemble_test(&adult(), &result);

    assert_eq!(section.rows[0].flag, RangeFlag::Low);
    assert_eq!(section.rows[0].value, "3.9 L");
    assert_eq!(section.rows[1].flag, RangeFlag::High);
    assert_eq!(section.rows[1].value, "7.1 H");
    assert_eq!(section.rows[2].flag, RangeFlag::None);
    assert_eq!(section.rows[2].value, "5.5");
}

#[test]
fn non_numeric_values_never_flag() {
    let result = test_result(vec![
        parameter("Culture", "No growth", "No growth"),
        parameter("Pending", "", "4.0-7.0"),
    ]);
    let section = assemble_test(&adult(), &result);

    assert_eq!(section.rows[0].flag, RangeFlag::None);
    assert_eq!(section.rows[0].value, "No growth");
    assert_eq!(section.rows[1].value, "-");
    assert_eq!(section.rows[1].flag, RangeFlag::None);
}

#[test]
fn subheading_groups_render_after_global_set() {
    let mut result = test_result(vec![
        parameter("A", "1", ""),
        parameter("B", "2", ""),
        parameter("C", "3", ""),
    ]);
    result.subheadings = vec![Subheading {
        title: "X".to_string(),
        parameter_names: vec!["C".to_string()],
    }];
    let section = assemble_test(&adult(), &result);

    let names: Vec<&str> = section.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "X", "C"]);
    assert_eq!(section.rows[2].kind, RowKind::Heading);
}

#[test]
fn grouped_parameters_keep_stored_order() {
    let mut result = test_result(vec![
        parameter("Neutrophils", "60", ""),
        parameter("Lymphocytes", "30", ""),
        parameter("Monocytes", "5", ""),
    ]);
    // The subheading lists names in a different order than the parameter
    // array; stored order must win.
    result.subheadings = vec![Subheading {
        title: "Differential Count".to_string(),
        parameter_names: vec![
            "Monocytes".to_string(),
            "Neutrophils".to_string(),
            "Lymphocytes".to_string(),
        ],
    }];
    let section = assemble_test(&adult(), &result);

    let names: Vec<&str> = section.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(
        names,
        ["Differential Count", "Neutrophils", "Lymphocytes", "Monocytes"]
    );
}

#[test]
fn sub_parameters_render_one_level_deep() {
    let mut parent = parameter("Differential", "", "");
    parent.subparameters = vec![
        parameter("Neutrophils", "78", "40-75"),
        parameter("Lymphocytes", "20", "20-45"),
    ];
    let section = assemble_test(&adult(), &test_result(vec![parent]));

    assert_eq!(section.rows.len(), 3);
    assert_eq!(section.rows[1].kind, RowKind::SubParameter);
    assert_eq!(section.rows[1].depth, 1);
    assert_eq!(section.rows[1].name, "  - Neutrophils");
    assert_eq!(section.rows[1].flag, RangeFlag::High);
    assert_eq!(section.rows[1].value, "78 H");
    assert_eq!(section.rows[2].depth, 1);
    assert_eq!(section.rows[2].flag, RangeFlag::None);
}

#[test]
fn range_table_resolves_against_patient_context() {
    let range = RangeField::Table(RangeTable {
        male: vec![AgeRange {
            ages: "0-100y".to_string(),
            range: "13.0-17.0".to_string(),
        }],
        female: vec![AgeRange {
            ages: "0-100y".to_string(),
            range: "11.5-15.5".to_string(),
        }],
    });
    let result = test_result(vec![Parameter {
        name: "Haemoglobin".to_string(),
        unit: "g/dL".to_string(),
        value: "12.0".to_string(),
        range,
        ..Parameter::default()
    }]);

    let female = assemble_test(&adult(), &result);
    assert_eq!(female.rows[0].range, "11.5-15.5");
    assert_eq!(female.rows[0].flag, RangeFlag::None);

    let male = assemble_test(&PatientContext::from_years(35, Gender::Male), &result);
    assert_eq!(male.rows[0].range, "13.0-17.0");
    assert_eq!(male.rows[0].flag, RangeFlag::Low);
    assert_eq!(male.rows[0].value, "12.0 L");
}

#[test]
fn legacy_line_break_convention_is_normalized() {
    let result = test_result(vec![parameter(
        "Protein",
        "6.8",
        "Adult: 6.0-8.0/nChild: 5.5-7.5",
    )]);
    let section = assemble_test(&adult(), &result);

    assert_eq!(section.rows[0].range, "Adult: 6.0-8.0\nChild: 5.5-7.5");
    // Multi-line ranges are categorical; no comparison is attempted.
    assert_eq!(section.rows[0].flag, RangeFlag::None);
}

#[test]
fn formulas_derive_values_from_siblings() {
    let mut indirect = parameter("indirect", "", "0.2-0.8");
    indirect.formula = Some("total - direct".to_string());
    let result = test_result(vec![
        parameter("total", "1.2", "0.3-1.2"),
        parameter("direct", "0.3", "0.0-0.4"),
        indirect,
    ]);
    let section = assemble_test(&adult(), &result);

    assert_eq!(section.rows[2].value, "0.9 H");
    assert_eq!(section.rows[2].flag, RangeFlag::High);
}

#[test]
fn formula_results_round_to_two_decimals() {
    let mut ratio = parameter("ratio", "", "");
    ratio.formula = Some("a / b".to_string());
    let result = test_result(vec![
        parameter("a", "1", ""),
        parameter("b", "3", ""),
        ratio,
    ]);
    let section = assemble_test(&adult(), &result);

    assert_eq!(section.rows[2].value, "0.33");
}

#[test]
fn failed_formula_keeps_stored_value() {
    let mut derived = parameter("derived", "typed by hand", "");
    derived.formula = Some("missing_name * 2".to_string());
    let result = test_result(vec![parameter("a", "1", ""), derived]);
    let section = assemble_test(&adult(), &result);

    assert_eq!(section.rows[1].value, "typed by hand");
}

#[test]
fn missing_test_definition_yields_empty_section() {
    let section = assemble_test(&adult(), &TestResult::missing("widal"));
    assert!(section.rows.is_empty());
    assert_eq!(section.test_key, "widal");
    assert_eq!(section.title, "widal");
}

#[test]
fn assemble_flattens_sections_in_booking_order() {
    let first = test_result(vec![parameter("A", "1", "")]);
    let mut second = test_result(vec![parameter("B", "2", "")]);
    second.test_key = "lft".to_string();
    let rows = assemble(&adult(), &[first, second]);

    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn assembly_is_idempotent() {
    let mut derived = parameter("indirect", "", "0.2-0.8");
    derived.formula = Some("total - direct".to_string());
    let mut result = test_result(vec![
        parameter("total", "1.0", "0.3-1.2"),
        parameter("direct", "0.3", "0.0-0.4"),
        derived,
    ]);
    result.subheadings = vec![Subheading {
        title: "Bilirubin".to_string(),
        parameter_names: vec!["direct".to_string(), "indirect".to_string()],
    }];
    let results = vec![result];
    let patient = adult();

    let first = assemble(&patient, &results);
    let second = assemble(&patient, &results);
    assert_eq!(first, second);
}

#[test]
fn summary_counts_out_of_range_rows() {
    let result = test_result(vec![
        parameter("Low", "3.9", "4.0-7.0"),
        parameter("Normal", "5.0", "4.0-7.0"),
        parameter("High", "7.5", "4.0-7.0"),
    ]);
    let section = assemble_test(&adult(), &result);
    let summary = ReportSummary::from_rows(&section.rows);

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.low, 1);
    assert_eq!(summary.high, 1);
    assert_eq!(summary.out_of_range(), 2);
}

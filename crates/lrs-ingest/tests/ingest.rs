//! Projection loading and materialization tests.

use chrono::NaiveDate;

use lrs_ingest::{PatientRecord, StoredValues, TestCatalog};
use lrs_model::Gender;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).expect("report date")
}

#[test]
fn explicit_day_count_takes_precedence() {
    let record: PatientRecord = serde_json::from_str(
        r#"{"name":"A","age":40,"totalDays":25,"gender":"male","tests":[]}"#,
    )
    .expect("record");
    let ctx = record.context(report_date());
    assert_eq!(ctx.age_in_days, 25);
    assert_eq!(ctx.gender, Gender::Male);
}

#[test]
fn age_in_years_uses_365_day_years() {
    let record: PatientRecord =
        serde_json::from_str(r#"{"name":"B","age":2,"gender":"female"}"#).expect("record");
    assert_eq!(record.context(report_date()).age_in_days, 730);
}

#[test]
fn dob_is_the_last_resort() {
    let record: PatientRecord =
        serde_json::from_str(r#"{"name":"C","dob":"2026-07-07"}"#).expect("record");
    let ctx = record.context(report_date());
    assert_eq!(ctx.age_in_days, 30);
    // Absent gender selects the female sequence downstream.
    assert_eq!(ctx.gender, Gender::Female);
}

#[test]
fn empty_record_gets_age_zero() {
    let record = PatientRecord::default();
    assert_eq!(record.context(report_date()).age_in_days, 0);
}

const CATALOG: &str = r#"{
    "cbc": {
        "name": "Complete Blood Count",
        "parameters": [
            {"name": "Haemoglobin", "unit": "g/dL", "range": "11.5-15.5"},
            {
                "name": "Differential",
                "unit": "%",
                "range": "",
                "subparameters": [{"name": "Neutrophils", "unit": "%", "range": "40-75"}]
            }
        ],
        "subheadings": []
    }
}"#;

#[test]
fn catalog_materializes_booked_tests_in_order() {
    let catalog = TestCatalog::from_reader(CATALOG.as_bytes()).expect("catalog");
    let results = catalog.results_for(&["cbc".to_string()]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].test_key, "cbc");
    assert_eq!(results[0].title, "Complete Blood Count");
    assert_eq!(results[0].parameters.len(), 2);
}

#[test]
fn catalog_lookup_by_key() {
    let catalog = TestCatalog::from_reader(CATALOG.as_bytes()).expect("catalog");
    assert!(catalog.get("cbc").is_some());
    assert!(catalog.get("widal").is_none());
}

#[test]
fn missing_test_definition_degrades_to_empty_result() {
    let catalog = TestCatalog::from_reader(CATALOG.as_bytes()).expect("catalog");
    let results = catalog.results_for(&["cbc".to_string(), "widal".to_string()]);
    assert_eq!(results.len(), 2);
    assert!(results[1].parameters.is_empty());
    assert_eq!(results[1].test_key, "widal");
    assert_eq!(results[1].title, "widal");
}

#[test]
fn stored_values_apply_by_exact_name() {
    let catalog = TestCatalog::from_reader(CATALOG.as_bytes()).expect("catalog");
    let mut results = catalog.results_for(&["cbc".to_string()]);
    let values = StoredValues::from_reader(
        r#"{"cbc": {"Haemoglobin": "12.1", "Neutrophils": "68", "Unknown": "9"}}"#.as_bytes(),
    )
    .expect("values");

    values.apply(&mut results);
    assert_eq!(results[0].parameters[0].value, "12.1");
    assert_eq!(results[0].parameters[1].subparameters[0].value, "68");
    // A value naming no parameter is ignored.
    assert_eq!(results[0].parameters[1].value, "");
}

#[test]
fn values_for_other_tests_do_not_leak() {
    let catalog = TestCatalog::from_reader(CATALOG.as_bytes()).expect("catalog");
    let mut results = catalog.results_for(&["cbc".to_string()]);
    let values = StoredValues::from_reader(r#"{"lft": {"Haemoglobin": "9.9"}}"#.as_bytes())
        .expect("values");

    values.apply(&mut results);
    assert_eq!(results[0].parameters[0].value, "");
}

#[test]
fn malformed_json_surfaces_as_error() {
    assert!(TestCatalog::from_reader("{not json".as_bytes()).is_err());
    assert!(PatientRecord::from_reader("[]".as_bytes()).is_err());
}

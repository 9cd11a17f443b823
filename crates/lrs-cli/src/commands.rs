//! Subcommand implementations.

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::{debug, info, info_span};

use lrs_ingest::{PatientRecord, StoredValues, TestCatalog};
use lrs_model::PrintRow;
use lrs_report::assemble_sections;

use lrs_cli::render::{apply_table_style, render_section};

use crate::cli::{CatalogArgs, ReportArgs, ReportFormatArg};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let patient = PatientRecord::from_path(&args.patient)
        .with_context(|| format!("load patient record {}", args.patient.display()))?;
    let catalog = TestCatalog::from_path(&args.catalog)
        .with_context(|| format!("load test catalog {}", args.catalog.display()))?;

    let span = info_span!("report", patient = %patient.name);
    let _guard = span.enter();

    let report_date = args
        .report_date
        .unwrap_or_else(|| Local::now().date_naive());
    let ctx = patient.context(report_date);
    debug!(
        age_in_days = ctx.age_in_days,
        gender = %ctx.gender,
        "resolved patient context"
    );

    let mut results = catalog.results_for(&patient.tests);
    if let Some(path) = &args.values {
        let values = StoredValues::from_path(path)
            .with_context(|| format!("load stored values {}", path.display()))?;
        values.apply(&mut results);
    }

    let sections = assemble_sections(&ctx, &results);
    info!(tests = sections.len(), "assembled report");

    match args.format {
        ReportFormatArg::Table => {
            println!("Patient: {}", display_name(&patient));
            for section in &sections {
                println!();
                print!("{}", render_section(section));
            }
        }
        ReportFormatArg::Json => {
            let rows: Vec<&PrintRow> = sections.iter().flat_map(|s| &s.rows).collect();
            let text =
                serde_json::to_string_pretty(&rows).context("serialize report rows")?;
            println!("{text}");
        }
    }
    Ok(())
}

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = TestCatalog::from_path(&args.catalog)
        .with_context(|| format!("load test catalog {}", args.catalog.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["Key", "Test", "Parameters"]);
    apply_table_style(&mut table);
    for (key, definition) in &catalog.tests {
        table.add_row(vec![
            key.clone(),
            definition.name.clone(),
            definition.parameters.len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn display_name(patient: &PatientRecord) -> &str {
    if patient.name.is_empty() {
        "-"
    } else {
        &patient.name
    }
}

//! CLI argument definitions for the lab report tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lrs",
    version,
    about = "Lab Report Studio - assemble diagnostic lab reports",
    long_about = "Assemble print-ready diagnostic lab reports.\n\n\
                  Resolves age/gender reference ranges, computes derived\n\
                  parameters, flags out-of-range results, and renders the\n\
                  report rows as a table or as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble and print a patient's lab report.
    Report(ReportArgs),

    /// List the test definitions in a catalog.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the patient record JSON.
    #[arg(value_name = "PATIENT")]
    pub patient: PathBuf,

    /// Path to the test catalog JSON.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: PathBuf,

    /// Path to stored parameter values JSON.
    #[arg(long = "values", value_name = "PATH")]
    pub values: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Reporting date for date-of-birth age derivation (default: today).
    #[arg(long = "report-date", value_name = "YYYY-MM-DD")]
    pub report_date: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Path to the test catalog JSON.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

/// Report output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

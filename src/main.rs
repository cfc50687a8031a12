//! Transaction Report CLI
//!
//! Reads a payment transaction CSV and prints a summary report to
//! stdout, as text or JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv
//! cargo run -- transactions.csv --format json
//! cargo run -- transactions.csv --verbose
//! ```
//!
//! # Exit Codes
//!
//! - `0`: report printed
//! - `1`: bad command-line arguments
//! - `2`: input file not found
//! - `3`: the file could not be read or rendered
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::process;
use txn_report::format::{self, OutputFormat};
use txn_report::{generate_structured_report, ReportError, Result};

const USAGE: &str = "Usage: txn-report <transactions.csv> [--format text|json] [--verbose]";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1).collect())?;

    let report = generate_structured_report(&args.csv_path)?;

    if args.verbose {
        eprintln!(
            "# diagnostics: rows_read={} rows_invalid={} duration_s={:.6}",
            report.meta.rows_read, report.meta.rows_invalid, report.meta.duration_seconds
        );
    }

    println!("{}", format::render(&report, args.format)?);
    Ok(())
}

/// Parsed command-line arguments.
struct CliArgs {
    csv_path: String,
    format: OutputFormat,
    verbose: bool,
}

impl CliArgs {
    fn parse(args: Vec<String>) -> Result<CliArgs> {
        let mut csv_path: Option<String> = None;
        let mut format = OutputFormat::Text;
        let mut verbose = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "-h" || arg == "--help" {
                println!("{}", USAGE);
                process::exit(0);
            } else if arg == "-v" || arg == "--verbose" {
                verbose = true;
            } else if arg == "-f" || arg == "--format" {
                let value = args.next().ok_or_else(|| {
                    ReportError::InvalidArguments(format!("{} requires a value. {}", arg, USAGE))
                })?;
                format = value.parse()?;
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = value.parse()?;
            } else if arg.starts_with('-') {
                return Err(ReportError::InvalidArguments(format!(
                    "unrecognized argument `{}`. {}",
                    arg, USAGE
                )));
            } else if csv_path.is_some() {
                return Err(ReportError::InvalidArguments(format!(
                    "unexpected extra argument `{}`. {}",
                    arg, USAGE
                )));
            } else {
                csv_path = Some(arg);
            }
        }

        let csv_path = csv_path.ok_or_else(|| {
            ReportError::InvalidArguments(format!("missing input file. {}", USAGE))
        })?;

        Ok(CliArgs {
            csv_path,
            format,
            verbose,
        })
    }
}

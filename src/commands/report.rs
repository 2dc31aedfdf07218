//! Report command implementation.
//!
//! The report command:
//! 1. Reads and decodes the log file
//! 2. Classifies records against the endpoint catalog
//! 3. Aggregates per-endpoint statistics
//! 4. Writes the JSON report (if requested)

use crate::aggregator::{build_report, Report};
use crate::output::{validate_output_path, write_report};
use crate::parser::{parse_log_file, MalformedPolicy, ParseOptions};
use crate::router::{classify_all, EndpointCatalog};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Router log file to analyze
    pub log_file: PathBuf,

    /// Fail-fast (default) or skip malformed lines
    pub malformed: MalformedPolicy,

    /// Output path for a JSON copy of the report (optional)
    pub json_output: Option<PathBuf>,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written unless the whole run succeeds. The caller renders
/// the returned report to the console.
///
/// # Errors
/// * Log file missing or unreadable
/// * Malformed candidate line (fail-fast mode)
/// * JSON write errors
pub fn execute_report(args: &ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Building report for: {}", args.log_file.display());

    // Step 1: Parse log file
    info!("Step 1/4: Parsing log file...");
    let options = ParseOptions {
        malformed: args.malformed,
    };
    let mut parsed = parse_log_file(&args.log_file, &options).context(format!(
        "Failed to parse log file {}",
        args.log_file.display()
    ))?;

    // Step 2: Classify records
    info!("Step 2/4: Classifying {} records...", parsed.records.len());
    let catalog =
        EndpointCatalog::default_catalog().context("Failed to compile endpoint catalog")?;
    let buckets = classify_all(std::mem::take(&mut parsed.records), &catalog);

    debug!(
        "{} classified, {} dropped, {} malformed skipped",
        buckets.classified(),
        buckets.dropped,
        parsed.skipped_malformed
    );

    // Step 3: Aggregate
    info!("Step 3/4: Aggregating {} endpoints...", catalog.len());
    let source = args.log_file.display().to_string();
    let report = build_report(&source, &parsed, &buckets, &catalog);

    // Step 4: Write JSON (if requested)
    if let Some(json_path) = &args.json_output {
        info!("Step 4/4: Writing JSON report...");
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", json_path.display());
    } else {
        info!("Step 4/4: Skipping JSON report (not requested)");
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.log_file.as_os_str().is_empty() {
        anyhow::bail!("Log file path cannot be empty");
    }

    if !args.log_file.is_file() {
        anyhow::bail!("Log file does not exist: {}", args.log_file.display());
    }

    if let Some(json_path) = &args.json_output {
        validate_output_path(json_path).context("Invalid JSON output path")?;
    }

    Ok(())
}

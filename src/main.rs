//! Router Log Stats CLI
//!
//! Reads a router access log and prints per-endpoint latency statistics.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use router_log_stats::commands::{execute_report, validate_args, ReportArgs};
use router_log_stats::output::render_report;
use router_log_stats::parser::MalformedPolicy;
use std::path::PathBuf;

/// Router Log Stats - per-endpoint latency from router access logs
#[derive(Parser, Debug)]
#[command(name = "router-log-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Router log file to analyze
    log_file: PathBuf,

    /// Skip malformed lines with a warning instead of aborting
    #[arg(long, env = "ROUTER_LOG_STATS_SKIP_MALFORMED")]
    skip_malformed: bool,

    /// Also write the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReportArgs {
        log_file: cli.log_file,
        malformed: if cli.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::FailFast
        },
        json_output: cli.json,
    };

    // Validate args first
    validate_args(&args)?;

    let report = execute_report(&args)?;
    print!("{}", render_report(&report));

    Ok(())
}

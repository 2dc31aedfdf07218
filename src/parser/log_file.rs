//! Log file reader.
//!
//! Reads a router log line by line, filters out non-candidate lines and
//! decodes the rest into [`LogRecord`]s.

use super::record::{decode_record, is_candidate, LogRecord};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What to do with a candidate line that fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Abort the whole parse on the first bad line
    #[default]
    FailFast,
    /// Log a warning, count the line and carry on
    Skip,
}

/// Options for parsing a log file
///
/// **Public** - passed in by the report command
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub malformed: MalformedPolicy,
}

/// Result of parsing a log file
///
/// **Public** - records plus counters for the report
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    /// Decoded records, in file order
    pub records: Vec<LogRecord>,

    /// Number of lines read
    pub total_lines: usize,

    /// Lines that passed the path pre-filter
    pub candidate_lines: usize,

    /// Candidate lines dropped under `MalformedPolicy::Skip`
    pub skipped_malformed: usize,
}

/// Parse a log file from disk
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `path` - Path to the log file
/// * `options` - Parse options (malformed-line policy)
///
/// # Errors
/// * `ParseError::FileNotFound` - Path does not exist or is not a regular file
/// * `ParseError::Io` - Read failure
/// * `ParseError::MalformedRecord` - A candidate line failed to decode (fail-fast only)
pub fn parse_log_file(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<ParsedLog, ParseError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(ParseError::FileNotFound(path.to_path_buf()));
    }

    info!("Parsing log file: {}", path.display());

    let file = File::open(path)?;
    let parsed = parse_log_lines(BufReader::new(file), options)?;

    info!(
        "Decoded {} records from {} lines ({} candidates)",
        parsed.records.len(),
        parsed.total_lines,
        parsed.candidate_lines
    );

    Ok(parsed)
}

/// Parse log lines from any buffered reader
///
/// **Public** - used by parse_log_file and by tests with in-memory input
pub fn parse_log_lines<R: BufRead>(
    reader: R,
    options: &ParseOptions,
) -> Result<ParsedLog, ParseError> {
    let mut parsed = ParsedLog::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        parsed.total_lines += 1;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if !is_candidate(&tokens) {
            continue;
        }
        parsed.candidate_lines += 1;

        match decode_record(&tokens) {
            Ok(record) => parsed.records.push(record),
            Err(source) => match options.malformed {
                MalformedPolicy::FailFast => {
                    return Err(ParseError::MalformedRecord {
                        line: line_number,
                        source,
                    });
                }
                MalformedPolicy::Skip => {
                    warn!("Skipping malformed record on line {}: {}", line_number, source);
                    parsed.skipped_malformed += 1;
                }
            },
        }
    }

    debug!(
        "Parsed {} lines, {} skipped as malformed",
        parsed.total_lines, parsed.skipped_malformed
    );

    Ok(parsed)
}

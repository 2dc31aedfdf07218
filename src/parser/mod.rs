//! Router log parsing.
//!
//! This module handles:
//! - Filtering lines down to `/api/users/` requests
//! - Decoding each line into a `LogRecord`
//! - Fail-fast or skip-and-warn handling of malformed lines

pub mod log_file;
pub mod record;

// Re-export main types
pub use log_file::{parse_log_file, parse_log_lines, MalformedPolicy, ParseOptions, ParsedLog};
pub use record::{decode_record, is_candidate, LogRecord};

//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding a single log line into a record
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("missing field '{key}' at token {index}")]
    MissingField { index: usize, key: &'static str },

    #[error("expected '{key}' prefix, found '{token}'")]
    MissingPrefix { key: &'static str, token: String },

    #[error("invalid number for '{key}': '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("response time out of range: connect={connect}ms service={service}ms")]
    TimingOverflow { connect: u64, service: u64 },
}

/// Errors that can occur while reading and parsing a log file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Log file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Errors that can occur while compiling the endpoint catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid path template '{template}': {source}")]
    InvalidTemplate {
        template: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

//! Router Log Stats
//!
//! Per-endpoint latency statistics from Heroku-style router access logs.
//!
//! The pipeline is: parse lines into records, classify each record against
//! a fixed catalog of `/api/users/` endpoints, then report mean, median and
//! mode response time plus the most active worker per endpoint.
//!
//! ## Getting Started
//!
//! ```bash
//! router-log-stats path/to/router.log
//! router-log-stats --json report.json --skip-malformed path/to/router.log
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod router;
pub mod utils;

//! Aggregation of classified records into endpoint statistics.
//!
//! This module turns per-endpoint record buckets into:
//! - Mean / median / mode response times
//! - The most active worker per endpoint
//! - A versioned report covering every catalog endpoint

pub mod metrics;
pub mod summary;

// Re-export main types and functions
pub use metrics::{mean_response, median_response, mode_dyno, mode_response, round_one_decimal};
pub use summary::{build_report, summarize_endpoint, EndpointSummary, Report};

//! Per-endpoint summaries and the full report.
//!
//! The report is what gets printed to the console and, optionally,
//! written to disk as JSON. Schema is versioned like the rest of the output.

use super::metrics::{mean_response, median_response, mode_dyno, mode_response};
use crate::parser::{LogRecord, ParsedLog};
use crate::router::{EndpointBuckets, EndpointCatalog, EndpointSpec};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use log::debug;
use serde::{Deserialize, Serialize};

/// Statistics for one endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointSummary {
    /// HTTP verb
    pub method: String,

    /// Path template, e.g. `/api/users/{user_id}`
    pub path: String,

    /// Number of requests classified to this endpoint
    pub calls: usize,

    pub mean_response_ms: f64,
    pub median_response_ms: f64,
    pub mode_response_ms: u64,

    /// Worker that served the most requests (None if never called)
    pub most_active_dyno: Option<String>,
}

/// Top-level report structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Log file the report was built from
    pub source: String,

    /// Lines read from the log
    pub total_lines: usize,

    /// Lines that passed the `/api/users/` filter
    pub candidate_lines: usize,

    /// Candidate lines skipped as malformed
    pub skipped_malformed: usize,

    /// Records assigned to an endpoint
    pub classified: usize,

    /// Records that matched no endpoint
    pub dropped: usize,

    /// One entry per catalog endpoint, in catalog order
    pub endpoints: Vec<EndpointSummary>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Summarize the records of a single endpoint
///
/// **Public** - used by build_report, handy on its own in tests
pub fn summarize_endpoint(spec: &EndpointSpec, records: &[LogRecord]) -> EndpointSummary {
    EndpointSummary {
        method: spec.method().to_string(),
        path: spec.path_template().to_string(),
        calls: records.len(),
        mean_response_ms: mean_response(records),
        median_response_ms: median_response(records),
        mode_response_ms: mode_response(records),
        most_active_dyno: mode_dyno(records),
    }
}

/// Build the full report
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `source` - Display name of the log file
/// * `parsed` - Parse counters (its records are not read here)
/// * `buckets` - Classified records, one bucket per catalog entry
/// * `catalog` - The catalog the buckets were built against
pub fn build_report(
    source: &str,
    parsed: &ParsedLog,
    buckets: &EndpointBuckets,
    catalog: &EndpointCatalog,
) -> Report {
    let endpoints: Vec<EndpointSummary> = catalog
        .iter()
        .zip(&buckets.buckets)
        .map(|(spec, records)| summarize_endpoint(spec, records))
        .collect();

    debug!("Summarized {} endpoints", endpoints.len());

    Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        total_lines: parsed.total_lines,
        candidate_lines: parsed.candidate_lines,
        skipped_malformed: parsed.skipped_malformed,
        classified: buckets.classified(),
        dropped: buckets.dropped,
        endpoints,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::classify_all;

    #[test]
    fn test_summarize_endpoint() {
        let spec = EndpointSpec::new("GET", "/api/users/{user_id}").unwrap();
        let records = vec![
            LogRecord::new("GET", "/api/users/1", "web.2", 1, 9),
            LogRecord::new("GET", "/api/users/2", "web.1", 2, 18),
            LogRecord::new("GET", "/api/users/3", "web.1", 0, 10),
        ];

        let summary = summarize_endpoint(&spec, &records);

        assert_eq!(summary.calls, 3);
        assert_eq!(summary.mean_response_ms, 13.3);
        assert_eq!(summary.median_response_ms, 10.0);
        assert_eq!(summary.mode_response_ms, 10);
        assert_eq!(summary.most_active_dyno.as_deref(), Some("web.1"));
    }

    #[test]
    fn test_build_report_keeps_catalog_order() {
        let catalog = EndpointCatalog::default_catalog().unwrap();
        let records = vec![LogRecord::new("POST", "/api/users/9", "web.4", 3, 4)];
        let parsed = ParsedLog {
            records: Vec::new(),
            total_lines: 5,
            candidate_lines: 1,
            skipped_malformed: 0,
        };
        let buckets = classify_all(records, &catalog);

        let report = build_report("test.log", &parsed, &buckets, &catalog);

        assert_eq!(report.version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.endpoints.len(), 6);
        assert_eq!(report.endpoints[4].method, "POST");
        assert_eq!(report.endpoints[4].calls, 1);
        assert_eq!(report.endpoints[4].mode_response_ms, 7);
        assert_eq!(report.endpoints[0].calls, 0);
        assert_eq!(report.endpoints[0].most_active_dyno, None);
        assert_eq!(report.classified, 1);
        assert_eq!(report.total_lines, 5);
    }
}

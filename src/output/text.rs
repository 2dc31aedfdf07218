//! Console report renderer.

use crate::aggregator::{EndpointSummary, Report};

const SEPARATOR_WIDTH: usize = 62;

/// Render the per-endpoint report as plain text
///
/// **Public** - printed to stdout by the report command
///
/// One block per endpoint, in catalog order. Endpoints that were never
/// called still get a block with zeroed statistics and `none` as worker.
pub fn render_report(report: &Report) -> String {
    report.endpoints.iter().map(render_endpoint).collect()
}

fn render_endpoint(summary: &EndpointSummary) -> String {
    format!(
        "Endpoint:          {} {}\n\
         Called:            {} times\n\
         Mean response:     {:.1} ms\n\
         Median response:   {:.1} ms\n\
         Mode response:     {} ms\n\
         Most active Dyno:  {}\n\
         {}\n",
        summary.method,
        summary.path,
        summary.calls,
        summary.mean_response_ms,
        summary.median_response_ms,
        summary.mode_response_ms,
        summary.most_active_dyno.as_deref().unwrap_or("none"),
        "-".repeat(SEPARATOR_WIDTH)
    )
}

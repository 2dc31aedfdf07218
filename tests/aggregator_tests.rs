use router_log_stats::aggregator::metrics::{
    mean_response, median_response, mode_dyno, mode_response,
};
use router_log_stats::parser::{parse_log_file, ParseOptions};

const FIXTURE: &str = "tests/fixtures/router.log";

#[test]
fn test_fixture_mean_response() {
    let parsed = parse_log_file(FIXTURE, &ParseOptions::default()).unwrap();
    assert_eq!(mean_response(&parsed.records), 76.8);
}

#[test]
fn test_fixture_median_response() {
    let parsed = parse_log_file(FIXTURE, &ParseOptions::default()).unwrap();
    assert_eq!(median_response(&parsed.records), 36.5);
}

#[test]
fn test_fixture_mode_response() {
    let parsed = parse_log_file(FIXTURE, &ParseOptions::default()).unwrap();
    assert_eq!(mode_response(&parsed.records), 18);
}

#[test]
fn test_fixture_mode_dyno() {
    let parsed = parse_log_file(FIXTURE, &ParseOptions::default()).unwrap();
    assert_eq!(mode_dyno(&parsed.records), Some("web.1".to_string()));
}

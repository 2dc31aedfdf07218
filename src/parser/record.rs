//! Decoding of a single router log line into a [`LogRecord`].
//!
//! A line is first split on whitespace. Fields live at fixed token positions
//! and carry a `key=` prefix (and an `ms` unit for timings) that is stripped here.

use crate::utils::config::{
    CANDIDATE_PATH_PREFIX, CONNECT_INDEX, CONNECT_KEY, DYNO_INDEX, DYNO_KEY, METHOD_INDEX,
    METHOD_KEY, MILLIS_SUFFIX, PATH_INDEX, PATH_KEY, SERVICE_INDEX, SERVICE_KEY,
};
use crate::utils::error::RecordError;

/// One decoded request from the router log
///
/// **Public** - produced by the parser, consumed by the classifier and aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    method: String,
    path: String,
    dyno: String,
    connect_ms: u64,
    service_ms: u64,
}

impl LogRecord {
    /// Create a new record
    ///
    /// **Public** - constructor
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        dyno: impl Into<String>,
        connect_ms: u64,
        service_ms: u64,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            dyno: dyno.into(),
            connect_ms,
            service_ms,
        }
    }

    /// HTTP verb, e.g. `GET`
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request path as logged
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Worker process that served the request
    pub fn dyno(&self) -> &str {
        &self.dyno
    }

    pub fn connect_ms(&self) -> u64 {
        self.connect_ms
    }

    pub fn service_ms(&self) -> u64 {
        self.service_ms
    }

    /// Total response time (connect + service)
    ///
    /// Always derived from its inputs, never stored.
    pub fn response_time_ms(&self) -> u64 {
        self.connect_ms.saturating_add(self.service_ms)
    }
}

/// Check whether a split line should be decoded at all
///
/// **Public** - pre-filter applied before [`decode_record`]
///
/// Only lines whose path token begins with `path=/api/users/` qualify.
/// Short or blank lines simply do not qualify.
pub fn is_candidate(tokens: &[&str]) -> bool {
    tokens
        .get(PATH_INDEX)
        .is_some_and(|token| token.starts_with(CANDIDATE_PATH_PREFIX))
}

/// Decode a split log line into a record
///
/// **Public** - main entry point for line decoding
///
/// # Arguments
/// * `tokens` - Whitespace-separated tokens of one log line
///
/// # Errors
/// * `RecordError::MissingField` - Line is too short
/// * `RecordError::MissingPrefix` - Token at a field position has the wrong key
/// * `RecordError::InvalidNumber` - Timing field is not a non-negative integer
/// * `RecordError::TimingOverflow` - connect + service does not fit in a u64
pub fn decode_record(tokens: &[&str]) -> Result<LogRecord, RecordError> {
    let method = strip_key(tokens, METHOD_INDEX, METHOD_KEY)?;
    let path = strip_key(tokens, PATH_INDEX, PATH_KEY)?;
    let dyno = strip_key(tokens, DYNO_INDEX, DYNO_KEY)?;
    let connect_ms = parse_millis(tokens, CONNECT_INDEX, CONNECT_KEY)?;
    let service_ms = parse_millis(tokens, SERVICE_INDEX, SERVICE_KEY)?;

    if connect_ms.checked_add(service_ms).is_none() {
        return Err(RecordError::TimingOverflow {
            connect: connect_ms,
            service: service_ms,
        });
    }

    Ok(LogRecord::new(method, path, dyno, connect_ms, service_ms))
}

/// Fetch the token at `index` and strip its `key` prefix
///
/// **Private** - internal helper for decode_record
fn strip_key<'a>(
    tokens: &[&'a str],
    index: usize,
    key: &'static str,
) -> Result<&'a str, RecordError> {
    let token: &'a str = tokens
        .get(index)
        .copied()
        .ok_or(RecordError::MissingField { index, key })?;

    token.strip_prefix(key).ok_or_else(|| RecordError::MissingPrefix {
        key,
        token: token.to_string(),
    })
}

/// Parse a `key=<N>ms` timing token into milliseconds
///
/// **Private** - internal helper for decode_record
fn parse_millis(tokens: &[&str], index: usize, key: &'static str) -> Result<u64, RecordError> {
    let raw = strip_key(tokens, index, key)?;
    let digits = raw.strip_suffix(MILLIS_SUFFIX).unwrap_or(raw);

    digits.parse::<u64>().map_err(|_| RecordError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "2014-01-09T06:16:53.916977+00:00 heroku[router]: at=info method=GET \
        path=/api/users/5 host=services.example.com fwd=\"1.2.3.4\" dyno=web.3 connect=7ms \
        service=12ms status=200 bytes=33";

    fn split(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn test_decode_record() {
        let record = decode_record(&split(LINE)).unwrap();

        assert_eq!(record.method(), "GET");
        assert_eq!(record.path(), "/api/users/5");
        assert_eq!(record.dyno(), "web.3");
        assert_eq!(record.connect_ms(), 7);
        assert_eq!(record.service_ms(), 12);
        assert_eq!(record.response_time_ms(), 19);
    }

    #[test]
    fn test_is_candidate() {
        assert!(is_candidate(&split(LINE)));

        let other = LINE.replace("path=/api/users/5", "path=/api/other/thing");
        assert!(!is_candidate(&split(&other)));

        assert!(!is_candidate(&split("")));
        assert!(!is_candidate(&split("a b c")));
    }

    #[test]
    fn test_millis_without_unit() {
        let line = LINE.replace("connect=7ms", "connect=7");
        let record = decode_record(&split(&line)).unwrap();
        assert_eq!(record.connect_ms(), 7);
    }

    #[test]
    fn test_decode_non_numeric() {
        let line = LINE.replace("service=12ms", "service=fastms");
        let err = decode_record(&split(&line)).unwrap_err();
        assert!(matches!(err, RecordError::InvalidNumber { key: "service=", .. }));
    }

    #[test]
    fn test_decode_negative_rejected() {
        let line = LINE.replace("connect=7ms", "connect=-7ms");
        assert!(decode_record(&split(&line)).is_err());
    }

    #[test]
    fn test_decode_timing_overflow() {
        let line = LINE.replace("connect=7ms", "connect=18446744073709551615ms");
        let err = decode_record(&split(&line)).unwrap_err();
        assert!(matches!(err, RecordError::TimingOverflow { service: 12, .. }));

        let line = LINE.replace("connect=7ms", "connect=18446744073709551603ms");
        let record = decode_record(&split(&line)).unwrap();
        assert_eq!(record.response_time_ms(), u64::MAX);
    }

    #[test]
    fn test_decode_truncated_line() {
        let tokens: Vec<&str> = split(LINE).into_iter().take(8).collect();
        let err = decode_record(&tokens).unwrap_err();
        assert!(matches!(err, RecordError::MissingField { index: 8, .. }));
    }

    #[test]
    fn test_decode_wrong_key() {
        let line = LINE.replace("dyno=web.3", "worker=web.3");
        let err = decode_record(&split(&line)).unwrap_err();
        assert!(matches!(err, RecordError::MissingPrefix { key: "dyno=", .. }));
    }
}

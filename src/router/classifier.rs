//! Assign decoded records to catalog endpoints.
//!
//! A record goes to the first endpoint (in catalog order) whose method and
//! path matcher both match. Records matching nothing are dropped.

use super::endpoint::EndpointCatalog;
use crate::parser::LogRecord;
use log::{debug, trace};

/// Records grouped per catalog entry
///
/// **Public** - input to the aggregator
#[derive(Debug, Clone, Default)]
pub struct EndpointBuckets {
    /// One bucket per catalog entry, same order as the catalog
    pub buckets: Vec<Vec<LogRecord>>,

    /// Records that matched no endpoint
    pub dropped: usize,
}

impl EndpointBuckets {
    /// Records assigned to any endpoint
    pub fn classified(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Find the endpoint a record belongs to
///
/// **Public** - single-record classification
///
/// # Returns
/// Index of the first matching catalog entry, or `None`
pub fn classify(record: &LogRecord, catalog: &EndpointCatalog) -> Option<usize> {
    catalog
        .iter()
        .position(|spec| spec.matches(record.method(), record.path()))
}

/// Classify every record into per-endpoint buckets
///
/// **Public** - main entry point for classification
///
/// # Arguments
/// * `records` - Decoded records; each ends up in at most one bucket
/// * `catalog` - Compiled endpoint catalog
pub fn classify_all(records: Vec<LogRecord>, catalog: &EndpointCatalog) -> EndpointBuckets {
    let mut result = EndpointBuckets {
        buckets: vec![Vec::new(); catalog.len()],
        dropped: 0,
    };

    for record in records {
        match classify(&record, catalog) {
            Some(index) => result.buckets[index].push(record),
            None => {
                trace!("No endpoint for {} {}", record.method(), record.path());
                result.dropped += 1;
            }
        }
    }

    debug!(
        "Classified {} records, dropped {}",
        result.classified(),
        result.dropped
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(method: &str, path: &str) -> LogRecord {
        LogRecord::new(method, path, "web.1", 1, 1)
    }

    #[test]
    fn test_classify_default_catalog() {
        let catalog = EndpointCatalog::default_catalog().unwrap();

        assert_eq!(classify(&record("GET", "/api/users/42"), &catalog), Some(5));
        assert_eq!(classify(&record("POST", "/api/users/42"), &catalog), Some(4));
        assert_eq!(
            classify(&record("GET", "/api/users/42/get_messages"), &catalog),
            Some(1)
        );
        assert_eq!(
            classify(&record("GET", "/api/users/42/get_friends_score"), &catalog),
            Some(3)
        );
    }

    #[test]
    fn test_classify_no_match() {
        let catalog = EndpointCatalog::default_catalog().unwrap();

        assert_eq!(classify(&record("PUT", "/api/users/42"), &catalog), None);
        assert_eq!(classify(&record("GET", "/api/users/abc"), &catalog), None);
        assert_eq!(
            classify(&record("POST", "/api/users/42/get_messages"), &catalog),
            None
        );
    }

    #[test]
    fn test_classify_first_match_wins() {
        let catalog = EndpointCatalog::from_specs([
            ("GET", "/api/users/{user_id}"),
            ("GET", "/api/users/7"),
            ("GET", "/api/users/{user_id}"),
        ])
        .unwrap();

        assert_eq!(classify(&record("GET", "/api/users/7"), &catalog), Some(0));
    }

    #[test]
    fn test_classify_all_buckets() {
        let catalog = EndpointCatalog::default_catalog().unwrap();
        let records = vec![
            record("GET", "/api/users/1"),
            record("GET", "/api/users/2/get_messages"),
            record("DELETE", "/api/users/3"),
            record("GET", "/api/users/4"),
        ];

        let buckets = classify_all(records, &catalog);

        assert_eq!(buckets.buckets.len(), 6);
        assert_eq!(buckets.buckets[5].len(), 2);
        assert_eq!(buckets.buckets[1].len(), 1);
        assert_eq!(buckets.dropped, 1);
        assert_eq!(buckets.classified(), 3);
    }
}

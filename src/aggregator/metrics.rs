//! Latency and worker statistics over a set of records.
//!
//! All functions are pure and return a neutral value for empty input.
//! Fractional results are rounded to one decimal place, half away from zero.

use crate::parser::LogRecord;
use std::collections::HashMap;
use std::hash::Hash;

/// Round to one decimal place, half away from zero
///
/// **Public** - shared by mean and median
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean response time in milliseconds
///
/// **Public** - 0.0 for an empty slice
pub fn mean_response(records: &[LogRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let total: u128 = records
        .iter()
        .map(|r| u128::from(r.response_time_ms()))
        .sum();
    round_one_decimal(total as f64 / records.len() as f64)
}

/// Median response time in milliseconds
///
/// **Public** - 0.0 for an empty slice
///
/// Odd counts return the middle value; even counts the mean of the two
/// central values.
pub fn median_response(records: &[LogRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    // Stable sort keyed on response time only
    let mut times: Vec<u64> = records.iter().map(LogRecord::response_time_ms).collect();
    times.sort();

    let mid = times.len() / 2;
    if times.len() % 2 == 0 {
        round_one_decimal((times[mid - 1] as f64 + times[mid] as f64) / 2.0)
    } else {
        times[mid] as f64
    }
}

/// Most frequent response time in milliseconds
///
/// **Public** - 0 for an empty slice
pub fn mode_response(records: &[LogRecord]) -> u64 {
    mode_of(records.iter().map(LogRecord::response_time_ms)).unwrap_or(0)
}

/// Most frequent worker identifier
///
/// **Public** - None for an empty slice
pub fn mode_dyno(records: &[LogRecord]) -> Option<String> {
    mode_of(records.iter().map(LogRecord::dyno)).map(str::to_string)
}

/// Most frequent item of a sequence
///
/// **Private** - shared by the mode functions
///
/// Ties go to the value that first appeared earliest in the sequence.
/// Distinct values are kept in insertion order next to the counts, so the
/// result does not depend on hash iteration order.
fn mode_of<T, I>(items: I) -> Option<T>
where
    T: Eq + Hash + Copy,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut seen: Vec<T> = Vec::new();

    for item in items {
        let count = counts.entry(item).or_insert_with(|| {
            seen.push(item);
            0
        });
        *count += 1;
    }

    let top = counts.values().copied().max()?;
    seen.into_iter().find(|item| counts[item] == top)
}

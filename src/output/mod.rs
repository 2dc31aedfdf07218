//! Report emitters.
//!
//! - Plain-text console report
//! - JSON report files

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_output_path, write_report};
pub use text::render_report;

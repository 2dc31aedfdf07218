//! Endpoint catalog and request classification.

pub mod classifier;
pub mod endpoint;

pub use classifier::{classify, classify_all, EndpointBuckets};
pub use endpoint::{compile_template, EndpointCatalog, EndpointSpec};

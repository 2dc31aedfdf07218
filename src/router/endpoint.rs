//! Endpoint catalog.
//!
//! Each endpoint is an HTTP method plus a path template such as
//! `/api/users/{user_id}/get_messages`. Templates are compiled once into
//! anchored regexes where `{user_id}` matches one or more ASCII digits.

use crate::utils::config::{DEFAULT_ENDPOINTS, USER_ID_PATTERN, USER_ID_PLACEHOLDER};
use crate::utils::error::CatalogError;
use log::debug;
use regex::Regex;

/// A single API endpoint with its compiled path matcher
///
/// **Public** - entries of [`EndpointCatalog`]
#[derive(Debug, Clone)]
pub struct EndpointSpec {
    method: String,
    path_template: String,
    matcher: Regex,
}

impl EndpointSpec {
    /// Build an endpoint, compiling its template
    ///
    /// **Public** - constructor
    pub fn new(
        method: impl Into<String>,
        path_template: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let path_template = path_template.into();
        let matcher = compile_template(&path_template)?;

        Ok(Self {
            method: method.into(),
            path_template,
            matcher,
        })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// True if `method` is this endpoint's verb and `path` matches the whole template
    pub fn matches(&self, method: &str, path: &str) -> bool {
        self.method == method && self.matcher.is_match(path)
    }
}

/// Compile a path template into an anchored regex
///
/// **Public** - used by EndpointSpec::new
///
/// Literal parts of the template are escaped; each `{user_id}` becomes
/// `[0-9]+`. The result only matches the complete path.
///
/// # Example
/// ```ignore
/// let rx = compile_template("/api/users/{user_id}")?;
/// assert!(rx.is_match("/api/users/42"));
/// assert!(!rx.is_match("/api/users/42/get_messages"));
/// ```
pub fn compile_template(template: &str) -> Result<Regex, CatalogError> {
    let body = template
        .split(USER_ID_PLACEHOLDER)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(USER_ID_PATTERN);
    let pattern = format!("^{}$", body);

    debug!("Compiled template {} -> {}", template, pattern);

    Regex::new(&pattern).map_err(|source| CatalogError::InvalidTemplate {
        template: template.to_string(),
        source,
    })
}

/// Ordered list of endpoints; earlier entries win when several match
///
/// **Public** - consulted by the classifier
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    specs: Vec<EndpointSpec>,
}

impl EndpointCatalog {
    /// Build a catalog from (method, template) pairs, preserving their order
    pub fn from_specs<I, M, P>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (M, P)>,
        M: Into<String>,
        P: Into<String>,
    {
        let specs = entries
            .into_iter()
            .map(|(method, template)| EndpointSpec::new(method, template))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { specs })
    }

    /// The fixed set of `/api/users/` endpoints reported on
    pub fn default_catalog() -> Result<Self, CatalogError> {
        Self::from_specs(DEFAULT_ENDPOINTS.iter().copied())
    }

    pub fn get(&self, index: usize) -> Option<&EndpointSpec> {
        self.specs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

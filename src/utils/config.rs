//! Configuration and constants for the CLI.
//!
//! Token positions and key prefixes describe the Heroku router log format:
//!
//! ```text
//! <ts> heroku[router]: at=info method=GET path=/api/users/1/get_messages host=.. fwd=".." dyno=web.1 connect=1ms service=20ms status=200 bytes=33
//! ```

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Token indices in a whitespace-split log line
pub const METHOD_INDEX: usize = 3;
pub const PATH_INDEX: usize = 4;
pub const DYNO_INDEX: usize = 7;
pub const CONNECT_INDEX: usize = 8;
pub const SERVICE_INDEX: usize = 9;

// Key prefixes stripped from the tokens above
pub const METHOD_KEY: &str = "method=";
pub const PATH_KEY: &str = "path=";
pub const DYNO_KEY: &str = "dyno=";
pub const CONNECT_KEY: &str = "connect=";
pub const SERVICE_KEY: &str = "service=";

/// Unit marker trailing the timing fields
pub const MILLIS_SUFFIX: &str = "ms";

/// Only lines whose path token starts with this are decoded
pub const CANDIDATE_PATH_PREFIX: &str = "path=/api/users/";

/// Placeholder used in endpoint path templates
pub const USER_ID_PLACEHOLDER: &str = "{user_id}";

/// Pattern substituted for the placeholder when compiling a template
pub const USER_ID_PATTERN: &str = "[0-9]+";

/// Endpoints reported on, in match-priority order
pub const DEFAULT_ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/api/users/{user_id}/count_pending_messages"),
    ("GET", "/api/users/{user_id}/get_messages"),
    ("GET", "/api/users/{user_id}/get_friends_progress"),
    ("GET", "/api/users/{user_id}/get_friends_score"),
    ("POST", "/api/users/{user_id}"),
    ("GET", "/api/users/{user_id}"),
];

//! Typed failures surfaced by a diff run
//!
//! Most code paths return `anyhow::Result`; these variants are the ones a caller
//! may want to tell apart (bad input vs. missing config vs. remote rejection).

use thiserror::Error;

/// Maximum number of response-body characters kept on an API error
pub const BODY_PREVIEW_CHARS: usize = 1000;
/// Maximum number of query characters kept on an API error
pub const QUERY_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum BomDiffError {
    /// A token in an ID list was not purely digits
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// One of the two groups had no IDs
    #[error("{0}: enter at least one ID")]
    EmptyGroup(&'static str),

    /// Credentials were not supplied through the environment / .env file
    #[error("Missing one or more values in .env: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// The remote API answered with a non-success status
    #[error("HTTP {status} from {endpoint}: {body}")]
    Api {
        status: u16,
        endpoint: String,
        body: String,
        query: Option<String>,
    },
}

impl BomDiffError {
    /// Build an API error, truncating body and query for diagnostics
    pub fn api(status: u16, endpoint: impl Into<String>, body: &str, query: Option<&str>) -> Self {
        Self::Api {
            status,
            endpoint: endpoint.into(),
            body: truncate_chars(body, BODY_PREVIEW_CHARS),
            query: query.map(|q| truncate_chars(q.trim(), QUERY_PREVIEW_CHARS)),
        }
    }

    /// HTTP status code, if this is a remote failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Truncate to at most `max` characters without splitting a code point
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

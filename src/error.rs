//! Error types for the search service

use thiserror::Error;

/// Errors surfaced by the search connector and the API layer
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or transport failure while talking to the store
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The index name produced an invalid store URL
    #[error("invalid store URL: {0}")]
    Url(#[from] url::ParseError),

    /// Non-success HTTP status from the store, body passed through verbatim
    #[error("store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Store response did not have the expected shape
    #[error("malformed store response: {0}")]
    Malformed(String),

    /// No index configuration registered under this name
    #[error("unknown index: {0}")]
    UnknownIndex(String),
}

impl SearchError {
    /// Shorthand for a missing key in the store response
    pub fn missing(key: &str) -> Self {
        Self::Malformed(format!("missing `{}`", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::Status {
            status: 503,
            body: "cluster unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "store returned HTTP 503: cluster unavailable"
        );

        let err = SearchError::missing("hits");
        assert_eq!(err.to_string(), "malformed store response: missing `hits`");
    }
}

//! HTTP boundary types shared by the API port and its adapters.

use std::fmt;

/// Errors surfaced by the remote dex boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, reset, timeout).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpError { status: 404, .. })
    }
}

/// A path relative to the configured API base, kept as raw segments.
///
/// Segments are percent-encoded by the adapter, so a segment may safely
/// contain spaces or slashes taken from user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl ApiPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_readable() {
        let path = ApiPath::new()
            .segment("pokemon")
            .query("limit", 18)
            .query("offset", 151);
        assert_eq!(path.to_string(), "/pokemon?limit=18&offset=151");
    }

    #[test]
    fn not_found_detection() {
        let err = ApiError::HttpError {
            status: 404,
            body: "Not Found".into(),
        };
        assert!(err.is_not_found());
        assert!(!ApiError::RequestFailed("reset".into()).is_not_found());
    }
}

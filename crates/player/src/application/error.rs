//! Application error types.

use crate::ports::outbound::ApiError;

/// Why a lookup against the remote dex failed.
///
/// Every variant is transient from the user's point of view: the caller shows
/// a notice and keeps whatever it displayed before. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The dex answered 404 for this identifier.
    #[error("No creature matches '{0}'")]
    NotFound(String),

    /// Transport failure or a non-404 error status.
    #[error("Lookup failed: {0}")]
    Failed(String),

    /// The body did not have the expected shape or violated an invariant.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl LookupError {
    /// Classify a port error for the given identifier.
    pub fn from_api(identifier: &str, err: ApiError) -> Self {
        match err {
            e if e.is_not_found() => Self::NotFound(identifier.to_string()),
            ApiError::ParseError(msg) => Self::MalformedResponse(msg),
            other => Self::Failed(other.to_string()),
        }
    }

    /// Short notice suitable for a toast or alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Pokémon not found",
            Self::Failed(_) => "Couldn't reach the Pokédex. Try again.",
            Self::MalformedResponse(_) => "The Pokédex sent something unexpected.",
        }
    }
}

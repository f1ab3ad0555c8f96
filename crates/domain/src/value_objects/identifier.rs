//! Lookup identifier - a normalized name slug or dex number.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A trimmed, lower-cased, non-empty lookup key.
///
/// The remote dex decides what actually matches; beyond non-emptiness the
/// format is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LookupIdentifier(String);

impl LookupIdentifier {
    /// Normalize raw user input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the input is empty after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        Self::parse(raw.as_ref())
            .ok_or_else(|| DomainError::validation("Lookup identifier cannot be empty"))
    }

    /// Normalize raw user input, returning `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dex number, if the identifier is numeric.
    pub fn as_number(&self) -> Option<u32> {
        self.0.parse().ok()
    }
}

impl fmt::Display for LookupIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LookupIdentifier {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LookupIdentifier> for String {
    fn from(id: LookupIdentifier) -> Self {
        id.0
    }
}

impl From<u32> for LookupIdentifier {
    fn from(number: u32) -> Self {
        Self(number.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        let id = LookupIdentifier::new("  Pikachu ").unwrap();
        assert_eq!(id.as_str(), "pikachu");
        assert_eq!(id.as_number(), None);
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(LookupIdentifier::parse("").is_none());
        assert!(LookupIdentifier::parse("   \t").is_none());
        assert!(matches!(
            LookupIdentifier::new(" "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn numeric_identifiers() {
        assert_eq!(LookupIdentifier::new("25").unwrap().as_number(), Some(25));
        assert_eq!(LookupIdentifier::from(6).as_str(), "6");
    }
}

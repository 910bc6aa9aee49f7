//! Authy ID Value Object
//!
//! The provider-assigned subject id correlating a local user to their
//! provider-side enrollment. Opaque from this core's perspective; the
//! provider hands it out at enrollment time and we only echo it back in
//! API paths, so the only hard requirement is that it is URL-path safe.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when an Authy ID fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthyIdError {
    /// Authy ID is empty
    #[error("Authy ID cannot be empty")]
    Empty,

    /// Authy ID contains characters that are not URL-path safe
    #[error("Authy ID contains invalid characters")]
    InvalidCharacter,
}

/// Provider subject id value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthyId(String);

impl AuthyId {
    /// Create a new Authy ID
    ///
    /// Provider ids are numeric in practice, but the format is not
    /// documented as stable; alphanumeric is accepted.
    pub fn new(raw: &str) -> Result<Self, AuthyIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AuthyIdError::Empty);
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AuthyIdError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AuthyId {
    type Error = AuthyIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AuthyId> for String {
    fn from(value: AuthyId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id() {
        let id = AuthyId::new("209346").unwrap();
        assert_eq!(id.as_str(), "209346");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(AuthyId::new(""), Err(AuthyIdError::Empty));
        assert_eq!(AuthyId::new("  "), Err(AuthyIdError::Empty));
    }

    #[test]
    fn test_path_unsafe_rejected() {
        assert_eq!(
            AuthyId::new("123/456"),
            Err(AuthyIdError::InvalidCharacter)
        );
        assert_eq!(AuthyId::new("12 34"), Err(AuthyIdError::InvalidCharacter));
    }
}

//! User Name Value Object
//!
//! The session-bound key under which users are looked up in the
//! directory. Users are created out-of-band, so validation here is
//! deliberately loose: reject empty/whitespace and absurd lengths,
//! accept everything else as-is (lookups are exact-match).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum length for a user name (in characters)
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    /// User name is empty or whitespace only
    #[error("User name cannot be empty")]
    Empty,

    /// User name is too long
    #[error("User name must be at most {max} characters (got {length})")]
    TooLong { length: usize, max: usize },
}

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new user name
    pub fn new(raw: &str) -> Result<Self, UsernameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                length,
                max: USERNAME_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

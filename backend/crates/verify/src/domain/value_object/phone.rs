//! Phone Number Value Object
//!
//! An unverified phone number plus dialing country code, as submitted
//! by the browser for phone-ownership verification. The provider does
//! the real validation; locally we only enforce field presence and a
//! digits-only shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a phone number fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    /// Number or country code is empty
    #[error("Phone number and country code are required")]
    Empty,

    /// Number or country code contains non-digit characters
    #[error("Phone number must contain only digits")]
    NotNumeric,
}

/// Phone number value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    number: String,
    country_code: String,
}

impl PhoneNumber {
    /// Create a new phone number
    pub fn new(number: &str, country_code: &str) -> Result<Self, PhoneNumberError> {
        let number = number.trim();
        let country_code = country_code.trim();

        if number.is_empty() || country_code.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let digits_only =
            |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !digits_only(number) || !digits_only(country_code) {
            return Err(PhoneNumberError::NotNumeric);
        }

        Ok(Self {
            number: number.to_string(),
            country_code: country_code.to_string(),
        })
    }

    /// National number part
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Dialing country code
    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.country_code, self.number)
    }
}

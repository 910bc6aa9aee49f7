//! Verification Channel Value Object
//!
//! The delivery channel for a phone-verification one-time token.
//! Vocabulary is the provider's: `sms` or `call`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for unrecognized channel values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown verification channel: {0}")]
pub struct ChannelParseError(pub String);

/// Token delivery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationChannel {
    Sms,
    Call,
}

impl VerificationChannel {
    /// Provider wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationChannel::Sms => "sms",
            VerificationChannel::Call => "call",
        }
    }
}

impl FromStr for VerificationChannel {
    type Err = ChannelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sms" => Ok(VerificationChannel::Sms),
            "call" => Ok(VerificationChannel::Call),
            other => Err(ChannelParseError(other.to_string())),
        }
    }
}

impl fmt::Display for VerificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

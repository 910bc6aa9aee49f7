//! Approval Status Value Object
//!
//! Lifecycle of a OneTouch approval request as reported by the
//! provider: `pending -> {approved | denied | expired}`. Expiry is the
//! provider's call; it is never computed locally. Only `approved`
//! grants session trust.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for unrecognized status values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown approval status: {0}")]
pub struct ApprovalStatusParseError(pub String);

/// OneTouch approval request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Denied,
    Expired,
}

impl ApprovalStatus {
    /// Provider wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Denied => "denied",
            ApprovalStatus::Expired => "expired",
        }
    }

    /// The sole trust-granting state
    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalStatus::Approved)
    }
}

impl FromStr for ApprovalStatus {
    type Err = ApprovalStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "denied" => Ok(ApprovalStatus::Denied),
            "expired" => Ok(ApprovalStatus::Expired),
            other => Err(ApprovalStatusParseError(other.to_string())),
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_states() {
        assert_eq!("pending".parse(), Ok(ApprovalStatus::Pending));
        assert_eq!("approved".parse(), Ok(ApprovalStatus::Approved));
        assert_eq!("denied".parse(), Ok(ApprovalStatus::Denied));
        assert_eq!("expired".parse(), Ok(ApprovalStatus::Expired));
        assert!("cancelled".parse::<ApprovalStatus>().is_err());
    }

    #[test]
    fn test_only_approved_grants_trust() {
        assert!(ApprovalStatus::Approved.is_approved());
        assert!(!ApprovalStatus::Pending.is_approved());
        assert!(!ApprovalStatus::Denied.is_approved());
        assert!(!ApprovalStatus::Expired.is_approved());
    }
}

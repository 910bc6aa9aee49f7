//! API DTOs (Data Transfer Objects)
//!
//! Wire names are snake_case to match the browser client. Fields the
//! client may omit are `Option` so presence is checked in the handler
//! and missing input gets the fixed "Missing fields" response instead
//! of a deserialization error.

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

// ============================================================================
// Token Verification
// ============================================================================

/// One-time token submission
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub token: Option<String>,
}

// ============================================================================
// Phone Verification
// ============================================================================

/// Phone verification start request
#[derive(Debug, Clone, Deserialize)]
pub struct StartVerificationRequest {
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
    /// Delivery channel: "sms" or "call"
    pub via: Option<String>,
}

/// Phone verification check request
#[derive(Debug, Clone, Deserialize)]
pub struct CheckVerificationRequest {
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_deserialize_to_none() {
        let req: StartVerificationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.phone_number.is_none());
        assert!(req.country_code.is_none());
        assert!(req.via.is_none());
    }

    #[test]
    fn test_snake_case_wire_names() {
        let req: CheckVerificationRequest = serde_json::from_str(
            r#"{"phone_number": "5551234567", "country_code": "1", "token": "1234"}"#,
        )
        .unwrap();
        assert_eq!(req.phone_number.as_deref(), Some("5551234567"));
        assert_eq!(req.country_code.as_deref(), Some("1"));
        assert_eq!(req.token.as_deref(), Some("1234"));
    }

    #[test]
    fn test_login_response_shape() {
        let json = serde_json::to_value(LoginResponse {
            username: "alice".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"username": "alice"}));
    }
}

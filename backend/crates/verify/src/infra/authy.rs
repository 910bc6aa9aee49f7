//! Authy HTTP Client
//!
//! Implements both provider gateway traits against the Authy REST API.
//! Every method is one HTTP request with no retry. The API key travels
//! in the `X-Authy-API-Key` header; the key itself is never logged.
//!
//! Response handling is uniform: the body is parsed as JSON (non-JSON
//! bodies are wrapped so the handler still has something to forward),
//! a non-2xx status becomes [`VerifyError::Provider`] carrying that
//! body, and a 2xx body is returned as-is.

use serde_json::{Value, json};

use crate::domain::gateway::{
    ApprovalCreated, ApprovalDetails, ApprovalPoll, PhoneCheck, PhoneVerificationGateway,
    ProviderBody, TokenVerification, TwoFactorGateway,
};
use crate::domain::value_object::{
    approval_status::ApprovalStatus, authy_id::AuthyId, channel::VerificationChannel,
    phone::PhoneNumber,
};
use crate::error::{VerifyError, VerifyResult};

const DEFAULT_BASE_URL: &str = "https://api.authy.com";
const API_KEY_HEADER: &str = "X-Authy-API-Key";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Authy REST API client
#[derive(Clone)]
pub struct AuthyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for AuthyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthyClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl AuthyClient {
    /// Create a client for the production API endpoint
    pub fn new(api_key: impl Into<String>) -> VerifyResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (sandbox, local stub)
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> VerifyResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| VerifyError::Internal(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> VerifyResult<ProviderBody> {
        let response = self
            .http
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?;

        Self::read_body(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> VerifyResult<ProviderBody> {
        let response = self
            .http
            .post(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        Self::read_body(response).await
    }

    /// Parse a provider response, turning non-2xx statuses into errors
    /// that still carry the provider's body.
    async fn read_body(response: reqwest::Response) -> VerifyResult<ProviderBody> {
        let status = response.status();
        let text = response.text().await?;

        let body: Value = serde_json::from_str(&text)
            .unwrap_or_else(|_| json!({ "message": text }));

        if status.is_success() {
            Ok(body)
        } else {
            Err(VerifyError::Provider {
                status: Some(status.as_u16()),
                body,
            })
        }
    }

    /// The API reports `success` as either a boolean or the string
    /// `"true"` depending on endpoint.
    fn success_flag(body: &Value) -> bool {
        match &body["success"] {
            Value::Bool(b) => *b,
            Value::String(s) => s == "true",
            _ => false,
        }
    }
}

impl TwoFactorGateway for AuthyClient {
    async fn request_sms(&self, authy_id: &AuthyId) -> VerifyResult<ProviderBody> {
        // force=true: deliver even if the user could use the app instead
        self.get(
            &format!("/protected/json/sms/{}", authy_id.as_str()),
            &[("force", "true")],
        )
        .await
    }

    async fn request_call(&self, authy_id: &AuthyId) -> VerifyResult<ProviderBody> {
        self.get(
            &format!("/protected/json/call/{}", authy_id.as_str()),
            &[("force", "true")],
        )
        .await
    }

    async fn verify_token(
        &self,
        authy_id: &AuthyId,
        token: &str,
    ) -> VerifyResult<TokenVerification> {
        let body = self
            .get(
                &format!("/protected/json/verify/{}/{}", token, authy_id.as_str()),
                &[],
            )
            .await?;

        Ok(TokenVerification {
            success: Self::success_flag(&body),
            body,
        })
    }

    async fn create_approval_request(
        &self,
        authy_id: &AuthyId,
        details: &ApprovalDetails,
    ) -> VerifyResult<ApprovalCreated> {
        let payload = json!({
            "message": details.message,
            "details": details.visible,
            "hidden_details": details.hidden,
            "seconds_to_expire": details.ttl.as_secs(),
        });

        let body = self
            .post_json(
                &format!(
                    "/onetouch/json/users/{}/approval_requests",
                    authy_id.as_str()
                ),
                &payload,
            )
            .await?;

        let request_id = body["approval_request"]["uuid"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                VerifyError::Internal("Approval response missing approval_request.uuid".into())
            })?;

        Ok(ApprovalCreated { request_id, body })
    }

    async fn check_approval_status(&self, request_id: &str) -> VerifyResult<ApprovalPoll> {
        let body = self
            .get(&format!("/onetouch/json/approval_requests/{request_id}"), &[])
            .await?;

        let status = body["approval_request"]["status"]
            .as_str()
            .and_then(|s| s.parse::<ApprovalStatus>().ok())
            .ok_or_else(|| {
                VerifyError::Internal("Approval response missing a recognizable status".into())
            })?;

        Ok(ApprovalPoll { status, body })
    }
}

impl PhoneVerificationGateway for AuthyClient {
    async fn start_verification(
        &self,
        phone: &PhoneNumber,
        via: VerificationChannel,
    ) -> VerifyResult<ProviderBody> {
        let payload = json!({
            "phone_number": phone.number(),
            "country_code": phone.country_code(),
            "via": via.as_str(),
        });

        self.post_json("/protected/json/phones/verification/start", &payload)
            .await
    }

    async fn check_verification(
        &self,
        phone: &PhoneNumber,
        token: &str,
    ) -> VerifyResult<PhoneCheck> {
        let body = self
            .get(
                "/protected/json/phones/verification/check",
                &[
                    ("phone_number", phone.number()),
                    ("country_code", phone.country_code()),
                    ("verification_code", token),
                ],
            )
            .await?;

        Ok(PhoneCheck {
            success: Self::success_flag(&body),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flag_variants() {
        assert!(AuthyClient::success_flag(&json!({"success": true})));
        assert!(AuthyClient::success_flag(&json!({"success": "true"})));
        assert!(!AuthyClient::success_flag(&json!({"success": false})));
        assert!(!AuthyClient::success_flag(&json!({"success": "false"})));
        assert!(!AuthyClient::success_flag(&json!({"message": "ok"})));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AuthyClient::with_base_url("key", "http://localhost:4000/").unwrap();
        assert_eq!(
            client.url("/protected/json/sms/1"),
            "http://localhost:4000/protected/json/sms/1"
        );
    }
}

//! Provider Gateway Traits
//!
//! Capability-set interfaces over the external verification provider,
//! so handlers are written against traits and any HTTP client / SDK can
//! sit behind them. Two families, matching the provider's API split:
//! enrolled-user 2FA operations and raw phone-number verification.
//!
//! Every call is a single fire-once network operation: no retry, no
//! deadline beyond the HTTP client's defaults. Provider response bodies
//! are carried through as raw JSON so handlers can pass them to the
//! browser unmodified.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::value_object::{
    approval_status::ApprovalStatus, authy_id::AuthyId, channel::VerificationChannel,
    phone::PhoneNumber,
};
use crate::error::VerifyResult;

/// Raw provider response body, forwarded to the browser as-is
pub type ProviderBody = serde_json::Value;

/// Result of a token verification call
#[derive(Debug, Clone)]
pub struct TokenVerification {
    /// Whether the submitted token was correct
    pub success: bool,
    /// Full provider response
    pub body: ProviderBody,
}

/// Result of creating a OneTouch approval request
#[derive(Debug, Clone)]
pub struct ApprovalCreated {
    /// Correlation id (`approval_request.uuid`) for later polling
    pub request_id: String,
    /// Full provider response
    pub body: ProviderBody,
}

/// Result of polling a OneTouch approval request
#[derive(Debug, Clone)]
pub struct ApprovalPoll {
    /// Current request status
    pub status: ApprovalStatus,
    /// Full provider response
    pub body: ProviderBody,
}

/// Result of a phone-token confirmation call
#[derive(Debug, Clone)]
pub struct PhoneCheck {
    /// Whether the submitted token was correct
    pub success: bool,
    /// Full provider response
    pub body: ProviderBody,
}

/// Payload for creating a OneTouch approval request
#[derive(Debug, Clone)]
pub struct ApprovalDetails {
    /// Message shown in the push notification
    pub message: String,
    /// Details shown to the approving human
    pub visible: BTreeMap<String, String>,
    /// Details carried on the request but not shown
    pub hidden: BTreeMap<String, String>,
    /// Requested provider-side expiry
    pub ttl: Duration,
}

/// 2FA operations against an enrolled user
#[trait_variant::make(TwoFactorGateway: Send)]
pub trait LocalTwoFactorGateway {
    /// Request a one-time code via SMS (forced, even if an app push
    /// alternative exists)
    async fn request_sms(&self, authy_id: &AuthyId) -> VerifyResult<ProviderBody>;

    /// Request a one-time code via voice call (forced)
    async fn request_call(&self, authy_id: &AuthyId) -> VerifyResult<ProviderBody>;

    /// Verify a submitted one-time token
    async fn verify_token(&self, authy_id: &AuthyId, token: &str)
    -> VerifyResult<TokenVerification>;

    /// Create a push approval request
    async fn create_approval_request(
        &self,
        authy_id: &AuthyId,
        details: &ApprovalDetails,
    ) -> VerifyResult<ApprovalCreated>;

    /// Poll an approval request's status
    async fn check_approval_status(&self, request_id: &str) -> VerifyResult<ApprovalPoll>;
}

/// Phone-ownership verification for unenrolled numbers
#[trait_variant::make(PhoneVerificationGateway: Send)]
pub trait LocalPhoneVerificationGateway {
    /// Send a one-time token to the given number
    async fn start_verification(
        &self,
        phone: &PhoneNumber,
        via: VerificationChannel,
    ) -> VerifyResult<ProviderBody>;

    /// Confirm a one-time token for the given number
    async fn check_verification(&self, phone: &PhoneNumber, token: &str)
    -> VerifyResult<PhoneCheck>;
}

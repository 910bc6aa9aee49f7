//! Verify Session Entity
//!
//! Explicit per-browser session context, referenced by a signed cookie
//! token. Originally this state lived as ambient middleware-attached
//! request state; here it is a first-class entity read at the start of
//! a handler and written back at the end.
//!
//! ## Invariants
//! - `two_factor` and `phone_verified` are monotonic: methods can only
//!   set them, nothing on this type clears them.
//! - `approval_request_id` is last-write-wins: tracking a new approval
//!   request silently abandons any prior pending one. Only one
//!   outstanding request per session is representable.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::username::Username;

/// Verify session entity
#[derive(Debug, Clone)]
pub struct VerifySession {
    /// Session ID (UUID v4), referenced by the cookie token
    pub session_id: Uuid,
    /// Username bound by login; absent until then
    pub username: Option<Username>,
    /// Two-factor trust flag (set by token verify or OneTouch approval)
    pub two_factor: bool,
    /// Phone-ownership flag (set by phone token confirmation)
    pub phone_verified: bool,
    /// Correlation id of the most recent OneTouch approval request
    pub approval_request_id: Option<String>,
    /// Session expiration (Unix timestamp ms), slides on activity
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl VerifySession {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(username: Option<Username>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            username,
            two_factor: false,
            phone_verified: false,
            approval_request_id: None,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Record activity and slide the expiry window forward
    pub fn touch(&mut self, ttl: Duration) {
        let now = Utc::now();
        self.last_activity_at = now;
        self.expires_at_ms = (now + ttl).timestamp_millis();
    }

    /// Grant two-factor trust (monotonic; never cleared)
    pub fn grant_two_factor(&mut self) {
        self.two_factor = true;
    }

    /// Mark the phone as verified (monotonic; never cleared)
    pub fn mark_phone_verified(&mut self) {
        self.phone_verified = true;
    }

    /// Track a newly created approval request
    ///
    /// Overwrites any previously stored id: last write wins.
    pub fn track_approval_request(&mut self, request_id: String) {
        self.approval_request_id = Some(request_id);
    }
}

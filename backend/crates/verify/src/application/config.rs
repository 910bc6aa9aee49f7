//! Application Configuration
//!
//! Configuration for the Verify application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Verify application configuration
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL, slides forward on every authenticated request (1 hour)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Requested provider-side expiry for OneTouch approval requests
    pub onetouch_ttl: Duration,
    /// Push notification message for OneTouch requests
    pub onetouch_message: String,
    /// "Location" detail shown to the approving human
    pub onetouch_location: String,
    /// "Reason" detail shown to the approving human
    pub onetouch_reason: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "verify_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(3600), // 1 hour, sliding
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            onetouch_ttl: Duration::from_secs(120),
            onetouch_message: "Login requested for a demo account.".to_string(),
            onetouch_location: "San Francisco, CA".to_string(),
            onetouch_reason: "Two-factor demo".to_string(),
        }
    }
}

impl VerifyConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get session TTL in seconds (cookie Max-Age)
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VerifyConfig::default();

        assert_eq!(config.session_cookie_name, "verify_session");
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert_eq!(config.onetouch_ttl, Duration::from_secs(120));
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = VerifyConfig::with_random_secret();
        let config2 = VerifyConfig::with_random_secret();

        assert_ne!(config1.session_secret, config2.session_secret);
        assert!(config1.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_development_config() {
        let config = VerifyConfig::development();

        assert!(!config.cookie_secure);
        assert!(config.session_secret.iter().any(|&b| b != 0));
    }
}

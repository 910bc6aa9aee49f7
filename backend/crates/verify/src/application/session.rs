//! Session Manager
//!
//! Establishes and resolves browser sessions. The cookie carries a
//! signed token `{session_id}.{base64url(hmac)}`; the session state
//! itself lives server-side in the [`SessionStore`].
//!
//! Resolution slides the 1-hour expiry window forward and persists the
//! touch before returning, so the handler's subsequent read-then-write
//! of flags is the only other write in the request. There is no
//! compare-and-swap: two concurrent requests on one session race with
//! last-write-wins semantics.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use uuid::Uuid;

use crate::application::config::VerifyConfig;
use crate::domain::entity::verify_session::VerifySession;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::username::Username;
use crate::error::{VerifyError, VerifyResult};

/// Session manager
pub struct SessionManager<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    store: Arc<S>,
    config: Arc<VerifyConfig>,
}

impl<S> SessionManager<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>, config: Arc<VerifyConfig>) -> Self {
        Self { store, config }
    }

    /// Create a fresh session and return it with its signed cookie token
    pub async fn establish(
        &self,
        username: Option<Username>,
    ) -> VerifyResult<(VerifySession, String)> {
        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| VerifyError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = VerifySession::new(username, ttl);
        self.store.create(&session).await?;

        let token = self.sign_session_id(session.session_id);
        Ok((session, token))
    }

    /// Resolve a cookie token to its live session
    ///
    /// Verifies the signature, loads the session, drops it if expired,
    /// and slides the expiry window forward.
    pub async fn resolve(&self, token: &str) -> VerifyResult<VerifySession> {
        let session_id = self.parse_session_token(token)?;

        let session = self
            .store
            .find_by_id(session_id)
            .await?
            .ok_or(VerifyError::SessionInvalid)?;

        if session.is_expired() {
            self.store.delete(session_id).await?;
            return Err(VerifyError::SessionInvalid);
        }

        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| VerifyError::Internal(format!("Invalid session TTL: {e}")))?;

        let mut session = session;
        session.touch(ttl);
        self.store.update(&session).await?;

        Ok(session)
    }

    /// Persist handler-side session mutations
    pub async fn save(&self, session: &VerifySession) -> VerifyResult<()> {
        self.store.update(session).await
    }

    /// Build the signed cookie token for a session id
    fn sign_session_id(&self, session_id: Uuid) -> String {
        let id_str = session_id.to_string();
        let mac = platform::crypto::hmac_sha256(&self.config.session_secret, id_str.as_bytes());
        format!("{}.{}", id_str, URL_SAFE_NO_PAD.encode(mac))
    }

    /// Parse and verify a cookie token
    fn parse_session_token(&self, token: &str) -> VerifyResult<Uuid> {
        let Some((id_str, signature_b64)) = token.split_once('.') else {
            return Err(VerifyError::SessionInvalid);
        };

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| VerifyError::SessionInvalid)?;

        let expected =
            platform::crypto::hmac_sha256(&self.config.session_secret, id_str.as_bytes());

        if !platform::crypto::constant_time_eq(&expected, &signature) {
            return Err(VerifyError::SessionInvalid);
        }

        id_str.parse().map_err(|_| VerifyError::SessionInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryStore;

    fn manager() -> SessionManager<MemoryStore> {
        SessionManager::new(
            Arc::new(MemoryStore::new()),
            Arc::new(VerifyConfig::with_random_secret()),
        )
    }

    #[tokio::test]
    async fn test_establish_and_resolve() {
        let manager = manager();
        let (session, token) = manager
            .establish(Some(Username::new("alice").unwrap()))
            .await
            .unwrap();

        let resolved = manager.resolve(&token).await.unwrap();
        assert_eq!(resolved.session_id, session.session_id);
        assert_eq!(
            resolved.username.as_ref().map(|u| u.as_str()),
            Some("alice")
        );
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let manager = manager();
        let (_, token) = manager.establish(None).await.unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(matches!(
            manager.resolve(&tampered).await,
            Err(VerifyError::SessionInvalid)
        ));

        assert!(matches!(
            manager.resolve("not-a-token").await,
            Err(VerifyError::SessionInvalid)
        ));
    }

    #[tokio::test]
    async fn test_foreign_secret_rejected() {
        let store = Arc::new(MemoryStore::new());
        let manager_a = SessionManager::new(
            store.clone(),
            Arc::new(VerifyConfig::with_random_secret()),
        );
        let manager_b = SessionManager::new(
            store,
            Arc::new(VerifyConfig::with_random_secret()),
        );

        let (_, token) = manager_a.establish(None).await.unwrap();
        assert!(matches!(
            manager_b.resolve(&token).await,
            Err(VerifyError::SessionInvalid)
        ));
    }

    #[tokio::test]
    async fn test_unknown_session_rejected() {
        let config = Arc::new(VerifyConfig::with_random_secret());
        let signer = SessionManager::new(Arc::new(MemoryStore::new()), config.clone());
        let (_, token) = signer.establish(None).await.unwrap();

        // Valid signature, but the session lives in a different store
        let other = SessionManager::new(Arc::new(MemoryStore::new()), config);
        assert!(matches!(
            other.resolve(&token).await,
            Err(VerifyError::SessionInvalid)
        ));
    }
}

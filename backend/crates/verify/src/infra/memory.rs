//! In-Memory Store
//!
//! Backs both the user directory and the session store with process
//! memory. Demo-grade on purpose: state vanishes on restart and there
//! is no cross-instance sharing. Lock scope is one map operation, so a
//! request's read-then-write of a session is not atomic; concurrent
//! writers race with last-write-wins.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{user::User, verify_session::VerifySession};
use crate::domain::repository::{SessionStore, UserDirectory};
use crate::domain::value_object::username::Username;
use crate::error::VerifyResult;

#[derive(Debug, Default)]
struct Inner {
    users: RwLock<HashMap<String, User>>,
    sessions: RwLock<HashMap<Uuid, VerifySession>>,
}

/// In-memory user directory and session store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user record, replacing any existing one
    pub async fn seed_user(&self, user: User) {
        let mut users = self.inner.users.write().await;
        users.insert(user.username.as_str().to_string(), user);
    }
}

impl UserDirectory for MemoryStore {
    async fn find_by_username(&self, username: &Username) -> VerifyResult<Option<User>> {
        let users = self.inner.users.read().await;
        Ok(users.get(username.as_str()).cloned())
    }
}

impl SessionStore for MemoryStore {
    async fn create(&self, session: &VerifySession) -> VerifyResult<()> {
        let mut sessions = self.inner.sessions.write().await;
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> VerifyResult<Option<VerifySession>> {
        let sessions = self.inner.sessions.read().await;
        Ok(sessions.get(&session_id).cloned())
    }

    async fn update(&self, session: &VerifySession) -> VerifyResult<()> {
        let mut sessions = self.inner.sessions.write().await;
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> VerifyResult<()> {
        let mut sessions = self.inner.sessions.write().await;
        sessions.remove(&session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::authy_id::AuthyId;

    fn user(name: &str, id: &str) -> User {
        User::new(Username::new(name).unwrap(), AuthyId::new(id).unwrap())
    }

    #[tokio::test]
    async fn test_user_lookup() {
        let store = MemoryStore::new();
        store.seed_user(user("alice", "209346")).await;

        let found = store
            .find_by_username(&Username::new("alice").unwrap())
            .await
            .unwrap();
        assert_eq!(found.unwrap().authy_id.as_str(), "209346");

        let missing = store
            .find_by_username(&Username::new("bob").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = MemoryStore::new();
        let mut session = VerifySession::new(None, chrono::Duration::hours(1));

        store.create(&session).await.unwrap();
        assert!(
            store
                .find_by_id(session.session_id)
                .await
                .unwrap()
                .is_some()
        );

        session.grant_two_factor();
        store.update(&session).await.unwrap();
        let loaded = store.find_by_id(session.session_id).await.unwrap().unwrap();
        assert!(loaded.two_factor);

        store.delete(session.session_id).await.unwrap();
        assert!(
            store
                .find_by_id(session.session_id)
                .await
                .unwrap()
                .is_none()
        );
    }
}

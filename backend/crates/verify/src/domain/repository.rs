//! Repository Traits
//!
//! Interfaces for the stored user directory and the session store.
//! Implementations live in the infrastructure layer; both are external
//! collaborators from the handlers' point of view.

use crate::domain::entity::{user::User, verify_session::VerifySession};
use crate::domain::value_object::username::Username;
use crate::error::VerifyResult;
use uuid::Uuid;

/// User directory trait
///
/// Read-only: user records are created out-of-band.
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// Find a user by username
    async fn find_by_username(&self, username: &Username) -> VerifyResult<Option<User>>;
}

/// Session store trait
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Create a new session
    async fn create(&self, session: &VerifySession) -> VerifyResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> VerifyResult<Option<VerifySession>>;

    /// Update session (flags, approval id, activity)
    async fn update(&self, session: &VerifySession) -> VerifyResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> VerifyResult<()>;
}

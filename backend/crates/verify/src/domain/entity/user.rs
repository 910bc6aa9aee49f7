//! User Entity
//!
//! The stored identity record this backend reads. Users are enrolled
//! with the provider out-of-band (registration is not part of this
//! core), so the record is immutable here: a lookup key and the
//! provider-assigned subject id, nothing else.

use crate::domain::value_object::{authy_id::AuthyId, username::Username};

/// User record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique, session-bound lookup key
    pub username: Username,
    /// Provider subject id for this user's enrollment
    pub authy_id: AuthyId,
}

impl User {
    /// Create a new user record
    pub fn new(username: Username, authy_id: AuthyId) -> Self {
        Self { username, authy_id }
    }
}

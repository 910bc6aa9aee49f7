//! Login Use Case
//!
//! Binds a directory user to the caller's session. This demo performs
//! no credential check; real authentication of the browser client is an
//! external collaborator. The lookup still goes through the directory
//! so an unknown username fails like any other directory miss.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserDirectory;
use crate::domain::value_object::username::Username;
use crate::error::{VerifyError, VerifyResult};

/// Login use case
pub struct LoginUseCase<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
}

impl<D> LoginUseCase<D>
where
    D: UserDirectory,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub async fn execute(&self, username: &str) -> VerifyResult<User> {
        let username = Username::new(username).map_err(|_| VerifyError::MissingFields)?;

        self.directory
            .find_by_username(&username)
            .await?
            .ok_or(VerifyError::UserNotFound)
    }
}

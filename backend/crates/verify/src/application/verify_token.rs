//! Verify Token Use Case
//!
//! Checks a submitted one-time token against the provider. The caller
//! decides what a failed check means; this use case only distinguishes
//! "provider answered" from "call failed".

use std::sync::Arc;

use crate::application::find_user;
use crate::domain::gateway::{TokenVerification, TwoFactorGateway};
use crate::domain::repository::UserDirectory;
use crate::domain::value_object::username::Username;
use crate::error::VerifyResult;

/// Token verification use case
pub struct VerifyTokenUseCase<D, G>
where
    D: UserDirectory,
    G: TwoFactorGateway,
{
    directory: Arc<D>,
    gateway: Arc<G>,
}

impl<D, G> VerifyTokenUseCase<D, G>
where
    D: UserDirectory,
    G: TwoFactorGateway,
{
    pub fn new(directory: Arc<D>, gateway: Arc<G>) -> Self {
        Self { directory, gateway }
    }

    pub async fn execute(
        &self,
        username: Option<&Username>,
        token: &str,
    ) -> VerifyResult<TokenVerification> {
        let user = find_user(self.directory.as_ref(), username).await?;

        self.gateway.verify_token(&user.authy_id, token).await
    }
}

//! Request Code Use Case
//!
//! Asks the provider to deliver a one-time code to an enrolled user,
//! forcing delivery over the chosen channel.

use std::sync::Arc;

use crate::application::find_user;
use crate::domain::gateway::{ProviderBody, TwoFactorGateway};
use crate::domain::repository::UserDirectory;
use crate::domain::value_object::username::Username;
use crate::error::VerifyResult;

/// Delivery channel for a one-time code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeChannel {
    Sms,
    Call,
}

/// One-time code delivery use case
pub struct RequestCodeUseCase<D, G>
where
    D: UserDirectory,
    G: TwoFactorGateway,
{
    directory: Arc<D>,
    gateway: Arc<G>,
}

impl<D, G> RequestCodeUseCase<D, G>
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
        channel: CodeChannel,
    ) -> VerifyResult<ProviderBody> {
        let user = find_user(self.directory.as_ref(), username).await?;

        match channel {
            CodeChannel::Sms => self.gateway.request_sms(&user.authy_id).await,
            CodeChannel::Call => self.gateway.request_call(&user.authy_id).await,
        }
    }
}

//! OneTouch Use Cases
//!
//! Push-approval flow: create an approval request for an enrolled user,
//! then poll its status by correlation id. The provider owns request
//! expiry; this layer never reasons about elapsed time.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::config::VerifyConfig;
use crate::application::find_user;
use crate::domain::gateway::{ApprovalCreated, ApprovalDetails, ApprovalPoll, TwoFactorGateway};
use crate::domain::repository::UserDirectory;
use crate::domain::value_object::username::Username;
use crate::error::VerifyResult;

/// Approval request creation use case
pub struct CreateApprovalUseCase<D, G>
where
    D: UserDirectory,
    G: TwoFactorGateway,
{
    directory: Arc<D>,
    gateway: Arc<G>,
    config: Arc<VerifyConfig>,
}

impl<D, G> CreateApprovalUseCase<D, G>
where
    D: UserDirectory,
    G: TwoFactorGateway,
{
    pub fn new(directory: Arc<D>, gateway: Arc<G>, config: Arc<VerifyConfig>) -> Self {
        Self {
            directory,
            gateway,
            config,
        }
    }

    pub async fn execute(&self, username: Option<&Username>) -> VerifyResult<ApprovalCreated> {
        let user = find_user(self.directory.as_ref(), username).await?;

        let mut visible = BTreeMap::new();
        visible.insert("Authy ID".to_string(), user.authy_id.as_str().to_string());
        visible.insert(
            "Username".to_string(),
            user.username.as_str().to_string(),
        );
        visible.insert("Location".to_string(), self.config.onetouch_location.clone());
        visible.insert("Reason".to_string(), self.config.onetouch_reason.clone());

        let mut hidden = BTreeMap::new();
        hidden.insert("ip_address".to_string(), "10.10.3.203".to_string());

        let details = ApprovalDetails {
            message: self.config.onetouch_message.clone(),
            visible,
            hidden,
            ttl: self.config.onetouch_ttl,
        };

        self.gateway
            .create_approval_request(&user.authy_id, &details)
            .await
    }
}

/// Approval status polling use case
pub struct CheckApprovalUseCase<G>
where
    G: TwoFactorGateway,
{
    gateway: Arc<G>,
}

impl<G> CheckApprovalUseCase<G>
where
    G: TwoFactorGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, request_id: &str) -> VerifyResult<ApprovalPoll> {
        self.gateway.check_approval_status(request_id).await
    }
}

//! Application Layer
//!
//! Use cases and application services. One use case per externally
//! exposed operation; each is a directory lookup followed by a single
//! provider call. Session reads/writes stay in the presentation layer
//! so each handler's read-then-write window is explicit.

pub mod config;
pub mod login;
pub mod onetouch;
pub mod phone_verification;
pub mod request_code;
pub mod session;
pub mod verify_token;

pub use config::VerifyConfig;
pub use login::LoginUseCase;
pub use onetouch::{CheckApprovalUseCase, CreateApprovalUseCase};
pub use phone_verification::{CheckPhoneVerificationUseCase, StartPhoneVerificationUseCase};
pub use request_code::{CodeChannel, RequestCodeUseCase};
pub use session::SessionManager;
pub use verify_token::VerifyTokenUseCase;

use crate::domain::entity::user::User;
use crate::domain::repository::UserDirectory;
use crate::domain::value_object::username::Username;
use crate::error::{VerifyError, VerifyResult};

/// Resolve the session-bound username to a stored user record.
///
/// Handlers must not reach the gateway with an absent user: a missing
/// username (nobody logged in) or a directory miss fails the whole
/// request here.
pub(crate) async fn find_user<D>(
    directory: &D,
    username: Option<&Username>,
) -> VerifyResult<User>
where
    D: UserDirectory,
{
    let username = username.ok_or(VerifyError::SessionInvalid)?;

    directory
        .find_by_username(username)
        .await?
        .ok_or(VerifyError::UserNotFound)
}

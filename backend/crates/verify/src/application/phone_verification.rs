//! Phone Verification Use Cases
//!
//! Proves ownership of a raw phone number. No enrollment or session
//! user is involved; the number and country code come straight from the
//! request.

use std::sync::Arc;

use crate::domain::gateway::{PhoneCheck, PhoneVerificationGateway, ProviderBody};
use crate::domain::value_object::{channel::VerificationChannel, phone::PhoneNumber};
use crate::error::VerifyResult;

/// Phone verification start use case
pub struct StartPhoneVerificationUseCase<P>
where
    P: PhoneVerificationGateway,
{
    gateway: Arc<P>,
}

impl<P> StartPhoneVerificationUseCase<P>
where
    P: PhoneVerificationGateway,
{
    pub fn new(gateway: Arc<P>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        phone: &PhoneNumber,
        via: VerificationChannel,
    ) -> VerifyResult<ProviderBody> {
        self.gateway.start_verification(phone, via).await
    }
}

/// Phone verification check use case
pub struct CheckPhoneVerificationUseCase<P>
where
    P: PhoneVerificationGateway,
{
    gateway: Arc<P>,
}

impl<P> CheckPhoneVerificationUseCase<P>
where
    P: PhoneVerificationGateway,
{
    pub fn new(gateway: Arc<P>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, phone: &PhoneNumber, token: &str) -> VerifyResult<PhoneCheck> {
        self.gateway.check_verification(phone, token).await
    }
}

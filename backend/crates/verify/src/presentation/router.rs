//! Verify Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::VerifyConfig;
use crate::domain::gateway::{PhoneVerificationGateway, TwoFactorGateway};
use crate::domain::repository::{SessionStore, UserDirectory};
use crate::infra::authy::AuthyClient;
use crate::infra::memory::MemoryStore;
use crate::presentation::handlers::{self, VerifyAppState};

/// Create the Verify router with the in-memory store and Authy client
pub fn verify_router(store: MemoryStore, provider: AuthyClient, config: VerifyConfig) -> Router {
    verify_router_generic(store, provider, config)
}

/// Create a Verify router for any store and provider implementation
pub fn verify_router_generic<R, G>(repo: R, provider: G, config: VerifyConfig) -> Router
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let state = VerifyAppState {
        repo: Arc::new(repo),
        provider: Arc::new(provider),
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::login::<R, G>))
        .route("/sms", post(handlers::request_sms::<R, G>))
        .route("/voice", post(handlers::request_voice::<R, G>))
        .route("/verify", post(handlers::verify_token::<R, G>))
        .route("/onetouch", post(handlers::create_onetouch::<R, G>))
        .route(
            "/onetouch/status",
            get(handlers::check_onetouch_status::<R, G>),
        )
        .route(
            "/verification/start",
            post(handlers::start_phone_verification::<R, G>),
        )
        .route(
            "/verification/verify",
            post(handlers::check_phone_verification::<R, G>),
        )
        .route("/test", post(handlers::test_connection))
        .with_state(state)
}

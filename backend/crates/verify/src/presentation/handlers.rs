//! HTTP Handlers
//!
//! One handler per route. Each follows the same shape: resolve the
//! session from the cookie, validate field presence, run one use case,
//! forward the provider body to the browser. Session flag writes happen
//! after the provider call succeeds and are saved before responding.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;

use platform::cookie::{CookieConfig, extract_cookie};

use crate::application::config::VerifyConfig;
use crate::application::{
    CheckApprovalUseCase, CheckPhoneVerificationUseCase, CodeChannel, CreateApprovalUseCase,
    LoginUseCase, RequestCodeUseCase, SessionManager, StartPhoneVerificationUseCase,
    VerifyTokenUseCase,
};
use crate::domain::entity::verify_session::VerifySession;
use crate::domain::gateway::{PhoneVerificationGateway, TwoFactorGateway};
use crate::domain::repository::{SessionStore, UserDirectory};
use crate::domain::value_object::phone::PhoneNumber;
use crate::error::{VerifyError, VerifyResult};
use crate::presentation::dto::{
    CheckVerificationRequest, LoginRequest, LoginResponse, StartVerificationRequest, TokenRequest,
};

/// Shared state for verify handlers
#[derive(Clone)]
pub struct VerifyAppState<R, G>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub provider: Arc<G>,
    pub config: Arc<VerifyConfig>,
}

impl<R, G> VerifyAppState<R, G>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    fn session_manager(&self) -> SessionManager<R> {
        SessionManager::new(self.repo.clone(), self.config.clone())
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R, G>(
    State(state): State<VerifyAppState<R, G>>,
    Json(req): Json<LoginRequest>,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let username = req.username.ok_or(VerifyError::MissingFields)?;

    let use_case = LoginUseCase::new(state.repo.clone());
    let user = use_case.execute(&username).await?;

    let manager = state.session_manager();
    let (_, token) = manager.establish(Some(user.username.clone())).await?;

    let cookie = build_session_cookie(&state.config, &token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            username: user.username.as_str().to_string(),
        }),
    ))
}

// ============================================================================
// One-Time Codes
// ============================================================================

/// POST /api/sms
pub async fn request_sms<R, G>(
    State(state): State<VerifyAppState<R, G>>,
    headers: HeaderMap,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    request_code(state, headers, CodeChannel::Sms).await
}

/// POST /api/voice
pub async fn request_voice<R, G>(
    State(state): State<VerifyAppState<R, G>>,
    headers: HeaderMap,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    request_code(state, headers, CodeChannel::Call).await
}

async fn request_code<R, G>(
    state: VerifyAppState<R, G>,
    headers: HeaderMap,
    channel: CodeChannel,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let session = resolve_session(&state, &headers).await?;

    let use_case = RequestCodeUseCase::new(state.repo.clone(), state.provider.clone());
    let body = use_case.execute(session.username.as_ref(), channel).await?;

    Ok((StatusCode::OK, Json(body)))
}

/// POST /api/verify
///
/// The provider's verdict is forwarded either way; only a successful
/// check promotes the session.
pub async fn verify_token<R, G>(
    State(state): State<VerifyAppState<R, G>>,
    headers: HeaderMap,
    Json(req): Json<TokenRequest>,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let mut session = resolve_session(&state, &headers).await?;
    let token = req.token.ok_or(VerifyError::MissingFields)?;

    let use_case = VerifyTokenUseCase::new(state.repo.clone(), state.provider.clone());
    let result = use_case.execute(session.username.as_ref(), &token).await?;

    if result.success {
        session.grant_two_factor();
        state.session_manager().save(&session).await?;
    }

    Ok((StatusCode::OK, Json(result.body)))
}

// ============================================================================
// OneTouch
// ============================================================================

/// POST /api/onetouch
pub async fn create_onetouch<R, G>(
    State(state): State<VerifyAppState<R, G>>,
    headers: HeaderMap,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let mut session = resolve_session(&state, &headers).await?;

    let use_case = CreateApprovalUseCase::new(
        state.repo.clone(),
        state.provider.clone(),
        state.config.clone(),
    );
    let created = use_case.execute(session.username.as_ref()).await?;

    // Last write wins: a second create abandons the earlier request
    session.track_approval_request(created.request_id);
    state.session_manager().save(&session).await?;

    Ok((StatusCode::OK, Json(created.body)))
}

/// GET /api/onetouch/status
///
/// The browser drives the poll cadence; the server only relays the
/// provider's answer and promotes the session on `approved`.
pub async fn check_onetouch_status<R, G>(
    State(state): State<VerifyAppState<R, G>>,
    headers: HeaderMap,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let mut session = resolve_session(&state, &headers).await?;

    let request_id = session
        .approval_request_id
        .clone()
        .ok_or(VerifyError::NoPendingApproval)?;

    let use_case = CheckApprovalUseCase::new(state.provider.clone());
    let poll = use_case.execute(&request_id).await?;

    if poll.status.is_approved() {
        session.grant_two_factor();
        state.session_manager().save(&session).await?;
    }

    Ok((StatusCode::OK, Json(poll.body)))
}

// ============================================================================
// Phone Verification
// ============================================================================

/// POST /api/verification/start
pub async fn start_phone_verification<R, G>(
    State(state): State<VerifyAppState<R, G>>,
    Json(req): Json<StartVerificationRequest>,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let phone_number = req.phone_number.ok_or(VerifyError::MissingFields)?;
    let country_code = req.country_code.ok_or(VerifyError::MissingFields)?;
    let via = req.via.ok_or(VerifyError::MissingFields)?;

    let phone = PhoneNumber::new(&phone_number, &country_code)
        .map_err(|_| VerifyError::MissingFields)?;
    let via = via.parse().map_err(|_| VerifyError::MissingFields)?;

    let use_case = StartPhoneVerificationUseCase::new(state.provider.clone());
    let body = use_case.execute(&phone, via).await?;

    Ok((StatusCode::OK, Json(body)))
}

/// POST /api/verification/verify
///
/// Works without a session; when one is present, a successful check
/// marks it phone-verified.
pub async fn check_phone_verification<R, G>(
    State(state): State<VerifyAppState<R, G>>,
    headers: HeaderMap,
    Json(req): Json<CheckVerificationRequest>,
) -> VerifyResult<impl IntoResponse>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let phone_number = req.phone_number.ok_or(VerifyError::MissingFields)?;
    let country_code = req.country_code.ok_or(VerifyError::MissingFields)?;
    let token = req.token.ok_or(VerifyError::MissingFields)?;

    let phone = PhoneNumber::new(&phone_number, &country_code)
        .map_err(|_| VerifyError::MissingFields)?;

    let use_case = CheckPhoneVerificationUseCase::new(state.provider.clone());
    let check = use_case.execute(&phone, &token).await?;

    if check.success {
        if let Some(mut session) = maybe_resolve_session(&state, &headers).await {
            session.mark_phone_verified();
            state.session_manager().save(&session).await?;
        }
    }

    Ok((StatusCode::OK, Json(check.body)))
}

// ============================================================================
// Connectivity Test
// ============================================================================

/// POST /api/test
pub async fn test_connection() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"connected": true})))
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn resolve_session<R, G>(
    state: &VerifyAppState<R, G>,
    headers: &HeaderMap,
) -> VerifyResult<VerifySession>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(headers, &state.config.session_cookie_name)
        .ok_or(VerifyError::SessionInvalid)?;

    state.session_manager().resolve(&token).await
}

async fn maybe_resolve_session<R, G>(
    state: &VerifyAppState<R, G>,
    headers: &HeaderMap,
) -> Option<VerifySession>
where
    R: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
    G: TwoFactorGateway + PhoneVerificationGateway + Clone + Send + Sync + 'static,
{
    resolve_session(state, headers).await.ok()
}

fn build_session_cookie(config: &VerifyConfig, token: &str) -> String {
    let cookie = CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl_secs()),
    };

    cookie.build_set_cookie(token)
}

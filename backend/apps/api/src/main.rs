//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.
//!
//! The process refuses to start without a provider API key: every
//! interesting endpoint would just relay provider auth failures.

use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verify::models::{AuthyId, User, Username};
use verify::{AuthyClient, MemoryStore, VerifyConfig, verify_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 5151;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,verify=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Provider credentials (the key itself is never logged)
    let api_key = env::var("AUTHY_API_KEY").expect("AUTHY_API_KEY must be set in environment");

    // Session configuration
    let config = if cfg!(debug_assertions) {
        VerifyConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        VerifyConfig {
            session_secret: secret,
            ..VerifyConfig::default()
        }
    };

    // User directory, seeded from environment ("name:authy_id,...")
    let store = MemoryStore::new();
    let demo_users = env::var("DEMO_USERS").unwrap_or_else(|_| "alice:209346".to_string());
    for entry in demo_users.split(',') {
        let Some((name, id)) = entry.trim().split_once(':') else {
            tracing::warn!(entry = %entry, "Skipping malformed DEMO_USERS entry");
            continue;
        };
        match (Username::new(name), AuthyId::new(id)) {
            (Ok(username), Ok(authy_id)) => {
                tracing::info!(username = %username.as_str(), "Seeded demo user");
                store.seed_user(User::new(username, authy_id)).await;
            }
            _ => {
                tracing::warn!(entry = %entry, "Skipping invalid DEMO_USERS entry");
            }
        }
    }

    let provider = AuthyClient::new(api_key)?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5151,http://127.0.0.1:5151".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router: API under /api, demo page served from public/
    let app = Router::new()
        .nest("/api", verify_router(store, provider, config))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Verify (Phone Verification / 2FA) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and gateway traits
//! - `application/` - Use cases and application services
//! - `infra/` - Provider client and store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - One-time codes via SMS or voice call through the verification provider
//! - Token verification promoting the session to two-factor trusted
//! - OneTouch push approvals (create + client-driven status polling)
//! - Phone-ownership verification (start + token check)
//! - Server-side sessions with signed cookie tokens and sliding expiry
//!
//! ## Error Model
//! Every failure surfaces as HTTP 500 to the browser: local validation
//! ("Missing fields"), directory lookups, and provider errors alike.
//! Provider error bodies are passed through unmodified. Nothing is
//! retried server-side; the browser owns the retry/poll cadence.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::VerifyConfig;
pub use error::{VerifyError, VerifyResult};
pub use infra::authy::AuthyClient;
pub use infra::memory::MemoryStore;
pub use presentation::router::verify_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

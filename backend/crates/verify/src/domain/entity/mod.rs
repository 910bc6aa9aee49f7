//! Entity Module

pub mod user;
pub mod verify_session;

// Re-exports
pub use user::User;
pub use verify_session::VerifySession;

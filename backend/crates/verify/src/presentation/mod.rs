//! Presentation Layer
//!
//! HTTP handlers, request/response DTOs, and router assembly.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::VerifyAppState;
pub use router::{verify_router, verify_router_generic};

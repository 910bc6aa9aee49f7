//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, random bytes)
//! - Cookie management

pub mod cookie;
pub mod crypto;

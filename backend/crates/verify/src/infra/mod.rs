//! Infrastructure Layer
//!
//! Concrete implementations of the domain's gateway and repository
//! traits: the provider HTTP client and the in-memory store backing
//! the user directory and session store.

pub mod authy;
pub mod memory;

pub use authy::AuthyClient;
pub use memory::MemoryStore;

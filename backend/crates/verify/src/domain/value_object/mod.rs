//! Value Object Module

pub mod approval_status;
pub mod authy_id;
pub mod channel;
pub mod phone;
pub mod username;

// Re-exports
pub use approval_status::ApprovalStatus;
pub use authy_id::AuthyId;
pub use channel::VerificationChannel;
pub use phone::PhoneNumber;
pub use username::Username;

//! Application Layer
//!
//! One use case per identity operation. Each performs at most one provider
//! call and never retries.

pub mod config;
pub mod fetch_profile;
pub mod password_reset;
pub mod refresh_session;
pub mod register;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use config::IdentityConfig;
pub use fetch_profile::FetchProfileUseCase;
pub use password_reset::RequestPasswordResetUseCase;
pub use refresh_session::RefreshSessionUseCase;
pub use register::RegisterUseCase;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;

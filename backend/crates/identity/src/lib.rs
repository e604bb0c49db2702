//! Identity Backend Module
//!
//! Registration and session operations against a hosted identity provider
//! (Amazon Cognito user pools).
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, entities, registration validation, provider trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Cognito SDK implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration form validation (full name, email, password policy, confirmation)
//! - Sign-up with email as username
//! - Sign-in, token refresh, global sign-out
//! - Profile lookup from an access token
//! - Password reset request
//!
//! ## Security Model
//! - Passwords and tokens are never logged and are redacted in `Debug`
//! - Credential checks, token signing and rate limiting stay with the provider
//! - Invalid forms never reach the provider

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use error::{IdentityError, IdentityResult};
pub use infra::cognito::CognitoProvider;
pub use presentation::router::{identity_router, identity_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

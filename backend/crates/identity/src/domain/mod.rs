//! Domain Layer
//!
//! Contains entities, value objects, registration validation, and the
//! identity provider trait.

pub mod entity;
pub mod provider;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::{
    auth_session::{AuthSession, AuthenticationResult},
    registration::{RegistrationInput, RegistrationOutcome, ValidatedRegistration},
    user_profile::UserProfile,
};
pub use provider::IdentityProvider;
pub use validation::{Field, FieldErrorKind, ValidationErrors, validate};

//! Registration Entities
//!
//! Raw form input, the validated form, and what the provider reports back.

use serde::Deserialize;
use std::fmt;

use crate::domain::value_object::{email::Email, password::Password};

/// Registration form exactly as submitted
///
/// Created per submission and discarded once the request is dispatched.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationInput {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Registration that passed local validation
///
/// Only the validation layer constructs this, so holding one proves every
/// field rule and the password confirmation held.
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub(crate) full_name: String,
    pub(crate) email: Email,
    pub(crate) password: Password,
}

impl ValidatedRegistration {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// How the provider delivered a verification or reset code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeDelivery {
    /// Masked destination, e.g. `j***@e***`
    pub destination: Option<String>,
    /// `EMAIL` or `SMS`
    pub medium: Option<String>,
    pub attribute_name: Option<String>,
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    /// Provider's stable subject identifier for the new account
    pub user_sub: String,
    /// False while the account still awaits confirmation (e.g. email code)
    pub confirmed: bool,
    pub code_delivery: Option<CodeDelivery>,
}

//! Registration Validation
//!
//! Ordered field checks plus one cross-field check, run entirely locally.
//! Each field reports at most one error: the first rule that fails.
//!
//! | Field           | Rules (in order)              |
//! |-----------------|-------------------------------|
//! | fullName        | Required                      |
//! | email           | Required, Format              |
//! | password        | TooShort, WeakPassword        |
//! | confirmPassword | Required, Mismatch            |
//!
//! The mismatch check compares against the raw password, so it fires even
//! when the password itself is invalid.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entity::registration::{RegistrationInput, ValidatedRegistration};
use crate::domain::value_object::{
    email::{Email, EmailError},
    password::{Password, PasswordError},
};

/// Registration form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Wire name used by the form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of rule that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldErrorKind {
    Required,
    Format,
    TooShort,
    WeakPassword,
    Mismatch,
}

/// One failed rule with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Field name to error mapping; empty means valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn kind_of(&self, field: Field) -> Option<FieldErrorKind> {
        self.get(field).map(|e| e.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// `{ "fieldName": "message" }`, the shape the form renders
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(field, error)| (field.as_str().to_string(), error.message.clone()))
            .collect()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{field}: {}", error.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validate a registration form.
///
/// Pure and idempotent: the same input always yields the same result.
pub fn validate(input: &RegistrationInput) -> Result<ValidatedRegistration, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let full_name = check_full_name(&input.full_name)
        .map_err(|e| errors.insert(Field::FullName, e))
        .ok();
    let email = check_email(&input.email)
        .map_err(|e| errors.insert(Field::Email, e))
        .ok();
    let password = check_password(&input.password)
        .map_err(|e| errors.insert(Field::Password, e))
        .ok();
    if let Err(e) = check_confirm_password(&input.password, &input.confirm_password) {
        errors.insert(Field::ConfirmPassword, e);
    }

    match (full_name, email, password) {
        (Some(full_name), Some(email), Some(password)) if errors.is_empty() => {
            Ok(ValidatedRegistration {
                full_name,
                email,
                password,
            })
        }
        _ => Err(errors),
    }
}

/// Errors only; convenient for re-validating on every field change
pub fn field_errors(input: &RegistrationInput) -> ValidationErrors {
    validate(input).err().unwrap_or_default()
}

fn check_full_name(full_name: &str) -> Result<String, FieldError> {
    if full_name.is_empty() {
        return Err(FieldError::new(
            FieldErrorKind::Required,
            "Full name is required",
        ));
    }
    Ok(full_name.to_string())
}

fn check_email(email: &str) -> Result<Email, FieldError> {
    Email::new(email).map_err(|e| {
        let kind = match e {
            EmailError::Empty => FieldErrorKind::Required,
            EmailError::InvalidFormat => FieldErrorKind::Format,
        };
        FieldError::new(kind, e.to_string())
    })
}

fn check_password(password: &str) -> Result<Password, FieldError> {
    Password::new(password).map_err(|e| {
        let kind = match e {
            PasswordError::TooShort { .. } => FieldErrorKind::TooShort,
            PasswordError::Weak { .. } => FieldErrorKind::WeakPassword,
        };
        FieldError::new(kind, e.to_string())
    })
}

fn check_confirm_password(password: &str, confirm_password: &str) -> Result<(), FieldError> {
    if confirm_password.is_empty() {
        return Err(FieldError::new(
            FieldErrorKind::Required,
            "Confirm password is required",
        ));
    }
    if password != confirm_password {
        return Err(FieldError::new(
            FieldErrorKind::Mismatch,
            "Passwords don't match",
        ));
    }
    Ok(())
}

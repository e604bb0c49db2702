//! Password Value Object
//!
//! Client-side strength check for a password chosen at registration.
//! Hashing and the authoritative policy live at the identity provider; this
//! only rejects obviously weak input before a network call is made.
//!
//! ## Rules
//! - At least [`MIN_PASSWORD_LENGTH`] UTF-16 code units, the unit browser
//!   forms count in (an emoji outside the BMP counts twice)
//! - At least one lowercase letter, uppercase letter, digit and symbol
//! - A symbol is anything that is not an ASCII letter or digit (`_` counts)

use std::fmt;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Password policy violations, in the order they are checked
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain uppercase, lowercase, number, and special character")]
    Weak { missing: Vec<CharacterClass> },
}

/// Character classes a strong password must contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CharacterClass {
    #[display("lowercase")]
    Lowercase,
    #[display("uppercase")]
    Uppercase,
    #[display("digit")]
    Digit,
    #[display("symbol")]
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => !c.is_ascii_alphanumeric(),
        }
    }
}

/// Password that passed the local strength check
///
/// Debug and Display output are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(raw: impl Into<String>) -> Result<Self, PasswordError> {
        let raw = raw.into();

        let actual = raw.encode_utf16().count();
        if actual < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual,
            });
        }

        let missing = missing_classes(&raw);
        if !missing.is_empty() {
            return Err(PasswordError::Weak { missing });
        }

        Ok(Self(raw))
    }

    /// Expose the clear text for the provider request
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// Character classes absent from `raw`
pub fn missing_classes(raw: &str) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| !raw.chars().any(|c| class.matches(c)))
        .collect()
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

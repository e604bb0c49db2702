//! Token Value Object
//!
//! Opaque credential issued by the identity provider (access, id or refresh
//! token). Never empty; `Debug` output is redacted so tokens stay out of logs.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Token cannot be empty")]
pub struct EmptyToken;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyToken> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EmptyToken);
        }
        Ok(Self(value))
    }

    /// Token from an optional provider field; absent and empty are the same
    pub fn from_optional(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Token {
    type Error = EmptyToken;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Token::new(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&"[REDACTED]").finish()
    }
}

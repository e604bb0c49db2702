//! User Profile Entity

use serde::Serialize;

/// Standard attribute names used by the provider
pub const ATTR_SUB: &str = "sub";
pub const ATTR_NAME: &str = "name";
pub const ATTR_EMAIL: &str = "email";

/// A single user attribute as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttribute {
    pub name: String,
    pub value: Option<String>,
}

impl UserAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Profile of the account that owns an access token
///
/// Fetched on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    /// Provider's stable subject identifier
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserProfile {
    /// Build a profile from an attribute list.
    ///
    /// Attributes that are absent or have no value become empty strings.
    pub fn from_attributes(attributes: &[UserAttribute]) -> Self {
        let get = |name: &str| {
            attributes
                .iter()
                .find(|attr| attr.name == name)
                .and_then(|attr| attr.value.clone())
                .unwrap_or_default()
        };

        Self {
            id: get(ATTR_SUB),
            name: get(ATTR_NAME),
            email: get(ATTR_EMAIL),
        }
    }
}

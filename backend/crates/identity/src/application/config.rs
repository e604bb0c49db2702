//! Application Configuration
//!
//! Configuration for the identity application layer. Built once at process
//! start and shared read-only (`Arc<IdentityConfig>`) by every use case.

use crate::error::{IdentityError, IdentityResult};

/// Region used when `AWS_REGION` is not set
pub const DEFAULT_REGION: &str = "us-east-1";

pub const REGION_ENV: &str = "AWS_REGION";
pub const CLIENT_ID_ENV: &str = "COGNITO_CLIENT_ID";

/// Identity application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Provider region
    pub region: String,
    /// App client identifier; required by refresh, password reset and sign-in
    pub client_id: Option<String>,
    /// Request automatic sign-in once a new account is confirmed
    pub auto_sign_in: bool,
    /// Where the form sends the user after a successful registration
    pub post_registration_redirect: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            client_id: None,
            auto_sign_in: true,
            post_registration_redirect: "/signin".to_string(),
        }
    }
}

impl IdentityConfig {
    /// Load from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            region: non_blank(REGION_ENV).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            client_id: non_blank(CLIENT_ID_ENV),
            ..Default::default()
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Client identifier, or a fatal configuration error
    pub fn require_client_id(&self) -> IdentityResult<&str> {
        self.client_id
            .as_deref()
            .ok_or_else(|| IdentityError::Configuration(format!("{CLIENT_ID_ENV} is not set")))
    }
}

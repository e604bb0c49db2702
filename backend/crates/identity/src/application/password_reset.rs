//! Password Reset Use Case
//!
//! Starts the provider's out-of-band reset flow (code by email or SMS).

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::entity::registration::CodeDelivery;
use crate::domain::provider::{ForgotPasswordRequest, IdentityProvider};
use crate::error::{IdentityError, IdentityResult};

/// Password reset use case
pub struct RequestPasswordResetUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    config: Arc<IdentityConfig>,
}

impl<P> RequestPasswordResetUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<IdentityConfig>) -> Self {
        Self { provider, config }
    }

    /// Returns where the code went, when the provider says so
    pub async fn execute(&self, username: &str) -> IdentityResult<Option<CodeDelivery>> {
        let client_id = self.config.require_client_id()?.to_string();

        if username.trim().is_empty() {
            return Err(IdentityError::MissingInput { field: "username" });
        }

        let request = ForgotPasswordRequest {
            client_id,
            username: username.to_string(),
        };

        let delivery = self.provider.forgot_password(request).await?;

        tracing::info!(
            medium = ?delivery.as_ref().and_then(|d| d.medium.as_deref()),
            "Password reset requested"
        );

        Ok(delivery)
    }
}

//! Sign In Use Case
//!
//! Exchanges email and password for tokens with the direct
//! username/password flow. The provider's result is returned as-is, so a
//! challenge (e.g. `NEW_PASSWORD_REQUIRED`) reaches the caller untouched.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::entity::auth_session::AuthenticationResult;
use crate::domain::provider::{AuthFlow, IdentityProvider, InitiateAuthRequest};
use crate::error::{IdentityError, IdentityResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    config: Arc<IdentityConfig>,
}

impl<P> SignInUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<IdentityConfig>) -> Self {
        Self { provider, config }
    }

    pub async fn execute(&self, input: SignInInput) -> IdentityResult<AuthenticationResult> {
        let client_id = self.config.require_client_id()?.to_string();

        if input.email.is_empty() {
            return Err(IdentityError::MissingInput { field: "email" });
        }
        if input.password.is_empty() {
            return Err(IdentityError::MissingInput { field: "password" });
        }

        let request = InitiateAuthRequest {
            client_id,
            flow: AuthFlow::UserPassword {
                username: input.email,
                password: input.password,
            },
        };

        let result = self.provider.initiate_auth(request).await?;

        tracing::info!(
            challenge = ?result.challenge_name,
            has_tokens = result.access_token.is_some(),
            "User signed in"
        );

        Ok(result)
    }
}

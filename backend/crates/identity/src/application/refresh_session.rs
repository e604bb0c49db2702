//! Refresh Session Use Case
//!
//! Exchanges a refresh token for a new access/id token pair.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::IdentityConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::provider::{AuthFlow, IdentityProvider, InitiateAuthRequest};
use crate::domain::value_object::token::Token;
use crate::error::{IdentityError, IdentityResult};

/// Refresh session use case
pub struct RefreshSessionUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    config: Arc<IdentityConfig>,
}

impl<P> RefreshSessionUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<IdentityConfig>) -> Self {
        Self { provider, config }
    }

    pub async fn execute(&self, refresh_token: &str) -> IdentityResult<AuthSession> {
        // Checked before anything else: no client id, no network call
        let client_id = self.config.require_client_id()?.to_string();

        let refresh_token = Token::new(refresh_token).map_err(|_| IdentityError::MissingInput {
            field: "refreshToken",
        })?;

        let request = InitiateAuthRequest {
            client_id,
            flow: AuthFlow::RefreshToken(refresh_token),
        };

        let result = self.provider.initiate_auth(request).await?;

        let session = AuthSession::from_authentication_result(result, Utc::now())
            .ok_or(IdentityError::InvalidResponse)?;

        tracing::info!(expires_in = session.expires_in, "Session refreshed");

        Ok(session)
    }
}

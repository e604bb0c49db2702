//! Sign Out Use Case
//!
//! Invalidates every session of the token's owner at the provider.

use std::sync::Arc;

use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::token::Token;
use crate::error::{IdentityError, IdentityResult};

/// Sign out use case
pub struct SignOutUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignOutUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Global sign-out: all devices, not just the current session
    pub async fn execute(&self, access_token: &str) -> IdentityResult<()> {
        let access_token = Token::new(access_token).map_err(|_| IdentityError::MissingInput {
            field: "accessToken",
        })?;

        self.provider.global_sign_out(&access_token).await?;

        tracing::info!("User signed out globally");
        Ok(())
    }
}

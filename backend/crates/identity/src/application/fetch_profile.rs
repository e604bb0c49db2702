//! Fetch Profile Use Case
//!
//! Looks up the account that owns an access token.

use std::sync::Arc;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::token::Token;
use crate::error::{IdentityError, IdentityResult};

/// Fetch profile use case
pub struct FetchProfileUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> FetchProfileUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, access_token: &str) -> IdentityResult<UserProfile> {
        let access_token = Token::new(access_token).map_err(|_| IdentityError::MissingInput {
            field: "accessToken",
        })?;

        let response = self.provider.get_user(&access_token).await?;

        // A lookup without an attribute list is a protocol violation
        let attributes = response.attributes.ok_or(IdentityError::MissingAttributes)?;
        let profile = UserProfile::from_attributes(&attributes);

        tracing::debug!(user_sub = %profile.id, "Fetched user profile");

        Ok(profile)
    }
}

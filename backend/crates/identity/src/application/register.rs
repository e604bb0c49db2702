//! Register Use Case
//!
//! Creates a new account at the identity provider from a validated
//! registration form.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::entity::registration::{
    RegistrationInput, RegistrationOutcome, ValidatedRegistration,
};
use crate::domain::entity::user_profile::{ATTR_EMAIL, ATTR_NAME, UserAttribute};
use crate::domain::provider::{IdentityProvider, SignUpRequest};
use crate::domain::validation::validate;
use crate::error::IdentityResult;

/// Register use case
pub struct RegisterUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    config: Arc<IdentityConfig>,
}

impl<P> RegisterUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<IdentityConfig>) -> Self {
        Self { provider, config }
    }

    /// Validate a raw form submission, then register.
    ///
    /// An invalid form never reaches the provider.
    pub async fn submit(&self, input: RegistrationInput) -> IdentityResult<RegistrationOutcome> {
        let registration = validate(&input)?;
        self.execute(registration).await
    }

    /// Register a validated form; the email doubles as the username.
    ///
    /// Not safe to retry: a replay after a lost response fails with a
    /// duplicate-account rejection.
    pub async fn execute(
        &self,
        registration: ValidatedRegistration,
    ) -> IdentityResult<RegistrationOutcome> {
        let email = registration.email.as_str().to_string();

        let request = SignUpRequest {
            client_id: self.config.client_id.clone(),
            username: email.clone(),
            password: registration.password.expose().to_string(),
            attributes: vec![
                UserAttribute::new(ATTR_NAME, registration.full_name),
                UserAttribute::new(ATTR_EMAIL, email.clone()),
            ],
            auto_sign_in: self.config.auto_sign_in,
        };

        let outcome = self.provider.sign_up(request).await?;

        tracing::info!(
            user_sub = %outcome.user_sub,
            email_domain = %registration.email.domain(),
            confirmed = outcome.confirmed,
            "User registered"
        );

        Ok(outcome)
    }
}

//! Identity Provider Trait
//!
//! The request/response surface this crate needs from the external identity
//! provider. Implementation is in the infrastructure layer; use cases only
//! see these types.

use std::fmt;

use crate::domain::entity::{
    auth_session::AuthenticationResult,
    registration::{CodeDelivery, RegistrationOutcome},
    user_profile::UserAttribute,
};
use crate::domain::value_object::token::Token;

/// Failure reported by a provider call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderFailure {
    /// The provider answered and refused the request
    #[error("{message}")]
    Rejected {
        /// Provider error code, e.g. `UsernameExistsException`
        code: Option<String>,
        /// Provider message, forwarded verbatim to the user
        message: String,
    },

    /// The request never got an answer (network, credentials, dispatch)
    #[error("Identity provider unreachable: {0}")]
    Transport(String),

    /// The request could not be built locally; nothing was sent
    #[error("Invalid identity provider request: {0}")]
    InvalidRequest(String),
}

impl ProviderFailure {
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderFailure>;

/// New-account request
#[derive(Clone)]
pub struct SignUpRequest {
    /// App client the account is registered through, when configured
    pub client_id: Option<String>,
    pub username: String,
    pub password: String,
    /// Attributes stored on the account (`name`, `email`)
    pub attributes: Vec<UserAttribute>,
    /// Ask for sign-in to happen automatically once the account is confirmed
    pub auto_sign_in: bool,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("attributes", &self.attributes)
            .field("auto_sign_in", &self.auto_sign_in)
            .finish()
    }
}

/// Authentication flow for `initiate_auth`
#[derive(Clone)]
pub enum AuthFlow {
    /// `REFRESH_TOKEN_AUTH`
    RefreshToken(Token),
    /// `USER_PASSWORD_AUTH`
    UserPassword { username: String, password: String },
}

impl AuthFlow {
    pub fn name(&self) -> &'static str {
        match self {
            AuthFlow::RefreshToken(_) => "REFRESH_TOKEN_AUTH",
            AuthFlow::UserPassword { .. } => "USER_PASSWORD_AUTH",
        }
    }
}

impl fmt::Debug for AuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthFlow::RefreshToken(token) => f.debug_tuple("RefreshToken").field(token).finish(),
            AuthFlow::UserPassword { username, .. } => f
                .debug_struct("UserPassword")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InitiateAuthRequest {
    pub client_id: String,
    pub flow: AuthFlow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub client_id: String,
    pub username: String,
}

/// Account lookup response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUserResponse {
    pub username: Option<String>,
    /// `None` when the provider omitted the attribute list altogether
    pub attributes: Option<Vec<UserAttribute>>,
}

/// Identity provider trait
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// SignUp
    async fn sign_up(&self, request: SignUpRequest) -> ProviderResult<RegistrationOutcome>;

    /// GetUser
    async fn get_user(&self, access_token: &Token) -> ProviderResult<GetUserResponse>;

    /// InitiateAuth; the returned result may be incomplete
    async fn initiate_auth(
        &self,
        request: InitiateAuthRequest,
    ) -> ProviderResult<AuthenticationResult>;

    /// ForgotPassword
    async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> ProviderResult<Option<CodeDelivery>>;

    /// GlobalSignOut
    async fn global_sign_out(&self, access_token: &Token) -> ProviderResult<()>;
}

//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::{
    FetchProfileUseCase, RefreshSessionUseCase, RegisterUseCase, RequestPasswordResetUseCase,
    SignInInput, SignInUseCase, SignOutUseCase,
};
use crate::domain::entity::auth_session::{AuthSession, AuthenticationResult};
use crate::domain::entity::registration::RegistrationInput;
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::provider::IdentityProvider;
use crate::domain::validation::field_errors;
use crate::error::{IdentityError, IdentityResult};
use crate::presentation::dto::{
    CodeDeliveryResponse, ForgotPasswordRequest, RefreshRequest, SignInRequest, SignUpResponse,
    ValidateResponse,
};
use crate::presentation::extract::JsonBody;

/// Message returned after a successful registration
pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Signed up successfully. Please sign in.";

/// Shared state for identity handlers
pub struct IdentityAppState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub config: Arc<IdentityConfig>,
}

// Manual impl: `P` itself does not need to be `Clone`
impl<P> Clone for IdentityAppState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/identity/signup/validate
///
/// Runs the same checks as sign-up without calling the provider, so the form
/// can show errors on every change.
pub async fn validate_sign_up(
    JsonBody(req): JsonBody<RegistrationInput>,
) -> Json<ValidateResponse> {
    let errors = field_errors(&req);

    Json(ValidateResponse {
        valid: errors.is_empty(),
        errors: errors.messages(),
    })
}

/// POST /api/identity/signup
pub async fn sign_up<P>(
    State(state): State<IdentityAppState<P>>,
    JsonBody(req): JsonBody<RegistrationInput>,
) -> IdentityResult<impl IntoResponse>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.provider.clone(), state.config.clone());

    let outcome = use_case.submit(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            redirect_to: state.config.post_registration_redirect.clone(),
            message: SIGN_UP_SUCCESS_MESSAGE.to_string(),
            user_confirmed: outcome.confirmed,
        }),
    ))
}

// ============================================================================
// Sign In / Refresh
// ============================================================================

/// POST /api/identity/signin
pub async fn sign_in<P>(
    State(state): State<IdentityAppState<P>>,
    JsonBody(req): JsonBody<SignInRequest>,
) -> IdentityResult<Json<AuthenticationResult>>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.provider.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    Ok(Json(use_case.execute(input).await?))
}

/// POST /api/identity/refresh
pub async fn refresh<P>(
    State(state): State<IdentityAppState<P>>,
    JsonBody(req): JsonBody<RefreshRequest>,
) -> IdentityResult<Json<AuthSession>>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = RefreshSessionUseCase::new(state.provider.clone(), state.config.clone());

    Ok(Json(use_case.execute(&req.refresh_token).await?))
}

// ============================================================================
// Password Reset
// ============================================================================

/// POST /api/identity/password/forgot
pub async fn forgot_password<P>(
    State(state): State<IdentityAppState<P>>,
    JsonBody(req): JsonBody<ForgotPasswordRequest>,
) -> IdentityResult<impl IntoResponse>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = RequestPasswordResetUseCase::new(state.provider.clone(), state.config.clone());

    let delivery = use_case.execute(&req.username).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(delivery.map(CodeDeliveryResponse::from).unwrap_or_default()),
    ))
}

// ============================================================================
// Authenticated (Bearer token)
// ============================================================================

/// GET /api/identity/me
pub async fn me<P>(
    State(state): State<IdentityAppState<P>>,
    headers: HeaderMap,
) -> IdentityResult<Json<UserProfile>>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers).ok_or(IdentityError::MissingBearerToken)?;

    let use_case = FetchProfileUseCase::new(state.provider.clone());

    Ok(Json(use_case.execute(token).await?))
}

/// POST /api/identity/signout
pub async fn sign_out<P>(
    State(state): State<IdentityAppState<P>>,
    headers: HeaderMap,
) -> IdentityResult<StatusCode>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers).ok_or(IdentityError::MissingBearerToken)?;

    let use_case = SignOutUseCase::new(state.provider.clone());
    use_case.execute(token).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helpers
// ============================================================================

/// Extract the token from `Authorization: Bearer <token>`
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

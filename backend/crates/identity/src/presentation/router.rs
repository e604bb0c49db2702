//! Identity Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::provider::IdentityProvider;
use crate::infra::cognito::CognitoProvider;
use crate::presentation::handlers::{self, IdentityAppState};

/// Create the Identity router backed by Cognito
pub fn identity_router(provider: CognitoProvider, config: IdentityConfig) -> Router {
    identity_router_generic(provider, config)
}

/// Create a generic Identity router for any provider implementation
pub fn identity_router_generic<P>(provider: P, config: IdentityConfig) -> Router
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let state = IdentityAppState {
        provider: Arc::new(provider),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup/validate", post(handlers::validate_sign_up))
        .route("/signup", post(handlers::sign_up::<P>))
        .route("/signin", post(handlers::sign_in::<P>))
        .route("/refresh", post(handlers::refresh::<P>))
        .route("/password/forgot", post(handlers::forgot_password::<P>))
        .route("/me", get(handlers::me::<P>))
        .route("/signout", post(handlers::sign_out::<P>))
        .with_state(state)
}

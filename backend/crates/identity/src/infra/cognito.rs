//! Amazon Cognito Provider
//!
//! `IdentityProvider` implementation on top of the Cognito user pools SDK.
//! SDK errors are mapped to `ProviderFailure` immediately after each call:
//! service errors keep their code and message, everything else (network,
//! credentials, timeouts) becomes a transport failure. A request that cannot
//! be built is reported before anything is sent.

use aws_config::BehaviorVersion;
use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::config::Region;
use aws_sdk_cognitoidentityprovider::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cognitoidentityprovider::types::{
    AttributeType, AuthFlowType, AuthenticationResultType, CodeDeliveryDetailsType,
};

use crate::application::config::IdentityConfig;
use crate::domain::entity::{
    auth_session::AuthenticationResult,
    registration::{CodeDelivery, RegistrationOutcome},
    user_profile::UserAttribute,
};
use crate::domain::provider::{
    AuthFlow, ForgotPasswordRequest, GetUserResponse, IdentityProvider, InitiateAuthRequest,
    ProviderFailure, ProviderResult, SignUpRequest,
};
use crate::domain::value_object::token::Token;

/// Client metadata key carrying the auto sign-in request
const AUTO_SIGN_IN_METADATA_KEY: &str = "autoSignIn";

/// Cognito-backed identity provider
#[derive(Clone, Debug)]
pub struct CognitoProvider {
    client: Client,
}

impl CognitoProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client for the configured region using the default AWS
    /// credential chain.
    pub async fn from_config(config: &IdentityConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        tracing::info!(region = %config.region, "Cognito client initialized");

        Self::new(Client::new(&sdk_config))
    }
}

// ============================================================================
// Identity Provider Implementation
// ============================================================================

impl IdentityProvider for CognitoProvider {
    async fn sign_up(&self, request: SignUpRequest) -> ProviderResult<RegistrationOutcome> {
        let mut builder = self
            .client
            .sign_up()
            .set_client_id(request.client_id.clone())
            .username(&request.username)
            .password(&request.password);

        for attribute in &request.attributes {
            builder = builder.user_attributes(to_attribute_type(attribute)?);
        }

        if request.auto_sign_in {
            builder = builder.client_metadata(AUTO_SIGN_IN_METADATA_KEY, "true");
        }

        let output = builder
            .send()
            .await
            .map_err(|e| map_sdk_error("SignUp", e))?;

        Ok(RegistrationOutcome {
            user_sub: output.user_sub().to_string(),
            confirmed: output.user_confirmed(),
            code_delivery: output.code_delivery_details().map(to_code_delivery),
        })
    }

    async fn get_user(&self, access_token: &Token) -> ProviderResult<GetUserResponse> {
        let output = self
            .client
            .get_user()
            .access_token(access_token.expose())
            .send()
            .await
            .map_err(|e| map_sdk_error("GetUser", e))?;

        let attributes = output
            .user_attributes()
            .iter()
            .map(|attr| UserAttribute {
                name: attr.name().to_string(),
                value: attr.value().map(str::to_string),
            })
            .collect();

        Ok(GetUserResponse {
            username: Some(output.username().to_string()),
            attributes: Some(attributes),
        })
    }

    async fn initiate_auth(
        &self,
        request: InitiateAuthRequest,
    ) -> ProviderResult<AuthenticationResult> {
        let builder = self
            .client
            .initiate_auth()
            .client_id(&request.client_id);

        let builder = match &request.flow {
            AuthFlow::RefreshToken(refresh_token) => builder
                .auth_flow(AuthFlowType::RefreshTokenAuth)
                .auth_parameters("REFRESH_TOKEN", refresh_token.expose()),
            AuthFlow::UserPassword { username, password } => builder
                .auth_flow(AuthFlowType::UserPasswordAuth)
                .auth_parameters("USERNAME", username)
                .auth_parameters("PASSWORD", password),
        };

        let output = builder
            .send()
            .await
            .map_err(|e| map_sdk_error("InitiateAuth", e))?;

        let mut result = output
            .authentication_result()
            .map(to_authentication_result)
            .unwrap_or_default();
        result.challenge_name = output.challenge_name().map(|c| c.as_str().to_string());
        result.session = output.session().map(str::to_string);

        Ok(result)
    }

    async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> ProviderResult<Option<CodeDelivery>> {
        let output = self
            .client
            .forgot_password()
            .client_id(&request.client_id)
            .username(&request.username)
            .send()
            .await
            .map_err(|e| map_sdk_error("ForgotPassword", e))?;

        Ok(output.code_delivery_details().map(to_code_delivery))
    }

    async fn global_sign_out(&self, access_token: &Token) -> ProviderResult<()> {
        self.client
            .global_sign_out()
            .access_token(access_token.expose())
            .send()
            .await
            .map_err(|e| map_sdk_error("GlobalSignOut", e))?;

        Ok(())
    }
}

// ============================================================================
// Mapping helpers
// ============================================================================

fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> ProviderFailure
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    match &err {
        SdkError::ServiceError(service) => {
            let inner = service.err();
            let code = inner.code().map(str::to_string);
            let message = inner
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| DisplayErrorContext(inner).to_string());

            tracing::warn!(operation, code = ?code, "Cognito rejected request");
            ProviderFailure::Rejected { code, message }
        }
        _ => {
            let detail = DisplayErrorContext(&err).to_string();
            tracing::error!(operation, error = %detail, "Cognito request failed");
            ProviderFailure::Transport(detail)
        }
    }
}

fn to_attribute_type(attribute: &UserAttribute) -> ProviderResult<AttributeType> {
    AttributeType::builder()
        .name(&attribute.name)
        .set_value(attribute.value.clone())
        .build()
        .map_err(|e| {
            ProviderFailure::InvalidRequest(format!("user attribute `{}`: {}", attribute.name, e))
        })
}

fn to_code_delivery(details: &CodeDeliveryDetailsType) -> CodeDelivery {
    CodeDelivery {
        destination: details.destination().map(str::to_string),
        medium: details.delivery_medium().map(|m| m.as_str().to_string()),
        attribute_name: details.attribute_name().map(str::to_string),
    }
}

/// The SDK reports a missing expiry as 0; that maps to `None`.
fn to_authentication_result(result: &AuthenticationResultType) -> AuthenticationResult {
    let expires_in = result.expires_in();

    AuthenticationResult {
        access_token: Token::from_optional(result.access_token()),
        id_token: Token::from_optional(result.id_token()),
        refresh_token: Token::from_optional(result.refresh_token()),
        expires_in: (expires_in > 0).then_some(i64::from(expires_in)),
        token_type: result.token_type().map(str::to_string),
        challenge_name: None,
        session: None,
    }
}

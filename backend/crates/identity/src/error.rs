//! Identity Error Types
//!
//! Closed set of failures every identity operation can produce. Provider
//! SDK errors are mapped into this set right after each call, so callers
//! match on a finite tag set and never inspect provider payloads.
//!
//! Integrates with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;
use tracing::Level;

use crate::domain::provider::ProviderFailure;
use crate::domain::validation::ValidationErrors;

/// Identity result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Message shown for failures the user cannot correct
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum IdentityError {
    /// Registration form failed local validation (no network call was made)
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A required operation argument was empty
    #[error("{field} is required")]
    MissingInput { field: &'static str },

    /// Request body was not JSON of the expected shape
    #[error("{message}")]
    MalformedBody { kind: ErrorKind, message: String },

    /// Request carried no `Authorization: Bearer` token
    #[error("Missing bearer token")]
    MissingBearerToken,

    /// Required deployment setting is absent; fatal, never retried
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Account lookup succeeded but carried no attribute list
    #[error("User attributes not found in the response")]
    MissingAttributes,

    /// Authentication succeeded but tokens or expiry were missing
    #[error("Invalid response from identity provider")]
    InvalidResponse,

    /// Provider refused the request; message is forwarded verbatim
    #[error("{message}")]
    Provider {
        code: Option<String>,
        message: String,
    },

    /// Provider could not be reached
    #[error("Identity provider unreachable: {0}")]
    Transport(String),

    /// Provider request could not be built locally; a defect, not a user error
    #[error("Invalid identity provider request: {0}")]
    InvalidRequest(String),
}

impl IdentityError {
    /// Provider error code, when the provider rejected the request
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            IdentityError::Provider { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Protocol violations: nominally successful responses with missing fields
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            IdentityError::MissingAttributes | IdentityError::InvalidResponse
        )
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::Validation(_) => ErrorKind::UnprocessableEntity,
            IdentityError::MissingInput { .. } => ErrorKind::BadRequest,
            IdentityError::MissingBearerToken => ErrorKind::Unauthorized,
            IdentityError::MalformedBody { kind, .. } => *kind,
            IdentityError::Configuration(_) => ErrorKind::InternalServerError,
            IdentityError::MissingAttributes | IdentityError::InvalidResponse => {
                ErrorKind::BadGateway
            }
            IdentityError::Provider { code, .. } => provider_code_kind(code.as_deref()),
            IdentityError::Transport(_) => ErrorKind::ServiceUnavailable,
            IdentityError::InvalidRequest(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message safe to show to the user
    ///
    /// Provider rejections are shown verbatim; configuration, protocol and
    /// transport failures collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            IdentityError::Validation(_) => "Validation failed".to_string(),
            IdentityError::MissingInput { .. }
            | IdentityError::MissingBearerToken
            | IdentityError::MalformedBody { .. }
            | IdentityError::Provider { .. } => self.to_string(),
            IdentityError::Configuration(_)
            | IdentityError::MissingAttributes
            | IdentityError::InvalidResponse
            | IdentityError::Transport(_)
            | IdentityError::InvalidRequest(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let mut err = AppError::new(self.kind(), self.user_message());
        if let IdentityError::Validation(errors) = self {
            for (field, message) in errors.messages() {
                err = err.with_field_error(field, message);
            }
        }
        err
    }

    /// Level this error is logged at when it leaves the HTTP boundary
    ///
    /// Provider rejections and transport failures are already logged by the
    /// adapter that made the call, with the operation name attached.
    fn log_level(&self) -> Level {
        match self {
            IdentityError::Configuration(_)
            | IdentityError::MissingAttributes
            | IdentityError::InvalidResponse
            | IdentityError::InvalidRequest(_) => Level::ERROR,
            _ => Level::DEBUG,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        if self.log_level() == Level::ERROR {
            tracing::error!(error = %self, kind = %self.kind(), "Identity request failed");
        } else {
            tracing::debug!(error = %self, kind = %self.kind(), "Identity error");
        }
    }
}

/// Map a provider error code onto an HTTP-facing kind
fn provider_code_kind(code: Option<&str>) -> ErrorKind {
    match code {
        Some("UsernameExistsException" | "AliasExistsException") => ErrorKind::Conflict,
        Some("NotAuthorizedException") => ErrorKind::Unauthorized,
        Some("UserNotConfirmedException" | "PasswordResetRequiredException") => {
            ErrorKind::Forbidden
        }
        Some("UserNotFoundException") => ErrorKind::NotFound,
        Some(
            "TooManyRequestsException"
            | "LimitExceededException"
            | "TooManyFailedAttemptsException",
        ) => ErrorKind::TooManyRequests,
        Some("InternalErrorException") => ErrorKind::BadGateway,
        Some("ResourceNotFoundException") => ErrorKind::InternalServerError,
        _ => ErrorKind::BadRequest,
    }
}

impl From<ProviderFailure> for IdentityError {
    fn from(failure: ProviderFailure) -> Self {
        match failure {
            ProviderFailure::Rejected { code, message } => {
                IdentityError::Provider { code, message }
            }
            ProviderFailure::Transport(msg) => IdentityError::Transport(msg),
            ProviderFailure::InvalidRequest(msg) => IdentityError::InvalidRequest(msg),
        }
    }
}

impl From<JsonRejection> for IdentityError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => ErrorKind::UnprocessableEntity,
            _ => ErrorKind::BadRequest,
        };

        IdentityError::MalformedBody {
            kind,
            message: rejection.body_text(),
        }
    }
}

impl From<ValidationErrors> for IdentityError {
    fn from(errors: ValidationErrors) -> Self {
        IdentityError::Validation(errors)
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::registration::RegistrationInput;
    use crate::domain::validation::validate;

    fn provider(code: &str, message: &str) -> IdentityError {
        IdentityError::from(ProviderFailure::rejected(code, message))
    }

    #[test]
    fn test_provider_message_is_verbatim() {
        let err = provider("UsernameExistsException", "User already exists");
        assert_eq!(err.user_message(), "User already exists");
        assert_eq!(err.provider_code(), Some("UsernameExistsException"));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_provider_code_kinds() {
        assert_eq!(
            provider("NotAuthorizedException", "Incorrect username or password.").kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(provider("UserNotFoundException", "x").kind(), ErrorKind::NotFound);
        assert_eq!(provider("UserNotConfirmedException", "x").kind(), ErrorKind::Forbidden);
        assert_eq!(provider("LimitExceededException", "x").kind(), ErrorKind::TooManyRequests);
        assert_eq!(provider("InvalidPasswordException", "x").kind(), ErrorKind::BadRequest);
        assert_eq!(
            IdentityError::Provider {
                code: None,
                message: "x".into()
            }
            .kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_generic_messages_hide_details() {
        let config = IdentityError::Configuration("COGNITO_CLIENT_ID is not set".into());
        assert_eq!(config.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(config.kind(), ErrorKind::InternalServerError);

        assert!(IdentityError::InvalidResponse.is_protocol_error());
        assert!(IdentityError::MissingAttributes.is_protocol_error());
        assert_eq!(IdentityError::InvalidResponse.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(IdentityError::MissingAttributes.kind(), ErrorKind::BadGateway);

        let transport = IdentityError::from(ProviderFailure::Transport("dispatch failure".into()));
        assert_eq!(transport.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(transport.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_validation_to_app_error_carries_fields() {
        let errors = validate(&RegistrationInput::new("", "jane@example.com", "Abcdef1!", "nope"))
            .unwrap_err();
        let app_err = IdentityError::from(errors).to_app_error();

        assert_eq!(app_err.status_code(), 422);
        assert_eq!(app_err.field_errors()["fullName"], "Full name is required");
        assert_eq!(app_err.field_errors()["confirmPassword"], "Passwords don't match");
    }

    #[test]
    fn test_provider_outcomes_not_logged_again_at_boundary() {
        let rejected = provider("UsernameExistsException", "User already exists");
        assert_eq!(rejected.log_level(), Level::DEBUG);
        assert_eq!(
            IdentityError::Transport("dispatch failure".into()).log_level(),
            Level::DEBUG
        );
        assert_eq!(IdentityError::Configuration("x".into()).log_level(), Level::ERROR);
        assert_eq!(IdentityError::InvalidResponse.log_level(), Level::ERROR);
    }

    #[test]
    fn test_invalid_request_is_internal_not_transport() {
        let err = IdentityError::from(ProviderFailure::InvalidRequest(
            "user attribute `name`: missing field".into(),
        ));
        assert!(matches!(err, IdentityError::InvalidRequest(_)));
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.log_level(), Level::ERROR);
    }

    #[test]
    fn test_json_rejection_kinds() {
        let data = IdentityError::MalformedBody {
            kind: ErrorKind::UnprocessableEntity,
            message: "fullName: invalid type".into(),
        };
        assert_eq!(data.to_app_error().status_code(), 422);
        assert_eq!(data.user_message(), "fullName: invalid type");
    }

    #[test]
    fn test_missing_input_message() {
        let err = IdentityError::MissingInput {
            field: "refreshToken",
        };
        assert_eq!(err.user_message(), "refreshToken is required");
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}

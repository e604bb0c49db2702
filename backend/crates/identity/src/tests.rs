//! Cross-layer tests for the identity crate
//! Use cases over the fake provider, then the HTTP surface end to end.

#[cfg(test)]
mod registration_tests {
    use std::sync::Arc;

    use crate::application::{IdentityConfig, RefreshSessionUseCase, RegisterUseCase};
    use crate::domain::entity::auth_session::AuthenticationResult;
    use crate::domain::entity::registration::RegistrationInput;
    use crate::domain::provider::ProviderFailure;
    use crate::domain::validation::{Field, FieldErrorKind};
    use crate::domain::value_object::token::Token;
    use crate::error::IdentityError;
    use crate::test_support::{Call, FakeProvider};

    fn jane() -> RegistrationInput {
        RegistrationInput::new("Jane Doe", "jane@example.com", "Abcdef1!", "Abcdef1!")
    }

    #[tokio::test]
    async fn test_valid_form_issues_exactly_one_sign_up() {
        let provider = Arc::new(FakeProvider::new());
        let use_case = RegisterUseCase::new(provider.clone(), Arc::new(IdentityConfig::default()));

        let outcome = use_case.submit(jane()).await.unwrap();
        assert_eq!(outcome.user_sub, "sub-1234");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        let Call::SignUp(request) = &calls[0] else {
            panic!("expected sign up");
        };
        assert_eq!(request.username, "jane@example.com");
    }

    #[tokio::test]
    async fn test_short_password_never_reaches_provider() {
        let provider = Arc::new(FakeProvider::new());
        let use_case = RegisterUseCase::new(provider.clone(), Arc::new(IdentityConfig::default()));

        let mut input = jane();
        input.password = "short1!".to_string();
        input.confirm_password = "short1!".to_string();

        let err = use_case.submit(input).await.unwrap_err();
        let IdentityError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.kind_of(Field::Password), Some(FieldErrorKind::TooShort));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_account_message_is_verbatim() {
        let provider = Arc::new(FakeProvider::new().with_sign_up(Err(ProviderFailure::rejected(
            "UsernameExistsException",
            "User already exists",
        ))));
        let use_case = RegisterUseCase::new(provider, Arc::new(IdentityConfig::default()));

        let err = use_case.submit(jane()).await.unwrap_err();
        assert!(matches!(
            &err,
            IdentityError::Provider { message, .. } if message == "User already exists"
        ));
    }

    #[tokio::test]
    async fn test_refresh_without_expiry_is_invalid_response() {
        let result = AuthenticationResult {
            access_token: Token::new("access-token").ok(),
            id_token: Token::new("id-token").ok(),
            expires_in: None,
            ..Default::default()
        };
        let provider = Arc::new(FakeProvider::new().with_initiate_auth(Ok(result)));
        let config = Arc::new(IdentityConfig::default().with_client_id("client-1"));
        let use_case = RefreshSessionUseCase::new(provider, config);

        let err = use_case.execute("refresh-token").await.unwrap_err();
        assert!(matches!(err, IdentityError::InvalidResponse));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::IdentityConfig;
    use crate::domain::entity::auth_session::AuthenticationResult;
    use crate::domain::provider::ProviderFailure;
    use crate::domain::value_object::token::Token;
    use crate::error::GENERIC_FAILURE_MESSAGE;
    use crate::presentation::handlers::SIGN_UP_SUCCESS_MESSAGE;
    use crate::presentation::router::identity_router_generic;
    use crate::test_support::{Call, FakeProvider};

    fn configured() -> IdentityConfig {
        IdentityConfig::default().with_client_id("client-1")
    }

    fn app(provider: &FakeProvider, config: IdentityConfig) -> Router {
        identity_router_generic(provider.clone(), config)
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn raw_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn bearer_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn jane() -> Value {
        json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "password": "Abcdef1!",
            "confirmPassword": "Abcdef1!"
        })
    }

    #[tokio::test]
    async fn test_validate_reports_field_messages() {
        let provider = FakeProvider::new();
        let body = json!({
            "fullName": "Jane Doe",
            "email": "jane@",
            "password": "short1!",
            "confirmPassword": "short1!"
        });

        let (status, body) =
            send(app(&provider, configured()), json_request("/signup/validate", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"]["email"], "Invalid email address");
        assert_eq!(
            body["errors"]["password"],
            "Password must be at least 8 characters long"
        );
        assert!(body["errors"].get("fullName").is_none());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_validate_accepts_valid_form() {
        let provider = FakeProvider::new();

        let (status, body) =
            send(app(&provider, configured()), json_request("/signup/validate", jane())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["errors"], json!({}));
    }

    #[tokio::test]
    async fn test_sign_up_redirects_to_sign_in() {
        let provider = FakeProvider::new();

        let (status, body) =
            send(app(&provider, configured()), json_request("/signup", jane())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["redirectTo"], "/signin");
        assert_eq!(body["message"], SIGN_UP_SUCCESS_MESSAGE);
        assert_eq!(body["userConfirmed"], false);

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(&calls[0], Call::SignUp(req) if req.username == "jane@example.com"));
    }

    #[tokio::test]
    async fn test_sign_up_invalid_form_is_unprocessable() {
        let provider = FakeProvider::new();
        let mut body = jane();
        body["confirmPassword"] = json!("Abcdef1?");

        let (status, body) =
            send(app(&provider, configured()), json_request("/signup", body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["confirmPassword"], "Passwords don't match");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_shows_provider_message() {
        let provider = FakeProvider::new().with_sign_up(Err(ProviderFailure::rejected(
            "UsernameExistsException",
            "User already exists",
        )));

        let (status, body) =
            send(app(&provider, configured()), json_request("/signup", jane())).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["detail"], "User already exists");
        assert!(body.get("redirectTo").is_none());
    }

    #[tokio::test]
    async fn test_sign_up_transport_failure_is_generic() {
        let failure = ProviderFailure::Transport("dispatch failure".into());
        let provider = FakeProvider::new().with_sign_up(Err(failure));

        let (status, body) =
            send(app(&provider, configured()), json_request("/signup", jane())).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["detail"], GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_sign_up_wrong_field_type_is_problem_details() {
        let provider = FakeProvider::new();
        let request = json_request("/signup", json!({ "fullName": 5 }));

        let response = app(&provider, configured()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 422);
        assert!(body["detail"].as_str().unwrap().contains("fullName"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let provider = FakeProvider::new();

        let (status, body) =
            send(app(&provider, configured()), raw_request("/signin", "{\"email\":")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sign_in_returns_tokens() {
        let provider = FakeProvider::new();
        let body = json!({ "email": "jane@example.com", "password": "Abcdef1!" });

        let (status, body) =
            send(app(&provider, configured()), json_request("/signin", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accessToken"], "access-token");
        assert_eq!(body["idToken"], "id-token");
        assert_eq!(body["expiresIn"], 3600);
    }

    #[tokio::test]
    async fn test_refresh_without_client_id_makes_no_call() {
        let provider = FakeProvider::new();
        let body = json!({ "refreshToken": "refresh-token" });

        let (status, body) =
            send(app(&provider, IdentityConfig::default()), json_request("/refresh", body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], GENERIC_FAILURE_MESSAGE);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_refresh_missing_expiry_is_bad_gateway() {
        let provider = FakeProvider::new().with_initiate_auth(Ok(AuthenticationResult {
            access_token: Token::new("access-token").ok(),
            id_token: Token::new("id-token").ok(),
            ..Default::default()
        }));
        let body = json!({ "refreshToken": "refresh-token" });

        let (status, _) = send(app(&provider, configured()), json_request("/refresh", body)).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_refresh_returns_session() {
        let provider = FakeProvider::new();
        let body = json!({ "refreshToken": "refresh-token" });

        let (status, body) =
            send(app(&provider, configured()), json_request("/refresh", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accessToken"], "access-token");
        assert_eq!(body["expiresIn"], 3600);
        assert!(body.get("issuedAt").is_some());
    }

    #[tokio::test]
    async fn test_forgot_password_accepted() {
        let provider = FakeProvider::new();
        let body = json!({ "username": "jane@example.com" });

        let (status, body) =
            send(app(&provider, configured()), json_request("/password/forgot", body)).await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["deliveryMedium"], "EMAIL");
        assert_eq!(body["attributeName"], "email");
    }

    #[tokio::test]
    async fn test_me_returns_profile() {
        let provider = FakeProvider::new();

        let (status, body) = send(
            app(&provider, configured()),
            bearer_request(Method::GET, "/me", Some("access-token")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": "sub-1234", "name": "Jane Doe", "email": "jane@example.com" })
        );
        assert!(matches!(&provider.calls()[0], Call::GetUser(t) if t == "access-token"));
    }

    #[tokio::test]
    async fn test_me_without_bearer_is_unauthorized() {
        let provider = FakeProvider::new();

        let (status, _) = send(
            app(&provider, configured()),
            bearer_request(Method::GET, "/me", None),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sign_out_no_content() {
        let provider = FakeProvider::new();

        let (status, body) = send(
            app(&provider, configured()),
            bearer_request(Method::POST, "/signout", Some("access-token")),
        )
        .await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
        assert!(matches!(&provider.calls()[0], Call::GlobalSignOut(t) if t == "access-token"));
    }
}

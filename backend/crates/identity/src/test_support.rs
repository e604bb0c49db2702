//! In-memory identity provider for tests
//!
//! Records every call and answers with scripted responses.

use std::sync::{Arc, Mutex};

use crate::domain::entity::{
    auth_session::AuthenticationResult,
    registration::{CodeDelivery, RegistrationOutcome},
    user_profile::{ATTR_EMAIL, ATTR_NAME, ATTR_SUB, UserAttribute},
};
use crate::domain::provider::{
    ForgotPasswordRequest, GetUserResponse, IdentityProvider, InitiateAuthRequest,
    ProviderResult, SignUpRequest,
};
use crate::domain::value_object::token::Token;

#[derive(Debug, Clone)]
pub enum Call {
    SignUp(SignUpRequest),
    GetUser(String),
    InitiateAuth(InitiateAuthRequest),
    ForgotPassword(ForgotPasswordRequest),
    GlobalSignOut(String),
}

/// Clones share one call log
#[derive(Clone)]
pub struct FakeProvider {
    calls: Arc<Mutex<Vec<Call>>>,
    sign_up: ProviderResult<RegistrationOutcome>,
    get_user: ProviderResult<GetUserResponse>,
    initiate_auth: ProviderResult<AuthenticationResult>,
    forgot_password: ProviderResult<Option<CodeDelivery>>,
    global_sign_out: ProviderResult<()>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            sign_up: Ok(RegistrationOutcome {
                user_sub: "sub-1234".to_string(),
                confirmed: false,
                code_delivery: Some(email_delivery()),
            }),
            get_user: Ok(GetUserResponse {
                username: Some("sub-1234".to_string()),
                attributes: Some(vec![
                    UserAttribute::new(ATTR_SUB, "sub-1234"),
                    UserAttribute::new(ATTR_NAME, "Jane Doe"),
                    UserAttribute::new(ATTR_EMAIL, "jane@example.com"),
                ]),
            }),
            initiate_auth: Ok(complete_result()),
            forgot_password: Ok(Some(email_delivery())),
            global_sign_out: Ok(()),
        }
    }
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sign_up(mut self, response: ProviderResult<RegistrationOutcome>) -> Self {
        self.sign_up = response;
        self
    }

    pub fn with_get_user(mut self, response: ProviderResult<GetUserResponse>) -> Self {
        self.get_user = response;
        self
    }

    pub fn with_initiate_auth(mut self, response: ProviderResult<AuthenticationResult>) -> Self {
        self.initiate_auth = response;
        self
    }

    pub fn with_forgot_password(mut self, response: ProviderResult<Option<CodeDelivery>>) -> Self {
        self.forgot_password = response;
        self
    }

    pub fn with_global_sign_out(mut self, response: ProviderResult<()>) -> Self {
        self.global_sign_out = response;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn email_delivery() -> CodeDelivery {
    CodeDelivery {
        destination: Some("j***@e***".to_string()),
        medium: Some("EMAIL".to_string()),
        attribute_name: Some("email".to_string()),
    }
}

pub fn complete_result() -> AuthenticationResult {
    AuthenticationResult {
        access_token: Token::new("access-token").ok(),
        id_token: Token::new("id-token").ok(),
        refresh_token: None,
        expires_in: Some(3600),
        token_type: Some("Bearer".to_string()),
        challenge_name: None,
        session: None,
    }
}

impl IdentityProvider for FakeProvider {
    async fn sign_up(&self, request: SignUpRequest) -> ProviderResult<RegistrationOutcome> {
        self.record(Call::SignUp(request));
        self.sign_up.clone()
    }

    async fn get_user(&self, access_token: &Token) -> ProviderResult<GetUserResponse> {
        self.record(Call::GetUser(access_token.expose().to_string()));
        self.get_user.clone()
    }

    async fn initiate_auth(
        &self,
        request: InitiateAuthRequest,
    ) -> ProviderResult<AuthenticationResult> {
        self.record(Call::InitiateAuth(request));
        self.initiate_auth.clone()
    }

    async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> ProviderResult<Option<CodeDelivery>> {
        self.record(Call::ForgotPassword(request));
        self.forgot_password.clone()
    }

    async fn global_sign_out(&self, access_token: &Token) -> ProviderResult<()> {
        self.record(Call::GlobalSignOut(access_token.expose().to_string()));
        self.global_sign_out.clone()
    }
}

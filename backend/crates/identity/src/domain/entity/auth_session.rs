//! Auth Session Entity
//!
//! Tokens issued by the identity provider for an authenticated user.
//! The session lives on the caller's side; this module never stores it.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::value_object::token::Token;

/// Raw authentication result as returned by the provider
///
/// Every field is optional: a sign-in can end in a challenge (new password
/// required, MFA, ...) instead of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResult {
    pub access_token: Option<Token>,
    pub id_token: Option<Token>,
    pub refresh_token: Option<Token>,
    /// Lifetime of the access token in seconds
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
    /// Set when the provider answered with a challenge instead of tokens
    pub challenge_name: Option<String>,
    /// Opaque session for answering the challenge
    pub session: Option<String>,
}

impl AuthenticationResult {
    pub fn is_challenge(&self) -> bool {
        self.challenge_name.is_some()
    }
}

/// Complete, usable session
///
/// ## Invariants
/// - access and id tokens are non-empty
/// - `expires_in` is positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: Token,
    pub id_token: Token,
    /// Seconds until the access token expires, counted from `issued_at`
    pub expires_in: i64,
    /// Only present on a password sign-in; refresh keeps the old one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    pub issued_at: DateTime<Utc>,
}

impl AuthSession {
    /// Promote a raw result to a session.
    ///
    /// Returns `None` when the access token, id token or a positive expiry is
    /// missing; the caller decides which error that is.
    pub fn from_authentication_result(
        result: AuthenticationResult,
        issued_at: DateTime<Utc>,
    ) -> Option<Self> {
        let expires_in = result.expires_in.filter(|secs| *secs > 0)?;

        Some(Self {
            access_token: result.access_token?,
            id_token: result.id_token?,
            expires_in,
            refresh_token: result.refresh_token,
            token_type: result.token_type,
            issued_at,
        })
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at + Duration::seconds(self.expires_in)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Seconds left before expiry, never negative
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at() - now).num_seconds().max(0)
    }
}

//! API DTOs (Data Transfer Objects)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entity::registration::CodeDelivery;

// ============================================================================
// Sign Up
// ============================================================================

/// Live validation response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    /// Field name -> message, one entry per invalid field
    pub errors: BTreeMap<String, String>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub redirect_to: String,
    pub message: String,
    pub user_confirmed: bool,
}

// ============================================================================
// Sign In / Refresh
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Refresh request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: String,
}

// ============================================================================
// Password Reset
// ============================================================================

/// Forgot password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub username: String,
}

/// Where the reset code was sent
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeDeliveryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
}

impl From<CodeDelivery> for CodeDeliveryResponse {
    fn from(delivery: CodeDelivery) -> Self {
        Self {
            destination: delivery.destination,
            delivery_medium: delivery.medium,
            attribute_name: delivery.attribute_name,
        }
    }
}

//! Error conversions - response rendering
//!
//! Renders [`AppError`] as an RFC 7807 problem-details body and, with the
//! `axum` feature, as an HTTP response.

use super::app_error::AppError;

/// Problem-details body (RFC 7807) for an error.
///
/// `errors` is only present when the error carries per-field messages.
pub fn problem_details(err: &AppError) -> serde_json::Value {
    let mut body = serde_json::json!({
        "type": format!("https://httpstatuses.io/{}", err.status_code()),
        "title": err.kind().as_str(),
        "status": err.status_code(),
        "detail": err.message(),
        "action": err.action(),
    });

    if !err.field_errors().is_empty() {
        body["errors"] = serde_json::json!(err.field_errors());
    }

    body
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(problem_details(&self))).into_response()
    }
}

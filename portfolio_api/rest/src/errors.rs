use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error.";

// Contact
pub const INVALID_JSON: &str = "Invalid JSON.";
pub const MISSING_FIELDS: &str = "Name, email, and message are required.";
pub const INVALID_EMAIL: &str = "Invalid email.";
pub const NOT_CONFIGURED: &str = "Email provider is not configured. Set RESEND_API_KEY, \
                                  CONTACT_TO_EMAIL, and CONTACT_FROM_EMAIL.";
pub const SEND_FAILED: &str = "Failed to send email.";

#[derive(Serialize)]
pub struct ApiError {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

pub fn error(code: StatusCode, error: &'static str) -> Response {
    error_with_detail(code, error, None)
}

pub fn error_with_detail(code: StatusCode, error: &'static str, detail: Option<String>) -> Response {
    (code, Json(ApiError { error, detail })).into_response()
}

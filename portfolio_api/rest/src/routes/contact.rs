use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use portfolio_models::contact::ContactMessageError;

use crate::{
    errors::{
        error, error_with_detail, internal_server_error, INVALID_EMAIL, INVALID_JSON,
        MISSING_FIELDS, NOT_CONFIGURED, SEND_FAILED,
    },
    models::{contact::parse_contact_message, ApiOk},
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/contact",
            routing::post(send_message).layer(DefaultBodyLimit::disable()),
        )
        .with_state(service)
}

async fn send_message(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    let Ok(message) = parse_contact_message(&body) else {
        return error(StatusCode::BAD_REQUEST, INVALID_JSON);
    };

    match service.send_message(message).await {
        Ok(()) => Json(ApiOk { ok: true }).into_response(),
        Err(ContactSendMessageError::Invalid(ContactMessageError::MissingFields)) => {
            error(StatusCode::BAD_REQUEST, MISSING_FIELDS)
        }
        Err(ContactSendMessageError::Invalid(ContactMessageError::InvalidEmail)) => {
            error(StatusCode::BAD_REQUEST, INVALID_EMAIL)
        }
        Err(ContactSendMessageError::NotConfigured) => {
            error(StatusCode::NOT_IMPLEMENTED, NOT_CONFIGURED)
        }
        Err(ContactSendMessageError::Send { detail }) => {
            error_with_detail(StatusCode::BAD_GATEWAY, SEND_FAILED, detail)
        }
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}

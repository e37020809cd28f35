use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

pub const SEND_EMAIL_ROUTE: &str = "/emails";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting resend testing server on {host}:{port}");
    info!("Resend send email endpoint: http://{host}:{port}{SEND_EMAIL_ROUTE}");
    info!("API key: {api_key:?}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key))
        .await
        .context("Failed to start HTTP server")
}

/// Emulates the send email endpoint of the Resend API.
///
/// Requests must carry `Authorization: Bearer <api_key>` and a body with
/// non-empty `from`, `to`, `subject` and `html`.
pub fn router(api_key: String) -> Router<()> {
    Router::new()
        .route(SEND_EMAIL_ROUTE, routing::post(send_email))
        .with_state(api_key.into())
}

#[derive(Deserialize)]
struct SendEmailRequest {
    #[serde(default)]
    from: String,
    #[serde(default)]
    to: Vec<String>,
    #[serde(default)]
    subject: String,
    reply_to: Option<String>,
    #[serde(default)]
    html: String,
}

#[derive(Serialize)]
struct SendEmailResponse {
    id: Uuid,
}

async fn send_email(
    state: State<Arc<str>>,
    headers: HeaderMap,
    request: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Response {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        None => {
            return resend_error(
                StatusCode::UNAUTHORIZED,
                "missing_api_key",
                "Missing API key in the authorization header",
            )
        }
        Some(token) if token != &**state => {
            return resend_error(StatusCode::FORBIDDEN, "invalid_api_key", "API key is invalid")
        }
        Some(_) => {}
    }

    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return resend_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                &rejection.body_text(),
            )
        }
    };

    for (field, empty) in [
        ("from", request.from.is_empty()),
        ("to", request.to.is_empty()),
        ("subject", request.subject.is_empty()),
        ("html", request.html.is_empty()),
    ] {
        if empty {
            return resend_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                &format!("Missing `{field}` field."),
            );
        }
    }

    let id = Uuid::new_v4();
    info!(
        %id,
        from = %request.from,
        to = ?request.to,
        reply_to = ?request.reply_to,
        subject = %request.subject,
        "Accepted email"
    );

    Json(SendEmailResponse { id }).into_response()
}

fn resend_error(status: StatusCode, name: &str, message: &str) -> Response {
    let body = json!({
        "statusCode": status.as_u16(),
        "name": name,
        "message": message,
    });
    (status, Json(body)).into_response()
}

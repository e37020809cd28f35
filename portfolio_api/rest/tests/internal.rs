use std::net::{IpAddr, Ipv4Addr};

use anyhow::anyhow;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use portfolio_api_rest::{RestServer, RestServerConfig};
use portfolio_core_contact_contracts::{ContactSendMessageError, MockContactFeatureService};
use portfolio_models::contact::RawContactMessage;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn health_configured() {
    // Arrange
    let router = make_router(MockContactFeatureService::new().with_is_configured(true));

    // Act
    let (status, body) = send(router, Request::get("/health").body(Body::empty()).unwrap()).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"http": true, "email": true}));
}

#[tokio::test]
async fn health_not_configured() {
    // Arrange
    let router = make_router(MockContactFeatureService::new().with_is_configured(false));

    // Act
    let (status, body) = send(router, Request::get("/health").body(Body::empty()).unwrap()).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"http": true, "email": false}));
}

#[tokio::test]
async fn other_error() {
    // Arrange
    let contact = MockContactFeatureService::new().with_send_message(
        RawContactMessage {
            name: Some(json!("Ada")),
            email: Some(json!("ada@example.com")),
            message: Some(json!("Hello")),
        },
        Err(ContactSendMessageError::Other(anyhow!("template not found"))),
    );
    let router = make_router(contact);

    // Act
    let (status, body) = send(router, contact_request()).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error."}));
}

fn contact_request() -> Request<Body> {
    Request::post("/api/contact")
        .body(Body::from(
            json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"}).to_string(),
        ))
        .unwrap()
}

fn make_router(contact: MockContactFeatureService) -> Router {
    RestServer {
        contact,
        config: RestServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            allowed_origins: Vec::new().into(),
        },
    }
    .router()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

use std::{
    net::{IpAddr, Ipv4Addr},
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing, Json, Router,
};
use portfolio_extern_contracts::resend::{ResendApiService, ResendEmail, ResendSendEmailResponse};
use portfolio_extern_impl::resend::{ResendApiServiceConfig, ResendApiServiceImpl};
use portfolio_testing::{resend, spawn_server};
use portfolio_utils::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const API_KEY: &str = "re_test_key";
const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn sent() {
    // Arrange
    let sut = make_sut(resend::router(API_KEY.into()), TIMEOUT).await;

    // Act
    let result = sut.send_email(API_KEY, email()).await.unwrap();

    // Assert
    assert_matches!(result, ResendSendEmailResponse::Sent { id: Some(_) });
}

#[tokio::test]
async fn invalid_api_key() {
    // Arrange
    let sut = make_sut(resend::router(API_KEY.into()), TIMEOUT).await;

    // Act
    let result = sut.send_email("re_wrong_key", email()).await.unwrap();

    // Assert
    assert_matches!(
        result,
        ResendSendEmailResponse::Rejected { status: 403, detail: Some(detail) }
            if detail.contains("API key is invalid")
    );
}

#[tokio::test]
async fn validation_error() {
    // Arrange
    let sut = make_sut(resend::router(API_KEY.into()), TIMEOUT).await;

    // Act
    let result = sut
        .send_email(
            API_KEY,
            ResendEmail {
                subject: String::new(),
                ..email()
            },
        )
        .await
        .unwrap();

    // Assert
    assert_matches!(
        result,
        ResendSendEmailResponse::Rejected { status: 422, detail: Some(detail) }
            if detail.contains("subject")
    );
}

#[tokio::test]
async fn request_payload() {
    // Arrange
    let received = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route(resend::SEND_EMAIL_ROUTE, routing::post(record))
        .with_state(Arc::clone(&received));
    let sut = make_sut(router, TIMEOUT).await;

    // Act
    let result = sut.send_email(API_KEY, email()).await.unwrap();

    // Assert
    assert_eq!(
        result,
        ResendSendEmailResponse::Sent {
            id: Some("recorded".into())
        }
    );
    let received = received.lock().unwrap();
    assert_eq!(
        *received,
        [(
            Some(format!("Bearer {API_KEY}")),
            json!({
                "from": "Portfolio <noreply@example.com>",
                "to": ["owner@example.com"],
                "subject": "Portfolio Contact: Ada",
                "reply_to": "ada@example.com",
                "html": "<p>Hello</p>",
            }),
        )]
    );
}

#[tokio::test]
async fn no_reply_to() {
    // Arrange
    let received = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route(resend::SEND_EMAIL_ROUTE, routing::post(record))
        .with_state(Arc::clone(&received));
    let sut = make_sut(router, TIMEOUT).await;

    // Act
    sut.send_email(
        API_KEY,
        ResendEmail {
            reply_to: None,
            ..email()
        },
    )
    .await
    .unwrap();

    // Assert
    let received = received.lock().unwrap();
    assert!(received[0].1.get("reply_to").is_none());
}

#[tokio::test]
async fn sent_without_id() {
    // Arrange
    let router = Router::new().route(resend::SEND_EMAIL_ROUTE, routing::post(|| async { "OK" }));
    let sut = make_sut(router, TIMEOUT).await;

    // Act
    let result = sut.send_email(API_KEY, email()).await.unwrap();

    // Assert
    assert_eq!(result, ResendSendEmailResponse::Sent { id: None });
}

#[tokio::test]
async fn rejected_with_empty_body() {
    // Arrange
    let router = Router::new().route(
        resend::SEND_EMAIL_ROUTE,
        routing::post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let sut = make_sut(router, TIMEOUT).await;

    // Act
    let result = sut.send_email(API_KEY, email()).await.unwrap();

    // Assert
    assert_eq!(
        result,
        ResendSendEmailResponse::Rejected {
            status: 500,
            detail: None
        }
    );
}

#[tokio::test]
async fn timeout() {
    // Arrange
    let router = Router::new().route(
        resend::SEND_EMAIL_ROUTE,
        routing::post(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            "too late"
        }),
    );
    let sut = make_sut(router, Duration::from_millis(100)).await;

    // Act
    let result = sut.send_email(API_KEY, email()).await;

    // Assert
    assert!(result.is_err());
}

#[tokio::test]
async fn connection_refused() {
    // Arrange
    let listener = std::net::TcpListener::bind((IpAddr::V4(Ipv4Addr::LOCALHOST), 0)).unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{addr}{}", resend::SEND_EMAIL_ROUTE)
        .parse()
        .unwrap();
    let sut =
        ResendApiServiceImpl::new(ResendApiServiceConfig::new(Some(endpoint), TIMEOUT)).unwrap();

    // Act
    let result = sut.send_email(API_KEY, email()).await;

    // Assert
    assert!(result.is_err());
}

type Received = Arc<Mutex<Vec<(Option<String>, Value)>>>;

async fn record(
    state: State<Received>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(Into::into);
    state.lock().unwrap().push((authorization, body));
    Json(json!({"id": "recorded"}))
}

fn email() -> ResendEmail {
    ResendEmail {
        from: "Portfolio <noreply@example.com>".into(),
        to: vec!["owner@example.com".into()],
        subject: "Portfolio Contact: Ada".into(),
        reply_to: Some("ada@example.com".into()),
        html: "<p>Hello</p>".into(),
    }
}

async fn make_sut(router: Router, timeout: Duration) -> ResendApiServiceImpl {
    let addr = spawn_server(router).await.unwrap();
    let endpoint = format!("http://{addr}{}", resend::SEND_EMAIL_ROUTE)
        .parse()
        .unwrap();
    ResendApiServiceImpl::new(ResendApiServiceConfig::new(Some(endpoint), timeout)).unwrap()
}

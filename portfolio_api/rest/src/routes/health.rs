use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use portfolio_core_contact_contracts::ContactFeatureService;
use serde::Serialize;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    /// Whether contact messages can be forwarded at all.
    email: bool,
}

async fn health(service: State<Arc<impl ContactFeatureService>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        http: true,
        email: service.is_configured(),
    })
}

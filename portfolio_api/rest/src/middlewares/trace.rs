use std::time::Duration;

use axum::{
    extract::{MatchedPath, Request},
    response::Response,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, field, warn, Span};

use super::request_id::RequestId;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    let layer = TraceLayer::new_for_http()
        .make_span_with(request_span)
        .on_request(|_: &Request, _: &Span| debug!("request received"))
        .on_response(log_response)
        .on_body_chunk(())
        .on_eos(())
        .on_failure(());

    router.layer(layer)
}

/// The route is the matched path template, so submitted values never end up
/// in the logs.
fn request_span(request: &Request) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("<unmatched>");

    tracing::debug_span!(
        "http",
        version = ?request.version(),
        method = %request.method(),
        route,
        request_id = request.extensions().get::<RequestId>().map(field::display),
        status = field::Empty,
    )
}

fn log_response(response: &Response, latency: Duration, span: &Span) {
    let status = response.status();
    span.record("status", status.as_u16());

    if status.is_server_error() {
        warn!(?latency, %status, "request failed");
    } else {
        debug!(?latency, %status, "request completed");
    }
}

//! Per-request middleware.
//!
//! # Responsibilities
//! - Stamp each request with a UUID v4 `x-request-id` (kept if the client
//!   sent one) and echo it on the response
//! - Open a tracing span carrying method, path and request id
//! - Record request metrics by matched route

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tracing::Span;
use uuid::Uuid;

use crate::observability::metrics;

/// Header carrying the request correlation id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

pub fn set_request_id_layer() -> SetRequestIdLayer<UuidRequestId> {
    SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId)
}

pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

/// Request id header value, or "unknown".
pub fn request_id<B>(request: &axum::http::Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span factory for `TraceLayer`.
pub fn make_request_span<B>(request: &axum::http::Request<B>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}

/// Route-level middleware recording request count and latency.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = request.method().to_string();

    let response = next.run(request).await;
    metrics::record_request(&endpoint, &method, response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generated_ids_are_uuids() {
        let req = axum::http::Request::new(Body::empty());
        let mut maker = UuidRequestId;
        let id = maker.make_request_id(&req).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }

    #[test]
    fn test_request_id_fallback() {
        let req = axum::http::Request::builder()
            .header("x-request-id", "abc")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&req), "abc");
        assert_eq!(request_id(&axum::http::Request::new(Body::empty())), "unknown");
    }
}

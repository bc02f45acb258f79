//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bookstore_requests_total` (counter): requests by endpoint, method, status
//! - `bookstore_request_duration_seconds` (histogram): latency by endpoint
//! - `bookstore_upstream_failures_total` (counter): failed books API calls
//! - `bookstore_users_registered_total` (counter): successful registrations
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus
//! recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(endpoint: &str, method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "bookstore_requests_total",
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "bookstore_request_duration_seconds",
        "endpoint" => endpoint.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_failure(operation: &'static str) {
    metrics::counter!("bookstore_upstream_failures_total", "operation" => operation).increment(1);
}

pub fn record_registration() {
    metrics::counter!("bookstore_users_registered_total").increment(1);
}

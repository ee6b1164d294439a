//! Metrics collection and exposition.
//!
//! # Metrics
//! - `caller_downstream_calls_total` (counter): calls by scenario, outcome
//! - `caller_downstream_call_duration_seconds` (histogram): call latency by scenario
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const CALLS_TOTAL: &str = "caller_downstream_calls_total";
pub const CALL_DURATION: &str = "caller_downstream_call_duration_seconds";

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished downstream call.
pub fn record_call(scenario: &'static str, outcome: &'static str, start: Instant) {
    metrics::counter!(CALLS_TOTAL, "scenario" => scenario, "outcome" => outcome).increment(1);
    metrics::histogram!(CALL_DURATION, "scenario" => scenario)
        .record(start.elapsed().as_secs_f64());
}

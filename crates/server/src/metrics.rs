//! Prometheus metrics for the Blazedesk server.
//!
//! The `/metrics` endpoint is unauthenticated; restrict it at the network
//! level when the server is reachable from outside.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::future::Future;
use std::sync::{LazyLock, Once};
use std::time::Instant;

/// Global Prometheus registry for all metrics.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

pub static UPLOADS_RECORDED: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "blazedesk_uploads_recorded_total",
        "Total number of uploaded files recorded in the metadata store",
    )
    .expect("metric creation failed")
});

pub static UPLOAD_BYTES: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "blazedesk_upload_bytes_total",
        "Total bytes of recorded uploads",
    )
    .expect("metric creation failed")
});

pub static TRIPLESTORE_REQUESTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "blazedesk_triplestore_requests_total",
            "Outbound triple-store requests by operation and outcome",
        ),
        &["operation", "outcome"],
    )
    .expect("metric creation failed")
});

pub static TRIPLESTORE_REQUEST_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "blazedesk_triplestore_request_duration_seconds",
            "Time taken by outbound triple-store requests",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["operation"],
    )
    .expect("metric creation failed")
});

static REGISTER_ONCE: Once = Once::new();

/// Register all metrics with the global registry. Safe to call repeatedly.
pub fn register_metrics() {
    REGISTER_ONCE.call_once(|| {
        REGISTRY
            .register(Box::new(UPLOADS_RECORDED.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(UPLOAD_BYTES.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(TRIPLESTORE_REQUESTS.clone()))
            .expect("metric registration failed");
        REGISTRY
            .register(Box::new(TRIPLESTORE_REQUEST_DURATION.clone()))
            .expect("metric registration failed");
    });
}

/// Time an outbound triple-store call and count its outcome.
///
/// "ok" means the call completed at the transport level; the upstream
/// status is not inspected.
pub async fn observe_triplestore<T, E, F>(operation: &'static str, call: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let result = call.await;
    TRIPLESTORE_REQUEST_DURATION
        .with_label_values(&[operation])
        .observe(start.elapsed().as_secs_f64());
    let outcome = if result.is_ok() { "ok" } else { "error" };
    TRIPLESTORE_REQUESTS
        .with_label_values(&[operation, outcome])
        .inc();
    result
}

/// GET /metrics
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            buffer,
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [("content-type", "text/plain; charset=utf-8")],
            format!("Failed to encode metrics: {e}").into_bytes(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        register_metrics();
        register_metrics();
    }

    #[tokio::test]
    async fn observe_counts_outcomes() {
        let before_ok = TRIPLESTORE_REQUESTS
            .with_label_values(&["unit_test", "ok"])
            .get();
        let before_err = TRIPLESTORE_REQUESTS
            .with_label_values(&["unit_test", "error"])
            .get();

        let ok: Result<u8, ()> = observe_triplestore("unit_test", async { Ok(1) }).await;
        let err: Result<u8, ()> = observe_triplestore("unit_test", async { Err(()) }).await;

        assert_eq!(ok, Ok(1));
        assert_eq!(err, Err(()));
        assert_eq!(
            TRIPLESTORE_REQUESTS
                .with_label_values(&["unit_test", "ok"])
                .get(),
            before_ok + 1
        );
        assert_eq!(
            TRIPLESTORE_REQUESTS
                .with_label_values(&["unit_test", "error"])
                .get(),
            before_err + 1
        );
    }
}

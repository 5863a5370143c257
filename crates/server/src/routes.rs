//! Route configuration.

use crate::handlers;
use crate::metrics::metrics_handler;
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{any, get, post};
use blazedesk_core::config::ServerConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// Every route answers unexpected methods with a JSON 405 before any
/// extractor or collaborator runs.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route(
            "/",
            get(handlers::homepage).fallback(handlers::method_not_allowed),
        )
        .route("/files/", any(handlers::list_files))
        .route(
            "/create_database/",
            post(handlers::create_database).fallback(handlers::method_not_allowed),
        )
        .route(
            "/create_namespace/",
            post(handlers::create_namespace).fallback(handlers::method_not_allowed),
        )
        .route(
            "/upload_ttl/",
            post(handlers::upload_ttl).fallback(handlers::method_not_allowed),
        )
        .route(
            "/connect_database/",
            post(handlers::connect_database).fallback(handlers::method_not_allowed),
        )
        .route(
            "/active-database/",
            get(handlers::get_active_database).fallback(handlers::method_not_allowed),
        )
        .route(
            "/active-repository/",
            get(handlers::get_active_repository).fallback(handlers::method_not_allowed),
        )
        // Unauthenticated, for load balancers and container probes
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        );

    if state.config.server.metrics_enabled {
        router = router.route(
            "/metrics",
            get(metrics_handler).fallback(handlers::method_not_allowed),
        );
    }

    if let Some(cors) = cors_layer(&state.config.server) {
        router = router.layer(cors);
    }

    router
        .layer(DefaultBodyLimit::max(state.config.server.max_upload_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer for the configured browser origins, if any.
fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_credentials(true),
    )
}

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all Blockline endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> ServerResult<Router> {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config)?);

    Ok(Router::new()
        .route(
            "/blocks",
            get(handler::list_entries).post(handler::create_entry),
        )
        .route("/blocks/latest", get(handler::latest_entry))
        .route("/blocks/:id", get(handler::get_entry))
        .route("/v1/status", get(handler::status_handler))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(middleware)
        .with_state(state))
}

fn cors_layer(config: &ServerConfig) -> ServerResult<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Credentials cannot be combined with a wildcard origin.
    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|_| ServerError::Config(format!("invalid CORS origin: {o}")))
        })
        .collect::<ServerResult<Vec<_>>>()?;

    Ok(layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

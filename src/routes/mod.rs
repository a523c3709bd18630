//! HTTP route handlers.
//!
//! Each route group is registered explicitly and carries its own
//! Cache-Control policy. Request tracing is enabled via middleware that
//! generates a unique request ID for each incoming request.

pub mod health;
pub mod weather_forecast;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CACHE_CONTROL_FORECAST;
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Route path for the weather forecast endpoint.
pub const WEATHER_FORECAST_PATH: &str = "/weatherforecast";

/// Route path for the liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Forecast - constant body, short public cache
    let forecast_routes = Router::new()
        .route(WEATHER_FORECAST_PATH, get(weather_forecast::get))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_FORECAST),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route(HEALTH_PATH, get(health::health));

    Router::new()
        .merge(forecast_routes)
        .merge(health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}

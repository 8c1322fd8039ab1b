//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    current_weather_handler, forecast_handler, health_handler, search_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/weather/current/:location` - Current conditions
/// - `GET /api/weather/forecast/:location?days=N` - Multi-day forecast
/// - `GET /api/weather/search/:query` - Location search
/// - `GET /api/cache/stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/weather/current/:location", get(current_weather_handler))
        .route("/api/weather/forecast/:location", get(forecast_handler))
        .route("/api/weather/search/:query", get(search_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

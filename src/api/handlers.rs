//! API Handlers
//!
//! Thin HTTP handlers over the weather gateway.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::config::Config;
use crate::error::ApiResult;
use crate::gateway::{WeatherGateway, DEFAULT_FORECAST_DAYS};
use crate::models::{CurrentWeather, Forecast, HealthResponse, Location, StatsResponse};
use crate::upstream::WeatherApiClient;

/// Application state shared across all handlers.
///
/// Owns the single gateway instance for the process.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<WeatherGateway>,
}

impl AppState {
    pub fn new(gateway: WeatherGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Builds the upstream client and gateway from configuration.
    pub fn from_config(config: &Config) -> Self {
        let client = WeatherApiClient::new(config.api_key.clone(), config.api_base_url.clone());
        Self::new(WeatherGateway::new(client, config.cache_ttl()))
    }
}

/// Query string for the forecast endpoint.
///
/// `days` is kept as raw text so a non-numeric value falls back to the
/// default instead of rejecting the request. A leading integer is read the
/// way `parseInt` reads it: `"5.0"` is 5 and `"2.5"` is 2.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastParams {
    pub days: Option<String>,
}

impl ForecastParams {
    pub fn days(&self) -> i64 {
        self.days
            .as_deref()
            .and_then(leading_integer)
            .unwrap_or(DEFAULT_FORECAST_DAYS)
    }
}

/// Reads an optionally signed run of digits at the start of `raw`, ignoring
/// anything after it.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value: i64 = unsigned[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}

/// Handler for GET /api/weather/current/:location
pub async fn current_weather_handler(
    State(state): State<AppState>,
    location: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<CurrentWeather>> {
    let Path(location) = location?;
    let weather = state.gateway.get_current_weather(&location).await?;
    Ok(Json(weather))
}

/// Handler for GET /api/weather/forecast/:location?days=N
pub async fn forecast_handler(
    State(state): State<AppState>,
    location: Result<Path<String>, PathRejection>,
    params: Result<Query<ForecastParams>, QueryRejection>,
) -> ApiResult<Json<Forecast>> {
    let Path(location) = location?;
    let Query(params) = params?;
    let forecast = state
        .gateway
        .get_forecast(&location, params.days())
        .await?;
    Ok(Json(forecast))
}

/// Handler for GET /api/weather/search/:query
pub async fn search_handler(
    State(state): State<AppState>,
    query: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<Location>>> {
    let Path(query) = query?;
    let results = state.gateway.search_locations(&query).await?;
    Ok(Json(results))
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let gateway = &state.gateway;

    Json(StatsResponse {
        current: gateway.current_cache_stats().await.into(),
        forecast: gateway.forecast_cache_stats().await.into(),
        ttl_seconds: gateway.ttl().as_secs(),
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

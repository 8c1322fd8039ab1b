//! Weather Gateway - a read-through cache in front of a weather provider
//!
//! Serves current conditions, forecasts and location search over HTTP,
//! normalizing provider payloads and reusing them within a fixed freshness
//! window.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{ApiError, GatewayError};
pub use gateway::WeatherGateway;

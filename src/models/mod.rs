//! Data models for the weather gateway
//!
//! Internal weather schema plus the small DTOs used by service endpoints.

pub mod responses;
pub mod weather;

// Re-export commonly used types
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse, StatsResponse};
pub use weather::{
    AirQuality, CurrentConditions, CurrentWeather, DailyForecast, Forecast, HourlyForecast,
    Location,
};

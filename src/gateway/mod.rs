//! Gateway Module
//!
//! Cache-guarded access to the weather provider and translation of its
//! payloads into the internal schema.

mod mapping;
mod service;

pub use service::{current_key, forecast_key, WeatherGateway, DEFAULT_FORECAST_DAYS};

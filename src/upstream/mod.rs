//! Upstream Module
//!
//! HTTP client and wire types for the third-party weather provider.

mod client;
pub mod wire;

pub use client::{WeatherApiClient, DEFAULT_BASE_URL};

//! API Module
//!
//! HTTP handlers and routing for the weather gateway REST API.
//!
//! # Endpoints
//! - `GET /api/weather/current/:location` - Current conditions
//! - `GET /api/weather/forecast/:location?days=N` - Multi-day forecast
//! - `GET /api/weather/search/:query` - Location search
//! - `GET /api/cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

//! Weather Gateway
//!
//! Read-through caching in front of the provider. Current conditions and
//! forecasts are cached per operation kind; location search always goes
//! upstream.

use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, ExpiringCache};
use crate::error::Result;
use crate::models::{CurrentWeather, Forecast, Location};
use crate::upstream::WeatherApiClient;

/// Day count used when a forecast request does not name one
pub const DEFAULT_FORECAST_DAYS: i64 = 3;

/// Cache key for current conditions. The location is used verbatim, so keys
/// are case- and whitespace-sensitive.
pub fn current_key(location: &str) -> String {
    format!("current_{}", location)
}

/// Cache key for a forecast; different day counts never share an entry.
pub fn forecast_key(location: &str, days: i64) -> String {
    format!("forecast_{}_{}", location, days)
}

/// Mediates between callers, the caches and the upstream provider.
///
/// Cache locks are held for a single get or set and never across an upstream
/// call, so concurrent misses on the same key each fetch and the last write
/// wins.
#[derive(Debug)]
pub struct WeatherGateway {
    client: WeatherApiClient,
    current_cache: RwLock<ExpiringCache<CurrentWeather>>,
    forecast_cache: RwLock<ExpiringCache<Forecast>>,
    ttl: Duration,
}

impl WeatherGateway {
    pub fn new(client: WeatherApiClient, ttl: Duration) -> Self {
        Self {
            client,
            current_cache: RwLock::new(ExpiringCache::new(ttl)),
            forecast_cache: RwLock::new(ExpiringCache::new(ttl)),
            ttl,
        }
    }

    /// Freshness window applied to both caches.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Current Weather ==
    /// Returns current conditions for `location`, from cache when fresh.
    ///
    /// # Errors
    /// Any upstream failure is returned as-is; nothing is cached for it.
    pub async fn get_current_weather(&self, location: &str) -> Result<CurrentWeather> {
        let key = current_key(location);

        if let Some(cached) = self.current_cache.write().await.get(&key) {
            debug!(key = %key, "Cache hit");
            return Ok(cached);
        }
        debug!(key = %key, "Cache miss");

        info!(location = %location, "Fetching current weather from upstream");
        let raw = self.client.current(location).await.map_err(|e| {
            warn!(location = %location, error = %e, "Current weather fetch failed");
            e
        })?;

        let weather = CurrentWeather::from(raw);
        self.current_cache.write().await.set(key, weather.clone());

        Ok(weather)
    }

    // == Forecast ==
    /// Returns a `days`-day forecast for `location`, from cache when fresh.
    ///
    /// `days` is not validated here; out-of-range values reach the provider.
    ///
    /// # Errors
    /// Any upstream failure is returned as-is; nothing is cached for it.
    pub async fn get_forecast(&self, location: &str, days: i64) -> Result<Forecast> {
        let key = forecast_key(location, days);

        if let Some(cached) = self.forecast_cache.write().await.get(&key) {
            debug!(key = %key, "Cache hit");
            return Ok(cached);
        }
        debug!(key = %key, "Cache miss");

        info!(location = %location, days, "Fetching forecast from upstream");
        let raw = self.client.forecast(location, days).await.map_err(|e| {
            warn!(location = %location, days, error = %e, "Forecast fetch failed");
            e
        })?;

        let forecast = Forecast::from(raw);
        self.forecast_cache.write().await.set(key, forecast.clone());

        Ok(forecast)
    }

    // == Search ==
    /// Searches locations upstream. Results are never cached.
    ///
    /// # Errors
    /// Any upstream failure is returned as-is.
    pub async fn search_locations(&self, query: &str) -> Result<Vec<Location>> {
        info!(query = %query, "Searching locations upstream");
        let results = self.client.search(query).await.map_err(|e| {
            warn!(query = %query, error = %e, "Location search failed");
            e
        })?;

        Ok(results.into_iter().map(Location::from).collect())
    }

    // == Stats ==
    pub async fn current_cache_stats(&self) -> CacheStats {
        self.current_cache.read().await.stats()
    }

    pub async fn forecast_cache_stats(&self) -> CacheStats {
        self.forecast_cache.read().await.stats()
    }
}

//! Weather provider HTTP client.
//!
//! Issues the three provider requests and decodes their JSON. Any transport
//! error, non-success status or undecodable body becomes a
//! [`GatewayError::Upstream`].

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{instrument, warn};

use crate::error::{GatewayError, Result};
use crate::upstream::wire::{
    RawCurrentResponse, RawErrorEnvelope, RawForecastResponse, RawSearchResult,
};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the upstream weather provider.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherApiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch current conditions with air-quality data.
    #[instrument(skip(self), level = "info")]
    pub async fn current(&self, location: &str) -> Result<RawCurrentResponse> {
        self.fetch(
            "current.json",
            &[("q", location.to_string()), ("aqi", "yes".to_string())],
        )
        .await
    }

    /// Fetch a `days`-day forecast with air-quality data.
    ///
    /// `days` is forwarded as given; the provider decides what it accepts.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(&self, location: &str, days: i64) -> Result<RawForecastResponse> {
        self.fetch(
            "forecast.json",
            &[
                ("q", location.to_string()),
                ("days", days.to_string()),
                ("aqi", "yes".to_string()),
                ("alerts", "no".to_string()),
            ],
        )
        .await
    }

    /// Search locations matching a free-text query.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, query: &str) -> Result<Vec<RawSearchResult>> {
        self.fetch("search.json", &[("q", query.to_string())]).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                warn!("Upstream request to {} failed: {}", endpoint, e.without_url());
                GatewayError::generic()
            })?;

        Self::handle_response(endpoint, response).await
    }

    async fn handle_response<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                warn!("Upstream {} returned an undecodable body: {}", endpoint, e.without_url());
                GatewayError::generic()
            });
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RawErrorEnvelope>(&text)
            .ok()
            .and_then(RawErrorEnvelope::into_message)
            .unwrap_or_else(|| crate::error::GENERIC_UPSTREAM_MESSAGE.to_string());

        warn!(
            "Upstream {} returned {}: {}",
            endpoint,
            status.as_u16(),
            text.chars().take(500).collect::<String>()
        );

        Err(GatewayError::upstream(Some(status.as_u16()), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_current_sends_key_and_aqi() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/current.json"))
            .and(query_param("key", "test_key"))
            .and(query_param("q", "New York"))
            .and(query_param("aqi", "yes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "location": {"name": "New York"},
                "current": {"temp_c": 12.0}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new("test_key", mock_server.uri());
        let raw = client.current("New York").await.unwrap();

        assert_eq!(raw.location.name.as_deref(), Some("New York"));
        assert_eq!(raw.current.temp_c, Some(12.0));
    }

    #[tokio::test]
    async fn test_forecast_passes_days_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("days", "-2"))
            .and(query_param("aqi", "yes"))
            .and(query_param("alerts", "no"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 1003, "message": "Parameter days is invalid."}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new("test_key", mock_server.uri());
        let err = client.forecast("Tokyo", -2).await.unwrap_err();

        assert_eq!(err, GatewayError::upstream(Some(400), "Parameter days is invalid."));
    }

    #[tokio::test]
    async fn test_error_without_payload_uses_generic_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.json"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new("test_key", mock_server.uri());
        let err = client.search("London").await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.message(), crate::error::GENERIC_UPSTREAM_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new("test_key", mock_server.uri());
        let err = client.current("Paris").await.unwrap_err();

        assert_eq!(err, GatewayError::generic());
    }

    #[tokio::test]
    async fn test_transport_error_has_no_status() {
        // Reserve a port, then free it so the connection is refused
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = WeatherApiClient::new("test_key", format!("http://127.0.0.1:{}", port));
        let err = client.current("Paris").await.unwrap_err();

        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WeatherApiClient::new("k", "http://localhost:1234/v1/");
        assert_eq!(client.base_url(), "http://localhost:1234/v1");
    }
}

//! Provider wire format
//!
//! Mirrors the provider's JSON (snake_case, unit-suffixed names). Every object
//! defaults when missing and every leaf is optional, so a payload with an
//! unexpected shape decodes into absent fields instead of failing.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLocation {
    pub name: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub localtime: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCondition {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAirQuality {
    pub co: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: Option<f64>,
    #[serde(rename = "gb-defra-index")]
    pub gb_defra_index: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCurrent {
    pub temp_c: Option<f64>,
    pub temp_f: Option<f64>,
    pub condition: RawCondition,
    pub wind_kph: Option<f64>,
    pub wind_dir: Option<String>,
    pub humidity: Option<f64>,
    pub feelslike_c: Option<f64>,
    pub feelslike_f: Option<f64>,
    pub uv: Option<f64>,
    pub air_quality: RawAirQuality,
}

/// Response of the current-conditions endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCurrentResponse {
    pub location: RawLocation,
    pub current: RawCurrent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDay {
    pub maxtemp_c: Option<f64>,
    pub maxtemp_f: Option<f64>,
    pub mintemp_c: Option<f64>,
    pub mintemp_f: Option<f64>,
    pub avgtemp_c: Option<f64>,
    pub avgtemp_f: Option<f64>,
    pub maxwind_kph: Option<f64>,
    pub totalprecip_mm: Option<f64>,
    pub avghumidity: Option<f64>,
    pub daily_chance_of_rain: Option<f64>,
    pub condition: RawCondition,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAstro {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHour {
    pub time: Option<String>,
    pub temp_c: Option<f64>,
    pub temp_f: Option<f64>,
    pub condition: RawCondition,
    pub wind_kph: Option<f64>,
    pub wind_dir: Option<String>,
    pub precip_mm: Option<f64>,
    pub humidity: Option<f64>,
    pub chance_of_rain: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawForecastDay {
    pub date: Option<String>,
    pub day: RawDay,
    pub astro: RawAstro,
    pub hour: Vec<RawHour>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawForecastBlock {
    pub forecastday: Vec<RawForecastDay>,
}

/// Response of the forecast endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawForecastResponse {
    pub location: RawLocation,
    pub forecast: RawForecastBlock,
}

/// One element of the search endpoint's array response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchResult {
    pub name: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawErrorDetail {
    pub code: Option<i64>,
    pub message: Option<String>,
}

/// Error payload: `{"error": {"code": .., "message": ..}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawErrorEnvelope {
    pub error: Option<RawErrorDetail>,
}

impl RawErrorEnvelope {
    /// Extracts the provider's human-readable message, if any.
    pub fn into_message(self) -> Option<String> {
        self.error
            .and_then(|detail| detail.message)
            .filter(|message| !message.is_empty())
    }
}

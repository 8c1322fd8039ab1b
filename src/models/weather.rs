//! Internal weather schema
//!
//! Stable, provider-independent shapes served to clients. All values are
//! immutable snapshots; fields the provider did not send are absent and are
//! omitted when serialized.

use serde::Serialize;

/// A named place on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Local time at the location; never set for search results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,
}

/// Pollutant concentrations and national air-quality indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQuality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub o3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub so2: Option<f64>,
    #[serde(rename = "pm2_5", skip_serializing_if = "Option::is_none")]
    pub pm2_5: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_epa_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gb_defra_index: Option<f64>,
}

/// Flattened current-conditions metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_f: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_kph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like_f: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<f64>,
    pub air_quality: AirQuality,
}

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub location: Location,
    pub current: CurrentConditions,
}

/// One hour of a daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_f: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_kph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precip_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chance_of_rain: Option<f64>,
}

/// Aggregate metrics for one forecast day plus its hourly breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_temp_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_temp_f: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_temp_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_temp_f: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_temp_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_temp_f: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wind_kph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_precip_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chance_of_rain: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    /// Hours in the order the provider returned them
    pub hourly: Vec<HourlyForecast>,
}

/// Multi-day forecast at a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub location: Location,
    pub forecast: Vec<DailyForecast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_serializes_camel_case_and_skips_absent() {
        let location = Location {
            name: Some("Paris".to_string()),
            region: None,
            country: Some("France".to_string()),
            lat: Some(48.87),
            lon: Some(2.33),
            local_time: Some("2026-10-18 09:00".to_string()),
        };
        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["localTime"], "2026-10-18 09:00");
        assert!(json.get("region").is_none());
        assert!(json.get("local_time").is_none());
    }

    #[test]
    fn test_air_quality_field_names() {
        let air = AirQuality {
            co: Some(1.0),
            no2: None,
            o3: None,
            so2: None,
            pm2_5: Some(3.5),
            pm10: None,
            us_epa_index: Some(1.0),
            gb_defra_index: Some(2.0),
        };
        let json = serde_json::to_value(&air).unwrap();

        assert_eq!(json["pm2_5"], 3.5);
        assert_eq!(json["usEpaIndex"], 1.0);
        assert_eq!(json["gbDefraIndex"], 2.0);
    }
}

//! Provider → internal schema translation
//!
//! Field-for-field copies with renames only. Values are never converted; the
//! provider already supplies both temperature units.

use crate::models::{
    AirQuality, CurrentConditions, CurrentWeather, DailyForecast, Forecast, HourlyForecast,
    Location,
};
use crate::upstream::wire::{
    RawAirQuality, RawCurrent, RawCurrentResponse, RawForecastDay, RawForecastResponse, RawHour,
    RawLocation, RawSearchResult,
};

impl From<RawLocation> for Location {
    fn from(raw: RawLocation) -> Self {
        Self {
            name: raw.name,
            region: raw.region,
            country: raw.country,
            lat: raw.lat,
            lon: raw.lon,
            local_time: raw.localtime,
        }
    }
}

/// Search hits carry no current-time context, so local time stays empty.
impl From<RawSearchResult> for Location {
    fn from(raw: RawSearchResult) -> Self {
        Self {
            name: raw.name,
            region: raw.region,
            country: raw.country,
            lat: raw.lat,
            lon: raw.lon,
            local_time: None,
        }
    }
}

impl From<RawAirQuality> for AirQuality {
    fn from(raw: RawAirQuality) -> Self {
        Self {
            co: raw.co,
            no2: raw.no2,
            o3: raw.o3,
            so2: raw.so2,
            pm2_5: raw.pm2_5,
            pm10: raw.pm10,
            us_epa_index: raw.us_epa_index,
            gb_defra_index: raw.gb_defra_index,
        }
    }
}

impl From<RawCurrent> for CurrentConditions {
    fn from(raw: RawCurrent) -> Self {
        Self {
            temp_c: raw.temp_c,
            temp_f: raw.temp_f,
            condition: raw.condition.text,
            wind_kph: raw.wind_kph,
            wind_dir: raw.wind_dir,
            humidity: raw.humidity,
            feels_like_c: raw.feelslike_c,
            feels_like_f: raw.feelslike_f,
            uv: raw.uv,
            air_quality: raw.air_quality.into(),
        }
    }
}

impl From<RawCurrentResponse> for CurrentWeather {
    fn from(raw: RawCurrentResponse) -> Self {
        Self {
            location: raw.location.into(),
            current: raw.current.into(),
        }
    }
}

impl From<RawHour> for HourlyForecast {
    fn from(raw: RawHour) -> Self {
        Self {
            time: raw.time,
            temp_c: raw.temp_c,
            temp_f: raw.temp_f,
            condition: raw.condition.text,
            wind_kph: raw.wind_kph,
            wind_dir: raw.wind_dir,
            precip_mm: raw.precip_mm,
            humidity: raw.humidity,
            chance_of_rain: raw.chance_of_rain,
        }
    }
}

impl From<RawForecastDay> for DailyForecast {
    fn from(raw: RawForecastDay) -> Self {
        let day = raw.day;
        Self {
            date: raw.date,
            max_temp_c: day.maxtemp_c,
            max_temp_f: day.maxtemp_f,
            min_temp_c: day.mintemp_c,
            min_temp_f: day.mintemp_f,
            avg_temp_c: day.avgtemp_c,
            avg_temp_f: day.avgtemp_f,
            max_wind_kph: day.maxwind_kph,
            total_precip_mm: day.totalprecip_mm,
            avg_humidity: day.avghumidity,
            chance_of_rain: day.daily_chance_of_rain,
            condition: day.condition.text,
            sunrise: raw.astro.sunrise,
            sunset: raw.astro.sunset,
            hourly: raw.hour.into_iter().map(HourlyForecast::from).collect(),
        }
    }
}

impl From<RawForecastResponse> for Forecast {
    fn from(raw: RawForecastResponse) -> Self {
        Self {
            location: raw.location.into(),
            forecast: raw
                .forecast
                .forecastday
                .into_iter()
                .map(DailyForecast::from)
                .collect(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at a station, as parsed from a provider response.
///
/// Temperature and wind speed are always present; the remaining fields are
/// filled in when the provider reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub wind_direction_deg: Option<f64>,
    /// WMO weather interpretation code, see [`describe_weather_code`].
    pub weather_code: Option<u8>,
    pub observation_time: Option<DateTime<Utc>>,
}

impl CurrentConditions {
    pub fn condition(&self) -> Option<&'static str> {
        self.weather_code.map(describe_weather_code)
    }
}

/// Convert a WMO weather interpretation code to a human-readable description.
pub fn describe_weather_code(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

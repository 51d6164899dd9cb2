use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{error::FetchError, model::CurrentConditions, station::Station};

use super::WeatherProvider;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo client. No API key required.
#[derive(Debug, Clone, Default)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: OmCurrentWeather,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    winddirection: Option<f64>,
    weathercode: Option<u8>,
    time: Option<String>,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current_weather(&self, station: &Station) -> Result<CurrentConditions, FetchError> {
        let (latitude, longitude) = station.coordinates();

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current_weather", "true"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_current(&body)
    }
}

fn parse_current(body: &str) -> Result<CurrentConditions, FetchError> {
    let parsed: OmForecastResponse = serde_json::from_str(body)?;
    let current = parsed.current_weather;

    Ok(CurrentConditions {
        temperature_c: current.temperature,
        wind_speed_kmh: current.windspeed,
        wind_direction_deg: current.winddirection,
        weather_code: current.weathercode,
        observation_time: current.time.as_deref().and_then(parse_observation_time),
    })
}

/// Open-Meteo reports times as local ISO-8601 without an offset; with the
/// default timezone parameter they are UTC. Seconds may or may not be present.
fn parse_observation_time(raw: &str) -> Option<DateTime<Utc>> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ndt| ndt.and_utc())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_minimal_current_weather_block() {
        let body = r#"{"current_weather": {"temperature": 5.0, "windspeed": 12.3}}"#;
        let conditions = parse_current(body).expect("minimal payload should parse");

        assert_eq!(conditions.temperature_c, 5.0);
        assert_eq!(conditions.wind_speed_kmh, 12.3);
        assert_eq!(conditions.wind_direction_deg, None);
        assert_eq!(conditions.weather_code, None);
        assert_eq!(conditions.observation_time, None);
    }

    #[test]
    fn parses_full_current_weather_block() {
        let body = r#"{
            "latitude": 50.9,
            "longitude": 34.8,
            "current_weather": {
                "time": "2024-03-01T12:45",
                "interval": 900,
                "temperature": -3.5,
                "windspeed": 7.2,
                "winddirection": 214.0,
                "is_day": 1,
                "weathercode": 71
            }
        }"#;
        let conditions = parse_current(body).expect("full payload should parse");

        assert_eq!(conditions.temperature_c, -3.5);
        assert_eq!(conditions.wind_speed_kmh, 7.2);
        assert_eq!(conditions.wind_direction_deg, Some(214.0));
        assert_eq!(conditions.condition(), Some("Snow"));

        let observed = conditions.observation_time.expect("time should parse");
        assert_eq!(observed.hour(), 12);
        assert_eq!(observed.minute(), 45);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_current("not json at all").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn missing_current_weather_is_a_parse_error() {
        let err = parse_current(r#"{"latitude": 50.9}"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn observation_time_accepts_both_precisions() {
        assert!(parse_observation_time("2024-03-01T12:45").is_some());
        assert!(parse_observation_time("2024-03-01T12:45:30").is_some());
        assert!(parse_observation_time("12:45").is_none());
        assert!(parse_observation_time("").is_none());
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);

        assert_eq!(truncate_body("short"), "short");
    }
}

use weather_core::CurrentConditions;

/// Shown for temperature and wind until the first successful fetch.
pub const PLACEHOLDER: &str = "N/A";

/// Display state for the weather panel, owned by the presentation loop.
///
/// `loading` gates the two UI states; the strings hold whatever the last
/// successful fetch produced.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReadout {
    pub temperature: String,
    pub wind: String,
    pub condition: Option<String>,
    pub observed_at: Option<String>,
    pub loading: bool,
}

impl Default for WeatherReadout {
    fn default() -> Self {
        Self {
            temperature: PLACEHOLDER.to_string(),
            wind: PLACEHOLDER.to_string(),
            condition: None,
            observed_at: None,
            loading: false,
        }
    }
}

impl WeatherReadout {
    /// Format freshly fetched conditions for display.
    pub fn apply(&mut self, conditions: &CurrentConditions) {
        self.temperature = format!("{:.1} C", conditions.temperature_c);
        self.wind = format!("{:.1} km/h", conditions.wind_speed_kmh);
        self.condition = conditions.condition().map(str::to_string);
        self.observed_at =
            conditions.observation_time.map(|t| t.format("%H:%M UTC").to_string());
    }
}

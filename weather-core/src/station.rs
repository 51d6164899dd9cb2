use serde::{Deserialize, Serialize};

/// The fixed observation location the app reports weather for.
///
/// There is no on-disk configuration; the station is a compiled-in value.
/// `local_name` holds the native-script spelling shown alongside the Latin
/// label, which is why the UI font must cover Cyrillic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub local_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Station {
    /// Display label, e.g. "Sumy, UA".
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Coordinates as two-decimal query-parameter strings, e.g. ("50.91", "34.80").
    pub fn coordinates(&self) -> (String, String) {
        (format!("{:.2}", self.latitude), format!("{:.2}", self.longitude))
    }
}

impl Default for Station {
    fn default() -> Self {
        Self {
            name: "Sumy, UA".to_string(),
            local_name: Some("Суми, Україна".to_string()),
            latitude: 50.91,
            longitude: 34.80,
        }
    }
}

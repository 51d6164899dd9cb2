use std::fmt::Debug;

use async_trait::async_trait;

use crate::{error::FetchError, model::CurrentConditions, station::Station};

pub mod open_meteo;

/// Abstraction over current-weather sources.
///
/// The app ships a single Open-Meteo implementation; the trait is the seam
/// that lets tests substitute a canned provider.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, station: &Station) -> Result<CurrentConditions, FetchError>;
}

use async_trait::async_trait;

use crate::{Config, WeatherReading, provider::weatherapi::WeatherApiProvider};

pub mod weatherapi;

/// Source of current conditions for a coordinate pair.
///
/// Coordinates are passed through as the geocoder formatted them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn get_weather(&self, lat: &str, lon: &str) -> anyhow::Result<WeatherReading>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<WeatherApiProvider> {
    let api_key = config.weather_api_key()?;
    WeatherApiProvider::new(api_key.to_owned(), &config.weather.base_url, config.weather.timeout_secs)
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

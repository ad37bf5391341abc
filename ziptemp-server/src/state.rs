//! Application state shared across handlers

use std::sync::Arc;

use ziptemp_core::{Config, TemperatureService, geocoder_from_config, provider_from_config};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: TemperatureService,
}

impl AppState {
    pub fn new(service: TemperatureService) -> Self {
        Self { service }
    }

    /// Wire the Nominatim geocoder and the WeatherAPI provider from config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let geocoder = geocoder_from_config(config)?;
        let weather = provider_from_config(config)?;

        Ok(Self::new(TemperatureService::new(Arc::new(geocoder), Arc::new(weather))))
    }
}

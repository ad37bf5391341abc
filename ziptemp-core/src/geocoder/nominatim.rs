//! Postal code search against Nominatim (OpenStreetMap).

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    Coordinates, GeocodeError, PostalCode, config::GeocoderConfig, provider::truncate_body,
};

use super::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    country_codes: String,
    http: Client,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to build Nominatim HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_codes: config.country_codes.clone(),
            http,
        })
    }

    async fn search(&self, postal_code: &PostalCode) -> Result<Vec<NominatimPlace>> {
        let url = format!("{}/search", self.base_url);

        debug!(url = %url, postal_code = %postal_code, "Searching postal code");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("postalcode", postal_code.as_str()),
                ("countrycodes", self.country_codes.as_str()),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await
            .context("Failed to send request to Nominatim (search)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read Nominatim search response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Nominatim search request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse Nominatim search JSON")
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    place_id: i64,
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn get_location(&self, postal_code: &PostalCode) -> Result<Coordinates, GeocodeError> {
        let place = self.search(postal_code).await?.into_iter().next().ok_or(GeocodeError::NotFound)?;

        debug!(place_id = place.place_id, name = %place.display_name, "Postal code resolved");

        Ok(Coordinates { lat: place.lat, lon: place.lon })
    }
}

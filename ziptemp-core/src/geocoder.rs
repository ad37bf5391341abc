use async_trait::async_trait;

use crate::{Config, Coordinates, GeocodeError, PostalCode, geocoder::nominatim::NominatimGeocoder};

pub mod nominatim;

/// Resolves a postal code to coordinates.
///
/// Implementations return [`GeocodeError::NotFound`] when the code is
/// well-formed but matches no place, and [`GeocodeError::Other`] for anything else.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn get_location(&self, postal_code: &PostalCode) -> Result<Coordinates, GeocodeError>;
}

/// Construct the Nominatim geocoder from config.
pub fn geocoder_from_config(config: &Config) -> anyhow::Result<NominatimGeocoder> {
    NominatimGeocoder::new(&config.geocoder)
}

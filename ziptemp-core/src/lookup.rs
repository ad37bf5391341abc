use std::{fmt, sync::Arc};

use tracing::{error, instrument};

use crate::{
    GeocodeError, LookupError, PostalCode, TemperatureResult,
    geocoder::Geocoder,
    provider::WeatherProvider,
};

/// Answers "what is the temperature at this postal code?".
///
/// Holds no mutable state: clones share the same upstream clients and every
/// call to [`lookup`](Self::lookup) is independent.
#[derive(Clone)]
pub struct TemperatureService {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
}

impl TemperatureService {
    pub fn new(geocoder: Arc<dyn Geocoder>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { geocoder, weather }
    }

    /// Validate the code, geocode it, then fetch current weather at the result.
    ///
    /// Upstream failures other than "not found" are logged here and surface
    /// only as [`LookupError::Upstream`].
    #[instrument(skip(self))]
    pub async fn lookup(&self, postal_code: &str) -> Result<TemperatureResult, LookupError> {
        let postal_code = PostalCode::parse(postal_code)?;

        let coords = match self.geocoder.get_location(&postal_code).await {
            Ok(coords) => coords,
            Err(GeocodeError::NotFound) => return Err(LookupError::NotFound),
            Err(GeocodeError::Other(err)) => {
                error!("Geocoding failed: {err:#}");
                return Err(LookupError::Upstream(err));
            }
        };

        let reading = self.weather.get_weather(&coords.lat, &coords.lon).await.map_err(|err| {
            error!(lat = %coords.lat, lon = %coords.lon, "Weather fetch failed: {err:#}");
            LookupError::Upstream(err)
        })?;

        Ok(TemperatureResult::from_reading(&reading))
    }
}

impl fmt::Debug for TemperatureService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemperatureService").finish_non_exhaustive()
    }
}

//! Core library for the `ziptemp` service.
//!
//! This crate defines:
//! - Configuration handling
//! - Abstractions over the geocoder and the weather provider, plus their HTTP clients
//! - Shared domain models and the error taxonomy
//! - [`TemperatureService`], which ties the two upstream lookups together
//!
//! It is used by `ziptemp-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod geocoder;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::{Config, GeocoderConfig, ServerConfig, WeatherConfig};
pub use error::{GeocodeError, LookupError};
pub use geocoder::{Geocoder, geocoder_from_config, nominatim::NominatimGeocoder};
pub use lookup::TemperatureService;
pub use model::{Coordinates, PostalCode, TemperatureResult, WeatherReading};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};

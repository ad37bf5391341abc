use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LookupError;

/// Number of bytes a postal code must have.
pub const POSTAL_CODE_LEN: usize = 8;

/// Offset added to Celsius to obtain Kelvin.
///
/// Integer offset, not 273.15: clients depend on the exact values served so far.
pub const KELVIN_OFFSET: f64 = 273.0;

/// A postal code that passed the length check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        if raw.len() != POSTAL_CODE_LEN {
            return Err(LookupError::InvalidPostalCode);
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latitude/longitude exactly as the geocoder returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

impl Coordinates {
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self { lat: lat.into(), lon: lon.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temp_c: f64,
    pub temp_f: f64,
}

/// Current temperature in the three scales served to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResult {
    pub temp_c: f32,
    pub temp_f: f32,
    pub temp_k: f32,
}

impl TemperatureResult {
    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            temp_c: reading.temp_c as f32,
            temp_f: reading.temp_f as f32,
            temp_k: (reading.temp_c + KELVIN_OFFSET) as f32,
        }
    }
}

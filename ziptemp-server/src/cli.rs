use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ziptemp_core::Config;

/// Command-line arguments. Flags and environment variables override the config file.
#[derive(Debug, Parser)]
#[command(name = "ziptemp", version, about = "Current temperature by postal code")]
pub struct Cli {
    /// Path to a TOML config file; defaults to the platform config directory.
    #[arg(long, env = "ZIPTEMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, e.g. "127.0.0.1".
    #[arg(long, env = "ZIPTEMP_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// WeatherAPI.com key.
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub weather_api_key: Option<String>,
}

impl Cli {
    /// Load the config file, then apply overrides from flags and environment.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load().context("Failed to load default config file")?,
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(key) = &self.weather_api_key {
            config.set_weather_api_key(key.clone());
        }

        Ok(config)
    }
}

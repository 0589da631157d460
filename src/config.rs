//! # Config
//!
//! Define and implement config options for module

use anyhow::Result;
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// path to log configuration YAML file
    pub log_config: String,

    /// default journey distance in kilometers suggested to embedding applications
    pub default_journey_km: f64,

    /// largest journey distance in kilometers an embedding application should offer
    pub max_journey_km: f64,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            log_config: String::from("log4rs.yaml"),
            default_journey_km: 1.0,
            max_journey_km: 50.0,
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("log_config", default_config.log_config)?
            .set_default("default_journey_km", default_config.default_journey_km)?
            .set_default("max_journey_km", default_config.max_journey_km)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

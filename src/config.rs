use std::env;
use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize, Clone)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Clone)]
pub struct Server {
    pub bind_address: String,
}

#[derive(Deserialize, Clone)]
pub struct OpenWeather {
    pub api_key: String,
    pub forecast_url: String,
    pub air_pollution_url: String,
    pub units: String,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone)]
pub struct ModelFiles {
    pub classifier_path: String,
    pub scaler_path: String,
}

#[derive(Deserialize, Clone)]
pub struct Config {
    pub general: General,
    pub server: Server,
    pub open_weather: OpenWeather,
    pub model: ModelFiles,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// If the environment variable OPEN_WEATHER_API_KEY is set it takes precedence over
/// the api key given in the file.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let mut config: Config = toml::from_str(&toml)?;

    if let Ok(api_key) = env::var("OPEN_WEATHER_API_KEY") {
        config.open_weather.api_key = api_key;
    }

    validate(&config)?;

    Ok(config)
}

/// Checks configuration values that can't be expressed by the types alone
///
/// # Arguments
///
/// * 'config' - the configuration to check
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.open_weather.timeout_secs == 0 {
        return Err(ConfigError::from("open_weather.timeout_secs must be greater than zero"));
    }
    if config.open_weather.api_key.is_empty() {
        return Err(ConfigError::from("open_weather.api_key is empty"));
    }

    Ok(())
}

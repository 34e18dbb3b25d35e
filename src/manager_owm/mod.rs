use std::time::Duration;
use chrono::DateTime;
use log::{debug, warn};
use reqwest::Client;
use crate::config;
use crate::errors::UpstreamError;
use crate::models::forecast::{ForecastBundle, ForecastEntry, PredictionFeatures};
use crate::models::owm_air_pollution::AirPollution;
use crate::models::owm_forecast::{FullEntry, FullForecast};
use crate::models::pollutants::PollutantReading;
use crate::oxygen::oxygen_concentration;
use crate::wind::cardinal_direction;

/// Struct for fetching weather forecasts and air pollution data from OpenWeather
pub struct OpenWeather {
    client: Client,
    api_key: String,
    forecast_url: String,
    air_pollution_url: String,
    units: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct with one pooled http client for the lifetime of
    /// the struct. Every request made is bounded by the given timeout.
    ///
    /// # Arguments
    ///
    /// * 'config' - the open_weather section of the configuration
    /// * 'timeout' - max duration of a request including reading the body
    pub fn new(config: &config::OpenWeather, timeout: Duration) -> Result<OpenWeather, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("firewatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            forecast_url: config.forecast_url.clone(),
            air_pollution_url: config.air_pollution_url.clone(),
            units: config.units.clone(),
        })
    }

    /// Retrieves current pollutant concentrations for the given coordinates
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude
    /// * 'lon' - longitude
    pub async fn air_pollution(&self, lat: f64, lon: f64) -> Result<PollutantReading, UpstreamError> {
        let lat = lat.to_string();
        let lon = lon.to_string();
        let query = [
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("appid", self.api_key.as_str()),
        ];

        let json = self.get(&self.air_pollution_url, &query).await?;
        let air: AirPollution = serde_json::from_str(&json)?;

        air.list
            .into_iter()
            .next()
            .map(|e| e.components)
            .ok_or_else(|| UpstreamError::Schema("air pollution list is empty".to_string()))
    }

    /// Retrieves the weather forecast for a city and enriches it with air quality,
    /// estimated oxygen and the features needed for a fire prediction.
    ///
    /// The air pollution call depends on the coordinates in the forecast response,
    /// hence the two calls are made in sequence. A forecast that can't be used is
    /// rejected before air pollution is requested.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city, e.g. "Stockholm" or "Paris,FR"
    pub async fn forecast(&self, city: &str) -> Result<ForecastBundle, UpstreamError> {
        let query = [
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", self.units.as_str()),
        ];

        let json = self.get(&self.forecast_url, &query).await?;
        let full: FullForecast = serde_json::from_str(&json)?;

        let forecast = full.list
            .iter()
            .map(to_forecast_entry)
            .collect::<Result<Vec<ForecastEntry>, UpstreamError>>()?;

        let (temperature, humidity) = forecast
            .first()
            .map(|f| (f.temperature, f.humidity as f64))
            .ok_or_else(|| UpstreamError::Schema(format!("forecast list for {} is empty", city)))?;

        let air_quality = self.air_pollution(full.city.coord.lat, full.city.coord.lon).await?;
        let oxygen = oxygen_concentration(&air_quality);

        let prediction_features = PredictionFeatures {
            oxygen,
            temperature,
            humidity,
        };

        debug!("forecast for {}: {} entries, oxygen {:.6}", full.city.name, forecast.len(), oxygen);

        Ok(ForecastBundle {
            city: full.city.name,
            forecast,
            air_quality,
            oxygen,
            prediction_features,
        })
    }

    /// Makes a get request and returns the body if the status is a success
    ///
    /// # Arguments
    ///
    /// * 'url' - the endpoint
    /// * 'query' - query parameters
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, UpstreamError> {
        let res = self.client
            .get(url)
            .query(query)
            .send()
            .await
            .inspect_err(|e| warn!("request to {} failed: {}", url, e))?;

        if !res.status().is_success() {
            warn!("request to {} returned {}", url, res.status());
            return Err(UpstreamError::Status(res.status()));
        }

        Ok(res.text().await?)
    }
}

/// Transforms one raw forecast entry, the timestamp is rendered in UTC
///
/// # Arguments
///
/// * 'entry' - the raw entry from the forecast response
fn to_forecast_entry(entry: &FullEntry) -> Result<ForecastEntry, UpstreamError> {
    let date = DateTime::from_timestamp(entry.dt, 0)
        .ok_or_else(|| UpstreamError::Schema(format!("timestamp out of range: {}", entry.dt)))?
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    let description = entry.weather
        .first()
        .ok_or_else(|| UpstreamError::Schema(format!("no weather description for {}", date)))?
        .description
        .clone();

    Ok(ForecastEntry {
        date,
        temperature: entry.main.temp,
        description,
        humidity: entry.main.humidity,
        wind_speed: entry.wind.speed,
        wind_direction: cardinal_direction(entry.wind.deg).to_string(),
        temp_min: entry.main.temp_min,
        temp_max: entry.main.temp_max,
        pressure: entry.main.pressure,
        cloudiness: entry.clouds.all,
        ground_level_pressure: entry.main.grnd_level,
    })
}

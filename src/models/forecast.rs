use serde::{Deserialize, Serialize};
use crate::models::pollutants::PollutantReading;

/// Feature order the scaler and classifier are fitted on
pub const FEATURE_ORDER: [&str; 3] = ["Oxygen", "Temperature", "Humidity"];

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ForecastEntry {
    pub date: String,
    pub temperature: f64,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub cloudiness: u32,
    pub ground_level_pressure: Option<u32>,
}

/// The exact feature vector consumed by the fire classifier
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PredictionFeatures {
    #[serde(rename = "Oxygen")]
    pub oxygen: f64,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
}

impl PredictionFeatures {
    /// Returns the features as a vector ordered as FEATURE_ORDER
    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.oxygen, self.temperature, self.humidity]
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ForecastBundle {
    pub city: String,
    pub forecast: Vec<ForecastEntry>,
    pub air_quality: PollutantReading,
    pub oxygen: f64,
    pub prediction_features: PredictionFeatures,
}

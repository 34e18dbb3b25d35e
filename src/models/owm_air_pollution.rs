use serde::Deserialize;
use crate::models::pollutants::PollutantReading;

#[derive(Deserialize)]
pub struct AirEntry {
    pub components: PollutantReading,
}

#[derive(Deserialize)]
pub struct AirPollution {
    pub list: Vec<AirEntry>,
}

use serde::{Deserialize, Serialize};

/// Pollutant concentrations in µg/m³ as reported by the air pollution API
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PollutantReading {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

impl PollutantReading {
    /// Returns the pollutant load, i.e. the sum of all eight concentrations
    pub fn total(&self) -> f64 {
        self.co + self.no + self.no2 + self.o3 + self.so2 + self.pm2_5 + self.pm10 + self.nh3
    }
}

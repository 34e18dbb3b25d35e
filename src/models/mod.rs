pub mod owm_forecast;
pub mod owm_air_pollution;
pub mod pollutants;
pub mod forecast;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize)]
pub struct City {
    pub name: String,
    pub coord: Coord,
}

#[derive(Deserialize)]
pub struct MainValues {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u32,
    pub grnd_level: Option<u32>,
}

#[derive(Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Deserialize)]
pub struct Clouds {
    pub all: u32,
}

#[derive(Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: f64,
}

#[derive(Deserialize)]
pub struct FullEntry {
    pub dt: i64,
    pub main: MainValues,
    pub weather: Vec<Condition>,
    pub clouds: Clouds,
    pub wind: Wind,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub list: Vec<FullEntry>,
    pub city: City,
}

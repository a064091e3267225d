use serde::{Serialize, Deserialize};

pub mod errors;

pub mod modules;
pub mod routes {
    pub mod season;
    pub mod circuit;
}

pub mod macros {
    pub mod store_error_handler;
}

/// the range of seasons selectable in the ui.
pub const START_YEAR: i32 = 1950;
pub const END_YEAR: i32 = 2023;


#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct GeoChartData {
    pub datasets: Vec<GeoChartDataset>,
}
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct GeoChartDataset {
    pub country: String,
    pub markers: Vec<GeoMarker>,
}
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct GeoMarker {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub round: i32,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct LineChartData {
    pub datasets: Vec<LineChartDataset>,
}
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct LineChartDataset {
    pub code: String,
    pub driver_name: String,
    pub rounds: Vec<i32>,
    pub points: Vec<f64>,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct BarChartData {
    pub bars: Vec<BarChartBar>,
    pub annotations: Vec<BarChartAnnotation>,
}
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct BarChartBar {
    pub code: String,
    pub points: f64,
    pub label: String,
}
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct BarChartAnnotation {
    pub code: String,
    pub text: String,
}

// rocket imports
use rocket::get;
use rocket::http::Status;
use rocket::State;
use rocket_dyn_templates::Template;
// store imports
use crate::modules::models::circuit::Circuit;
use crate::modules::models::driver::DriverResult;
use crate::modules::models::general::DataStore;
//helper imports
use crate::macros::store_error_handler::store_handle_get_error_http;
use crate::modules::charts;
use crate::{BarChartData, TableData};
use log::error;
use serde::{Deserialize, Serialize};

/// # circuit explorer
/// the driver standings after the round hosted by the named circuit.
/// an unknown circuit for the selected year is a 404.
#[get("/season/<year>/circuit/<circuit_name>")]
pub fn single(
    year: i32,
    circuit_name: String,
    store: &State<DataStore>,
) -> Result<Template, Status> {
    let circuits = Circuit::filter_by_year(&store.circuits, year);
    let results = DriverResult::filter_by_year(&store.drivers, year);

    let rankings = store_handle_get_error_http!(
        DriverResult::circuit_rankings(&results, &circuits, &circuit_name),
        "routes/circuit:single",
        "circuit rankings"
    );

    let data = CircuitPageData {
        year,
        circuit_name,
        standings: charts::standings_table(&rankings),
        points_bar: charts::driver_points_bar(&rankings),
    };

    Ok(Template::render("circuit", data))
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CircuitPageData {
    pub year: i32,
    pub circuit_name: String,
    pub standings: TableData,
    pub points_bar: BarChartData,
}

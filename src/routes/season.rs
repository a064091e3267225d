// rocket imports
use rocket::get;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
// store imports
use crate::modules::models::circuit::Circuit;
use crate::modules::models::driver::DriverResult;
use crate::modules::models::general::DataStore;
//helper imports
use crate::errors::Error;
use crate::modules::charts;
use crate::{BarChartData, GeoChartData, LineChartData, TableData, END_YEAR, START_YEAR};
use log::error;
use serde::{Deserialize, Serialize};

#[get("/")]
pub fn index() -> Redirect {
    Redirect::to(format!("/season/{END_YEAR}"))
}

/// # season dashboard
/// one full derivation pass per request: filter both tables to the year,
/// rank the season, build every chart payload, render.
#[get("/season/<year>")]
pub fn season(year: i32, store: &State<DataStore>) -> Result<Template, Status> {
    let circuits = Circuit::filter_by_year(&store.circuits, year);
    let results = DriverResult::filter_by_year(&store.drivers, year);

    let rankings = match DriverResult::season_rankings(&results) {
        Ok(rankings) => rankings,
        // a year without data still renders, as a placeholder page
        Err(Error::EmptyInputError) => Vec::new(),
        Err(error) => {
            error!(target:"routes/season:season", "Error ranking season {}. (error: {})", year, error);
            return Err(Status::InternalServerError);
        }
    };

    let data = SeasonPageData {
        year,
        years: year_options(year),
        has_results: !rankings.is_empty(),
        winner: charts::winner_banner(&rankings).ok(),
        races: charts::races_table(&circuits),
        world_map: charts::world_map(&circuits),
        progression: charts::driver_progression(&results, &DriverResult::codes(&rankings)),
        points_bar: charts::driver_points_bar(&rankings),
    };

    Ok(Template::render("season", data))
}

/// the year selector entries, newest season first.
fn year_options(selected: i32) -> Vec<YearOption> {
    (START_YEAR..=END_YEAR)
        .rev()
        .map(|year| YearOption {
            year,
            selected: year == selected,
        })
        .collect()
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SeasonPageData {
    pub year: i32,
    pub years: Vec<YearOption>,
    pub has_results: bool,
    pub winner: Option<String>,
    pub races: TableData,
    pub world_map: GeoChartData,
    pub progression: LineChartData,
    pub points_bar: BarChartData,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct YearOption {
    pub year: i32,
    pub selected: bool,
}

use std::env;

use dotenvy::dotenv;
use log::error;

use f1_season_explorer::modules::charts;
use f1_season_explorer::modules::helpers::logging::setup_logging;
use f1_season_explorer::modules::models::driver::DriverResult;
use f1_season_explorer::modules::models::general::DataStore;
use f1_season_explorer::END_YEAR;

/// print a season's final standings to stdout for quick inspection.
///
/// usage: `cargo run --bin show_standings -- 2021`
fn main() {
    dotenv().ok();
    setup_logging().expect("failed to setup logging");

    let year: i32 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(END_YEAR);

    let store = match DataStore::load() {
        Ok(store) => store,
        Err(error) => {
            error!(target:"show_standings", "failed to load season data. (error: {})", error);
            return;
        }
    };

    let results = DriverResult::filter_by_year(&store.drivers, year);
    let rankings = match DriverResult::season_rankings(&results) {
        Ok(rankings) => rankings,
        Err(error) => {
            error!(target:"show_standings", "no results for season {}. (error: {})", year, error);
            return;
        }
    };

    if let Ok(winner) = charts::winner_banner(&rankings) {
        println!("Season {year} winner: {winner}");
    }
    for result in &rankings {
        println!(
            "{:>3}. {:<4} {:<28} {}",
            result.position,
            result.code,
            result.full_name(),
            result.points
        );
    }
}

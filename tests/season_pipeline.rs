//! End-to-end pipeline tests: fixture tables through load, year filter,
//! ranking and chart building, the way one request derives a page.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use f1_season_explorer::errors::Error;
use f1_season_explorer::modules::charts;
use f1_season_explorer::modules::models::circuit::Circuit;
use f1_season_explorer::modules::models::driver::DriverResult;
use f1_season_explorer::modules::models::general::DataStore;

const CIRCUITS_CSV: &str = "\
year,round,name,country,lat,lng
2021,9,Red Bull Ring,Austria,47.2197,14.7647
2021,10,Silverstone Circuit,UK,52.0786,-1.01694
2020,1,Red Bull Ring,Austria,47.2197,14.7647
";

const DRIVERS_CSV: &str = "\
year,round,code,forename,surname,number,points,position
2021,9,VER,Max,Verstappen,33,182,1
2021,9,HAM,Lewis,Hamilton,44,150,2
2021,9,NOR,Lando,Norris,4,101,3
2021,9,MAZ,Nikita,Mazepin,9,0,4
2021,10,VER,Max,Verstappen,33,185,1
2021,10,HAM,Lewis,Hamilton,44,177,2
2021,10,NOR,Lando,Norris,4,113,3
2021,10,MAZ,Nikita,Mazepin,9,0,4
2020,1,BOT,Valtteri,Bottas,77,25,1
";

/// write the fixture tables to a tempdir and load a store from them.
fn fixture_store() -> (TempDir, DataStore) {
    let dir = TempDir::new().unwrap();
    let circuits_path = dir.path().join("circuits.csv");
    let drivers_path = dir.path().join("drivers.csv");
    fs::write(&circuits_path, CIRCUITS_CSV).unwrap();
    fs::write(&drivers_path, DRIVERS_CSV).unwrap();

    let store = DataStore::from_paths(&circuits_path, &drivers_path).unwrap();
    (dir, store)
}

#[test]
fn load_reads_both_tables() {
    let (_dir, store) = fixture_store();

    assert_eq!(store.circuits.len(), 3);
    assert_eq!(store.drivers.len(), 9);
}

#[test]
fn load_missing_file_is_data_unavailable() {
    let dir = TempDir::new().unwrap();
    let circuits_path = dir.path().join("circuits.csv");
    fs::write(&circuits_path, CIRCUITS_CSV).unwrap();

    let result = DataStore::from_paths(&circuits_path, Path::new("does/not/exist.csv"));

    assert!(matches!(
        result,
        Err(Error::DataUnavailableError { .. })
    ));
}

#[test]
fn load_malformed_row_is_data_unavailable() {
    let dir = TempDir::new().unwrap();
    let circuits_path = dir.path().join("circuits.csv");
    let drivers_path = dir.path().join("drivers.csv");
    fs::write(&circuits_path, CIRCUITS_CSV).unwrap();
    fs::write(
        &drivers_path,
        "year,round,code,forename,surname,number,points,position\n2021,not-a-round,VER,Max,Verstappen,33,185,1\n",
    )
    .unwrap();

    let result = DataStore::from_paths(&circuits_path, &drivers_path);

    assert!(matches!(
        result,
        Err(Error::DataUnavailableError { .. })
    ));
}

/// filtering by year then taking the max round must land on the last
/// calendar race of that year's circuit table.
#[test]
fn max_round_matches_last_calendar_race() {
    let (_dir, store) = fixture_store();

    let circuits = Circuit::filter_by_year(&store.circuits, 2021);
    let results = DriverResult::filter_by_year(&store.drivers, 2021);

    let last_calendar_round = Circuit::sorted_by_round(&circuits).last().unwrap().round;
    assert_eq!(
        DriverResult::max_round(&results).unwrap(),
        last_calendar_round
    );
}

#[test]
fn season_rankings_come_from_the_last_round() {
    let (_dir, store) = fixture_store();

    let results = DriverResult::filter_by_year(&store.drivers, 2021);
    let rankings = DriverResult::season_rankings(&results).unwrap();

    assert!(rankings.iter().all(|result| result.round == 10));
    assert_eq!(DriverResult::codes(&rankings), vec!["VER", "HAM", "NOR", "MAZ"]);
    assert_eq!(
        charts::winner_banner(&rankings).unwrap(),
        "Max Verstappen [33]"
    );
}

/// the circuit explorer at the season's last circuit shows the same
/// standings as the season view.
#[test]
fn silverstone_rankings_equal_season_rankings_at_round_ten() {
    let (_dir, store) = fixture_store();

    let circuits = Circuit::filter_by_year(&store.circuits, 2021);
    let results = DriverResult::filter_by_year(&store.drivers, 2021);

    let by_circuit =
        DriverResult::circuit_rankings(&results, &circuits, "Silverstone Circuit").unwrap();
    let by_round = DriverResult::rankings_at_round(&results, 10);

    assert_eq!(by_circuit, by_round);
}

/// an unloaded year renders as an empty page, never a crash: every chart
/// builder must tolerate the empty filter output.
#[test]
fn out_of_range_year_renders_empty() {
    let (_dir, store) = fixture_store();

    let circuits = Circuit::filter_by_year(&store.circuits, 1962);
    let results = DriverResult::filter_by_year(&store.drivers, 1962);

    assert!(circuits.is_empty());
    assert!(results.is_empty());

    assert!(matches!(
        DriverResult::season_rankings(&results),
        Err(Error::EmptyInputError)
    ));

    assert!(charts::world_map(&circuits).datasets.is_empty());
    assert!(charts::driver_progression(&results, &[]).datasets.is_empty());
    assert!(charts::driver_points_bar(&[]).bars.is_empty());
    assert!(charts::races_table(&circuits).rows.is_empty());
    assert!(matches!(
        charts::winner_banner(&[]),
        Err(Error::EmptyRankingsError)
    ));
}

#[test]
fn zero_point_drivers_annotated_in_bar_chart() {
    let (_dir, store) = fixture_store();

    let results = DriverResult::filter_by_year(&store.drivers, 2021);
    let rankings = DriverResult::season_rankings(&results).unwrap();

    let chart = charts::driver_points_bar(&rankings);

    assert_eq!(chart.annotations.len(), 1);
    assert_eq!(chart.annotations[0].code, "MAZ");
    assert_eq!(chart.annotations[0].text, "4. Nikita Mazepin");
}

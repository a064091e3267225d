use snafu::OptionExt;

use crate::errors::{CustomResult, EmptyRankingsSnafu};
use crate::modules::helpers::math::Math;
use crate::modules::models::circuit::Circuit;
use crate::modules::models::driver::DriverResult;
use crate::{
    BarChartAnnotation, BarChartBar, BarChartData, GeoChartData, GeoChartDataset, GeoMarker,
    LineChartData, LineChartDataset, TableData,
};

/// # world map
/// one marker per circuit at its coordinates, grouped into one dataset per
/// country so the client colors markers by country. marker text is the
/// round number, hover text the circuit name.
pub fn world_map(circuits: &[Circuit]) -> GeoChartData {
    let mut datasets: Vec<GeoChartDataset> = Vec::new();

    for circuit in Circuit::sorted_by_round(circuits) {
        let index = match datasets
            .iter()
            .position(|dataset| dataset.country == circuit.country)
        {
            Some(index) => index,
            None => {
                datasets.push(GeoChartDataset {
                    country: circuit.country.clone(),
                    markers: Vec::new(),
                });
                datasets.len() - 1
            }
        };

        datasets[index].markers.push(GeoMarker {
            name: circuit.name.clone(),
            lat: circuit.lat,
            lng: circuit.lng,
            round: circuit.round,
        });
    }

    GeoChartData { datasets }
}

/// # driver progression
/// one dataset per driver code with the raw per-round points column
/// (x = round, y = points at that round). datasets follow `code_order`
/// first so the legend reads in final standings order, drivers missing
/// from that order come after.
pub fn driver_progression(results: &[DriverResult], code_order: &[String]) -> LineChartData {
    let mut sorted = results.to_vec();
    sorted.sort_by_key(|result| result.round);

    let mut datasets: Vec<LineChartDataset> = Vec::new();
    for code in code_order {
        if let Some(dataset) = progression_dataset(&sorted, code) {
            datasets.push(dataset);
        }
    }

    // drivers that dropped out before the last round are not in the final
    // standings but still raced, so they still get a line.
    for result in &sorted {
        if datasets.iter().any(|dataset| dataset.code == result.code) {
            continue;
        }
        if let Some(dataset) = progression_dataset(&sorted, &result.code) {
            datasets.push(dataset);
        }
    }

    LineChartData { datasets }
}

fn progression_dataset(sorted: &[DriverResult], code: &str) -> Option<LineChartDataset> {
    let rows: Vec<&DriverResult> = sorted
        .iter()
        .filter(|result| result.code == code)
        .collect();

    let first = rows.first()?;

    Some(LineChartDataset {
        code: code.to_string(),
        driver_name: first.full_name(),
        rounds: rows.iter().map(|result| result.round).collect(),
        points: rows.iter().map(|result| result.points).collect(),
    })
}

/// # driver points bar
/// one bar per ranked driver (x = points, y = code), labeled
/// "{position}. {forename} {surname}". a zero length bar has no room for
/// an inline label, so drivers on zero points also get an annotation at
/// x = 0.
pub fn driver_points_bar(rankings: &[DriverResult]) -> BarChartData {
    let mut bars = Vec::new();
    let mut annotations = Vec::new();

    for result in rankings {
        let label = format!("{}. {}", result.position, result.full_name());

        if result.points == 0.0 {
            annotations.push(BarChartAnnotation {
                code: result.code.clone(),
                text: label.clone(),
            });
        }

        bars.push(BarChartBar {
            code: result.code.clone(),
            points: result.points,
            label,
        });
    }

    BarChartData { bars, annotations }
}

/// # winner banner
/// "{forename} {surname} [{number}]" for the first ranked driver.
pub fn winner_banner(rankings: &[DriverResult]) -> CustomResult<String> {
    let winner = rankings.first().context(EmptyRankingsSnafu)?;

    Ok(format!("{} [{}]", winner.full_name(), winner.number))
}

/// # races table
/// the sidebar table of the season's circuits, in calendar order.
pub fn races_table(circuits: &[Circuit]) -> TableData {
    TableData {
        headers: vec![
            "Round".to_string(),
            "Circuit".to_string(),
            "Country".to_string(),
        ],
        rows: Circuit::sorted_by_round(circuits)
            .iter()
            .map(|circuit| {
                vec![
                    circuit.round.to_string(),
                    circuit.name.clone(),
                    circuit.country.clone(),
                ]
            })
            .collect(),
    }
}

/// # standings table
/// the circuit explorer's standings table.
pub fn standings_table(rankings: &[DriverResult]) -> TableData {
    TableData {
        headers: vec![
            "Position".to_string(),
            "Driver".to_string(),
            "Code".to_string(),
            "Points".to_string(),
        ],
        rows: rankings
            .iter()
            .map(|result| {
                vec![
                    result.position.to_string(),
                    result.full_name(),
                    result.code.clone(),
                    Math::round_float_to_n_decimals(result.points, 1).to_string(),
                ]
            })
            .collect(),
    }
}

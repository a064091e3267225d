use serde::{Deserialize, Serialize};
use snafu::OptionExt;

use crate::errors::{CustomResult, EmptyInputSnafu};
use crate::modules::models::circuit::Circuit;

/// one driver's championship standing after one round. `points` is the
/// running championship total at that round, `position` the rank the source
/// table assigned at that round (unique within a (year, round), descending
/// by points, ties keeping source order).
#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub struct DriverResult {
    pub year: i32,
    pub round: i32,
    pub code: String,
    pub forename: String,
    pub surname: String,
    pub number: i32,
    pub points: f64,
    pub position: i32,
}

impl DriverResult {
    /// # filter by year
    /// keep the results of the given season.
    ///
    /// ## Arguments
    /// * `results` - the full driver result table
    /// * `year` - the selected season
    ///
    /// ## Returns
    /// * `Vec<DriverResult>` - the season's results, empty if the year has none
    pub fn filter_by_year(results: &[DriverResult], year: i32) -> Vec<DriverResult> {
        results
            .iter()
            .filter(|result| result.year == year)
            .cloned()
            .collect()
    }

    /// # max round
    /// the last round present in the given results. undefined (and an
    /// `EmptyInputError`) when there are none.
    pub fn max_round(results: &[DriverResult]) -> CustomResult<i32> {
        results
            .iter()
            .map(|result| result.round)
            .max()
            .context(EmptyInputSnafu)
    }

    /// # season rankings
    /// the driver standings after the last round of the given results,
    /// sorted by points descending.
    ///
    /// ## Arguments
    /// * `results` - the results of a single season
    ///
    /// ## Returns
    /// * `Vec<DriverResult>` - the standings, winner first
    pub fn season_rankings(results: &[DriverResult]) -> CustomResult<Vec<DriverResult>> {
        let last_round = DriverResult::max_round(results)?;

        Ok(DriverResult::rankings_at_round(results, last_round))
    }

    /// # circuit rankings
    /// the driver standings at the round hosted by the named circuit.
    ///
    /// ## Arguments
    /// * `results` - the results of a single season
    /// * `circuits` - the circuits of the same season
    /// * `circuit_name` - the circuit name as shown in the ui
    ///
    /// ## Returns
    /// * `Vec<DriverResult>` - the standings after that circuit's round
    pub fn circuit_rankings(
        results: &[DriverResult],
        circuits: &[Circuit],
        circuit_name: &str,
    ) -> CustomResult<Vec<DriverResult>> {
        let round = Circuit::find_round(circuits, circuit_name)?;

        Ok(DriverResult::rankings_at_round(results, round))
    }

    /// standings at a single round. the sort is stable, so drivers on equal
    /// points keep their source order.
    pub fn rankings_at_round(results: &[DriverResult], round: i32) -> Vec<DriverResult> {
        let mut rankings: Vec<DriverResult> = results
            .iter()
            .filter(|result| result.round == round)
            .cloned()
            .collect();

        rankings.sort_by(|a, b| b.points.partial_cmp(&a.points).unwrap());

        rankings
    }

    /// # codes
    /// the driver codes of the given rankings, in rank order. used to order
    /// chart legends by the final standings.
    pub fn codes(rankings: &[DriverResult]) -> Vec<String> {
        rankings.iter().map(|result| result.code.clone()).collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

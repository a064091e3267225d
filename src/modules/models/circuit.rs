use serde::{Deserialize, Serialize};
use snafu::OptionExt;

use crate::errors::{CircuitNotFoundSnafu, CustomResult};

/// one race event: a venue hosting one round of one season.
/// (year, round) is unique within the source table.
#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub struct Circuit {
    pub year: i32,
    pub round: i32,
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

impl Circuit {
    /// # filter by year
    /// keep the circuits raced in the given year.
    ///
    /// ## Arguments
    /// * `circuits` - the full circuit table
    /// * `year` - the selected season
    ///
    /// ## Returns
    /// * `Vec<Circuit>` - the season's circuits, empty if the year has none
    pub fn filter_by_year(circuits: &[Circuit], year: i32) -> Vec<Circuit> {
        circuits
            .iter()
            .filter(|circuit| circuit.year == year)
            .cloned()
            .collect()
    }

    /// # sorted by round
    /// the given circuits in calendar order.
    pub fn sorted_by_round(circuits: &[Circuit]) -> Vec<Circuit> {
        let mut sorted = circuits.to_vec();
        sorted.sort_by_key(|circuit| circuit.round);

        sorted
    }

    /// # find round
    /// get the round number hosted by the named circuit.
    ///
    /// ## Arguments
    /// * `circuits` - the circuits of a single season
    /// * `name_in` - the circuit name as shown in the ui
    ///
    /// ## Returns
    /// * `i32` - the round number, or `CircuitNotFoundError`
    pub fn find_round(circuits: &[Circuit], name_in: &str) -> CustomResult<i32> {
        circuits
            .iter()
            .find(|circuit| circuit.name == name_in)
            .map(|circuit| circuit.round)
            .context(CircuitNotFoundSnafu { name: name_in })
    }
}

use std::env;
use std::path::{Path, PathBuf};

use dotenvy::dotenv;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::errors::{CustomResult, DataUnavailableSnafu};
use crate::modules::models::circuit::Circuit;
use crate::modules::models::driver::DriverResult;

/// # data store
/// both source tables, loaded once at launch and attached to the rocket
/// instance as managed state. requests only ever borrow it.
pub struct DataStore {
    pub circuits: Vec<Circuit>,
    pub drivers: Vec<DriverResult>,
}

impl DataStore {
    /// # load data store
    /// read the circuit and driver tables from the configured data directory.
    ///
    /// ## Returns
    /// * `DataStore` - the loaded tables
    pub fn load() -> CustomResult<DataStore> {
        let dir = data_dir();

        DataStore::from_paths(&dir.join("circuits.csv"), &dir.join("drivers.csv"))
    }

    /// # load data store from explicit paths
    /// used by `load` and by tests that point the store at fixture files.
    pub fn from_paths(circuits_path: &Path, drivers_path: &Path) -> CustomResult<DataStore> {
        Ok(DataStore {
            circuits: read_table(circuits_path)?,
            drivers: read_table(drivers_path)?,
        })
    }
}

/// read a whole csv table into typed rows. a missing file and a malformed
/// row are the same failure to the caller: the data is unavailable.
fn read_table<T: DeserializeOwned>(path: &Path) -> CustomResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).context(DataUnavailableSnafu {
        path: path.display().to_string(),
    })?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .context(DataUnavailableSnafu {
            path: path.display().to_string(),
        })
}

/// # data directory
/// resolve the directory holding the processed tables from the environment.
pub fn data_dir() -> PathBuf {
    dotenv().ok();

    PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data/processed".to_string()))
}

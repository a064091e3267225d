use snafu::Snafu;

/// # error taxonomy
/// `DataUnavailableError` is fatal: it is only raised while loading the
/// source tables and aborts the launch. The other variants describe empty
/// or missing selections and map to placeholder states or 404s.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("could not read data file `{path}`. (error: {source})"))]
    DataUnavailableError { path: String, source: csv::Error },

    #[snafu(display("no driver results to rank"))]
    EmptyInputError,

    #[snafu(display("no circuit named `{name}` in the selected season"))]
    CircuitNotFoundError { name: String },

    #[snafu(display("rankings contain no drivers"))]
    EmptyRankingsError,
}

pub type CustomResult<T> = Result<T, Error>;

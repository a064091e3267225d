/// unwrap a store derivation or bail out of the route: empty and missing
/// selections become a 404, anything else is logged and becomes a 500.
///
/// expects `Status` and `error!` to be in scope at the call site.
macro_rules! store_handle_get_error_http {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(crate::errors::Error::CircuitNotFoundError { .. })
            | Err(crate::errors::Error::EmptyInputError)
            | Err(crate::errors::Error::EmptyRankingsError) => {
                return Err(Status::NotFound);
            }
            Err(error) => {
                error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err(Status::InternalServerError);
            }
        }
    }
}

pub(crate) use store_handle_get_error_http;

use crate::climatology::error::ClimatologyError;
use crate::server::error::ServerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherOddsError {
    #[error(transparent)]
    Climatology(#[from] ClimatologyError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

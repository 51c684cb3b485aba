mod climatology;
mod error;
mod estimator;
mod server;
mod types;

pub use error::WeatherOddsError;

pub use climatology::error::ClimatologyError;
pub use climatology::fetcher::*;

pub use estimator::probability::{estimate, ProbabilityResult, RawInputs};
pub use estimator::ramp::{ramp_down, ramp_up, Percent, Ramp, Slope};
pub use estimator::thresholds::*;

pub use server::config::ServerArgs;
pub use server::error::{ApiError, ServerError};
pub use server::{router, run, AppState};

pub use types::climate_parameter::ClimateParameter;
pub use types::climatology_record::{ClimatologyRecord, MonthlySeries};
pub use types::location::{Coordinates, LatLon};
pub use types::month::{month_from_iso, Month};

//! Defines the climate parameters requested from NASA POWER and the names they
//! carry on the wire and in the API response.

use std::fmt;

/// A monthly-averaged quantity fetched from the climatology source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateParameter {
    /// Air temperature at 2 metres, °C.
    Temperature,
    /// Relative humidity at 2 metres, %.
    RelativeHumidity,
    /// Bias-corrected total precipitation, mm/day.
    Precipitation,
    /// Wind speed at 10 metres, m/s.
    WindSpeed,
}

impl ClimateParameter {
    pub const ALL: [ClimateParameter; 4] = [
        ClimateParameter::Temperature,
        ClimateParameter::RelativeHumidity,
        ClimateParameter::Precipitation,
        ClimateParameter::WindSpeed,
    ];

    /// Name used in the POWER `parameters` query and response object.
    pub(crate) fn api_name(&self) -> &'static str {
        match self {
            ClimateParameter::Temperature => "T2M",
            ClimateParameter::RelativeHumidity => "RH2M",
            ClimateParameter::Precipitation => "PRECTOTCORR",
            ClimateParameter::WindSpeed => "WS10M",
        }
    }

    /// Older names POWER has served the same series under.
    pub(crate) fn api_aliases(&self) -> &'static [&'static str] {
        match self {
            ClimateParameter::Precipitation => &["PRECTOT"],
            _ => &[],
        }
    }

    /// Key used for this parameter in the `raw` block of a probability result.
    pub fn raw_key(&self) -> &'static str {
        match self {
            ClimateParameter::Precipitation => "PRECTOT",
            other => other.api_name(),
        }
    }

    pub(crate) fn query_list() -> String {
        Self::ALL
            .iter()
            .map(ClimateParameter::api_name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Formats a `ClimateParameter` using its response key.
///
/// # Examples
///
/// ```
/// use weather_odds::ClimateParameter;
///
/// assert_eq!(ClimateParameter::Temperature.to_string(), "T2M");
/// assert_eq!(ClimateParameter::Precipitation.to_string(), "PRECTOT");
/// ```
impl fmt::Display for ClimateParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_key())
    }
}

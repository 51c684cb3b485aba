//! Monthly climatology for a single point, as delivered by the fetcher.

use crate::types::climate_parameter::ClimateParameter;
use crate::types::month::Month;

/// Twelve monthly averages for one parameter. Slot `i` holds month `i + 1`;
/// a slot is `None` when the source had no usable value for that month.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlySeries([Option<f64>; 12]);

impl MonthlySeries {
    pub fn new(values: [Option<f64>; 12]) -> Self {
        Self(values)
    }

    pub fn get(&self, month: Month) -> Option<f64> {
        self.0[month.index0()]
    }

    pub(crate) fn set(&mut self, month: Month, value: Option<f64>) {
        self.0[month.index0()] = value;
    }
}

impl From<[f64; 12]> for MonthlySeries {
    fn from(values: [f64; 12]) -> Self {
        Self(values.map(Some))
    }
}

/// Per-parameter monthly series for one location. Any parameter may be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClimatologyRecord {
    pub temperature: Option<MonthlySeries>,
    pub relative_humidity: Option<MonthlySeries>,
    pub precipitation: Option<MonthlySeries>,
    pub wind_speed: Option<MonthlySeries>,
}

impl ClimatologyRecord {
    pub fn series(&self, parameter: ClimateParameter) -> Option<&MonthlySeries> {
        match parameter {
            ClimateParameter::Temperature => self.temperature.as_ref(),
            ClimateParameter::RelativeHumidity => self.relative_humidity.as_ref(),
            ClimateParameter::Precipitation => self.precipitation.as_ref(),
            ClimateParameter::WindSpeed => self.wind_speed.as_ref(),
        }
    }

    pub(crate) fn series_mut(&mut self, parameter: ClimateParameter) -> &mut Option<MonthlySeries> {
        match parameter {
            ClimateParameter::Temperature => &mut self.temperature,
            ClimateParameter::RelativeHumidity => &mut self.relative_humidity,
            ClimateParameter::Precipitation => &mut self.precipitation,
            ClimateParameter::WindSpeed => &mut self.wind_speed,
        }
    }

    /// The monthly average of `parameter`, or `None` if either the series or the month is missing.
    pub fn value(&self, parameter: ClimateParameter, month: Month) -> Option<f64> {
        self.series(parameter).and_then(|s| s.get(month))
    }
}

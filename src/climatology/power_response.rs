//! Conversion of a NASA POWER point response into a [`ClimatologyRecord`].
//!
//! Only `properties.parameter` is read. Each parameter maps to an object keyed by
//! month. The monthly endpoint keys by `YYYYMM` (with `YYYY13` carrying the annual
//! mean), the climatology endpoint by `JAN`..`DEC` (plus `ANN`). Plain `1`..`12`
//! keys and bare twelve-element arrays are accepted as well.
//!
//! The body is walked as an untyped [`Value`] so that an unexpected shape anywhere
//! degrades to missing data instead of failing the whole response. A month whose
//! value is not a number is missing; its siblings are kept.

use crate::types::climate_parameter::ClimateParameter;
use crate::types::climatology_record::{ClimatologyRecord, MonthlySeries};
use crate::types::month::Month;
use serde_json::{Map, Value};

/// POWER marks missing data with this value.
const FILL_VALUE: f64 = -999.0;

/// Returns `None` when the response has no `properties.parameter` object.
pub(crate) fn record_from_response(response: &Value) -> Option<ClimatologyRecord> {
    let parameters = response
        .get("properties")
        .and_then(|properties| properties.get("parameter"))
        .and_then(Value::as_object)?;

    let mut record = ClimatologyRecord::default();
    for parameter in ClimateParameter::ALL {
        *record.series_mut(parameter) = std::iter::once(parameter.api_name())
            .chain(parameter.api_aliases().iter().copied())
            .find_map(|name| parameters.get(name))
            .and_then(series_from_value);
    }

    Some(record)
}

fn series_from_value(values: &Value) -> Option<MonthlySeries> {
    match values {
        Value::Object(map) => Some(series_from_keyed(map)),
        Value::Array(values) => {
            let mut series = MonthlySeries::default();
            for (month, value) in Month::all().zip(values) {
                series.set(month, value.as_f64().and_then(usable));
            }
            Some(series)
        }
        _ => None,
    }
}

fn series_from_keyed(map: &Map<String, Value>) -> MonthlySeries {
    let mut series = MonthlySeries::default();
    for (key, value) in map {
        if let Some(month) = month_from_key(key) {
            series.set(month, value.as_f64().and_then(usable));
        }
    }
    series
}

fn usable(value: f64) -> Option<f64> {
    (value.is_finite() && value > FILL_VALUE).then_some(value)
}

/// Maps a POWER month key to its month. Annual keys (`ANN`, `YYYY13`) map to `None`.
fn month_from_key(key: &str) -> Option<Month> {
    let key = key.trim();
    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        let month_digits = match key.len() {
            1 | 2 => key,
            6 => &key[4..],
            _ => return None,
        };
        return month_digits.parse().ok().and_then(Month::new);
    }
    Month::from_abbreviation(key)
}

//! Scores a month of climatology against [`Thresholds`].

use crate::estimator::ramp::Percent;
use crate::estimator::thresholds::Thresholds;
use crate::types::climate_parameter::ClimateParameter;
use crate::types::climatology_record::ClimatologyRecord;
use crate::types::month::Month;
use serde::Serialize;

/// The monthly averages a [`ProbabilityResult`] was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RawInputs {
    /// Temperature, °C.
    #[serde(rename = "T2M")]
    pub temperature: Option<f64>,
    /// Relative humidity, %.
    #[serde(rename = "RH2M")]
    pub relative_humidity: Option<f64>,
    /// Precipitation, mm/day.
    #[serde(rename = "PRECTOT")]
    pub precipitation: Option<f64>,
    /// Wind speed, m/s.
    #[serde(rename = "WS10M")]
    pub wind_speed: Option<f64>,
}

impl RawInputs {
    fn from_record(record: Option<&ClimatologyRecord>, month: Month) -> Self {
        let value = |parameter| {
            record
                .and_then(|r| r.value(parameter, month))
                .filter(|v| v.is_finite())
        };
        Self {
            temperature: value(ClimateParameter::Temperature),
            relative_humidity: value(ClimateParameter::RelativeHumidity),
            precipitation: value(ClimateParameter::Precipitation),
            wind_speed: value(ClimateParameter::WindSpeed),
        }
    }
}

/// Heuristic odds of each extreme condition for one month, serialised as the
/// response body of `GET /api/probabilities`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityResult {
    pub month: Month,
    pub very_hot: Percent,
    pub very_cold: Percent,
    pub very_windy: Percent,
    pub very_humid: Percent,
    pub very_uncomfortable: Percent,
    pub rainy: Percent,
    pub raw: RawInputs,
}

/// Computes all six scores for `month`.
///
/// Never fails: a missing record, series or monthly value scores 0 for every
/// condition that depends on it.
///
/// # Examples
///
/// ```
/// use weather_odds::{estimate, ClimatologyRecord, Month, MonthlySeries, Thresholds};
///
/// let record = ClimatologyRecord {
///     temperature: Some(MonthlySeries::from([32.5; 12])),
///     ..Default::default()
/// };
/// let july = Month::new(7).unwrap();
/// let result = estimate(july, Some(&record), &Thresholds::default());
///
/// assert_eq!(result.very_hot, 50);
/// assert_eq!(result.very_windy, 0);
/// ```
pub fn estimate(
    month: Month,
    record: Option<&ClimatologyRecord>,
    thresholds: &Thresholds,
) -> ProbabilityResult {
    let raw = RawInputs::from_record(record, month);

    let very_hot = thresholds.very_hot.score(raw.temperature);
    let very_cold = thresholds.very_cold.score(raw.temperature);
    let very_windy = thresholds.very_windy.score(raw.wind_speed);
    let very_humid = thresholds.very_humid.score(raw.relative_humidity);
    let rainy = thresholds.rainy.score(raw.precipitation);
    let very_uncomfortable = thresholds
        .discomfort
        .blend(very_hot, very_humid, very_windy);

    ProbabilityResult {
        month,
        very_hot,
        very_cold,
        very_windy,
        very_humid,
        very_uncomfortable,
        rainy,
        raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::climatology_record::MonthlySeries;
    use serde_json::json;

    fn july() -> Month {
        Month::new(7).unwrap()
    }

    fn constant(value: f64) -> Option<MonthlySeries> {
        Some(MonthlySeries::from([value; 12]))
    }

    fn with_temperature(t: f64) -> ClimatologyRecord {
        ClimatologyRecord {
            temperature: constant(t),
            ..Default::default()
        }
    }

    fn percentages(result: &ProbabilityResult) -> [Percent; 6] {
        [
            result.very_hot,
            result.very_cold,
            result.very_windy,
            result.very_humid,
            result.very_uncomfortable,
            result.rainy,
        ]
    }

    #[test]
    fn test_very_hot_thresholds() {
        let thresholds = Thresholds::default();
        let score = |t| estimate(july(), Some(&with_temperature(t)), &thresholds).very_hot;
        assert_eq!(score(35.0), 100);
        assert_eq!(score(30.0), 0);
        assert_eq!(score(32.5), 50);
        assert_eq!(score(45.0), 100);
    }

    #[test]
    fn test_very_cold_thresholds() {
        let thresholds = Thresholds::default();
        let score = |t| estimate(july(), Some(&with_temperature(t)), &thresholds).very_cold;
        assert_eq!(score(-10.0), 100);
        assert_eq!(score(-25.0), 100);
        assert_eq!(score(-5.0), 50);
        assert_eq!(score(0.0), 0);
        assert_eq!(score(12.0), 0);
    }

    #[test]
    fn test_missing_wind_scores_zero() {
        let record = ClimatologyRecord {
            temperature: constant(20.0),
            relative_humidity: constant(90.0),
            precipitation: constant(1.0),
            wind_speed: None,
        };
        let result = estimate(july(), Some(&record), &Thresholds::default());

        assert_eq!(result.very_windy, 0);
        assert_eq!(result.raw.wind_speed, None);
        assert_eq!(result.very_humid, 67);
    }

    #[test]
    fn test_missing_record_scores_zero_everywhere() {
        let result = estimate(july(), None, &Thresholds::default());
        assert_eq!(percentages(&result), [0; 6]);
        assert_eq!(result.raw, RawInputs::default());
        assert_eq!(result.month, july());
    }

    #[test]
    fn test_missing_month_slot_scores_zero() {
        let mut series = MonthlySeries::default();
        series.set(Month::new(1).unwrap(), Some(40.0));
        let record = ClimatologyRecord {
            temperature: Some(series),
            ..Default::default()
        };
        let thresholds = Thresholds::default();

        assert_eq!(estimate(july(), Some(&record), &thresholds).very_hot, 0);
        assert_eq!(
            estimate(Month::new(1).unwrap(), Some(&record), &thresholds).very_hot,
            100
        );
    }

    #[test]
    fn test_uncomfortable_blends_component_scores() {
        // hot = 80 (T = 34), humid = 50 (RH = 87.5), windy = 0 (WS = 5)
        let record = ClimatologyRecord {
            temperature: constant(34.0),
            relative_humidity: constant(87.5),
            precipitation: None,
            wind_speed: constant(5.0),
        };
        let result = estimate(july(), Some(&record), &Thresholds::default());

        assert_eq!(result.very_hot, 80);
        assert_eq!(result.very_humid, 50);
        assert_eq!(result.very_windy, 0);
        assert_eq!(result.very_uncomfortable, 55);
    }

    #[test]
    fn test_all_scores_stay_in_range() {
        let thresholds = Thresholds::default();
        let samples = [-60.0, -10.0, -0.1, 0.0, 7.7, 8.3, 12.0, 33.3, 80.0, 99.0, 1e6];
        for &value in &samples {
            let record = ClimatologyRecord {
                temperature: constant(value),
                relative_humidity: constant(value),
                precipitation: constant(value),
                wind_speed: constant(value),
            };
            for month in Month::all() {
                let result = estimate(month, Some(&record), &thresholds);
                for p in percentages(&result) {
                    assert!(p <= 100, "{p} out of range for input {value}");
                }
                let expected = thresholds.discomfort.blend(
                    result.very_hot,
                    result.very_humid,
                    result.very_windy,
                );
                assert_eq!(result.very_uncomfortable, expected);
            }
        }
    }

    #[test]
    fn test_serialized_shape() {
        let record = ClimatologyRecord {
            temperature: constant(32.5),
            relative_humidity: None,
            precipitation: constant(10.0),
            wind_speed: constant(12.0),
        };
        let result = estimate(july(), Some(&record), &Thresholds::default());

        assert_eq!(
            serde_json::to_value(result).unwrap(),
            json!({
                "month": 7,
                "veryHot": 50,
                "veryCold": 0,
                "veryWindy": 100,
                "veryHumid": 0,
                "veryUncomfortable": 45,
                "rainy": 50,
                "raw": {
                    "T2M": 32.5,
                    "RH2M": null,
                    "PRECTOT": 10.0,
                    "WS10M": 12.0
                }
            })
        );
    }
}

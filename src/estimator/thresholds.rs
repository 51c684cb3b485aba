//! Fixed cutoffs for every scored condition.

use crate::estimator::ramp::{clamp_percent, Percent, Ramp};

pub const VERY_HOT_START_C: f64 = 30.0;
pub const VERY_HOT_FULL_C: f64 = 35.0;
/// Temperature at which "very cold" starts registering.
pub const VERY_COLD_C: f64 = 0.0;
/// Degrees below [`VERY_COLD_C`] at which "very cold" saturates.
pub const VERY_COLD_SPAN_C: f64 = 10.0;
pub const VERY_WINDY_START_MS: f64 = 8.3;
pub const VERY_WINDY_FULL_MS: f64 = 12.0;
pub const VERY_HUMID_START_PCT: f64 = 80.0;
pub const VERY_HUMID_FULL_PCT: f64 = 95.0;
pub const RAINY_START_MM_DAY: f64 = 5.0;
pub const RAINY_FULL_MM_DAY: f64 = 15.0;

/// Weights of the "very uncomfortable" blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscomfortWeights {
    pub hot: f64,
    pub humid: f64,
    pub windy: f64,
}

impl Default for DiscomfortWeights {
    fn default() -> Self {
        Self {
            hot: 0.5,
            humid: 0.3,
            windy: 0.2,
        }
    }
}

impl DiscomfortWeights {
    /// `round(clamp(hot·w + humid·w + windy·w))` over already-scored percentages.
    pub fn blend(&self, hot: Percent, humid: Percent, windy: Percent) -> Percent {
        clamp_percent(
            self.hot * f64::from(hot) + self.humid * f64::from(humid) + self.windy * f64::from(windy),
        )
    }
}

/// Immutable scoring configuration, built once at start-up and shared by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub very_hot: Ramp,
    pub very_cold: Ramp,
    pub very_windy: Ramp,
    pub very_humid: Ramp,
    pub rainy: Ramp,
    pub discomfort: DiscomfortWeights,
}

impl Thresholds {
    /// A falling cold ramp that starts at `very_cold_c` and saturates `span_c` degrees lower.
    pub fn cold_ramp(very_cold_c: f64, span_c: f64) -> Ramp {
        Ramp::falling(very_cold_c, very_cold_c - span_c)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            very_hot: Ramp::rising(VERY_HOT_START_C, VERY_HOT_FULL_C),
            very_cold: Self::cold_ramp(VERY_COLD_C, VERY_COLD_SPAN_C),
            very_windy: Ramp::rising(VERY_WINDY_START_MS, VERY_WINDY_FULL_MS),
            very_humid: Ramp::rising(VERY_HUMID_START_PCT, VERY_HUMID_FULL_PCT),
            rainy: Ramp::rising(RAINY_START_MM_DAY, RAINY_FULL_MM_DAY),
            discomfort: DiscomfortWeights::default(),
        }
    }
}

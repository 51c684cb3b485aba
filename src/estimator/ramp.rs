//! Linear threshold ramps that turn a raw monthly average into a 0-100 score.

/// A percentage in `0..=100`.
pub type Percent = u8;

/// Direction of a [`Ramp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    /// Larger values are more likely to count (`start < full`).
    Rising,
    /// Smaller values are more likely to count (`start > full`).
    Falling,
}

/// A pair of thresholds: `start` maps to 0 %, `full` maps to 100 %.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub start: f64,
    pub full: f64,
    pub slope: Slope,
}

impl Ramp {
    pub const fn rising(start: f64, full: f64) -> Self {
        Self {
            start,
            full,
            slope: Slope::Rising,
        }
    }

    pub const fn falling(start: f64, full: f64) -> Self {
        Self {
            start,
            full,
            slope: Slope::Falling,
        }
    }

    /// Scores `value`. A missing value scores 0.
    pub fn score(&self, value: Option<f64>) -> Percent {
        match value {
            Some(x) => match self.slope {
                Slope::Rising => ramp_up(x, self.start, self.full),
                Slope::Falling => ramp_down(x, self.start, self.full),
            },
            None => 0,
        }
    }
}

/// Maps `x` linearly from `start` (0 %) to `full` (100 %), clamped and rounded.
///
/// When `start == full` the ramp degenerates into a step: 100 once `x` reaches
/// `full`, 0 below it. `NaN` scores 0.
///
/// # Examples
///
/// ```
/// use weather_odds::ramp_up;
///
/// assert_eq!(ramp_up(30.0, 30.0, 35.0), 0);
/// assert_eq!(ramp_up(32.5, 30.0, 35.0), 50);
/// assert_eq!(ramp_up(40.0, 30.0, 35.0), 100);
/// ```
pub fn ramp_up(x: f64, start: f64, full: f64) -> Percent {
    if x.is_nan() {
        return 0;
    }
    if start == full {
        return if x >= full { 100 } else { 0 };
    }
    clamp_percent((x - start) / (full - start) * 100.0)
}

/// Mirror of [`ramp_up`] for quantities where less is more likely, with `start > full`.
///
/// ```
/// use weather_odds::ramp_down;
///
/// // 0 °C starts registering, -10 °C saturates.
/// assert_eq!(ramp_down(0.0, 0.0, -10.0), 0);
/// assert_eq!(ramp_down(-5.0, 0.0, -10.0), 50);
/// assert_eq!(ramp_down(-12.0, 0.0, -10.0), 100);
/// ```
pub fn ramp_down(x: f64, start: f64, full: f64) -> Percent {
    ramp_up(-x, -start, -full)
}

/// Clamps to `0..=100` and rounds half away from zero. `NaN` becomes 0.
pub(crate) fn clamp_percent(value: f64) -> Percent {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as Percent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_up_endpoints() {
        assert_eq!(ramp_up(30.0, 30.0, 35.0), 0);
        assert_eq!(ramp_up(35.0, 30.0, 35.0), 100);
        assert_eq!(ramp_up(8.3, 8.3, 12.0), 0);
        assert_eq!(ramp_up(12.0, 8.3, 12.0), 100);
        assert_eq!(ramp_up(80.0, 80.0, 95.0), 0);
        assert_eq!(ramp_up(95.0, 80.0, 95.0), 100);
    }

    #[test]
    fn test_ramp_up_clamps_outside_range() {
        assert_eq!(ramp_up(-50.0, 30.0, 35.0), 0);
        assert_eq!(ramp_up(1e9, 30.0, 35.0), 100);
        assert_eq!(ramp_up(f64::INFINITY, 30.0, 35.0), 100);
        assert_eq!(ramp_up(f64::NEG_INFINITY, 30.0, 35.0), 0);
        assert_eq!(ramp_up(f64::NAN, 30.0, 35.0), 0);
    }

    #[test]
    fn test_ramp_up_rounds_to_nearest() {
        // (31.01 - 30) / 5 = 20.2 %
        assert_eq!(ramp_up(31.01, 30.0, 35.0), 20);
        // (31.04 - 30) / 5 = 20.8 %
        assert_eq!(ramp_up(31.04, 30.0, 35.0), 21);
        assert_eq!(ramp_up(10.0, 5.0, 15.0), 50);
    }

    #[test]
    fn test_ramp_up_is_monotonic_between_thresholds() {
        let ramps = [(30.0, 35.0), (8.3, 12.0), (80.0, 95.0), (5.0, 15.0), (0.0, 10.0)];
        for (start, full) in ramps {
            let mut previous = 0;
            for step in 0..=1000 {
                let x = start + (full - start) * step as f64 / 1000.0;
                let score = ramp_up(x, start, full);
                assert!(score <= 100);
                assert!(
                    score >= previous,
                    "ramp_up({x}, {start}, {full}) dropped from {previous} to {score}"
                );
                previous = score;
            }
            assert_eq!(previous, 100);
        }
    }

    #[test]
    fn test_degenerate_ramp_is_a_step() {
        assert_eq!(ramp_up(9.99, 10.0, 10.0), 0);
        assert_eq!(ramp_up(10.0, 10.0, 10.0), 100);
        assert_eq!(ramp_up(11.0, 10.0, 10.0), 100);
        assert_eq!(ramp_down(0.0, 0.0, 0.0), 100);
        assert_eq!(ramp_down(0.5, 0.0, 0.0), 0);
    }

    #[test]
    fn test_ramp_down_matches_negated_ramp_up() {
        for t in [-20.0, -10.0, -7.5, -2.5, 0.0, 3.0] {
            assert_eq!(ramp_down(t, 0.0, -10.0), ramp_up(-t, 0.0, 10.0));
        }
        assert_eq!(ramp_down(-10.0, 0.0, -10.0), 100);
    }

    #[test]
    fn test_ramp_score_handles_missing_values() {
        let hot = Ramp::rising(30.0, 35.0);
        let cold = Ramp::falling(0.0, -10.0);
        assert_eq!(hot.score(None), 0);
        assert_eq!(cold.score(None), 0);
        assert_eq!(hot.score(Some(32.5)), 50);
        assert_eq!(cold.score(Some(-10.0)), 100);
    }
}

pub mod probability;
pub mod ramp;
pub mod thresholds;

//! Geographic point used to address the climatology source.

use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`. No bounds are enforced: out-of-range
/// coordinates are forwarded to the upstream source, which decides what to do with them.
///
/// # Examples
///
/// ```
/// use weather_odds::LatLon;
///
/// let berlin_center = LatLon(52.5200, 13.4050);
/// assert_eq!(berlin_center.0, 52.5200); // Latitude
/// assert_eq!(berlin_center.1, 13.4050); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(self) -> f64 {
        self.0
    }
    pub fn longitude(self) -> f64 {
        self.1
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// A point as a caller spelled it, forwarded to the climatology source verbatim.
///
/// The HTTP layer does not judge whether `lat`/`lon` are numbers; the upstream does,
/// and its verdict surfaces as an upstream error.
///
/// # Examples
///
/// ```
/// use weather_odds::{Coordinates, LatLon};
///
/// let point = Coordinates::from(LatLon(52.52, 13.4));
/// assert_eq!(point.latitude, "52.52");
/// assert_eq!(point.longitude, "13.4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

impl From<LatLon> for Coordinates {
    fn from(location: LatLon) -> Self {
        Self::new(location.latitude().to_string(), location.longitude().to_string())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

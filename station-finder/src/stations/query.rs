//! Nearby search query.

use std::ops::RangeInclusive;

/// Valid latitudes in degrees.
const LATITUDE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitudes in degrees.
const LONGITUDE: RangeInclusive<f64> = -180.0..=180.0;

/// Largest search radius in metres.
pub const MAX_RADIUS_METRES: f64 = 50_000.0;

/// Error returned when nearby search arguments are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuery {
    #[error("Ungültiger Breitengrad. Muss zwischen -90 und 90 liegen.")]
    InvalidLatitude,

    #[error("Ungültiger Längengrad. Muss zwischen -180 und 180 liegen.")]
    InvalidLongitude,

    #[error("Ungültiger Radius. Muss zwischen 1 und 50000 Metern liegen.")]
    InvalidRadius,
}

/// A validated radius search around a coordinate.
///
/// Latitude is within [-90, 90], longitude within [-180, 180] and the
/// radius (metres) within (0, 50000]. NaN is never valid.
///
/// # Examples
///
/// ```
/// use station_finder::stations::{InvalidQuery, NearbyQuery};
///
/// let query = NearbyQuery::new(52.5, 13.4, 1000.0).unwrap();
/// assert_eq!(query.radius(), 1000.0);
///
/// // Latitude is checked first
/// assert_eq!(
///     NearbyQuery::new(91.0, 200.0, 0.0),
///     Err(InvalidQuery::InvalidLatitude)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    lat: f64,
    lng: f64,
    radius: f64,
}

impl NearbyQuery {
    /// Validate the arguments, failing on the first one out of range.
    ///
    /// NaN is rejected for every argument. A plain `<`/`>` comparison would
    /// let it through, since every comparison with NaN is false.
    pub fn new(lat: f64, lng: f64, radius: f64) -> Result<Self, InvalidQuery> {
        if !LATITUDE.contains(&lat) {
            return Err(InvalidQuery::InvalidLatitude);
        }

        if !LONGITUDE.contains(&lng) {
            return Err(InvalidQuery::InvalidLongitude);
        }

        if !(radius > 0.0 && radius <= MAX_RADIUS_METRES) {
            return Err(InvalidQuery::InvalidRadius);
        }

        Ok(Self { lat, lng, radius })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Query string parameters in `lat`, `lng`, `radius` order.
    ///
    /// Negative zero is sent as `0`.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("lat", (self.lat + 0.0).to_string()),
            ("lng", (self.lng + 0.0).to_string()),
            ("radius", self.radius.to_string()),
        ]
    }
}

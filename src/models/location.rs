//! Named geographic points.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A named point to visit, given by latitude and longitude in degrees.
///
/// Deserializes from the `city,lat,lon` columns of a cities table.
///
/// # Examples
///
/// ```
/// use u_tour::models::Location;
///
/// let chicago = Location::new("Chicago", 41.8781, -87.6298);
/// let aurora = Location::new("Aurora", 41.7606, -88.3201);
/// let d = chicago.distance_to(&aurora);
/// assert!(d > 35.0 && d < 37.0);
/// assert_eq!(chicago.distance_to(&chicago), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "city")]
    name: String,
    lat: f64,
    lon: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Location label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another location in miles (haversine).
    pub fn distance_to(&self, other: &Location) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_MILES * a.sqrt().min(1.0).asin()
    }
}

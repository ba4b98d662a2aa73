use crate::error::UtmError;
use geo_types::Point;

/// Trait for types that can provide WGS84 longitude/latitude in degrees.
///
/// Implemented for `(f64, f64)` tuples in `(lon, lat)` order and `geo_types::Point<f64>`
/// (x = longitude, y = latitude). This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Wraps a longitude into `[-180, 180)`.
pub fn normalize_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped >= 180.0 { -180.0 } else { wrapped }
}

/// Clamps a latitude into `[-90, 90]`.
pub fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}

/// Rejects NaN and infinite inputs, then normalizes the pair to `(lat, lon)` on the globe.
pub fn normalize_lat_lon(lat: f64, lon: f64) -> Result<(f64, f64), UtmError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(UtmError::InvalidCoordinate(format!(
            "latitude {} / longitude {} must be finite",
            lat, lon
        )));
    }
    Ok((clamp_latitude(lat), normalize_longitude(lon)))
}

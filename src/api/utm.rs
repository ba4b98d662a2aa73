use crate::core::globe::{Globe, canonical_zone_name};
use crate::core::projection::{forward, inverse, round_meters};
use crate::error::UtmError;
use crate::util::coord::{Coordinate, normalize_lat_lon};
use geo_types::Point;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::trace;

static UTM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)^(?P<zone>\d{1,2}[C-HJ-NP-X]|[ABYZ]) ?(?P<easting>-?\d+(?:\.\d+)?)(?:mE)? (?P<northing>-?\d+(?:\.\d+)?)(?:mN)?$",
    )
    .expect("UTM pattern is valid")
});

/// A position on the UTM grid: zone designator plus planar meters within it.
///
/// Equality is exact over the zone name and both coordinates.
///
/// # Example
///
/// ```
/// use utm_mgrs::{Globe, UtmCoordinate};
///
/// # fn main() -> Result<(), utm_mgrs::UtmError> {
/// let globe = Globe::reference();
/// let utm = UtmCoordinate::from_lat_lon(0.0, 3.0, globe)?;
/// assert_eq!(utm.to_string(), "31N 500000mE 0mN");
///
/// let parsed: UtmCoordinate = "31N 500000mE 0mN".parse()?;
/// assert_eq!(parsed, utm);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtmCoordinate {
    /// Zone designator, looked up against a [`Globe`]
    pub zone: String,
    /// Meters east, with the central meridian at 500,000
    pub easting: f64,
    /// Meters north of the equator (negative in the southern hemisphere)
    pub northing: f64,
}

impl UtmCoordinate {
    pub fn new(zone: impl Into<String>, easting: f64, northing: f64) -> Self {
        Self {
            zone: zone.into(),
            easting,
            northing,
        }
    }

    /// Parses `"<zone> <easting>[mE] <northing>[mN]"`, e.g. `"31N 166021mE 0mN"`.
    ///
    /// The zone is uppercased and one-digit zone numbers are zero-padded.
    pub fn parse(input: &str) -> Result<Self, UtmError> {
        let trimmed = input.trim();
        let invalid = || {
            trace!(input, "rejected UTM string");
            UtmError::InvalidUtm(input.to_string())
        };

        let caps = UTM_PATTERN.captures(trimmed).ok_or_else(invalid)?;

        let easting: f64 = caps["easting"].parse().map_err(|_| invalid())?;
        let northing: f64 = caps["northing"].parse().map_err(|_| invalid())?;

        Ok(Self::new(
            canonical_zone_name(&caps["zone"]),
            easting,
            northing,
        ))
    }

    /// Projects a lat/lon point in decimal degrees onto the zone that contains it.
    ///
    /// Both coordinates are rounded to the nearest meter.
    pub fn from_lat_lon(lat: f64, lon: f64, globe: &Globe) -> Result<Self, UtmError> {
        let (lat, lon) = normalize_lat_lon(lat, lon)?;
        let zone = globe.zone_for_point(lat, lon)?;

        let k0_radius = globe.scale_factor() * globe.earth_radius();
        let (easting, northing) = forward(lat, lon, zone.meridian, k0_radius);

        Ok(Self::new(
            zone.name.clone(),
            round_meters(easting),
            round_meters(northing),
        ))
    }

    /// Create a UtmCoordinate from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use utm_mgrs::{Globe, UtmCoordinate};
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), utm_mgrs::UtmError> {
    /// let globe = Globe::reference();
    /// // From tuple
    /// let a = UtmCoordinate::from_wgs84(&(-0.1276, 51.5072), globe)?;
    /// // From Point
    /// let b = UtmCoordinate::from_wgs84(&Point::new(-0.1276, 51.5072), globe)?;
    /// assert_eq!(a, b);
    /// assert_eq!(a.zone, "30U");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, globe: &Globe) -> Result<Self, UtmError> {
        Self::from_lat_lon(coord.y(), coord.x(), globe)
    }

    /// Converts back to `(lat, lon)` in decimal degrees.
    ///
    /// Fails with [`UtmError::ZoneNotFound`] if the zone is not part of `globe`.
    pub fn to_lat_lon(&self, globe: &Globe) -> Result<(f64, f64), UtmError> {
        let zone = globe.zone(&self.zone)?;
        let k0_radius = globe.scale_factor() * globe.earth_radius();

        Ok(inverse(self.easting, self.northing, zone.meridian, k0_radius))
    }

    /// Converts back to a WGS84 point (x = longitude, y = latitude).
    pub fn to_wgs84_point(&self, globe: &Globe) -> Result<Point<f64>, UtmError> {
        let (lat, lon) = self.to_lat_lon(globe)?;
        Ok(Point::new(lon, lat))
    }
}

impl std::fmt::Display for UtmCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}mE {}mN", self.zone, self.easting, self.northing)
    }
}

impl FromStr for UtmCoordinate {
    type Err = UtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        let coord = UtmCoordinate::new("31N", 0.0, 0.0);
        assert_eq!(coord.to_string(), "31N 0mE 0mN");

        let coord = UtmCoordinate::new("33M", 412345.5, -1234567.0);
        assert_eq!(coord.to_string(), "33M 412345.5mE -1234567mN");
    }

    #[test]
    fn test_parsing() -> Result<(), UtmError> {
        let expected = UtmCoordinate::new("31N", 166021.0, 0.0);
        assert_eq!(UtmCoordinate::parse("31N 166021mE 0mN")?, expected);
        assert_eq!(UtmCoordinate::parse("31n166021 0")?, expected);
        assert_eq!(UtmCoordinate::parse("  31N 166021mE 0mN ")?, expected);

        let fractional = UtmCoordinate::parse("4q 500000.25mE 2300000.5mN")?;
        assert_eq!(fractional, UtmCoordinate::new("04Q", 500000.25, 2300000.5));
        Ok(())
    }

    #[test]
    fn test_parse_failures() {
        for input in [
            "",
            "31N",
            "31I 166021mE 0mN",
            "31O 166021mE 0mN",
            "N 166021mE 0mN",
            "31N 166021mE",
            "31N abc 0",
            "131N 166021mE 0mN",
        ] {
            assert!(
                matches!(UtmCoordinate::parse(input), Err(UtmError::InvalidUtm(_))),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_format_parse_round_trip() -> Result<(), UtmError> {
        for coord in [
            UtmCoordinate::new("31N", 166022.0, 0.0),
            UtmCoordinate::new("33M", 412345.5, -1234567.0),
            UtmCoordinate::new("Z", 500000.0, 9000000.0),
            UtmCoordinate::new("60X", 499999.125, 8700000.0),
        ] {
            let parsed: UtmCoordinate = coord.to_string().parse()?;
            assert_eq!(parsed, coord);
        }
        Ok(())
    }

    #[test]
    fn test_lat_lon_to_utm() -> Result<(), UtmError> {
        let globe = Globe::reference();

        let coord = UtmCoordinate::from_lat_lon(0.0, 0.0, globe)?;
        assert_eq!(coord, UtmCoordinate::new("31N", 166022.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_lat_lon_to_utm_at_meridian() -> Result<(), UtmError> {
        let globe = Globe::reference();

        let coord = UtmCoordinate::from_lat_lon(0.0, 3.0, globe)?;
        assert_eq!(coord, UtmCoordinate::new("31N", 500000.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_southern_hemisphere_is_negative() -> Result<(), UtmError> {
        let coord = UtmCoordinate::from_lat_lon(-33.9, 18.4, Globe::reference())?;
        assert_eq!(coord.zone, "34H");
        assert!(coord.northing < 0.0);
        assert!(coord.easting < 500000.0);
        Ok(())
    }

    #[test]
    fn test_utm_to_lat_lon_at_meridian() -> Result<(), UtmError> {
        let coord = UtmCoordinate::new("31N", 500000.0, 0.0);
        let (lat, lon) = coord.to_lat_lon(Globe::reference())?;

        assert_eq!(lat, 0.0);
        assert_eq!(lon, 3.0);
        Ok(())
    }

    #[test]
    fn test_round_trip_through_lat_lon() -> Result<(), UtmError> {
        let globe = Globe::reference();

        for &(lat, lon) in &[
            (51.5072, -0.1276),
            (-33.9, 18.4),
            (60.0, 5.0),
            (78.2, 15.6),
            (-79.5, 170.2),
            (0.0, 179.9),
        ] {
            let utm = UtmCoordinate::from_lat_lon(lat, lon, globe)?;
            let (lat2, lon2) = utm.to_lat_lon(globe)?;
            assert!((lat - lat2).abs() < 1e-4, "{} vs {}", lat, lat2);
            assert!((lon - lon2).abs() < 1e-4, "{} vs {}", lon, lon2);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_zone() {
        let coord = UtmCoordinate::new("32X", 500000.0, 8000000.0);
        assert_eq!(
            coord.to_lat_lon(Globe::reference()),
            Err(UtmError::ZoneNotFound("32X".to_string()))
        );
    }

    #[test]
    fn test_alternate_globe() -> Result<(), UtmError> {
        let globe = Globe::builder().scale_factor(1.0).build()?;

        let standard = UtmCoordinate::from_lat_lon(45.0, 9.0, Globe::reference())?;
        let unscaled = UtmCoordinate::from_lat_lon(45.0, 9.0, &globe)?;

        assert_eq!(standard.zone, unscaled.zone);
        assert!(unscaled.northing > standard.northing);
        Ok(())
    }

    #[test]
    fn test_wgs84_point() -> Result<(), UtmError> {
        let globe = Globe::reference();
        let utm = UtmCoordinate::from_wgs84(&Point::new(10.0, 45.0), globe)?;
        let point = utm.to_wgs84_point(globe)?;

        assert!((point.x() - 10.0).abs() < 1e-4);
        assert!((point.y() - 45.0).abs() < 1e-4);
        Ok(())
    }

    #[test]
    fn test_json() -> Result<(), UtmError> {
        let coord = UtmCoordinate::new("32T", 578683.0, 5007859.0);
        let json = serde_json::to_string(&coord)?;
        let back: UtmCoordinate = serde_json::from_str(&json)?;
        assert_eq!(back, coord);
        Ok(())
    }
}

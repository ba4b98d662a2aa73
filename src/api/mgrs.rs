use crate::api::utm::UtmCoordinate;
use crate::core::constants::{GRID_SQUARE_SIZE, MAX_PRECISION, MIN_PRECISION};
use crate::core::globe::{Globe, canonical_zone_name};
use crate::core::grid_square;
use crate::core::trig::deg_to_rad;
use crate::error::UtmError;
use crate::util::coord::Coordinate;
use geo_types::Point;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::trace;

/// Slack below a band's southern edge when resolving which 2,000 km row cycle a
/// northing belongs to. Covers the growth of northing away from the central meridian.
const BAND_NORTHING_SLACK: f64 = 100_000.0;

// Groups:
//   zone (optional): one or two digits and a band letter, then an optional space
//   grid: two letters, then an optional space
//   east/north: one block of digits to split in half, or two blocks separated by a space
static MGRS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)^(?:(?P<zone>\d{1,2}[C-HJ-NP-X]) ?)?(?P<grid>[A-Z]{2}) ?(?P<east>[0-9]+)(?: (?P<north>[0-9]+))?$",
    )
    .expect("MGRS pattern is valid")
});

/// A Military Grid Reference System coordinate.
///
/// `easting` and `northing` are always stored in whole meters inside the 100 km grid
/// square (0..=99,999). `precision` only controls how many digits are written when
/// formatting: 1 means 10 km, 5 means 1 m. Equality ignores precision.
///
/// # Example
///
/// ```
/// use utm_mgrs::MgrsCoordinate;
///
/// # fn main() -> Result<(), utm_mgrs::UtmError> {
/// let coord = MgrsCoordinate::parse("aa 1212")?;
/// assert_eq!(coord.grid_square(), "AA");
/// assert_eq!(coord.easting(), 12000);
/// assert_eq!(coord.precision(), 2);
/// assert_eq!(coord.to_string(), "AA 12 12");
///
/// assert!(MgrsCoordinate::parse("af121").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MgrsRecord")]
pub struct MgrsCoordinate {
    utm_zone: String,
    grid_square: String,
    easting: u32,
    northing: u32,
    precision: u8,
}

/// Serialized form of [`MgrsCoordinate`], checked by [`MgrsCoordinate::new`] on the way in.
#[derive(Deserialize)]
struct MgrsRecord {
    #[serde(default)]
    utm_zone: String,
    grid_square: String,
    easting: u32,
    northing: u32,
    precision: u8,
}

impl TryFrom<MgrsRecord> for MgrsCoordinate {
    type Error = UtmError;

    fn try_from(record: MgrsRecord) -> Result<Self, Self::Error> {
        let zone = Some(record.utm_zone.as_str()).filter(|z| !z.is_empty());
        let coord = Self::new(&record.grid_square, record.easting, record.northing, zone)?;
        Ok(coord.with_precision(record.precision))
    }
}

impl PartialEq for MgrsCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.utm_zone == other.utm_zone
            && self.grid_square == other.grid_square
            && self.easting == other.easting
            && self.northing == other.northing
    }
}

impl Eq for MgrsCoordinate {}

impl MgrsCoordinate {
    /// Creates a coordinate from a grid square and meters within it.
    ///
    /// The values are full meters, so `("AF", 12000, 12000)` is written `"AF 12 12"`.
    /// Precision is inferred from the trailing zeros.
    pub fn new(
        grid_square: &str,
        easting: u32,
        northing: u32,
        utm_zone: Option<&str>,
    ) -> Result<Self, UtmError> {
        if grid_square.len() != 2 || !grid_square.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(UtmError::InvalidGridSquare(grid_square.to_string()));
        }
        if easting >= GRID_SQUARE_SIZE || northing >= GRID_SQUARE_SIZE {
            return Err(UtmError::InvalidCoordinate(format!(
                "grid square offsets must be below {} m, got {} / {}",
                GRID_SQUARE_SIZE, easting, northing
            )));
        }

        Ok(Self {
            utm_zone: utm_zone.map(canonical_zone_name).unwrap_or_default(),
            grid_square: grid_square.to_ascii_uppercase(),
            easting,
            northing,
            precision: infer_precision(easting, northing),
        })
    }

    /// Zone designator prefix, empty when none was given.
    pub fn utm_zone(&self) -> &str {
        &self.utm_zone
    }

    pub fn grid_square(&self) -> &str {
        &self.grid_square
    }

    /// Meters east of the grid square's western edge.
    pub fn easting(&self) -> u32 {
        self.easting
    }

    /// Meters north of the grid square's southern edge.
    pub fn northing(&self) -> u32 {
        self.northing
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Sets the display precision, clamped to 1..=5.
    pub fn set_precision(&mut self, precision: u8) {
        self.precision = precision.clamp(MIN_PRECISION, MAX_PRECISION);
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.set_precision(precision);
        self
    }

    /// Parses an MGRS string such as `"48T CQ 18749 17382"`, `"QK 4527 0745"` or
    /// `"01PFF1234512345"`.
    ///
    /// Matching is case-insensitive and spaces between parts are optional. A single
    /// digit block is split in half and must have an even length; two blocks must be
    /// the same length. Digits beyond the fifth per axis are dropped. Shorter values are
    /// padded with trailing zeros, so `"12"` means 12,000 m with precision 2.
    pub fn parse(input: &str) -> Result<Self, UtmError> {
        let trimmed = input.trim();
        let invalid = |reason: &str| {
            trace!(input, reason, "rejected MGRS string");
            UtmError::InvalidMgrs(format!("{} ({})", input, reason))
        };

        let caps = MGRS_PATTERN
            .captures(trimmed)
            .ok_or_else(|| invalid("does not match the MGRS grammar"))?;

        let (east, north) = match caps.name("north") {
            Some(north) => {
                let east = &caps["east"];
                if east.len() != north.as_str().len() {
                    return Err(invalid("easting and northing differ in length"));
                }
                (east, north.as_str())
            }
            None => {
                let digits = &caps["east"];
                if digits.len() < 2 || digits.len() % 2 != 0 {
                    return Err(invalid("odd number of coordinate digits"));
                }
                digits.split_at(digits.len() / 2)
            }
        };

        let precision = east.len().min(MAX_PRECISION as usize);
        let easting = pad_digits(&east[..precision]).ok_or_else(|| invalid("bad easting"))?;
        let northing = pad_digits(&north[..precision]).ok_or_else(|| invalid("bad northing"))?;

        let utm_zone = caps
            .name("zone")
            .map(|m| canonical_zone_name(m.as_str()))
            .unwrap_or_default();

        Ok(Self {
            utm_zone,
            grid_square: caps["grid"].to_ascii_uppercase(),
            easting,
            northing,
            precision: precision as u8,
        })
    }

    /// Encodes a UTM coordinate as MGRS, flooring fractional meters.
    ///
    /// Polar caps have no 100 km lettering in this model and fail with
    /// [`UtmError::UnsupportedZone`].
    pub fn from_utm(utm: &UtmCoordinate, globe: &Globe) -> Result<Self, UtmError> {
        let zone = globe.zone(&utm.zone)?;
        let number = zone
            .number()
            .ok_or_else(|| UtmError::UnsupportedZone(zone.name.clone()))?;

        let square = grid_square::encode(number, utm.easting, utm.northing)?;

        Ok(Self {
            utm_zone: zone.name.clone(),
            grid_square: square.letters,
            easting: square.easting,
            northing: square.northing,
            precision: infer_precision(square.easting, square.northing),
        })
    }

    /// Expands back to a full UTM coordinate. Requires a zone prefix.
    pub fn to_utm(&self, globe: &Globe) -> Result<UtmCoordinate, UtmError> {
        if self.utm_zone.is_empty() {
            return Err(UtmError::MissingZone);
        }
        let zone = globe.zone(&self.utm_zone)?;
        let number = zone
            .number()
            .ok_or_else(|| UtmError::UnsupportedZone(zone.name.clone()))?;

        let k0_radius = globe.scale_factor() * globe.earth_radius();
        let min_northing = k0_radius * deg_to_rad(zone.bottom) - BAND_NORTHING_SLACK;

        let (easting, northing) = grid_square::decode(
            number,
            &self.grid_square,
            self.easting,
            self.northing,
            min_northing,
        )?;

        Ok(UtmCoordinate::new(zone.name.clone(), easting, northing))
    }

    /// Converts a lat/lon point in decimal degrees to MGRS.
    pub fn from_lat_lon(lat: f64, lon: f64, globe: &Globe) -> Result<Self, UtmError> {
        let utm = UtmCoordinate::from_lat_lon(lat, lon, globe)?;
        Self::from_utm(&utm, globe)
    }

    /// Create an MgrsCoordinate from WGS84 (lon/lat) coordinates
    pub fn from_wgs84(coord: &impl Coordinate, globe: &Globe) -> Result<Self, UtmError> {
        Self::from_lat_lon(coord.y(), coord.x(), globe)
    }

    /// Converts to `(lat, lon)` in decimal degrees, at the southwest corner of the
    /// 1 m cell.
    pub fn to_lat_lon(&self, globe: &Globe) -> Result<(f64, f64), UtmError> {
        self.to_utm(globe)?.to_lat_lon(globe)
    }

    pub fn to_wgs84_point(&self, globe: &Globe) -> Result<Point<f64>, UtmError> {
        self.to_utm(globe)?.to_wgs84_point(globe)
    }
}

/// Infers a display precision from the trailing zeros of a pair of grid offsets.
///
/// Walks from the 1 m digit (5) toward the 10 km digit (1) and returns the first place
/// where either value has a non-zero digit at or right of it. Never returns less than 1.
///
/// ```
/// use utm_mgrs::infer_precision;
///
/// assert_eq!(infer_precision(12340, 12300), 4);
/// assert_eq!(infer_precision(0, 0), 1);
/// assert_eq!(infer_precision(1, 1), 5);
/// ```
pub fn infer_precision(easting: u32, northing: u32) -> u8 {
    for place in (MIN_PRECISION + 1..=MAX_PRECISION).rev() {
        let step = 10_u32.pow(u32::from(MAX_PRECISION + 1 - place));
        if easting % step != 0 || northing % step != 0 {
            return place;
        }
    }
    MIN_PRECISION
}

/// Right-pads a digit string with zeros to five digits and parses it.
fn pad_digits(digits: &str) -> Option<u32> {
    format!("{:0<5}", digits).parse().ok()
}

impl std::fmt::Display for MgrsCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = self.precision.clamp(MIN_PRECISION, MAX_PRECISION) as usize;
        let east = format!("{:05}", self.easting);
        let north = format!("{:05}", self.northing);

        if !self.utm_zone.is_empty() {
            write!(f, "{} ", self.utm_zone)?;
        }
        write!(
            f,
            "{} {} {}",
            self.grid_square,
            &east[..precision],
            &north[..precision]
        )
    }
}

impl FromStr for MgrsCoordinate {
    type Err = UtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

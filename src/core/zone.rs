use crate::core::constants::{
    BAND_HEIGHT, BAND_LETTERS, HIGH_LAT_BAND_START, MAX_BAND_LAT, MIN_BAND_LAT, ZONE_WIDTH,
};
use crate::error::UtmError;
use crate::util::coord::normalize_lat_lon;
use geo_types::{Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// One cell of the UTM grid.
///
/// Bounds are in decimal degrees and half-open: a point is inside when
/// `bottom <= lat < top` and `left <= lon < right`. The north polar caps also
/// contain the pole itself.
///
/// The central meridian is stored rather than derived because the irregular
/// zones (31V, 32V and the band X cells) do not project about their midpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Designator, e.g. `"31N"`, or a single letter for the polar caps
    pub name: String,
    /// Western edge, degrees longitude
    pub left: f64,
    /// Eastern edge, degrees longitude
    pub right: f64,
    /// Northern edge, degrees latitude
    pub top: f64,
    /// Southern edge, degrees latitude
    pub bottom: f64,
    /// Central meridian used for projection, degrees longitude
    pub meridian: f64,
}

impl Zone {
    pub(crate) fn regular(name: String, bottom: f64, left: f64) -> Self {
        Self::irregular(
            name,
            bottom,
            left,
            ZONE_WIDTH,
            BAND_HEIGHT,
            left + ZONE_WIDTH / 2.0,
        )
    }

    pub(crate) fn irregular(
        name: String,
        bottom: f64,
        left: f64,
        width: f64,
        height: f64,
        meridian: f64,
    ) -> Self {
        Self {
            name,
            left,
            right: left + width,
            top: bottom + height,
            bottom,
            meridian,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// True for the standard 6 x 8 degree cells.
    pub fn is_regular(&self) -> bool {
        self.width() == ZONE_WIDTH && self.height() == BAND_HEIGHT
    }

    /// True for the four caps beyond 80S and 84N.
    pub fn is_polar(&self) -> bool {
        self.number().is_none()
    }

    /// The longitude zone number (1-60), or `None` for a polar cap.
    pub fn number(&self) -> Option<u8> {
        let digits = self.name.get(..self.name.len().saturating_sub(1))?;
        digits.parse().ok()
    }

    /// The latitude band letter.
    pub fn band(&self) -> char {
        self.name.chars().last().unwrap_or('?')
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let in_lat = (lat >= self.bottom && lat < self.top) || (self.top >= 90.0 && lat == 90.0);
        let in_lon = lon >= self.left && lon < self.right;

        in_lat && in_lon
    }

    /// The zone's bounds as a lon/lat rectangle.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.left, y: self.bottom },
            coord! { x: self.right, y: self.top },
        )
    }

    /// The zone's bounds as a closed lon/lat polygon, suitable for GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} => Lat: {} to {} / Lon: {} to {} / {}",
            self.name,
            self.bottom,
            self.top,
            self.left,
            self.right,
            if self.is_regular() {
                "Regular"
            } else {
                "Irregular"
            }
        )
    }
}

/// Latitude band letter for a latitude in degrees.
///
/// Letters run C..X in 8 degree steps from 80S, skipping I and O. South of 80S the
/// result is always `'A'`, at or north of 84N always `'Z'`. Band X spans 72N to 84N.
pub fn band_letter(lat: f64) -> char {
    if lat < MIN_BAND_LAT {
        return 'A';
    }
    if lat >= MAX_BAND_LAT {
        return 'Z';
    }
    if lat >= HIGH_LAT_BAND_START {
        return 'X';
    }

    let mut index = ((lat - MIN_BAND_LAT) / BAND_HEIGHT).floor() as usize;
    // The shifted quotient can round up onto the next edge; the edge itself is exact.
    if index > 0 && MIN_BAND_LAT + index as f64 * BAND_HEIGHT > lat {
        index -= 1;
    }
    BAND_LETTERS[index.min(BAND_LETTERS.len() - 1)] as char
}

/// Longitude zone number for a normalized longitude within a band, applying the
/// Norway (band V) and Svalbard (band X) exceptions.
fn zone_number(band: char, lon: f64) -> i32 {
    let mut column = (lon / ZONE_WIDTH).floor() as i32;
    if f64::from(column) * ZONE_WIDTH > lon {
        column -= 1;
    }
    let regular = column + 31;

    match band {
        'V' if (0.0..3.0).contains(&lon) => 31,
        'V' if (3.0..12.0).contains(&lon) => 32,
        'X' if (0.0..9.0).contains(&lon) => 31,
        'X' if (9.0..21.0).contains(&lon) => 33,
        'X' if (21.0..33.0).contains(&lon) => 35,
        'X' if (33.0..42.0).contains(&lon) => 37,
        _ => regular,
    }
}

/// Gets the zone designator (name) for a lat/lon point in decimal degrees.
///
/// Longitude is wrapped into `[-180, 180)` and latitude clamped to `[-90, 90]` first.
/// Polar caps split on the sign of the longitude: `A`/`B` in the south, `Y`/`Z` in
/// the north.
///
/// # Example
/// ```
/// use utm_mgrs::designator_for_point;
///
/// # fn main() -> Result<(), utm_mgrs::UtmError> {
/// assert_eq!(designator_for_point(0.0, 3.0)?, "31N");
/// assert_eq!(designator_for_point(60.0, 5.0)?, "32V");
/// assert_eq!(designator_for_point(-85.0, -20.0)?, "A");
/// # Ok(())
/// # }
/// ```
pub fn designator_for_point(lat: f64, lon: f64) -> Result<String, UtmError> {
    let (lat, lon) = normalize_lat_lon(lat, lon)?;
    let band = band_letter(lat);

    let name = match band {
        'A' if lon < 0.0 => "A".to_string(),
        'A' => "B".to_string(),
        'Z' if lon < 0.0 => "Y".to_string(),
        'Z' => "Z".to_string(),
        _ => format!("{:02}{}", zone_number(band, lon), band),
    };

    Ok(name)
}

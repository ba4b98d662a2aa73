use crate::core::constants::{
    BAND_HEIGHT, EARTH_RADIUS, HIGH_LAT_BAND_START, MAX_BAND_LAT, MIN_BAND_LAT, SCALE_FACTOR,
    ZONE_COUNT, ZONE_WIDTH,
};
use crate::core::zone::{Zone, band_letter, designator_for_point};
use crate::error::UtmError;
use crate::util::coord::normalize_lat_lon;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, error};

static REFERENCE: LazyLock<Globe> = LazyLock::new(Globe::new);

/// Physical constants of the projection model.
///
/// # Example
///
/// ```
/// use utm_mgrs::{Globe, GlobeConfig};
///
/// # fn main() -> Result<(), utm_mgrs::UtmError> {
/// let config = GlobeConfig::from_json(r#"{"scale_factor":0.9996,"earth_radius":6371000.0}"#)?;
/// let globe = Globe::from_config(&config)?;
/// assert_eq!(globe.earth_radius(), 6371000.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobeConfig {
    /// Mercator scale factor on the central meridian
    pub scale_factor: f64,
    /// Sphere radius in meters
    pub earth_radius: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            scale_factor: SCALE_FACTOR,
            earth_radius: EARTH_RADIUS,
        }
    }
}

impl GlobeConfig {
    /// Reads a config from a JSON object with `scale_factor` and `earth_radius`.
    pub fn from_json(s: &str) -> Result<Self, UtmError> {
        let config: GlobeConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), UtmError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(UtmError::InvalidParameter(format!(
                "scale factor must be positive, got {}",
                self.scale_factor
            )));
        }
        if !self.earth_radius.is_finite() || self.earth_radius <= 0.0 {
            return Err(UtmError::InvalidParameter(format!(
                "earth radius must be positive, got {}",
                self.earth_radius
            )));
        }
        Ok(())
    }
}

/// The registry of every UTM zone plus the constants used to project into them.
///
/// A `Globe` is immutable once built and can be shared freely between threads. Most
/// callers use [`Globe::reference`]; build another one with [`Globe::builder`] to try a
/// different scale factor or radius.
///
/// # Example
///
/// ```
/// use utm_mgrs::Globe;
///
/// # fn main() -> Result<(), utm_mgrs::UtmError> {
/// let globe = Globe::reference();
/// let zone = globe.zone_for_point(60.0, 5.0)?;
/// assert_eq!(zone.name, "32V");
/// assert_eq!(zone.left, 3.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Globe {
    zones: Vec<Zone>,
    index: HashMap<String, usize>,
    config: GlobeConfig,
}

impl Default for Globe {
    fn default() -> Self {
        Self::new()
    }
}

impl Globe {
    /// Builds a globe with the standard UTM constants.
    pub fn new() -> Self {
        Self::with_config(GlobeConfig::default())
    }

    /// The shared default globe, built on first use.
    pub fn reference() -> &'static Globe {
        &REFERENCE
    }

    pub fn builder() -> GlobeBuilder {
        GlobeBuilder::new()
    }

    pub fn from_config(config: &GlobeConfig) -> Result<Self, UtmError> {
        config.validate()?;
        Ok(Self::with_config(*config))
    }

    fn with_config(config: GlobeConfig) -> Self {
        let zones = generate_zones();
        let index = zones
            .iter()
            .enumerate()
            .map(|(i, zone)| (zone.name.clone(), i))
            .collect();

        debug!(
            zones = zones.len(),
            scale_factor = config.scale_factor,
            earth_radius = config.earth_radius,
            "built UTM globe"
        );

        Self {
            zones,
            index,
            config,
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.config.scale_factor
    }

    pub fn earth_radius(&self) -> f64 {
        self.config.earth_radius
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    /// Number of zones in the registry.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterates zones in generation order: south caps, bands C..W, band X, north caps.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// Looks up a zone by designator.
    ///
    /// The lookup is case-insensitive and accepts one-digit zone numbers (`"4Q"`).
    /// Designators the model does not define, including 32X, 34X and 36X, fail with
    /// [`UtmError::ZoneNotFound`].
    pub fn zone(&self, name: &str) -> Result<&Zone, UtmError> {
        let key = canonical_zone_name(name);
        self.index
            .get(&key)
            .map(|&i| &self.zones[i])
            .ok_or_else(|| UtmError::ZoneNotFound(name.to_string()))
    }

    /// Gets the zone designator for a lat/lon point in decimal degrees.
    pub fn designator_for_point(&self, lat: f64, lon: f64) -> Result<String, UtmError> {
        designator_for_point(lat, lon)
    }

    /// Gets the zone that a lat/lon point lies within.
    ///
    /// The resolved zone is checked against the point; a mismatch is a defect in the
    /// zone model and is reported as [`UtmError::ZoneMismatch`].
    pub fn zone_for_point(&self, lat: f64, lon: f64) -> Result<&Zone, UtmError> {
        let (lat, lon) = normalize_lat_lon(lat, lon)?;
        let designator = designator_for_point(lat, lon)?;
        let zone = self.zone(&designator)?;

        if !zone.contains(lat, lon) {
            error!(
                zone = %zone.name,
                lat,
                lon,
                bottom = zone.bottom,
                top = zone.top,
                left = zone.left,
                right = zone.right,
                "resolved zone does not contain the point"
            );
            return Err(UtmError::ZoneMismatch {
                zone: zone.name.clone(),
                lat,
                lon,
            });
        }

        Ok(zone)
    }
}

/// Uppercases a designator and zero-pads a one-digit zone number.
pub(crate) fn canonical_zone_name(name: &str) -> String {
    let upper = name.trim().to_ascii_uppercase();
    let digits = upper.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 1 {
        format!("0{}", upper)
    } else {
        upper
    }
}

fn generate_zones() -> Vec<Zone> {
    let mut zones = Vec::with_capacity(1201);

    // South pole caps
    zones.push(Zone::irregular("A".into(), -90.0, -180.0, 180.0, 10.0, 0.0));
    zones.push(Zone::irregular("B".into(), -90.0, 0.0, 180.0, 10.0, 0.0));

    let mut lat = MIN_BAND_LAT;
    while lat < HIGH_LAT_BAND_START {
        let band = band_letter(lat);
        for x in 0..ZONE_COUNT {
            let lon = (x as f64 - 30.0) * ZONE_WIDTH;
            zones.push(regular_band_zone(format!("{:02}{}", x + 1, band), lat, lon));
        }
        lat += BAND_HEIGHT;
    }

    let band = band_letter(HIGH_LAT_BAND_START);
    for x in 0..ZONE_COUNT {
        let lon = (x as f64 - 30.0) * ZONE_WIDTH;
        if let Some(zone) = high_latitude_zone(format!("{:02}{}", x + 1, band), lon) {
            zones.push(zone);
        }
    }

    // North pole caps
    let cap_height = 90.0 - MAX_BAND_LAT;
    zones.push(Zone::irregular("Y".into(), MAX_BAND_LAT, -180.0, 180.0, cap_height, 0.0));
    zones.push(Zone::irregular("Z".into(), MAX_BAND_LAT, 0.0, 180.0, cap_height, 0.0));

    zones
}

fn regular_band_zone(name: String, lat: f64, lon: f64) -> Zone {
    match name.as_str() {
        "31V" => Zone::irregular(name, lat, lon, 3.0, BAND_HEIGHT, 3.0),
        "32V" => Zone::irregular(name, lat, lon - 3.0, 9.0, BAND_HEIGHT, 9.0),
        _ => Zone::regular(name, lat, lon),
    }
}

fn high_latitude_zone(name: String, lon: f64) -> Option<Zone> {
    let height = MAX_BAND_LAT - HIGH_LAT_BAND_START;
    let lat = HIGH_LAT_BAND_START;

    let zone = match name.as_str() {
        "32X" | "34X" | "36X" => return None,
        "31X" => Zone::irregular(name, lat, 0.0, 9.0, height, 3.0),
        "33X" => Zone::irregular(name, lat, 9.0, 12.0, height, 15.0),
        "35X" => Zone::irregular(name, lat, 21.0, 12.0, height, 27.0),
        "37X" => Zone::irregular(name, lat, 33.0, 9.0, height, 39.0),
        _ => Zone::irregular(name, lat, lon, ZONE_WIDTH, height, lon + ZONE_WIDTH / 2.0),
    };

    Some(zone)
}

/// Builder for a [`Globe`] with non-default constants.
///
/// # Example
///
/// ```
/// use utm_mgrs::Globe;
///
/// # fn main() -> Result<(), utm_mgrs::UtmError> {
/// let globe = Globe::builder()
///     .scale_factor(1.0)
///     .earth_radius(6_371_000.0)
///     .build()?;
/// assert_eq!(globe.scale_factor(), 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct GlobeBuilder {
    scale_factor: Option<f64>,
    earth_radius: Option<f64>,
}

impl GlobeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    pub fn earth_radius(mut self, earth_radius: f64) -> Self {
        self.earth_radius = Some(earth_radius);
        self
    }

    pub fn build(self) -> Result<Globe, UtmError> {
        let defaults = GlobeConfig::default();
        let config = GlobeConfig {
            scale_factor: self.scale_factor.unwrap_or(defaults.scale_factor),
            earth_radius: self.earth_radius.unwrap_or(defaults.earth_radius),
        };
        Globe::from_config(&config)
    }
}

/// Error type for utm-mgrs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum UtmError {
    /// The string is not a valid UTM coordinate.
    InvalidUtm(String),
    /// The string is not a valid MGRS coordinate.
    InvalidMgrs(String),
    /// The 100 km grid square designator is malformed or unknown for its zone.
    InvalidGridSquare(String),
    /// A latitude/longitude or meter value is not usable (NaN, infinite, out of range).
    InvalidCoordinate(String),
    /// A globe configuration value is invalid (e.g., a negative radius).
    InvalidParameter(String),
    /// No zone with this designator exists in the globe.
    ZoneNotFound(String),
    /// An MGRS coordinate without a zone prefix cannot be placed on the globe.
    MissingZone,
    /// The zone has no MGRS 100 km lettering (polar caps).
    UnsupportedZone(String),
    /// The position falls outside the 100 km columns of its zone.
    OutOfGrid(String),
    /// A resolved zone does not contain the point that produced it.
    ZoneMismatch { zone: String, lat: f64, lon: f64 },
    /// Configuration could not be deserialized.
    ConfigError(String),
}

impl UtmError {
    /// True for malformed caller input that can be corrected and retried.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            UtmError::InvalidUtm(_)
                | UtmError::InvalidMgrs(_)
                | UtmError::InvalidGridSquare(_)
                | UtmError::InvalidCoordinate(_)
                | UtmError::InvalidParameter(_)
                | UtmError::ConfigError(_)
        )
    }

    /// True when the request refers to something the zone model does not define.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            UtmError::ZoneNotFound(_)
                | UtmError::MissingZone
                | UtmError::UnsupportedZone(_)
                | UtmError::OutOfGrid(_)
        )
    }

    /// True for defects in the zone model itself.
    pub fn is_internal(&self) -> bool {
        matches!(self, UtmError::ZoneMismatch { .. })
    }
}

impl std::fmt::Display for UtmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UtmError::InvalidUtm(s) => write!(f, "Invalid UTM coordinate: {}", s),
            UtmError::InvalidMgrs(s) => write!(f, "Invalid MGRS coordinate: {}", s),
            UtmError::InvalidGridSquare(s) => write!(f, "Invalid grid square: {}", s),
            UtmError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            UtmError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            UtmError::ZoneNotFound(name) => write!(f, "Zone not found: {}", name),
            UtmError::MissingZone => write!(f, "MGRS coordinate has no UTM zone"),
            UtmError::UnsupportedZone(name) => {
                write!(f, "Zone {} has no MGRS grid squares", name)
            }
            UtmError::OutOfGrid(msg) => write!(f, "Out of grid: {}", msg),
            UtmError::ZoneMismatch { zone, lat, lon } => write!(
                f,
                "Zone {} does not contain the point ({}, {}) it was resolved from",
                zone, lat, lon
            ),
            UtmError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for UtmError {}

impl From<serde_json::Error> for UtmError {
    fn from(e: serde_json::Error) -> Self {
        UtmError::ConfigError(e.to_string())
    }
}

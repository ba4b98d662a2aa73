/// Mercator scale factor applied on the central meridian
pub const SCALE_FACTOR: f64 = 0.9996;

/// Equatorial earth radius in meters, used as the sphere radius
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Easting assigned to every zone's central meridian
pub const FALSE_EASTING: f64 = 500_000.0;

/// Latitude band letters from 80S to 84N, 8 degrees each (X is 12)
pub const BAND_LETTERS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";

/// Southern edge of band C
pub const MIN_BAND_LAT: f64 = -80.0;

/// Northern edge of band X
pub const MAX_BAND_LAT: f64 = 84.0;

/// Southern edge of the 12 degree high-latitude band X
pub const HIGH_LAT_BAND_START: f64 = 72.0;

/// Number of longitude zones around the globe
pub const ZONE_COUNT: u8 = 60;

/// Width of a regular zone in degrees of longitude
pub const ZONE_WIDTH: f64 = 6.0;

/// Height of a regular band in degrees of latitude
pub const BAND_HEIGHT: f64 = 8.0;

/// Side of an MGRS grid square in meters
pub const GRID_SQUARE_SIZE: u32 = 100_000;

/// Northing span after which MGRS row letters repeat
pub const ROW_CYCLE: f64 = 2_000_000.0;

/// Finest MGRS precision (1 m)
pub const MAX_PRECISION: u8 = 5;

/// Coarsest MGRS precision (10 km)
pub const MIN_PRECISION: u8 = 1;

pub mod constants;
pub mod globe;
pub mod grid_square;
pub mod projection;
pub mod trig;
pub mod zone;

pub use constants::{EARTH_RADIUS, FALSE_EASTING, MAX_PRECISION, MIN_PRECISION, SCALE_FACTOR};
pub use globe::{Globe, GlobeBuilder, GlobeConfig};
pub use trig::{atanh, deg_to_rad, rad_to_deg};
pub use zone::{Zone, band_letter, designator_for_point};

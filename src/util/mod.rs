pub mod coord;

pub use coord::{Coordinate, clamp_latitude, normalize_lat_lon, normalize_longitude};

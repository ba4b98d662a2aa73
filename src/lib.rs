//! # utm-mgrs
//!
//! Conversions between geodetic latitude/longitude, the Universal Transverse Mercator
//! grid and Military Grid Reference System strings, on a spherical earth.
//!
//! Accuracy is meter-level near the central meridian of each zone; this is not a full
//! WGS84 ellipsoidal implementation.
//!
//! There are currently three main entry points.
//!
//! ### 1. `Globe` - The Zone Registry
//!
//! ```
//! use utm_mgrs::Globe;
//!
//! # fn main() -> Result<(), utm_mgrs::UtmError> {
//! let globe = Globe::reference();
//! let zone = globe.zone_for_point(78.0, 20.0)?;
//! assert_eq!(zone.name, "33X");
//! assert_eq!(zone.width(), 12.0);
//!
//! // Svalbard leaves gaps in band X
//! assert!(globe.zone("34X").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `UtmCoordinate` - Planar Coordinates
//!
//! ```
//! use utm_mgrs::{Globe, UtmCoordinate};
//!
//! # fn main() -> Result<(), utm_mgrs::UtmError> {
//! let globe = Globe::reference();
//! let utm = UtmCoordinate::from_lat_lon(0.0, 0.0, globe)?;
//! assert_eq!(utm.to_string(), "31N 166022mE 0mN");
//!
//! let (lat, lon) = utm.to_lat_lon(globe)?;
//! assert!(lat.abs() < 1e-4 && lon.abs() < 1e-4);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `MgrsCoordinate` - Grid References
//!
//! ```
//! use utm_mgrs::{Globe, MgrsCoordinate};
//!
//! # fn main() -> Result<(), utm_mgrs::UtmError> {
//! let coord: MgrsCoordinate = "48T CQ 18749 17382".parse()?;
//! assert_eq!(coord.precision(), 5);
//!
//! let reduced = coord.clone().with_precision(3);
//! assert_eq!(reduced.to_string(), "48T CQ 187 173");
//!
//! let here = MgrsCoordinate::from_lat_lon(45.0, 10.0, Globe::reference())?;
//! println!("{}", here);
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod error;
pub mod util;

pub use api::{MgrsCoordinate, ToGridCoordinates, UtmCoordinate, infer_precision};
pub use crate::core::{
    EARTH_RADIUS, FALSE_EASTING, Globe, GlobeBuilder, GlobeConfig, MAX_PRECISION, MIN_PRECISION,
    SCALE_FACTOR, Zone, atanh, band_letter, deg_to_rad, designator_for_point, rad_to_deg,
};
pub use error::UtmError;
pub use util::Coordinate;

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), UtmError> {
        let globe = Globe::reference();

        let utm = UtmCoordinate::from_lat_lon(51.5072, -0.1276, globe)?;
        assert_eq!(utm.zone, "30U");

        let mgrs = MgrsCoordinate::from_utm(&utm, globe)?;
        let text = mgrs.to_string();
        assert!(text.starts_with("30U "));

        let parsed: MgrsCoordinate = text.parse()?;
        assert_eq!(parsed, mgrs);
        assert_eq!(parsed.to_utm(globe)?, utm);

        let (lat, lon) = parsed.to_lat_lon(globe)?;
        assert!((lat - 51.5072).abs() < 1e-4);
        assert!((lon + 0.1276).abs() < 1e-4);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), UtmError> {
        let globe = Globe::reference();
        let pt = point! { x: 18.4, y: -33.9 };

        let utm = UtmCoordinate::from_wgs84(&pt, globe)?;
        let back = utm.to_wgs84_point(globe)?;
        assert!((back.x() - pt.x()).abs() < 1e-4);
        assert!((back.y() - pt.y()).abs() < 1e-4);

        let zone = globe.zone(&utm.zone)?;
        let rect = zone.to_rect();
        assert!(rect.min().x <= pt.x() && pt.x() < rect.max().x);
        assert!(rect.min().y <= pt.y() && pt.y() < rect.max().y);
        Ok(())
    }

    #[test]
    fn test_utm_text_round_trip() -> Result<(), UtmError> {
        let globe = Globe::reference();
        let utm = UtmCoordinate::from_lat_lon(-12.5, 130.8, globe)?;

        let parsed: UtmCoordinate = utm.to_string().parse()?;
        assert_eq!(parsed, utm);
        Ok(())
    }

    #[test]
    fn test_parse_failure_is_not_zero() {
        let failed = MgrsCoordinate::parse("af121");
        assert!(matches!(&failed, Err(e) if e.is_parse_error()));

        let zero = MgrsCoordinate::parse("AF 0 0");
        assert!(zero.is_ok());
    }

    #[test]
    fn test_reference_and_custom_globes_agree_on_zones() -> Result<(), UtmError> {
        let custom = Globe::builder().earth_radius(6_371_000.0).build()?;
        let reference = Globe::reference();

        for (lat, lon) in [(0.0, 0.0), (60.0, 5.0), (78.0, 20.0), (-85.0, -10.0)] {
            assert_eq!(
                custom.zone_for_point(lat, lon)?.name,
                reference.zone_for_point(lat, lon)?.name
            );
        }
        Ok(())
    }
}

use crate::api::mgrs::MgrsCoordinate;
use crate::api::utm::UtmCoordinate;
use crate::core::globe::Globe;
use crate::error::UtmError;
use crate::util::coord::Coordinate;
use rayon::prelude::*;

/// Trait for converting collections of WGS84 (lon/lat) points in parallel.
///
/// The globe is only read, so one instance is shared by every worker.
///
/// # Example
///
/// ```
/// use utm_mgrs::{Globe, ToGridCoordinates};
///
/// # fn main() -> Result<(), utm_mgrs::UtmError> {
/// let points = vec![(3.0, 0.0), (-0.1276, 51.5072)];
/// let utm = points.to_utm(Globe::reference())?;
/// assert_eq!(utm[0].to_string(), "31N 500000mE 0mN");
/// # Ok(())
/// # }
/// ```
pub trait ToGridCoordinates {
    /// Converts every point to UTM. Fails on the first point that cannot be converted.
    fn to_utm(&self, globe: &Globe) -> Result<Vec<UtmCoordinate>, UtmError>;

    /// Converts every point to MGRS. Fails on the first point that cannot be converted.
    fn to_mgrs(&self, globe: &Globe) -> Result<Vec<MgrsCoordinate>, UtmError>;
}

impl<C: Coordinate + Sync> ToGridCoordinates for [C] {
    fn to_utm(&self, globe: &Globe) -> Result<Vec<UtmCoordinate>, UtmError> {
        self.par_iter()
            .map(|c| UtmCoordinate::from_wgs84(c, globe))
            .collect()
    }

    fn to_mgrs(&self, globe: &Globe) -> Result<Vec<MgrsCoordinate>, UtmError> {
        self.par_iter()
            .map(|c| MgrsCoordinate::from_wgs84(c, globe))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_batch_matches_single() -> Result<(), UtmError> {
        let globe = Globe::reference();
        let points: Vec<(f64, f64)> = (0..200)
            .map(|i| (-179.0 + i as f64 * 1.79, -70.0 + i as f64 * 0.7))
            .collect();

        let batch = points.to_utm(globe)?;
        assert_eq!(batch.len(), points.len());

        for (point, utm) in points.iter().zip(&batch) {
            assert_eq!(&UtmCoordinate::from_wgs84(point, globe)?, utm);
        }
        Ok(())
    }

    #[test]
    fn test_batch_mgrs_with_points() -> Result<(), UtmError> {
        let globe = Globe::reference();
        let points = vec![Point::new(10.0, 45.0), Point::new(-74.0, 40.7)];

        let mgrs = points.to_mgrs(globe)?;
        assert_eq!(mgrs[0].utm_zone(), "32T");
        assert_eq!(mgrs[1].utm_zone(), "18T");
        Ok(())
    }

    #[test]
    fn test_batch_reports_failure() {
        let globe = Globe::reference();
        let points = vec![(10.0, 45.0), (10.0, -85.0)];

        assert!(points.to_utm(globe).is_ok());
        assert!(matches!(
            points.to_mgrs(globe),
            Err(UtmError::UnsupportedZone(_))
        ));
        assert!([(f64::NAN, 0.0)].to_utm(globe).is_err());
    }
}

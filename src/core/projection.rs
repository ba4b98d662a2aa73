//! Spherical transverse Mercator between lat/lon degrees and zone-relative meters.
//!
//! This is not the full ellipsoidal UTM: results agree with WGS84 to within a few
//! hundred meters near the central meridian and drift further toward zone edges.

use crate::core::constants::FALSE_EASTING;
use crate::core::trig::{atanh, deg_to_rad, rad_to_deg};

/// Projects a lat/lon point onto the plane of a zone with the given central meridian.
///
/// `k0_radius` is the product of the scale factor and the earth radius. Returns unrounded
/// `(easting, northing)` in meters. No false northing is applied, so points in the
/// southern hemisphere have negative northings.
pub fn forward(lat: f64, lon: f64, meridian: f64, k0_radius: f64) -> (f64, f64) {
    let lat_rad = deg_to_rad(lat);
    let lon_rad = deg_to_rad(lon);
    let mer_rad = deg_to_rad(meridian);

    let sin_lat = lat_rad.sin();
    let cos_lon = (lon_rad - mer_rad).cos();
    let sin_lon = (lon_rad - mer_rad).sin();

    let t = atanh(sin_lat).sinh();
    let xi_prime = (t / cos_lon).atan();
    let eta_prime = atanh(sin_lon / (1.0 + t * t).sqrt());

    let easting = FALSE_EASTING + k0_radius * eta_prime;
    let northing = k0_radius * xi_prime;

    (easting, northing)
}

/// Inverse of [`forward`]: zone-relative meters back to `(lat, lon)` in degrees.
pub fn inverse(easting: f64, northing: f64, meridian: f64, k0_radius: f64) -> (f64, f64) {
    let xi = northing / k0_radius;
    let eta = (easting - FALSE_EASTING) / k0_radius;

    let chi = (xi.sin() / eta.cosh()).asin();
    let lat = rad_to_deg(chi);
    let lon = meridian + rad_to_deg(eta.sinh().atan2(xi.cos()));

    (lat, lon)
}

/// Rounds to the nearest meter, folding `-0.0` into `0.0`.
pub fn round_meters(value: f64) -> f64 {
    value.round() + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{EARTH_RADIUS, SCALE_FACTOR};

    const K0R: f64 = SCALE_FACTOR * EARTH_RADIUS;

    #[test]
    fn test_forward_on_meridian() {
        let (e, n) = forward(0.0, 3.0, 3.0, K0R);
        assert_eq!(e, 500_000.0);
        assert_eq!(n, 0.0);
    }

    #[test]
    fn test_forward_west_of_meridian() {
        let (e, n) = forward(0.0, 0.0, 3.0, K0R);
        assert!((e - 166_022.47).abs() < 0.01, "easting {}", e);
        assert_eq!(round_meters(e), 166_022.0);
        assert_eq!(round_meters(n), 0.0);
    }

    #[test]
    fn test_meridian_northing_is_arc_length() {
        let (_, n) = forward(45.0, 9.0, 9.0, K0R);
        let expected = K0R * std::f64::consts::FRAC_PI_4;
        assert!((n - expected).abs() < 1e-6);

        let (_, s) = forward(-45.0, 9.0, 9.0, K0R);
        assert!((s + expected).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_on_meridian() {
        let (lat, lon) = inverse(500_000.0, 0.0, 3.0, K0R);
        assert_eq!(lat, 0.0);
        assert_eq!(lon, 3.0);
    }

    #[test]
    fn test_forward_inverse_consistency() {
        for &(lat, lon, meridian) in &[
            (45.0, 10.0, 9.0),
            (-33.9, 18.4, 21.0),
            (60.0, 3.5, 9.0),
            (78.0, 20.0, 15.0),
            (-79.0, -177.0, -177.0),
        ] {
            let (e, n) = forward(lat, lon, meridian, K0R);
            let (lat2, lon2) = inverse(e, n, meridian, K0R);
            assert!((lat - lat2).abs() < 1e-9, "lat {} vs {}", lat, lat2);
            assert!((lon - lon2).abs() < 1e-9, "lon {} vs {}", lon, lon2);
        }
    }

    #[test]
    fn test_round_meters_has_no_negative_zero() {
        let rounded = round_meters(-0.3);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
        assert_eq!(round_meters(1.5), 2.0);
    }
}

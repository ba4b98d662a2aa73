//! Angle conversion and the inverse hyperbolic tangent used by the projection.

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Inverse hyperbolic tangent.
///
/// Inside the open interval the quotient form is used; at `|x| >= 1` the logarithms are
/// taken separately so that `atanh(1)` evaluates to `+inf` rather than `NaN`.
pub fn atanh(x: f64) -> f64 {
    let num = 1.0 + x;
    let denom = 1.0 - x;

    if x.abs() < 1.0 {
        (num / denom).ln() / 2.0
    } else {
        (num.ln() - denom.ln()) / 2.0
    }
}

//! Fixed absolute tolerances for geodetic-scale values.
//!
//! Not ULP aware; only meaningful for degrees and metres at Earth scale.

/// About a millimetre of arc at the surface.
pub const DEGREES_TOLERANCE: f64 = 1e-8;

/// A tenth of a millimetre.
pub const METERS_TOLERANCE: f64 = 1e-4;

/// Whether two angles in degrees are closer than [`DEGREES_TOLERANCE`].
///
/// No wraparound: 179.999999° and -179.999999° compare as different.
pub fn approximately_equals_degrees(d1: f64, d2: f64) -> bool {
    (d1 - d2).abs() < DEGREES_TOLERANCE
}

/// Whether two distances in metres are closer than [`METERS_TOLERANCE`].
pub fn approximately_equals_meters(m1: f64, m2: f64) -> bool {
    (m1 - m2).abs() < METERS_TOLERANCE
}

use crate::types::{Ecef, GeoCoordinate};

/// WGS84 semi-major axis in metres.
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 semi-minor axis in metres.
pub const WGS84_B: f64 = 6_356_752.314_245;
/// WGS84 flattening: f = 1 - b/a
pub const WGS84_F: f64 = 1.0 - WGS84_B / WGS84_A;
/// WGS84 first eccentricity squared: e² = 1 - b²/a²
pub const WGS84_E2: f64 = 1.0 - (WGS84_B * WGS84_B) / (WGS84_A * WGS84_A);

/// Points closer than this to the polar axis take the pole branch.
const POLAR_AXIS_EPSILON: f64 = 1e-9;

/// Radius of curvature in the prime vertical.
fn prime_vertical_radius(sin_lat: f64) -> f64 {
    WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt()
}

/// Convert a geodetic coordinate to ECEF.
pub fn geodetic_to_ecef(coord: &GeoCoordinate) -> Ecef {
    let lat = coord.latitude.to_radians();
    let lon = coord.longitude.to_radians();

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    let n = prime_vertical_radius(sin_lat);
    let alt = coord.altitude;

    let x = (n + alt) * cos_lat * cos_lon;
    let y = (n + alt) * cos_lat * sin_lon;
    let z = (n * (1.0 - WGS84_E2) + alt) * sin_lat;

    Ecef::new(x, y, z)
}

/// Convert ECEF back to geodetic using Bowring's closed form.
///
/// Points on (or within 1 nm of) the polar axis have no defined longitude;
/// they map to longitude 0, latitude ±90 (z = 0 counts as north) and
/// altitude `|z| - b`.
pub fn ecef_to_geodetic(ecef: &Ecef) -> GeoCoordinate {
    let Ecef { x, y, z } = *ecef;
    let p = (x * x + y * y).sqrt();

    if p < POLAR_AXIS_EPSILON {
        let latitude = if z >= 0.0 { 90.0 } else { -90.0 };
        return GeoCoordinate::new(latitude, 0.0, z.abs() - WGS84_B);
    }

    let a2_minus_b2 = WGS84_A * WGS84_A - WGS84_B * WGS84_B;
    let q = (z * WGS84_A).atan2(p * WGS84_B);
    let (sin_q, cos_q) = q.sin_cos();

    let lat = (z + (a2_minus_b2 / WGS84_B) * sin_q * sin_q * sin_q)
        .atan2(p - (a2_minus_b2 / WGS84_A) * cos_q * cos_q * cos_q);
    let lon = y.atan2(x);

    // p·cos + z·sin stays well conditioned near the poles, unlike p / cos.
    let (sin_lat, cos_lat) = lat.sin_cos();
    let n = prime_vertical_radius(sin_lat);
    let alt = p * cos_lat + z * sin_lat - WGS84_A * WGS84_A / n;

    GeoCoordinate::new(lat.to_degrees(), lon.to_degrees(), alt)
}

use glam::DVec3;

use crate::math::{Matrix4, TransformStack};
use crate::types::GeoCoordinate;

use super::ecef::geodetic_to_ecef;

/// Rotation taking ECEF directions into the East-North-Up frame at
/// (`lat_deg`, `lon_deg`).
///
/// Rows are the ENU basis vectors expressed in ECEF:
///   East  = (-sin_lon,          cos_lon,         0      )
///   North = (-sin_lat*cos_lon, -sin_lat*sin_lon, cos_lat)
///   Up    = ( cos_lat*cos_lon,  cos_lat*sin_lon, sin_lat)
///
/// Well defined at the poles.
pub fn enu_rotation(lat_deg: f64, lon_deg: f64) -> Matrix4 {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();

    Matrix4::from_basis_rows(
        DVec3::new(-sin_lon, cos_lon, 0.0),
        DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat),
        DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
    )
}

/// Transform mapping ECEF points into the ENU frame centred on `origin`:
/// `p_enu = R · (p_ecef - origin_ecef)`.
pub fn build_ecef_to_enu(origin: &GeoCoordinate) -> Matrix4 {
    let origin_ecef = geodetic_to_ecef(origin).to_dvec3();

    let mut stack = TransformStack::new();
    stack
        .apply(enu_rotation(origin.latitude, origin.longitude))
        .translate(-origin_ecef);
    stack.into_current()
}

/// Transform mapping ENU points at `origin` back into ECEF.
///
/// This is the general inverse of [`build_ecef_to_enu`]; the matrix is
/// rigid so the inverse always exists.
pub fn build_enu_to_ecef(origin: &GeoCoordinate) -> Matrix4 {
    build_ecef_to_enu(origin).inverse()
}

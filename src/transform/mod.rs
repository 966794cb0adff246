pub mod batch;
pub mod coordinates;
pub mod ecef;
pub mod enu;
pub mod frame;
pub mod tolerance;

use glam::DVec3;

use crate::types::{Ecef, GeoCoordinate};

pub use batch::{geodetic_to_local_points, local_points_to_geodetic};
pub use ecef::{ecef_to_geodetic, geodetic_to_ecef};
pub use enu::{build_ecef_to_enu, build_enu_to_ecef};
pub use frame::LocalFrame;
pub use tolerance::{approximately_equals_degrees, approximately_equals_meters};

use coordinates::{enu_to_eun, eun_to_enu};

/// Convert an engine-space point (East-Up-North, Y up) relative to `origin`
/// into a geodetic coordinate.
pub fn local_point_to_geodetic(local: DVec3, origin: &GeoCoordinate) -> GeoCoordinate {
    let enu = eun_to_enu(local);
    let ecef = build_enu_to_ecef(origin).transform_point3(enu);
    ecef_to_geodetic(&Ecef::from(ecef))
}

/// Place a geodetic coordinate in the engine space (East-Up-North) of
/// `origin`.
///
/// Assumes the point lies within a few kilometres of the origin; farther
/// out the tangent plane drifts from the ellipsoid surface.
pub fn geodetic_to_local_point(coord: &GeoCoordinate, origin: &GeoCoordinate) -> DVec3 {
    let ecef = geodetic_to_ecef(coord).to_dvec3();
    let enu = build_ecef_to_enu(origin).transform_point3(ecef);
    enu_to_eun(enu)
}

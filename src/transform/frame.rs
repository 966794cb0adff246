use glam::DVec3;
use tracing::debug;

use crate::math::Matrix4;
use crate::types::{Ecef, GeoCoordinate};

use super::coordinates::{enu_to_eun, eun_to_enu};
use super::ecef::{ecef_to_geodetic, geodetic_to_ecef};
use super::enu::build_ecef_to_enu;

/// An origin together with its prebuilt ECEF↔ENU transform pair.
///
/// Owned by whoever tracks the origin. [`LocalFrame::set_origin`] rebuilds
/// the pair only when the new origin differs beyond the geodetic tolerances.
#[derive(Debug, Clone)]
pub struct LocalFrame {
    origin: GeoCoordinate,
    ecef_to_enu: Matrix4,
    enu_to_ecef: Matrix4,
}

impl LocalFrame {
    pub fn new(origin: GeoCoordinate) -> Self {
        let ecef_to_enu = build_ecef_to_enu(&origin);
        Self {
            origin,
            ecef_to_enu,
            enu_to_ecef: ecef_to_enu.inverse(),
        }
    }

    pub fn origin(&self) -> GeoCoordinate {
        self.origin
    }

    pub fn ecef_to_enu(&self) -> Matrix4 {
        self.ecef_to_enu
    }

    pub fn enu_to_ecef(&self) -> Matrix4 {
        self.enu_to_ecef
    }

    /// Move the frame to `origin`. Returns `true` if the transforms were
    /// rebuilt.
    pub fn set_origin(&mut self, origin: GeoCoordinate) -> bool {
        if self.origin.approx_eq(&origin) {
            return false;
        }
        debug!(from = %self.origin, to = %origin, "Rebuilding local frame");
        *self = Self::new(origin);
        true
    }

    /// Engine-space (East-Up-North) point to geodetic.
    pub fn to_geodetic(&self, local: DVec3) -> GeoCoordinate {
        let ecef = self.enu_to_ecef.transform_point3(eun_to_enu(local));
        ecef_to_geodetic(&Ecef::from(ecef))
    }

    /// Geodetic coordinate to engine space (East-Up-North).
    pub fn to_local(&self, coord: &GeoCoordinate) -> DVec3 {
        let ecef = geodetic_to_ecef(coord).to_dvec3();
        enu_to_eun(self.ecef_to_enu.transform_point3(ecef))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{geodetic_to_local_point, local_point_to_geodetic};

    #[test]
    fn matches_facade() {
        let origin = GeoCoordinate::new(-33.8568, 151.2153, 50.0);
        let frame = LocalFrame::new(origin);

        let p = DVec3::new(120.0, -3.5, 800.0);
        assert_eq!(frame.to_geodetic(p), local_point_to_geodetic(p, &origin));

        let c = GeoCoordinate::new(-33.85, 151.21, 12.0);
        assert_eq!(frame.to_local(&c), geodetic_to_local_point(&c, &origin));
    }

    #[test]
    fn small_origin_change_keeps_transforms() {
        let origin = GeoCoordinate::new(37.422, -122.084, 10.0);
        let mut frame = LocalFrame::new(origin);
        let before = frame.ecef_to_enu();

        let nudged = GeoCoordinate::new(37.422 + 1e-9, -122.084, 10.00001);
        assert!(!frame.set_origin(nudged));
        assert_eq!(frame.ecef_to_enu(), before);
        assert_eq!(frame.origin(), origin);
    }

    #[test]
    fn real_origin_change_rebuilds() {
        let mut frame = LocalFrame::new(GeoCoordinate::new(37.422, -122.084, 10.0));
        let moved = GeoCoordinate::new(37.5, -122.084, 10.0);
        assert!(frame.set_origin(moved));
        assert_eq!(frame.origin(), moved);
        assert_eq!(frame.ecef_to_enu(), build_ecef_to_enu(&moved));
        assert!(frame.to_local(&moved).length() < 1e-6);
    }

    #[test]
    fn antimeridian_crossing_rebuilds() {
        let mut frame = LocalFrame::new(GeoCoordinate::new(0.0, 179.999_999_999, 0.0));
        assert!(frame.set_origin(GeoCoordinate::new(0.0, -179.999_999_999, 0.0)));
    }

    #[test]
    fn stored_pair_is_inverse() {
        let frame = LocalFrame::new(GeoCoordinate::new(64.1466, -21.9426, 100.0));
        let product = frame.enu_to_ecef() * frame.ecef_to_enu();
        assert!(product.abs_diff_eq(&Matrix4::IDENTITY, 1e-6));
    }
}

use glam::DVec3;
use rayon::prelude::*;

use crate::types::GeoCoordinate;

use super::frame::LocalFrame;

/// Convert many engine-space points relative to one origin.
///
/// The transform pair is built once; conversion runs on the rayon pool and
/// preserves input order.
pub fn local_points_to_geodetic(points: &[DVec3], origin: &GeoCoordinate) -> Vec<GeoCoordinate> {
    let frame = LocalFrame::new(*origin);
    points.par_iter().map(|&p| frame.to_geodetic(p)).collect()
}

/// Place many geodetic coordinates in the engine space of one origin.
pub fn geodetic_to_local_points(coords: &[GeoCoordinate], origin: &GeoCoordinate) -> Vec<DVec3> {
    let frame = LocalFrame::new(*origin);
    coords.par_iter().map(|c| frame.to_local(c)).collect()
}

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{GeoFrameError, Result};
use crate::transform::tolerance::{approximately_equals_degrees, approximately_equals_meters};

/// A WGS84 geodetic position.
///
/// Latitude and longitude are in degrees, altitude in metres above the
/// ellipsoid. Ranges are not enforced on construction; call
/// [`GeoCoordinate::validate`] when strict input checking is needed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Check for finite components, latitude in `[-90, 90]` and longitude
    /// in `(-180, 180]`.
    pub fn validate(&self) -> Result<()> {
        if !(self.latitude.is_finite() && self.longitude.is_finite() && self.altitude.is_finite())
        {
            return Err(GeoFrameError::InvalidCoordinate(format!(
                "non-finite component in {self}"
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoFrameError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if self.longitude <= -180.0 || self.longitude > 180.0 {
            return Err(GeoFrameError::InvalidCoordinate(format!(
                "longitude {} outside (-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Tolerance comparison used for dirty tracking.
    ///
    /// Longitudes either side of the antimeridian compare as different.
    pub fn approx_eq(&self, other: &GeoCoordinate) -> bool {
        approximately_equals_degrees(self.latitude, other.latitude)
            && approximately_equals_degrees(self.longitude, other.longitude)
            && approximately_equals_meters(self.altitude, other.altitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.9}, {:.9}, {:.4} m",
            self.latitude, self.longitude, self.altitude
        )
    }
}

/// Earth-Centered Earth-Fixed position in metres.
///
/// Z points to the north pole, X to the intersection of the equator and the
/// prime meridian.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ecef {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Ecef {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Ecef> for DVec3 {
    fn from(e: Ecef) -> Self {
        e.to_dvec3()
    }
}

impl fmt::Display for Ecef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

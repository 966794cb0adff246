pub mod config;
pub mod error;
pub mod math;
pub mod runner;
pub mod transform;
pub mod types;

pub use config::{Operation, OutputFormat, RunConfig};
pub use error::{GeoFrameError, Result};
pub use math::{Matrix4, TransformStack};
pub use runner::Runner;
pub use transform::{
    approximately_equals_degrees, approximately_equals_meters, build_ecef_to_enu,
    build_enu_to_ecef, ecef_to_geodetic, geodetic_to_ecef, geodetic_to_local_point,
    local_point_to_geodetic, LocalFrame,
};
pub use types::{Ecef, GeoCoordinate};

pub mod geo;

pub use geo::{Ecef, GeoCoordinate};

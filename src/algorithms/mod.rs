//! Geodesy used by the proximity gate and the map view

pub mod distance;
pub mod projection;

pub use distance::estimate_distance;
pub use projection::{MapProjector, MapPin};

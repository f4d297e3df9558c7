//! Geodetic constants and admission policy defaults

/// Mean Earth radius used by the haversine distance (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance a report is always allowed from, regardless of GPS accuracy (m)
pub const BASE_MAX_DISTANCE_M: f64 = 50.0;

/// How many accuracy radii are added on top of the base distance
pub const ACCURACY_MULTIPLIER: f64 = 2.0;

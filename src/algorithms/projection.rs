//! Local tangent-plane projection for placing venues on the map view

use crate::core::GeoPoint;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Approximate meters per degree of latitude (valid for small areas)
const METERS_PER_DEG_LAT: f64 = 111_132.0;
/// Meters per degree of longitude at the equator
const METERS_PER_DEG_LON_EQUATOR: f64 = 111_320.0;

/// A venue marker positioned inside the map viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPin {
    /// Horizontal offset from the left edge (0-100 %)
    pub left_pct: f64,
    /// Vertical offset from the top edge (0-100 %)
    pub top_pct: f64,
    /// Whether the venue fell outside the viewport and was pinned to its edge
    pub clamped: bool,
}

/// Projects coordinates around the user onto a square viewport
#[derive(Debug, Clone)]
pub struct MapProjector {
    center: GeoPoint,
    /// Distance from the center to the viewport edge (m)
    half_extent_m: f64,
}

impl MapProjector {
    pub fn new(center: GeoPoint, half_extent_m: f64) -> Self {
        Self { center, half_extent_m }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// East/north offset of `point` from the center in meters
    pub fn to_local(&self, point: GeoPoint) -> Vector2<f64> {
        let meters_per_deg_lon = METERS_PER_DEG_LON_EQUATOR * self.center.lat.to_radians().cos();
        let east = (point.lng - self.center.lng) * meters_per_deg_lon;
        let north = (point.lat - self.center.lat) * METERS_PER_DEG_LAT;
        Vector2::new(east, north)
    }

    /// Inverse of [`MapProjector::to_local`]
    pub fn to_geodetic(&self, local: &Vector2<f64>) -> GeoPoint {
        let meters_per_deg_lon = METERS_PER_DEG_LON_EQUATOR * self.center.lat.to_radians().cos();
        GeoPoint::new(
            self.center.lat + local.y / METERS_PER_DEG_LAT,
            self.center.lng + local.x / meters_per_deg_lon,
        )
    }

    /// Viewport position of `point`; the center sits at (50 %, 50 %) and north is up
    pub fn pin(&self, point: GeoPoint) -> MapPin {
        let local = self.to_local(point);
        let scaled = if self.half_extent_m > 0.0 {
            local / self.half_extent_m
        } else {
            Vector2::zeros()
        };

        let clamped = scaled.x.abs() > 1.0 || scaled.y.abs() > 1.0;
        let unit = Vector2::new(scaled.x.clamp(-1.0, 1.0), scaled.y.clamp(-1.0, 1.0));

        MapPin {
            left_pct: 50.0 + unit.x * 50.0,
            top_pct: 50.0 - unit.y * 50.0,
            clamped,
        }
    }
}

//! Uncertainty-aware admission gate for crowdedness reports
//!
//! A report may only be filed when the user is plausibly near the venue. The
//! allowed distance grows with the accuracy radius of the position estimate:
//!
//! ```text
//! max_allowed = base_max_distance + accuracy * accuracy_multiplier
//! ```
//!
//! Distance and threshold are rounded to whole meters and the decision is
//! taken on those rounded values, so a result never shows e.g.
//! "60m, max 60m" while being rejected.

use crate::algorithms::estimate_distance;
use crate::core::{EstimatedPosition, GeoPoint, ValidationResult, ACCURACY_MULTIPLIER, BASE_MAX_DISTANCE_M};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Constants of the admission rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdmissionPolicy {
    /// Distance always allowed (m)
    pub base_max_distance_m: f64,
    /// Accuracy radii added on top of the base distance
    pub accuracy_multiplier: f64,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self {
            base_max_distance_m: BASE_MAX_DISTANCE_M,
            accuracy_multiplier: ACCURACY_MULTIPLIER,
        }
    }
}

impl AdmissionPolicy {
    /// Unrounded admission threshold for a given accuracy radius
    pub fn max_allowed_distance(&self, accuracy_m: f64) -> f64 {
        self.base_max_distance_m + accuracy_m * self.accuracy_multiplier
    }
}

/// Applies an [`AdmissionPolicy`] to position estimates
#[derive(Debug, Clone, Default)]
pub struct LocationValidator {
    policy: AdmissionPolicy,
}

impl LocationValidator {
    pub fn new(policy: AdmissionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    /// Decide whether a report about `target` may be sent from `position`.
    ///
    /// Never fails. Accuracy is taken as given, negative values included;
    /// readings from a [`crate::sensing::LocationSource`] are already checked.
    /// A non-finite distance or threshold is always rejected.
    pub fn validate(&self, position: &EstimatedPosition, target: GeoPoint) -> ValidationResult {
        let distance = estimate_distance(position.point, target);
        let max_allowed = self.policy.max_allowed_distance(position.accuracy_m);

        let distance_m = round_meters(distance);
        let max_allowed_distance_m = round_meters(max_allowed);
        let is_valid = distance.is_finite() && max_allowed.is_finite() && distance_m <= max_allowed_distance_m;

        debug!(
            distance,
            max_allowed,
            accuracy_m = position.accuracy_m,
            is_valid,
            "location admission decision"
        );

        let reason = if is_valid {
            None
        } else {
            Some(rejection_reason(distance_m, max_allowed_distance_m))
        };

        ValidationResult {
            is_valid,
            distance_m,
            max_allowed_distance_m,
            reason,
        }
    }
}

/// Gate with the default policy (50 m + 2 x accuracy)
pub fn validate_location_for_report(position: &EstimatedPosition, target: GeoPoint) -> ValidationResult {
    LocationValidator::default().validate(position, target)
}

/// Round half up to whole meters
fn round_meters(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn rejection_reason(distance_m: i64, max_allowed_distance_m: i64) -> String {
    format!(
        "현재 위치에서 너무 멀리 떨어져 있습니다. ({}m 떨어짐, 최대 {}m 허용)",
        distance_m, max_allowed_distance_m
    )
}

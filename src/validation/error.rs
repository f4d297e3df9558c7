//! Errors of the reporting flow
//!
//! Rejection by the proximity gate is a normal outcome of
//! [`crate::validation::LocationValidator::validate`]. It only becomes
//! [`ReportError::LocationRejected`] when a caller tries to submit anyway.

use crate::sensing::SensingError;
use thiserror::Error;

/// Errors raised by report submission, points and reward operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("venue not found: {venue_id}")]
    VenueNotFound { venue_id: String },

    /// The proximity gate refused the report
    #[error("{reason}")]
    LocationRejected {
        distance_m: i64,
        max_allowed_m: i64,
        reason: String,
    },

    #[error("location check failed: {0}")]
    Sensing(#[from] SensingError),

    #[error("insufficient points: {required}P required, {available}P available")]
    InsufficientPoints { required: u32, available: u32 },

    #[error("reward not found: {item_id}")]
    RewardNotFound { item_id: String },

    /// Reward exists but is disabled or out of stock
    #[error("reward unavailable: {item_id}")]
    RewardUnavailable { item_id: String },
}

/// Result type for reporting operations
pub type ReportResult<T> = Result<T, ReportError>;

impl ReportError {
    /// Whether the user can fix the problem themselves (move closer, earn more points)
    pub fn is_user_recoverable(&self) -> bool {
        match self {
            ReportError::LocationRejected { .. } | ReportError::InsufficientPoints { .. } => true,
            ReportError::Sensing(err) => err.is_recoverable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_displays_reason() {
        let err = ReportError::LocationRejected {
            distance_m: 2027,
            max_allowed_m: 210,
            reason: "현재 위치에서 너무 멀리 떨어져 있습니다. (2027m 떨어짐, 최대 210m 허용)".to_string(),
        };
        assert!(err.to_string().contains("2027m 떨어짐"));
        assert!(err.is_user_recoverable());
    }

    #[test]
    fn test_sensing_conversion() {
        let err: ReportError = SensingError::Unavailable { source_name: "mock".to_string() }.into();
        assert!(matches!(err, ReportError::Sensing(_)));
        assert!(!err.is_user_recoverable());
        assert_eq!(err.to_string(), "location check failed: location unavailable from mock");
    }

    #[test]
    fn test_points_error_display() {
        let err = ReportError::InsufficientPoints { required: 2000, available: 1250 };
        assert_eq!(err.to_string(), "insufficient points: 2000P required, 1250P available");
    }
}

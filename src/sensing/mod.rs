//! Location sensing seam
//!
//! The reporting flow never reads device location directly. It asks a
//! [`LocationSource`] for the current [`EstimatedPosition`]; the mock source
//! stands in for a real device API.

pub mod error;
pub mod fixed;
pub mod mock;

pub use error::{SensingError, SensingResult};
pub use fixed::FixedLocationSource;
pub use mock::{MockLocationSource, SAMPLE_READINGS};

use crate::core::EstimatedPosition;

/// Anything that can produce an estimate of where the user is
pub trait LocationSource {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Acquire the current position estimate
    fn current_position(&mut self) -> SensingResult<EstimatedPosition>;

    /// Counters describing the source so far
    fn status(&self) -> SourceStatus;
}

impl<T: LocationSource + ?Sized> LocationSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn current_position(&mut self) -> SensingResult<EstimatedPosition> {
        (**self).current_position()
    }

    fn status(&self) -> SourceStatus {
        (**self).status()
    }
}

/// Running counters for a location source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceStatus {
    pub readings_served: u32,
    pub error_count: u32,
    /// Accuracy of the last reading served (m)
    pub last_accuracy_m: Option<f64>,
}

/// Build an estimate, rejecting readings no real sensor would produce.
///
/// Coordinates must be in range and the accuracy radius finite and
/// non-negative.
pub fn checked_reading(lat: f64, lng: f64, accuracy_m: f64) -> SensingResult<EstimatedPosition> {
    let position = EstimatedPosition::new(lat, lng, accuracy_m);

    if !position.point.is_in_range() {
        return Err(SensingError::InvalidReading {
            reason: format!("coordinates {} out of range", position.point),
        });
    }

    if !accuracy_m.is_finite() || accuracy_m < 0.0 {
        return Err(SensingError::InvalidReading {
            reason: format!("accuracy radius {} must be a non-negative number of meters", accuracy_m),
        });
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_reading_accepts_valid() {
        let position = checked_reading(37.4981, 127.0276, 5.0).unwrap();
        assert_eq!(position.accuracy_m, 5.0);
        assert_eq!(position.point.lat, 37.4981);
    }

    #[test]
    fn test_checked_reading_rejects_negative_accuracy() {
        let err = checked_reading(37.4981, 127.0276, -1.0).unwrap_err();
        assert!(matches!(err, SensingError::InvalidReading { .. }));
    }

    #[test]
    fn test_checked_reading_rejects_out_of_range() {
        assert!(checked_reading(91.0, 0.0, 5.0).is_err());
        assert!(checked_reading(0.0, 181.0, 5.0).is_err());
        assert!(checked_reading(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut source: Box<dyn LocationSource> = Box::new(FixedLocationSource::new(37.4981, 127.0276, 5.0).unwrap());
        assert_eq!(source.name(), "fixed");
        assert_eq!(source.current_position().unwrap().accuracy_m, 5.0);
        assert_eq!(source.status().readings_served, 1);
    }
}

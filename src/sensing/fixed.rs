//! Location source that always reports the same reading

use crate::core::EstimatedPosition;
use crate::sensing::{checked_reading, LocationSource, SensingResult, SourceStatus};

/// Returns one fixed reading, e.g. coordinates given on the command line
#[derive(Debug, Clone)]
pub struct FixedLocationSource {
    position: EstimatedPosition,
    status: SourceStatus,
}

impl FixedLocationSource {
    /// Create a source from a reading, rejecting impossible values
    pub fn new(lat: f64, lng: f64, accuracy_m: f64) -> SensingResult<Self> {
        Ok(Self::from_position(checked_reading(lat, lng, accuracy_m)?))
    }

    pub fn from_position(position: EstimatedPosition) -> Self {
        Self {
            position,
            status: SourceStatus::default(),
        }
    }
}

impl LocationSource for FixedLocationSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn current_position(&mut self) -> SensingResult<EstimatedPosition> {
        self.status.readings_served += 1;
        self.status.last_accuracy_m = Some(self.position.accuracy_m);
        Ok(self.position)
    }

    fn status(&self) -> SourceStatus {
        self.status.clone()
    }
}

//! Mock location source for development and testing

use crate::core::EstimatedPosition;
use crate::sensing::{checked_reading, LocationSource, SensingError, SensingResult, SourceStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Sample readings near Gangnam station, from a precise fix to a poor one
pub const SAMPLE_READINGS: [EstimatedPosition; 4] = [
    EstimatedPosition::new(37.4981, 127.0276, 5.0),
    EstimatedPosition::new(37.4979, 127.0278, 15.0),
    EstimatedPosition::new(37.4975, 127.0280, 45.0),
    EstimatedPosition::new(37.4985, 127.0270, 80.0),
];

/// Picks one of a fixed set of readings uniformly at random
pub struct MockLocationSource {
    samples: Vec<EstimatedPosition>,
    rng: StdRng,
    latency: Duration,
    status: SourceStatus,
}

impl MockLocationSource {
    /// Create a mock source over [`SAMPLE_READINGS`] driven by `rng`
    pub fn new(rng: StdRng) -> Self {
        Self {
            samples: SAMPLE_READINGS.to_vec(),
            rng,
            latency: Duration::ZERO,
            status: SourceStatus::default(),
        }
    }

    /// Create a reproducible mock source
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Replace the sample set
    pub fn with_samples(mut self, samples: Vec<EstimatedPosition>) -> Self {
        self.samples = samples;
        self
    }

    /// Simulated sensor latency applied before every reading
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn samples(&self) -> &[EstimatedPosition] {
        &self.samples
    }
}

impl LocationSource for MockLocationSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn current_position(&mut self) -> SensingResult<EstimatedPosition> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        if self.samples.is_empty() {
            self.status.error_count += 1;
            return Err(SensingError::Unavailable {
                source_name: self.name().to_string(),
            });
        }

        let index = self.rng.gen_range(0..self.samples.len());
        let sample = self.samples[index];
        let reading = match checked_reading(sample.point.lat, sample.point.lng, sample.accuracy_m) {
            Ok(reading) => reading,
            Err(err) => {
                self.status.error_count += 1;
                return Err(err);
            }
        };

        debug!(index, lat = reading.point.lat, lng = reading.point.lng, accuracy_m = reading.accuracy_m, "mock location reading");

        self.status.readings_served += 1;
        self.status.last_accuracy_m = Some(reading.accuracy_m);
        Ok(reading)
    }

    fn status(&self) -> SourceStatus {
        self.status.clone()
    }
}

//! Periodic crowdness refresh driven by the caller's clock

use crate::catalog::VenueCatalog;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Re-randomizes every venue level once per interval.
///
/// Owns no thread: the application shell calls [`CrowdnessRefresher::poll`]
/// with the current time and the refresher decides whether a tick is due.
#[derive(Debug, Clone)]
pub struct CrowdnessRefresher {
    interval: Duration,
    last_tick_ms: u64,
    ticks: u64,
}

impl CrowdnessRefresher {
    pub fn new(interval: Duration, start_ms: u64) -> Self {
        Self {
            interval,
            last_tick_ms: start_ms,
            ticks: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Time at which the next refresh becomes due
    pub fn next_due_ms(&self) -> u64 {
        self.last_tick_ms.saturating_add(self.interval.as_millis() as u64)
    }

    /// Refresh the catalog if an interval has elapsed; returns whether it did
    pub fn poll<R: Rng + ?Sized>(&mut self, now_ms: u64, catalog: &mut VenueCatalog, rng: &mut R) -> bool {
        if now_ms < self.next_due_ms() {
            return false;
        }

        catalog.randomize_levels(rng, now_ms);
        self.last_tick_ms = now_ms;
        self.ticks += 1;

        debug!(now_ms, ticks = self.ticks, counts = ?catalog.counts(), "crowdness refreshed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ticks_only_after_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut catalog = VenueCatalog::seeded(&mut rng, 0);
        let mut refresher = CrowdnessRefresher::new(Duration::from_secs(30), 0);

        assert!(!refresher.poll(10_000, &mut catalog, &mut rng));
        assert!(!refresher.poll(29_999, &mut catalog, &mut rng));
        assert!(refresher.poll(30_000, &mut catalog, &mut rng));
        assert_eq!(refresher.ticks(), 1);
        assert!(catalog.venues().iter().all(|v| v.last_updated_ms == 30_000));

        assert_eq!(refresher.next_due_ms(), 60_000);
        assert!(!refresher.poll(45_000, &mut catalog, &mut rng));
    }

    #[test]
    fn test_late_poll_ticks_once() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut catalog = VenueCatalog::seeded(&mut rng, 0);
        let mut refresher = CrowdnessRefresher::new(Duration::from_secs(30), 0);

        assert!(refresher.poll(95_000, &mut catalog, &mut rng));
        assert_eq!(refresher.ticks(), 1);
        assert_eq!(refresher.next_due_ms(), 125_000);
    }
}

//! Randomized 24-hour demand curves for the venue detail chart

use crate::core::CrowdnessLevel;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Typical demand per hour (0-100): quiet nights, morning, lunch and dinner peaks
pub const BASE_DEMAND_PROFILE: [u8; 24] = [
    10, 5, 5, 5, 5, 10, 20, 35, 55, 50, 40, 60,
    85, 80, 55, 45, 50, 65, 85, 80, 60, 45, 30, 20,
];

/// Largest random deviation applied to the base profile
const NOISE_AMPLITUDE: i16 = 15;

/// Crowdness estimate for one hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyData {
    pub hour: u8,
    pub crowdness_level: CrowdnessLevel,
    /// 0-100 scale used by the chart
    pub crowdness_value: u8,
}

/// Build a 24-entry curve from the base profile plus bounded noise
pub fn hourly_curve<R: Rng + ?Sized>(rng: &mut R) -> Vec<HourlyData> {
    BASE_DEMAND_PROFILE
        .iter()
        .enumerate()
        .map(|(hour, base)| {
            let noise = rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
            let value = (*base as i16 + noise).clamp(0, 100) as u8;
            HourlyData {
                hour: hour as u8,
                crowdness_level: CrowdnessLevel::from_value(value),
                crowdness_value: value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_curve_covers_every_hour() {
        let mut rng = StdRng::seed_from_u64(11);
        let curve = hourly_curve(&mut rng);
        assert_eq!(curve.len(), 24);
        for (i, entry) in curve.iter().enumerate() {
            assert_eq!(entry.hour as usize, i);
            assert!(entry.crowdness_value <= 100);
            assert_eq!(entry.crowdness_level, CrowdnessLevel::from_value(entry.crowdness_value));
        }
    }

    #[test]
    fn test_noise_is_bounded() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            for entry in hourly_curve(&mut rng) {
                let base = BASE_DEMAND_PROFILE[entry.hour as usize] as i16;
                let diff = (entry.crowdness_value as i16 - base).abs();
                assert!(diff <= NOISE_AMPLITUDE);
            }
        }
    }

    #[test]
    fn test_seeded_curves_repeat() {
        let a = hourly_curve(&mut StdRng::seed_from_u64(99));
        let b = hourly_curve(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_lunch_busier_than_night() {
        let mut rng = StdRng::seed_from_u64(3);
        let curve = hourly_curve(&mut rng);
        assert!(curve[12].crowdness_value > curve[3].crowdness_value);
    }
}

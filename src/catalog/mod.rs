//! Venue and reward catalogs
//!
//! All randomness comes from an injected [`rand::Rng`], so seeded catalogs
//! are reproducible.

pub mod hourly;
pub mod rewards;
pub mod venues;

pub use hourly::{hourly_curve, HourlyData, BASE_DEMAND_PROFILE};
pub use rewards::{RewardCatalog, RewardCategory, RewardItem, UnknownCategory};
pub use venues::{LevelCounts, Venue, VenueCatalog};

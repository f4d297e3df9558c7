//! Report flow: acquire position, gate, update venue, award points

use crate::catalog::{RewardCatalog, VenueCatalog};
use crate::core::{CrowdnessLevel, ValidationResult};
use crate::reporting::points::PointsLedger;
use crate::sensing::LocationSource;
use crate::validation::{LocationValidator, ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Reason recorded on points earned by reporting
const REPORT_REWARD_REASON: &str = "혼잡도 제보";

/// Result of an accepted crowdness report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub venue_id: String,
    pub level: CrowdnessLevel,
    pub validation: ValidationResult,
    pub points_earned: u32,
    pub balance: u32,
}

/// Result of a reward purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redemption {
    pub item_id: String,
    pub points_spent: u32,
    pub balance: u32,
}

/// Ties the proximity gate to venues, rewards and the points ledger
pub struct ReportService<S: LocationSource> {
    validator: LocationValidator,
    source: S,
    venues: VenueCatalog,
    rewards: RewardCatalog,
    ledger: PointsLedger,
    points_per_report: u32,
}

impl<S: LocationSource> ReportService<S> {
    pub fn new(
        validator: LocationValidator,
        source: S,
        venues: VenueCatalog,
        rewards: RewardCatalog,
        ledger: PointsLedger,
        points_per_report: u32,
    ) -> Self {
        Self {
            validator,
            source,
            venues,
            rewards,
            ledger,
            points_per_report,
        }
    }

    pub fn venues(&self) -> &VenueCatalog {
        &self.venues
    }

    pub fn venues_mut(&mut self) -> &mut VenueCatalog {
        &mut self.venues
    }

    pub fn rewards(&self) -> &RewardCatalog {
        &self.rewards
    }

    pub fn ledger(&self) -> &PointsLedger {
        &self.ledger
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Acquire a position and run the gate against a venue
    pub fn check_location(&mut self, venue_id: &str) -> ReportResult<ValidationResult> {
        let target = self.venues.get(venue_id)?.location;
        let position = self.source.current_position()?;
        Ok(self.validator.validate(&position, target))
    }

    /// Submit a crowdness report; nothing changes unless the gate admits it
    pub fn submit_report(&mut self, venue_id: &str, level: CrowdnessLevel, at_ms: u64) -> ReportResult<ReportReceipt> {
        let validation = self.check_location(venue_id)?;

        if !validation.is_valid {
            warn!(
                venue = venue_id,
                distance_m = validation.distance_m,
                max_allowed_m = validation.max_allowed_distance_m,
                "report rejected by proximity gate"
            );
            return Err(ReportError::LocationRejected {
                distance_m: validation.distance_m,
                max_allowed_m: validation.max_allowed_distance_m,
                reason: validation.reason.clone().unwrap_or_default(),
            });
        }

        self.venues.set_crowdness(venue_id, level, at_ms)?;
        let balance = self.ledger.earn(self.points_per_report, REPORT_REWARD_REASON, Some(venue_id), at_ms);

        info!(venue = venue_id, ?level, distance_m = validation.distance_m, "crowdness report accepted");

        Ok(ReportReceipt {
            venue_id: venue_id.to_string(),
            level,
            validation,
            points_earned: self.points_per_report,
            balance,
        })
    }

    /// Exchange points for a reward
    pub fn redeem_reward(&mut self, item_id: &str, at_ms: u64) -> ReportResult<Redemption> {
        let (cost, name) = {
            let item = self.rewards.redeemable(item_id)?;
            (item.points_cost, item.name.clone())
        };

        if !self.ledger.can_afford(cost) {
            return Err(ReportError::InsufficientPoints {
                required: cost,
                available: self.ledger.total_points,
            });
        }

        self.rewards.take_one(item_id)?;
        let balance = self.ledger.spend(cost, &name, at_ms)?;

        info!(item = item_id, cost, balance, "reward redeemed");

        Ok(Redemption {
            item_id: item_id.to_string(),
            points_spent: cost,
            balance,
        })
    }
}

//! Loyalty points earned by reporting and spent in the reward store

use crate::validation::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use tracing::info;

const MS_PER_DAY: u64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earn,
    Spend,
}

/// One movement of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsTransaction {
    pub id: u64,
    pub kind: TransactionKind,
    pub points: u32,
    pub reason: String,
    pub timestamp_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub related_venue: Option<String>,
}

/// Point balance and history of one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsLedger {
    pub user_id: String,
    pub total_points: u32,
    /// Points earned on the UTC day of `last_earned_ms`
    pub earned_today: u32,
    pub last_earned_ms: Option<u64>,
    transactions: Vec<PointsTransaction>,
    next_id: u64,
}

impl PointsLedger {
    pub fn new(user_id: impl Into<String>, initial_points: u32) -> Self {
        Self {
            user_id: user_id.into(),
            total_points: initial_points,
            earned_today: 0,
            last_earned_ms: None,
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    pub fn transactions(&self) -> &[PointsTransaction] {
        &self.transactions
    }

    /// Points earned on the UTC day containing `now_ms`
    pub fn earned_on_day_of(&self, now_ms: u64) -> u32 {
        match self.last_earned_ms {
            Some(last) if same_day(last, now_ms) => self.earned_today,
            _ => 0,
        }
    }

    /// Credit points, returning the new balance
    pub fn earn(&mut self, points: u32, reason: &str, related_venue: Option<&str>, at_ms: u64) -> u32 {
        self.earned_today = self.earned_on_day_of(at_ms).saturating_add(points);
        self.last_earned_ms = Some(at_ms);
        self.total_points = self.total_points.saturating_add(points);
        self.record(TransactionKind::Earn, points, reason, related_venue, at_ms);

        info!(user = %self.user_id, points, balance = self.total_points, "points earned");
        self.total_points
    }

    /// Debit points, returning the new balance
    pub fn spend(&mut self, points: u32, reason: &str, at_ms: u64) -> ReportResult<u32> {
        if points > self.total_points {
            return Err(ReportError::InsufficientPoints {
                required: points,
                available: self.total_points,
            });
        }

        self.total_points -= points;
        self.record(TransactionKind::Spend, points, reason, None, at_ms);

        info!(user = %self.user_id, points, balance = self.total_points, "points spent");
        Ok(self.total_points)
    }

    pub fn can_afford(&self, points: u32) -> bool {
        self.total_points >= points
    }

    fn record(&mut self, kind: TransactionKind, points: u32, reason: &str, related_venue: Option<&str>, at_ms: u64) {
        self.transactions.push(PointsTransaction {
            id: self.next_id,
            kind,
            points,
            reason: reason.to_string(),
            timestamp_ms: at_ms,
            related_venue: related_venue.map(str::to_string),
        });
        self.next_id += 1;
    }
}

fn same_day(a_ms: u64, b_ms: u64) -> bool {
    a_ms / MS_PER_DAY == b_ms / MS_PER_DAY
}

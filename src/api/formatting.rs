//! Output formatting for validation results, venues and point balances
//!
//! The text formatter produces the same wording the reporting UI shows; the
//! JSON formatter serializes any serde type for machine consumers.

use crate::catalog::{LevelCounts, RewardItem, Venue};
use crate::core::ValidationResult;
use crate::reporting::PointsLedger;
use serde::Serialize;

/// Human-readable text output
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// Single-line output
    pub compact: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    /// Format an admission decision
    pub fn format_validation(&self, result: &ValidationResult) -> String {
        let verdict = if result.is_valid { "OK" } else { "REJECTED" };

        if self.compact {
            return format!(
                "{}: {}m (max {}m)",
                verdict, result.distance_m, result.max_allowed_distance_m
            );
        }

        let mut output = String::new();
        output.push_str(&format!("Location check: {}\n", verdict));
        output.push_str(&format!("  Distance:    {} m\n", result.distance_m));
        output.push_str(&format!("  Max allowed: {} m\n", result.max_allowed_distance_m));
        if let Some(reason) = &result.reason {
            output.push_str(&format!("  Reason:      {}\n", reason));
        }
        output
    }

    /// Format one venue as a list entry
    pub fn format_venue(&self, venue: &Venue) -> String {
        let line = format!(
            "[{}] {} · {} · {}m · {}",
            venue.id, venue.name, venue.category, venue.distance_m, venue.crowdness
        );

        if self.compact {
            return line;
        }

        let mut output = line;
        output.push_str(&format!("\n    {} ({})", venue.address, venue.location_type.text()));
        if let Some(wait) = venue.estimated_wait_min {
            output.push_str(&format!(" · 대기 {}분", wait));
        }
        if let Some(rating) = venue.rating {
            output.push_str(&format!(" · ★{:.1}", rating));
        }
        output
    }

    /// Format the per-level venue counts shown above the list
    pub fn format_counts(&self, counts: &LevelCounts) -> String {
        format!("널널 {} · 보통 {} · 혼잡 {}", counts.low, counts.medium, counts.high)
    }

    /// Format a reward store entry
    pub fn format_reward(&self, item: &RewardItem) -> String {
        let stock = match item.stock {
            Some(n) if item.can_redeem() => format!("{} left", n),
            Some(_) => "sold out".to_string(),
            None if item.can_redeem() => "unlimited".to_string(),
            None => "unavailable".to_string(),
        };
        format!(
            "[{}] {} {} · {}P · {} · {}",
            item.id,
            item.brand,
            item.name,
            item.points_cost,
            item.category.text(),
            stock
        )
    }

    /// Format a user's point balance as of `now_ms`
    pub fn format_points(&self, ledger: &PointsLedger, now_ms: u64) -> String {
        if self.compact {
            return format!("{}P", ledger.total_points);
        }

        let mut output = String::new();
        output.push_str(&format!("Points for {}\n", ledger.user_id));
        output.push_str(&format!("  Balance:      {} P\n", ledger.total_points));
        output.push_str(&format!("  Earned today: {} P\n", ledger.earned_on_day_of(now_ms)));
        output.push_str(&format!("  Transactions: {}\n", ledger.transactions().len()));
        output
    }
}

/// JSON formatter for machine consumers
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RewardCatalog, VenueCatalog};
    use crate::core::{CrowdnessLevel, EstimatedPosition, GeoPoint};
    use crate::validation::validate_location_for_report;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rejected() -> ValidationResult {
        validate_location_for_report(
            &EstimatedPosition::new(37.4985, 127.0270, 80.0),
            GeoPoint::new(37.5045, 127.0487),
        )
    }

    #[test]
    fn test_compact_validation() {
        let ok = validate_location_for_report(
            &EstimatedPosition::new(37.4981, 127.0276, 5.0),
            GeoPoint::new(37.4979, 127.0276),
        );
        assert_eq!(TextFormatter::compact().format_validation(&ok), "OK: 22m (max 60m)");
        assert_eq!(
            TextFormatter::compact().format_validation(&rejected()),
            "REJECTED: 2027m (max 210m)"
        );
    }

    #[test]
    fn test_full_validation_includes_reason() {
        let text = TextFormatter::new().format_validation(&rejected());
        assert!(text.starts_with("Location check: REJECTED"));
        assert!(text.contains("Max allowed: 210 m"));
        assert!(text.contains("2027m 떨어짐"));
    }

    #[test]
    fn test_venue_line() {
        let mut catalog = VenueCatalog::seeded(&mut StdRng::seed_from_u64(3), 0);
        catalog.set_crowdness("1", CrowdnessLevel::Medium, 0).unwrap();
        let venue = catalog.get("1").unwrap();

        let line = TextFormatter::compact().format_venue(venue);
        assert!(line.starts_with("[1] "));
        assert!(line.contains(&venue.name));
        assert!(line.ends_with("보통 😐"));

        let full = TextFormatter::new().format_venue(venue);
        assert!(full.contains(&venue.address));
    }

    #[test]
    fn test_counts_and_rewards() {
        let counts = LevelCounts { low: 3, medium: 4, high: 2 };
        assert_eq!(TextFormatter::new().format_counts(&counts), "널널 3 · 보통 4 · 혼잡 2");

        let catalog = RewardCatalog::standard();
        let item = &catalog.items()[0];
        let line = TextFormatter::new().format_reward(item);
        assert!(line.contains(&format!("{}P", item.points_cost)));
    }

    #[test]
    fn test_points_summary() {
        let mut ledger = PointsLedger::new("user-1", 1250);
        ledger.earn(10, "혼잡도 제보", Some("1"), 1_000);
        assert_eq!(TextFormatter::compact().format_points(&ledger, 2_000), "1260P");

        let text = TextFormatter::new().format_points(&ledger, 2_000);
        assert!(text.contains("Earned today: 10 P"));
        assert!(text.contains("Transactions: 1"));
    }

    #[test]
    fn test_points_summary_next_day() {
        let mut ledger = PointsLedger::new("user-1", 1250);
        ledger.earn(10, "혼잡도 제보", Some("1"), 1_000);

        let text = TextFormatter::new().format_points(&ledger, 86_400_000 + 1_000);
        assert!(text.contains("Balance:      1260 P"));
        assert!(text.contains("Earned today: 0 P"));
    }

    #[test]
    fn test_json_output() {
        let json = JsonFormatter::new().format_json(&rejected()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["is_valid"], false);
        assert_eq!(value["distance_m"], 2027);
        assert_eq!(value["max_allowed_distance_m"], 210);

        let pretty = JsonFormatter::pretty().format_json(&rejected()).unwrap();
        assert!(pretty.contains('\n'));
    }
}

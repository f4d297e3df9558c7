//! Core data types shared by the gate, the catalog and the reporting flow

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether latitude lies in [-90, 90] and longitude in [-180, 180]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Position estimate with its measurement uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatedPosition {
    pub point: GeoPoint,
    /// Accuracy radius in meters (larger means less confident)
    pub accuracy_m: f64,
}

impl EstimatedPosition {
    /// Build an estimate without checking the accuracy radius
    pub const fn new(lat: f64, lng: f64, accuracy_m: f64) -> Self {
        Self {
            point: GeoPoint::new(lat, lng),
            accuracy_m,
        }
    }
}

/// Outcome of the proximity gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Distance to the target, rounded to the nearest meter
    pub distance_m: i64,
    /// Admission threshold, rounded to the nearest meter
    pub max_allowed_distance_m: i64,
    /// Present only when the report is rejected
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

/// How busy a venue currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdnessLevel {
    Low,
    Medium,
    High,
}

impl CrowdnessLevel {
    pub const ALL: [CrowdnessLevel; 3] = [CrowdnessLevel::Low, CrowdnessLevel::Medium, CrowdnessLevel::High];

    /// Short label shown on venue cards
    pub fn label(&self) -> &'static str {
        match self {
            CrowdnessLevel::Low => "널널",
            CrowdnessLevel::Medium => "보통",
            CrowdnessLevel::High => "혼잡",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            CrowdnessLevel::Low => "😊",
            CrowdnessLevel::Medium => "😐",
            CrowdnessLevel::High => "😰",
        }
    }

    /// Colour token used by badges and map pins
    pub fn color(&self) -> &'static str {
        match self {
            CrowdnessLevel::Low => "green",
            CrowdnessLevel::Medium => "orange",
            CrowdnessLevel::High => "red",
        }
    }

    /// Title of the option in the report dialog
    pub fn report_title(&self) -> &'static str {
        match self {
            CrowdnessLevel::Low => "널널해요",
            CrowdnessLevel::Medium => "보통이에요",
            CrowdnessLevel::High => "혼잡해요",
        }
    }

    pub fn report_description(&self) -> &'static str {
        match self {
            CrowdnessLevel::Low => "대기 없이 바로 이용 가능",
            CrowdnessLevel::Medium => "약간의 대기 시간 있음",
            CrowdnessLevel::High => "대기 시간이 길어요",
        }
    }

    /// Map a 0-100 crowdness value onto a level
    pub fn from_value(value: u8) -> Self {
        if value < 40 {
            CrowdnessLevel::Low
        } else if value < 70 {
            CrowdnessLevel::Medium
        } else {
            CrowdnessLevel::High
        }
    }
}

impl fmt::Display for CrowdnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.emoji())
    }
}

/// Error returned when parsing an unknown crowdness level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown crowdness level '{0}' (expected low, medium or high)")]
pub struct UnknownLevel(pub String);

impl FromStr for CrowdnessLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(CrowdnessLevel::Low),
            "medium" => Ok(CrowdnessLevel::Medium),
            "high" => Ok(CrowdnessLevel::High),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// Kind of place a venue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Store,
    Street,
    Park,
    Station,
    Mall,
    Plaza,
    Attraction,
}

impl LocationType {
    pub fn text(&self) -> &'static str {
        match self {
            LocationType::Store => "가게",
            LocationType::Street => "거리",
            LocationType::Park => "공원",
            LocationType::Station => "역",
            LocationType::Mall => "쇼핑몰",
            LocationType::Plaza => "광장",
            LocationType::Attraction => "명소",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_range() {
        assert!(GeoPoint::new(37.4981, 127.0276).is_in_range());
        assert!(GeoPoint::new(-90.0, 180.0).is_in_range());
        assert!(!GeoPoint::new(90.5, 0.0).is_in_range());
        assert!(!GeoPoint::new(0.0, -180.1).is_in_range());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_in_range());
    }

    #[test]
    fn test_crowdness_from_value_thresholds() {
        assert_eq!(CrowdnessLevel::from_value(0), CrowdnessLevel::Low);
        assert_eq!(CrowdnessLevel::from_value(39), CrowdnessLevel::Low);
        assert_eq!(CrowdnessLevel::from_value(40), CrowdnessLevel::Medium);
        assert_eq!(CrowdnessLevel::from_value(69), CrowdnessLevel::Medium);
        assert_eq!(CrowdnessLevel::from_value(70), CrowdnessLevel::High);
        assert_eq!(CrowdnessLevel::from_value(100), CrowdnessLevel::High);
    }

    #[test]
    fn test_crowdness_parsing() {
        assert_eq!("low".parse::<CrowdnessLevel>(), Ok(CrowdnessLevel::Low));
        assert_eq!(" HIGH ".parse::<CrowdnessLevel>(), Ok(CrowdnessLevel::High));
        let err = "packed".parse::<CrowdnessLevel>().unwrap_err();
        assert_eq!(err, UnknownLevel("packed".to_string()));
        assert_eq!(err.to_string(), "unknown crowdness level 'packed' (expected low, medium or high)");
    }

    #[test]
    fn test_presentation_mappings() {
        assert_eq!(CrowdnessLevel::Medium.to_string(), "보통 😐");
        assert_eq!(CrowdnessLevel::High.color(), "red");
        assert_eq!(CrowdnessLevel::Low.report_title(), "널널해요");
        assert_eq!(LocationType::Park.text(), "공원");
        assert_eq!(LocationType::Station.text(), "역");
    }

    #[test]
    fn test_validation_result_omits_missing_reason() {
        let result = ValidationResult {
            is_valid: true,
            distance_m: 22,
            max_allowed_distance_m: 60,
            reason: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("reason"));
        assert!(json.contains("\"distance_m\":22"));
    }
}

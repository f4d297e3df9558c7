//! Crowdedness Reporting
//!
//! Venue crowdedness reports gated by proximity: a report is only accepted
//! when the user's estimated position, widened by its accuracy radius, is
//! close enough to the venue being reported on.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod sensing;
pub mod catalog;
pub mod reporting;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use core::{CrowdnessLevel, EstimatedPosition, GeoPoint, LocationType, ValidationResult, EARTH_RADIUS_M};
pub use algorithms::{estimate_distance, MapPin, MapProjector};
pub use validation::{validate_location_for_report, AdmissionPolicy, LocationValidator, ReportError, ReportResult};
pub use sensing::{FixedLocationSource, LocationSource, MockLocationSource, SensingError, SensingResult};
pub use catalog::{RewardCatalog, RewardItem, Venue, VenueCatalog};
pub use reporting::{CrowdnessRefresher, PointsLedger, ReportReceipt, ReportService};
pub use utils::{AppConfig, ConfigError, ConfigurationManager};
pub use api::{JsonFormatter, TextFormatter};

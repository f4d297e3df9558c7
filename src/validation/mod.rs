//! Proximity gate and the error taxonomy of the reporting flow

pub mod error;
pub mod location;

pub use error::{ReportError, ReportResult};
pub use location::{validate_location_for_report, AdmissionPolicy, LocationValidator};

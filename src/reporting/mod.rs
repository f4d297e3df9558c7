//! Report submission, loyalty points and periodic crowdness refresh

pub mod points;
pub mod refresh;
pub mod service;

pub use points::{PointsLedger, PointsTransaction, TransactionKind};
pub use refresh::CrowdnessRefresher;
pub use service::{Redemption, ReportReceipt, ReportService};

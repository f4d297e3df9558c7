//! Core value types and constants for the crowdedness reporting system

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;

//! Presentation layer

pub mod formatting;

pub use formatting::{JsonFormatter, TextFormatter};

//! Location acquisition errors

use thiserror::Error;

/// Errors raised while acquiring a position estimate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensingError {
    /// No reading could be produced
    #[error("location unavailable from {source_name}")]
    Unavailable { source_name: String },

    /// The sensor produced a reading that cannot be used
    #[error("invalid location reading: {reason}")]
    InvalidReading { reason: String },
}

/// Result type for sensing operations
pub type SensingResult<T> = Result<T, SensingError>;

impl SensingError {
    /// Whether asking the source again may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SensingError::InvalidReading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SensingError::Unavailable { source_name: "mock".to_string() };
        assert_eq!(err.to_string(), "location unavailable from mock");
        assert!(!err.is_recoverable());

        let err = SensingError::InvalidReading { reason: "negative accuracy".to_string() };
        assert!(err.to_string().contains("negative accuracy"));
        assert!(err.is_recoverable());
    }
}

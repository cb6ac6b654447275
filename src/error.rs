//! Custom error types for the fincast engine
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. Value-type parse errors (money, month)
//! live next to their types in `models` and convert into `EngineError` here.

use thiserror::Error;

/// The main error type for fincast operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// An entry could not be normalized (malformed or missing date)
    #[error("Unparseable entry date: {0}")]
    UnparseableDate(String),

    /// A resolved range is inverted or otherwise unusable
    #[error("Range error: {0}")]
    Range(String),

    /// Goal aggregation received inconsistent domain aggregates
    #[error("Goal aggregation error: {0}")]
    Goal(String),
}

impl EngineError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unparseable-date error
    pub fn is_unparseable_date(&self) -> bool {
        matches!(self, Self::UnparseableDate(_))
    }
}

impl From<crate::models::MonthParseError> for EngineError {
    fn from(err: crate::models::MonthParseError) -> Self {
        match err {
            crate::models::MonthParseError::InvertedRange { .. } => Self::Range(err.to_string()),
            other => Self::UnparseableDate(other.to_string()),
        }
    }
}

/// Result type alias for fincast operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::Validation("negative month".into());
        assert_eq!(err.to_string(), "Validation error: negative month");
    }

    #[test]
    fn test_unparseable_date_predicate() {
        let err = EngineError::UnparseableDate("03-2025".into());
        assert!(err.is_unparseable_date());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_month_parse_error_conversion() {
        use crate::models::{MonthRange, YearMonth};

        let later = YearMonth::new(2025, 6).unwrap();
        let earlier = YearMonth::new(2025, 1).unwrap();

        let err: EngineError = MonthRange::new(later, earlier).unwrap_err().into();
        assert!(matches!(err, EngineError::Range(_)));

        let err: EngineError = YearMonth::parse("garbage").unwrap_err().into();
        assert!(err.is_unparseable_date());
    }
}

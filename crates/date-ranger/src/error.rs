//! Error types for date-ranger operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Date ranges do not intersect: {0} and {1}")]
    NonIntersecting(String, String),

    #[error("Cannot enumerate from an open start bound")]
    UnboundedStart,

    #[error("Unsupported time unit: {0}")]
    UnsupportedUnit(String),

    #[error("Missing range bound: {0}")]
    MissingBound(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
}

pub type Result<T> = std::result::Result<T, DateRangeError>;

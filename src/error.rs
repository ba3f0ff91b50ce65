//! Error types for search runs.

use std::fmt;

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that abort an optimization run before a result is produced.
///
/// Both runners are single-pass: a fatal condition discards the whole
/// attempt, there is no partial-result recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The starting vector has zero dimensions.
    EmptyStart,

    /// The iteration budget is zero where a positive bound is required.
    ZeroIterations,

    /// The temperature schedule produced a non-positive or non-finite
    /// value at an iteration that was actually invoked.
    InvalidSchedule {
        /// 1-based iteration index at which the schedule was evaluated.
        iteration: usize,
        /// The offending temperature value.
        temperature: f64,
    },

    /// A configuration field is out of range.
    InvalidConfig { message: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStart => {
                write!(f, "starting vector must have at least one dimension")
            }
            Self::ZeroIterations => {
                write!(f, "iteration budget must be positive")
            }
            Self::InvalidSchedule {
                iteration,
                temperature,
            } => {
                write!(
                    f,
                    "temperature schedule returned {} at iteration {}: \
                     must be strictly positive and finite",
                    temperature, iteration
                )
            }
            Self::InvalidConfig { message } => {
                write!(f, "invalid configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for SearchError {}

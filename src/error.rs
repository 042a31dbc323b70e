//! Error types for statistical operations.

use std::fmt;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A moment that diverges for the current shape parameter.
    ///
    /// The Pareto mean is undefined for α ≤ 1, the variance for α ≤ 2,
    /// the skewness for α ≤ 3, and the excess kurtosis for α ≤ 4. An
    /// undefined moment is a distinct semantic category from a large
    /// computed value, so it surfaces as an error rather than as
    /// infinity or NaN.
    UndefinedMoment {
        moment: &'static str,
        shape: f64,
        requires: &'static str,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedMoment {
                moment,
                shape,
                requires,
            } => {
                write!(
                    f,
                    "{} is undefined for shape = {}: requires {}",
                    moment, shape, requires
                )
            }
        }
    }
}

impl std::error::Error for StatsError {}

//! Statistical helper functions for the dicestat project.
//!
//! This crate provides a small set of pure functions over slices of numbers:
//!
//! - **Central tendency**: mean, median, mode and truncated (trimmed) mean
//! - **Dispersion**: sample and population standard deviation
//! - **Frequency tables**: occurrence counts of each distinct value
//! - **Summaries**: every statistic above computed in one call
//!
//! All functions are generic over [`Value`], which covers every primitive
//! integer and floating-point type, and return results as `f64`.
//! Invalid input is reported through [`StatsError`] before any computation
//! takes place, so no function ever returns `NaN` for an empty slice.
//!
//! # Modules
//!
//! - [`descriptive`]: mean, median, mode, min/max and standard deviations
//! - [`truncated`]: truncated mean by count or by fraction
//! - [`histogram`]: frequency tables of distinct values
//! - [`summary`]: all statistics for a dataset at once
//!
//! # Examples
//!
//! ```
//! use dicestat_stats::{descriptive, truncated};
//!
//! let values = [5, 3, 7, 1, 1, 7, 9];
//! assert_eq!(descriptive::median(&values).unwrap(), 5.0);
//! assert_eq!(truncated::truncated_mean(&values, 2).unwrap(), 5.0);
//! assert_eq!(descriptive::mode(&values).unwrap(), vec![1, 7]);
//! ```
//!
//! ```
//! use dicestat_stats::{StatsError, descriptive};
//!
//! let values: [f64; 1] = [1.0];
//! assert!(matches!(
//!     descriptive::sample_std_dev(&values),
//!     Err(StatsError::InsufficientData { required: 2, actual: 1 })
//! ));
//! ```

pub use self::value::Value;

pub mod descriptive;
pub mod histogram;
pub mod summary;
pub mod truncated;
mod value;

/// Errors reported by the statistics functions.
///
/// Every error is a deterministic input-validation failure detected before
/// any computation takes place.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The slice has no values but at least one is required.
    #[display("no values given")]
    EmptyInput,
    /// The slice has fewer values than the statistic requires.
    #[display("at least {required} values are required, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    /// A trim count or fraction is outside its valid domain.
    #[display("invalid trim: {_0}")]
    InvalidTrim(#[error(source)] TrimError),
}

/// Reasons a truncated-mean trim parameter is rejected.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum TrimError {
    #[display("number to remove must be non-negative, got {number_to_remove}")]
    NegativeCount { number_to_remove: i64 },
    #[display("removing {number_to_remove} values from each end of {len} values leaves none")]
    NothingLeft { number_to_remove: i64, len: usize },
    #[display("fraction to remove must be in [0, 0.5), got {fraction}")]
    FractionOutOfRange { fraction: f64 },
}

impl From<TrimError> for StatsError {
    fn from(err: TrimError) -> Self {
        StatsError::InvalidTrim(err)
    }
}

//! Truncated (trimmed) means.
//!
//! A truncated mean sorts the data, discards the same number of values from
//! both ends and averages what remains, which makes it robust against
//! outliers.

use crate::{StatsError, TrimError, Value, value};

/// Computes the mean after removing `number_to_remove` of the smallest and
/// `number_to_remove` of the largest values.
///
/// For example, removing two values from each end of
/// `[1, 1, 3, 5, 7, 7, 9]` leaves `[3, 5, 7]`, whose mean is 5.
///
/// # Errors
///
/// - [`StatsError::EmptyInput`] if `values` is empty.
/// - [`StatsError::InvalidTrim`] if `number_to_remove` is negative, or if
///   removing it from both ends would leave no values
///   (`number_to_remove * 2 >= values.len()`).
///
/// # Examples
///
/// ```
/// # use dicestat_stats::truncated::truncated_mean;
/// assert_eq!(truncated_mean(&[5, 3, 7, 1, 1, 7, 9], 2).unwrap(), 5.0);
/// assert!(truncated_mean(&[1, 2, 3, 4], 2).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn truncated_mean<T>(values: &[T], number_to_remove: i64) -> Result<f64, StatsError>
where
    T: Value,
{
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if number_to_remove < 0 {
        return Err(TrimError::NegativeCount { number_to_remove }.into());
    }
    let per_side = usize::try_from(number_to_remove).unwrap_or(usize::MAX);
    if per_side
        .checked_mul(2)
        .is_none_or(|removed| removed >= values.len())
    {
        return Err(TrimError::NothingLeft {
            number_to_remove,
            len: values.len(),
        }
        .into());
    }

    let sorted = value::sorted(values);
    let kept = &sorted[per_side..sorted.len() - per_side];
    Ok(value::sum(kept) / kept.len() as f64)
}

/// Computes the mean after removing the given fraction of the smallest and
/// of the largest values.
///
/// The number removed from each end is `floor(values.len() * fraction)`, which
/// is then handed to [`truncated_mean`], so the count validation is applied
/// to the derived count as well.
///
/// # Errors
///
/// - [`StatsError::EmptyInput`] if `values` is empty.
/// - [`StatsError::InvalidTrim`] if `fraction` is negative, NaN, or at least
///   0.5, or if the derived count leaves no values.
///
/// # Examples
///
/// ```
/// # use dicestat_stats::truncated::truncated_mean_fraction;
/// let values = [5, 3, 7, 1, 1, 7, 9, 8];
/// // floor(8 * 0.25) = 2 values removed from each end, leaving [3, 5, 7, 7]
/// assert_eq!(truncated_mean_fraction(&values, 0.25).unwrap(), 5.5);
/// ```
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn truncated_mean_fraction<T>(values: &[T], fraction: f64) -> Result<f64, StatsError>
where
    T: Value,
{
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if !(0.0..0.5).contains(&fraction) {
        return Err(TrimError::FractionOutOfRange { fraction }.into());
    }

    let number_to_remove = (values.len() as f64 * fraction).floor() as i64;
    truncated_mean(values, number_to_remove)
}

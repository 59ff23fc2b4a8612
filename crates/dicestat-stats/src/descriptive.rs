//! Descriptive statistics over slices of numbers.
//!
//! Every function validates its input before computing anything and reports
//! invalid input as a [`StatsError`].
//!
//! The standard deviations accumulate squared deviations by direct summation.
//! This is accurate for dice-sized data but is not hardened against
//! catastrophic cancellation for very large datasets or very large magnitudes.

use crate::{StatsError, Value, histogram::FrequencyTable, value};

/// Computes the arithmetic mean.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use dicestat_stats::descriptive::mean;
/// assert_eq!(mean(&[2, 4, 9]).unwrap(), 5.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean<T>(values: &[T]) -> Result<f64, StatsError>
where
    T: Value,
{
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(value::sum(values) / values.len() as f64)
}

/// Returns the smallest value.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
pub fn min<T>(values: &[T]) -> Result<T, StatsError>
where
    T: Value,
{
    values
        .iter()
        .copied()
        .min_by(T::total_cmp)
        .ok_or(StatsError::EmptyInput)
}

/// Returns the largest value.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
pub fn max<T>(values: &[T]) -> Result<T, StatsError>
where
    T: Value,
{
    values
        .iter()
        .copied()
        .max_by(T::total_cmp)
        .ok_or(StatsError::EmptyInput)
}

/// Returns the middle value of the sorted data.
///
/// With an odd number of values this is the exact middle element; with an
/// even number it is the average of the two middle elements.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use dicestat_stats::descriptive::median;
/// assert_eq!(median(&[1, 4, 1, 5, 7, 9, 7]).unwrap(), 5.0);
/// assert_eq!(median(&[1, 4, 1, 5, 7, 9, 7, 6]).unwrap(), 5.5);
/// ```
pub fn median<T>(values: &[T]) -> Result<f64, StatsError>
where
    T: Value,
{
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(median_of_sorted(&value::sorted(values)))
}

pub(crate) fn median_of_sorted<T>(sorted_values: &[T]) -> f64
where
    T: Value,
{
    let mid = sorted_values.len() / 2;
    if sorted_values.len() % 2 == 0 {
        (sorted_values[mid - 1].as_f64() + sorted_values[mid].as_f64()) / 2.0
    } else {
        sorted_values[mid].as_f64()
    }
}

/// Returns the value(s) that occur most often.
///
/// When several values tie for the highest count all of them are returned
/// (a bimodal or multimodal result). Values are grouped with `==`, and all
/// NaNs count as one value. The values are returned in ascending order, each
/// exactly once.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use dicestat_stats::descriptive::mode;
/// assert_eq!(mode(&[1, 3, 7, 3, 2]).unwrap(), vec![3]);
/// assert_eq!(mode(&[1, 3, 7, 3, 1]).unwrap(), vec![1, 3]);
/// ```
pub fn mode<T>(values: &[T]) -> Result<Vec<T>, StatsError>
where
    T: Value,
{
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    FrequencyTable::new(values).modes()
}

/// Computes the sample standard deviation (divides by `n - 1`).
///
/// # Errors
///
/// Returns [`StatsError::InsufficientData`] if `values` has fewer than two
/// values.
///
/// # Examples
///
/// ```
/// # use dicestat_stats::descriptive::sample_std_dev;
/// let sd = sample_std_dev(&[5, 10, 15, 20, 25]).unwrap();
/// assert!((sd - 7.905_694).abs() < 1e-6);
/// ```
pub fn sample_std_dev<T>(values: &[T]) -> Result<f64, StatsError>
where
    T: Value,
{
    std_dev(values, 1)
}

/// Computes the population standard deviation (divides by `n`).
///
/// A single value is rejected even though its population standard deviation
/// is mathematically zero, matching [`sample_std_dev`].
///
/// # Errors
///
/// Returns [`StatsError::InsufficientData`] if `values` has fewer than two
/// values.
///
/// # Examples
///
/// ```
/// # use dicestat_stats::descriptive::population_std_dev;
/// let sd = population_std_dev(&[5, 10, 15, 20, 25]).unwrap();
/// assert!((sd - 7.071_068).abs() < 1e-6);
/// ```
pub fn population_std_dev<T>(values: &[T]) -> Result<f64, StatsError>
where
    T: Value,
{
    std_dev(values, 0)
}

const MIN_STD_DEV_VALUES: usize = 2;

#[expect(clippy::cast_precision_loss)]
fn std_dev<T>(values: &[T], delta_degrees_of_freedom: usize) -> Result<f64, StatsError>
where
    T: Value,
{
    if values.len() < MIN_STD_DEV_VALUES {
        return Err(StatsError::InsufficientData {
            required: MIN_STD_DEV_VALUES,
            actual: values.len(),
        });
    }

    let n = values.len() as f64;
    let mean = value::sum(values) / n;
    let sum_of_squares = values
        .iter()
        .map(|v| (v.as_f64() - mean).powi(2))
        .sum::<f64>();
    Ok((sum_of_squares / (n - delta_degrees_of_freedom as f64)).sqrt())
}

use serde::Serialize;

use crate::{
    StatsError, Value,
    descriptive::{self, median_of_sorted},
    histogram::FrequencyTable,
    truncated, value,
};

/// Every statistic of a dataset computed in one call.
///
/// This combines:
/// - Range and central tendency (min, max, mean, truncated mean, median, mode)
/// - Dispersion (sample and population standard deviation)
/// - A frequency table for histogram display
///
/// # Examples
///
/// ```
/// use dicestat_stats::summary::Summary;
///
/// let values = [7, 4, 7, 9, 2, 7, 6, 11, 5, 8];
/// let summary = Summary::new(&values, 0.1).unwrap();
///
/// assert_eq!(summary.min, 2);
/// assert_eq!(summary.max, 11);
/// assert_eq!(summary.median, 7.0);
/// assert_eq!(summary.mode, vec![7]);
/// assert_eq!(summary.frequencies.count_of(7), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<T> {
    /// The number of values.
    pub count: usize,
    /// The smallest value.
    pub min: T,
    /// The largest value.
    pub max: T,
    /// The arithmetic mean.
    pub mean: f64,
    /// The fraction trimmed from each end for `truncated_mean`.
    pub trim_fraction: f64,
    /// The mean after trimming `trim_fraction` of the values from each end.
    pub truncated_mean: f64,
    /// The median.
    pub median: f64,
    /// The most frequent value(s), in ascending order.
    pub mode: Vec<T>,
    /// The sample standard deviation.
    pub sample_std_dev: f64,
    /// The population standard deviation.
    pub population_std_dev: f64,
    /// Occurrence counts of each distinct value.
    pub frequencies: FrequencyTable<T>,
}

impl<T> Summary<T>
where
    T: Value,
{
    /// Computes the summary of unsorted values.
    ///
    /// # Errors
    ///
    /// Fails with the first validation error of the underlying statistics:
    /// [`StatsError::InsufficientData`] for fewer than two values (the
    /// standard deviations need two), or [`StatsError::InvalidTrim`] for a
    /// `trim_fraction` outside `[0, 0.5)`.
    pub fn new(values: &[T], trim_fraction: f64) -> Result<Self, StatsError> {
        let population_std_dev = descriptive::population_std_dev(values)?;
        let sample_std_dev = descriptive::sample_std_dev(values)?;
        let truncated_mean = truncated::truncated_mean_fraction(values, trim_fraction)?;
        let mean = descriptive::mean(values)?;

        let sorted = value::sorted(values);
        let frequencies = FrequencyTable::from_sorted(&sorted);
        let mode = frequencies.modes()?;
        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Err(StatsError::EmptyInput);
        };

        Ok(Self {
            count: sorted.len(),
            min,
            max,
            mean,
            trim_fraction,
            truncated_mean,
            median: median_of_sorted(&sorted),
            mode,
            sample_std_dev,
            population_std_dev,
            frequencies,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::TrimError;

    use super::*;

    #[test]
    fn test_summary_matches_individual_functions() {
        let values = [5, 3, 7, 1, 1, 7, 9];
        let summary = Summary::new(&values, 2.0 / 7.0).unwrap();

        assert_eq!(summary.count, 7);
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 9);
        assert_eq!(summary.mean, descriptive::mean(&values).unwrap());
        assert_eq!(summary.truncated_mean, 5.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.mode, vec![1, 7]);
        assert_eq!(
            summary.sample_std_dev,
            descriptive::sample_std_dev(&values).unwrap()
        );
        assert_eq!(
            summary.population_std_dev,
            descriptive::population_std_dev(&values).unwrap()
        );
        assert_eq!(summary.frequencies.total(), 7);
    }

    #[test]
    fn test_summary_too_few_values() {
        assert_eq!(
            Summary::<u64>::new(&[], 0.0),
            Err(StatsError::InsufficientData {
                required: 2,
                actual: 0
            })
        );
        assert_eq!(
            Summary::new(&[4_u64], 0.0),
            Err(StatsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_summary_invalid_trim() {
        assert_eq!(
            Summary::new(&[1.0, 2.0], 0.5),
            Err(StatsError::InvalidTrim(TrimError::FractionOutOfRange {
                fraction: 0.5
            }))
        );
    }

    #[test]
    fn test_summary_serialize() {
        let summary = Summary::new(&[2_u64, 4, 4, 6], 0.25).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 4);
        assert_eq!(json["min"], 2);
        assert_eq!(json["max"], 6);
        assert_eq!(json["mode"], serde_json::json!([4]));
        assert_eq!(json["truncated_mean"], 4.0);
        assert_eq!(json["frequencies"]["bins"][1]["count"], 2);
    }
}

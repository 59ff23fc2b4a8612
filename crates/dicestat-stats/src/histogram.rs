use serde::Serialize;

use crate::{StatsError, Value, value};

/// Occurrence counts of each distinct value in a dataset.
///
/// Unlike a binned histogram, every distinct value gets its own bin, which
/// suits discrete data such as dice totals. Bins are kept in ascending order
/// of value. Two values share a bin when they compare equal with `==`; all
/// NaNs share a single bin, placed last.
///
/// # Examples
///
/// ```
/// use dicestat_stats::histogram::FrequencyTable;
///
/// let table = FrequencyTable::new(&[1, 3, 7, 3, 1]);
/// assert_eq!(table.max_count(), 2);
/// assert_eq!(table.count_of(3), 2);
/// assert_eq!(table.count_of(4), 0);
/// assert_eq!(table.modes().unwrap(), vec![1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable<T> {
    bins: Vec<FrequencyBin<T>>,
}

/// A single distinct value and the number of times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyBin<T> {
    /// The value counted by this bin.
    pub value: T,
    /// The number of occurrences of `value`.
    pub count: usize,
}

impl<T> FrequencyTable<T>
where
    T: Value,
{
    /// Counts the values of an unsorted slice.
    ///
    /// The values are copied and sorted internally.
    #[must_use]
    pub fn new(values: &[T]) -> Self {
        Self::from_sorted(&value::sorted(values))
    }

    /// Counts the values of a slice that is already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[T]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        // NaNs sort to both ends depending on their sign bit
        let mut nan_bin = None::<FrequencyBin<T>>;
        let mut bins = Vec::<FrequencyBin<T>>::new();
        for &value in sorted_values {
            if value.is_nan() {
                nan_bin.get_or_insert(FrequencyBin { value, count: 0 }).count += 1;
                continue;
            }
            match bins.last_mut() {
                Some(bin) if bin.value == value => bin.count += 1,
                _ => bins.push(FrequencyBin { value, count: 1 }),
            }
        }
        bins.extend(nan_bin);
        Self { bins }
    }

    /// Returns the bins in ascending order of value.
    #[must_use]
    pub fn bins(&self) -> &[FrequencyBin<T>] {
        &self.bins
    }

    /// Returns `true` if no values were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Returns the number of values counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns the largest count of any bin, or 0 for an empty table.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Returns the number of occurrences of `value`.
    #[must_use]
    pub fn count_of(&self, value: T) -> usize {
        self.bins
            .iter()
            .find(|bin| bin.value == value || (bin.value.is_nan() && value.is_nan()))
            .map_or(0, |bin| bin.count)
    }

    /// Returns every value whose count equals the largest count.
    ///
    /// The values are returned in ascending order.
    pub fn modes(&self) -> Result<Vec<T>, StatsError> {
        if self.bins.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        let max_count = self.max_count();
        Ok(self
            .bins
            .iter()
            .filter(|bin| bin.count == max_count)
            .map(|bin| bin.value)
            .collect())
    }
}

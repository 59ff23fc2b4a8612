use std::cmp::Ordering;

use num_traits::AsPrimitive;

/// A numeric sample accepted by the statistics functions.
///
/// Every primitive integer and floating-point type implements this trait.
/// Statistics are always computed and returned as `f64`, whatever the
/// element type is.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use dicestat_stats::Value;
///
/// assert_eq!(Value::total_cmp(&3_u8, &7_u8), Ordering::Less);
/// assert_eq!(Value::total_cmp(&-0.0_f64, &0.0_f64), Ordering::Less);
/// assert_eq!(7_i32.as_f64(), 7.0);
/// ```
pub trait Value: Copy + PartialEq + AsPrimitive<f64> {
    /// Compares two values under a total order.
    ///
    /// Integers use their natural order. Floats use IEEE 754 `totalOrder`,
    /// so `-0.0 < 0.0` and NaNs sort to the ends instead of poisoning the sort.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` for a floating-point NaN. Always `false` for integers.
    fn is_nan(&self) -> bool {
        false
    }

    /// Converts the value to `f64`.
    ///
    /// 64-bit integers beyond 2^53 lose precision.
    #[must_use]
    fn as_f64(self) -> f64 {
        self.as_()
    }
}

macro_rules! impl_value_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Value for $ty {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_value_for_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Value for $ty {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }

                fn is_nan(&self) -> bool {
                    <$ty>::is_nan(*self)
                }
            }
        )*
    };
}

impl_value_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_value_for_float!(f32, f64);

/// Returns a copy of `values` sorted in ascending order.
pub(crate) fn sorted<T>(values: &[T]) -> Vec<T>
where
    T: Value,
{
    let mut sorted = values.to_vec();
    sorted.sort_by(T::total_cmp);
    sorted
}

/// Sums the values in `f64`, left to right.
pub(crate) fn sum<T>(values: &[T]) -> f64
where
    T: Value,
{
    values.iter().map(|v| v.as_f64()).sum()
}

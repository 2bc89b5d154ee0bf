//! Descriptive statistics over numeric sequences.
//!
//! Every function borrows its input and never reorders it. Functions that need a
//! minimum number of elements return a [`CollectionError`] instead of a sentinel.
//!
//! ```
//! use sovran_collections::statistics;
//!
//! let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(statistics::median(&samples)?, 3.0);
//! assert_eq!(statistics::range(&samples)?, (1.0, 5.0));
//! assert_eq!(statistics::variance(&samples)?, 2.5);
//! # Ok::<(), sovran_collections::CollectionError>(())
//! ```

use crate::error::{CollectionError, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Add, Div, Sub};

/// Numbers the statistics functions accept: signed integers and floats
pub trait Numeric:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Div<Output = Self>
{
    fn to_f64(self) -> f64;

    /// Converts back from `f64`, truncating toward zero for integer types.
    fn from_f64(value: f64) -> Self;

    /// Average of `a` and `b` without intermediate overflow.
    ///
    /// Integers round toward zero, matching `(a + b) / 2` wherever that sum fits.
    fn midpoint(a: Self, b: Self) -> Self;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                fn midpoint(a: Self, b: Self) -> Self {
                    // Opposite signs cannot overflow.
                    if (a < 0) != (b < 0) {
                        (a + b) / 2
                    } else {
                        a / 2 + b / 2 + (a % 2 + b % 2) / 2
                    }
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                fn midpoint(a: Self, b: Self) -> Self {
                    a / 2.0 + b / 2.0
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize);
impl_numeric_float!(f32, f64);

fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

fn sorted<T: Numeric>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.sort_by(compare);
    copy
}

fn require_len(operation: &'static str, actual: usize, required: usize) -> Result<()> {
    match actual {
        0 if required == 1 => Err(CollectionError::EmptyInput { operation }),
        n if n < required => Err(CollectionError::InsufficientData {
            operation,
            required,
            actual,
        }),
        _ => Ok(()),
    }
}

/// Counts how often each item occurs
pub fn frequency<T: Hash + Eq + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

/// Returns the items with the highest count, in first-occurrence order
///
/// If every item occurs once, every distinct item is returned. Empty input yields
/// an empty vector.
pub fn mode<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
    let mut counts = frequency(items);
    let highest = counts.values().copied().max().unwrap_or(0);
    items
        .iter()
        .filter(|item| counts.remove(*item) == Some(highest))
        .cloned()
        .collect()
}

/// Returns the middle value
///
/// For an even number of items this is the average of the two middle values;
/// integers round toward zero and never overflow.
///
/// # Errors
///
/// Returns `CollectionError::EmptyInput` if `items` is empty.
pub fn median<T: Numeric>(items: &[T]) -> Result<T> {
    require_len("median", items.len(), 1)?;
    let sorted = sorted(items);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok(T::midpoint(sorted[mid - 1], sorted[mid]))
    } else {
        Ok(sorted[mid])
    }
}

/// Returns the smallest and largest value as `(min, max)`
///
/// # Errors
///
/// Returns `CollectionError::EmptyInput` if `items` is empty.
pub fn range<T: Numeric>(items: &[T]) -> Result<(T, T)> {
    let (first, rest) = items
        .split_first()
        .ok_or(CollectionError::EmptyInput { operation: "range" })?;
    Ok(rest.iter().fold((*first, *first), |(min, max), &x| {
        let min = if compare(&x, &min) == Ordering::Less { x } else { min };
        let max = if compare(&x, &max) == Ordering::Greater { x } else { max };
        (min, max)
    }))
}

/// Returns the arithmetic mean
///
/// # Errors
///
/// Returns `CollectionError::EmptyInput` if `items` is empty.
pub fn mean<T: Numeric>(items: &[T]) -> Result<f64> {
    require_len("mean", items.len(), 1)?;
    let sum: f64 = items.iter().map(|x| x.to_f64()).sum();
    Ok(sum / items.len() as f64)
}

/// Returns the sample variance (divided by `n - 1`)
///
/// # Errors
///
/// Returns `CollectionError::InsufficientData` if fewer than two items are given.
pub fn variance<T: Numeric>(items: &[T]) -> Result<f64> {
    require_len("variance", items.len(), 2)?;
    let mean = mean(items)?;
    let squares: f64 = items
        .iter()
        .map(|x| {
            let delta = x.to_f64() - mean;
            delta * delta
        })
        .sum();
    Ok(squares / (items.len() - 1) as f64)
}

/// Returns the sample standard deviation
///
/// # Errors
///
/// Returns `CollectionError::InsufficientData` if fewer than two items are given.
pub fn standard_deviation<T: Numeric>(items: &[T]) -> Result<f64> {
    variance(items)
        .map(f64::sqrt)
        .map_err(|e| match e {
            CollectionError::InsufficientData {
                required, actual, ..
            } => CollectionError::InsufficientData {
                operation: "standard deviation",
                required,
                actual,
            },
            other => other,
        })
}

/// Returns the value at fraction `p` of the sorted items
///
/// `p` runs from `0.0` (minimum) to `1.0` (maximum). When the rank lands on an
/// item, that item is returned as is. Between ranks the result is linearly
/// interpolated in `f64`, then converted back to `T`, so integers beyond 2^53 lose
/// precision there.
///
/// # Examples
///
/// ```
/// use sovran_collections::statistics::percentile;
///
/// assert_eq!(percentile(&[1, 2, 3, 4, 5], 0.5)?, 3);
/// assert_eq!(percentile(&[10.0, 20.0], 0.25)?, 12.5);
/// # Ok::<(), sovran_collections::CollectionError>(())
/// ```
///
/// # Errors
///
/// - Returns `CollectionError::InvalidPercentile` if `p` is outside `0.0..=1.0`
/// - Returns `CollectionError::EmptyInput` if `items` is empty
pub fn percentile<T: Numeric>(items: &[T], p: f64) -> Result<T> {
    if !(0.0..=1.0).contains(&p) {
        return Err(CollectionError::InvalidPercentile(p));
    }
    require_len("percentile", items.len(), 1)?;

    let sorted = sorted(items);
    let last = sorted.len() - 1;
    let rank = last as f64 * p;
    let index = rank.floor() as usize;
    if index >= last {
        return Ok(sorted[last]);
    }

    let fraction = rank - index as f64;
    if fraction == 0.0 {
        return Ok(sorted[index]);
    }
    let lower = sorted[index].to_f64();
    let upper = sorted[index + 1].to_f64();
    Ok(T::from_f64(lower * (1.0 - fraction) + upper * fraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_frequency() {
        let freq = frequency(&["a", "b", "b", "c", "c", "c", "d"]);
        assert_eq!(freq["a"], 1);
        assert_eq!(freq["b"], 2);
        assert_eq!(freq["c"], 3);
        assert_eq!(freq["d"], 1);
        assert!(frequency::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_mode() {
        assert_eq!(mode(&[1, 2, 2, 3, 3]), vec![2, 3]);
        assert_eq!(mode(&[3, 3, 2, 2, 1]), vec![3, 2]);
        assert_eq!(mode(&[4, 5, 6]), vec![4, 5, 6]);
        assert!(mode::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_median() -> Result<()> {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0])?, 2.5);
        assert_eq!(median(&[3.0, 1.0, 2.0])?, 2.0);
        assert_eq!(median(&[1.0, 2.0])?, 1.5);
        assert_eq!(median(&[1, 2, 3, 4, 5])?, 3);
        // Integer division for even-length integer input
        assert_eq!(median(&[1, 2])?, 1);
        assert!(matches!(
            median::<f64>(&[]),
            Err(CollectionError::EmptyInput { operation: "median" })
        ));
        Ok(())
    }

    #[test]
    fn test_median_near_integer_limits() -> Result<()> {
        assert_eq!(median(&[i8::MAX, i8::MAX])?, i8::MAX);
        assert_eq!(median(&[100i8, 100])?, 100);
        assert_eq!(median(&[i64::MAX, i64::MAX - 2])?, i64::MAX - 1);
        assert_eq!(median(&[i64::MIN, i64::MIN + 1])?, i64::MIN + 1);
        assert_eq!(median(&[i32::MIN, i32::MAX])?, 0);
        Ok(())
    }

    #[test]
    fn test_midpoint_rounds_toward_zero() {
        for (a, b) in [(5, 6), (-5, -6), (-5, 6), (5, -6), (-3, 2), (7, 7), (-1, -1), (0, -1)] {
            assert_eq!(<i32 as Numeric>::midpoint(a, b), (a + b) / 2, "{a} {b}");
        }
        assert_eq!(<f64 as Numeric>::midpoint(f64::MAX, f64::MAX), f64::MAX);
    }

    #[test]
    fn test_median_leaves_input_untouched() -> Result<()> {
        let input = [5, 1, 4];
        assert_eq!(median(&input)?, 4);
        assert_eq!(input, [5, 1, 4]);
        Ok(())
    }

    #[test]
    fn test_range() -> Result<()> {
        assert_eq!(range(&[3.0, 1.0, 4.0, 2.0])?, (1.0, 4.0));
        assert_eq!(range(&[7])?, (7, 7));
        assert_eq!(range(&[-3, 10, 0])?, (-3, 10));
        assert!(range::<i64>(&[]).is_err());
        Ok(())
    }

    #[test]
    fn test_mean() -> Result<()> {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0])?, 2.5);
        assert_eq!(mean(&[1, 2])?, 1.5);
        assert!(matches!(
            mean::<f64>(&[]),
            Err(CollectionError::EmptyInput { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_variance() -> Result<()> {
        assert!(matches!(
            variance::<f64>(&[]),
            Err(CollectionError::InsufficientData {
                required: 2,
                actual: 0,
                ..
            })
        ));
        assert!(variance(&[1.0]).is_err());
        assert!(approx_eq(variance(&[1.0, 2.0])?, 0.5));
        assert!(approx_eq(variance(&[1.0, 2.0, 3.0])?, 1.0));
        assert!(approx_eq(variance(&[1, 2, 3, 4, 5])?, 2.5));
        Ok(())
    }

    #[test]
    fn test_standard_deviation() -> Result<()> {
        let result = standard_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
        assert!(approx_eq(result, 1.5811388300841898));

        match standard_deviation(&[1.0]) {
            Err(CollectionError::InsufficientData { operation, .. }) => {
                assert_eq!(operation, "standard deviation")
            }
            other => panic!("expected InsufficientData, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_percentile() -> Result<()> {
        assert_eq!(percentile(&[1, 2, 3, 4, 5], 0.5)?, 3);
        assert_eq!(percentile(&[5, 4, 3, 2, 1], 0.0)?, 1);
        assert_eq!(percentile(&[5, 4, 3, 2, 1], 1.0)?, 5);
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 0.5)?, 2.5);
        assert_eq!(percentile(&[42.0], 0.3)?, 42.0);
        Ok(())
    }

    #[test]
    fn test_percentile_exact_rank_keeps_large_integers() -> Result<()> {
        let items = [i64::MAX, i64::MAX - 1];
        assert_eq!(percentile(&items, 0.0)?, i64::MAX - 1);
        assert_eq!(percentile(&items, 1.0)?, i64::MAX);
        assert_eq!(percentile(&[1, 2, 3, 4, 5], 0.25)?, 2);
        Ok(())
    }

    #[test]
    fn test_percentile_errors() {
        assert!(matches!(
            percentile::<f64>(&[], 0.5),
            Err(CollectionError::EmptyInput { .. })
        ));
        assert!(matches!(
            percentile(&[1.0], 1.5),
            Err(CollectionError::InvalidPercentile(_))
        ));
        assert!(matches!(
            percentile(&[1.0], f64::NAN),
            Err(CollectionError::InvalidPercentile(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = median::<f64>(&[]).unwrap_err();
        assert_eq!(err.to_string(), "cannot calculate median of an empty sequence");

        let err = variance(&[1.0]).unwrap_err();
        assert_eq!(err.to_string(), "variance requires at least 2 elements, got 1");
    }
}

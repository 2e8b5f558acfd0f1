// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Numeric Reductions
//!
//! Generic folds over sequences of numbers: products (plain and checked)
//! and arithmetic means. Bounds come from `num-traits`, so the same code
//! serves integers and floats.
//!
//! ## Overflow
//!
//! `product` and `mean` accumulate in the element type and overflow exactly
//! like the underlying `*` and `+` would. Use `checked_product` to detect
//! overflow, or `mean_as` to accumulate in a wider type.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::num::{mean, mean_as, product};
//!
//! assert_eq!(product(&[1, 2, 3, 4], 1), 24);
//! assert_eq!(mean(vec![1, 2, 3, 4, 5]), Some(3));
//!
//! let big = vec![i32::MAX; 3];
//! assert_eq!(mean_as::<i64, _>(big), Some(i32::MAX as i64));
//! ```

use num_traits::{CheckedMul, NumCast, Zero};
use std::ops::{Add, Div, Mul};

/// Multiplies `init` by every element of `values`, in order.
///
/// Returns `init` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::num::product;
///
/// assert_eq!(product(&[1, 2, 3, 4], 2), 48);
/// assert_eq!(product(Vec::<i32>::new(), 1), 1);
/// ```
#[inline]
pub fn product<I, T>(values: I, init: T) -> T
where
    I: IntoIterator,
    T: Mul<I::Item, Output = T>,
{
    values.into_iter().fold(init, |acc, value| acc * value)
}

/// Multiplies `init` by every element of `values`, returning `None` on
/// overflow.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::num::checked_product;
///
/// assert_eq!(checked_product([2u8, 3, 4], 1u8), Some(24));
/// assert_eq!(checked_product([16u8, 16], 1u8), None);
/// ```
#[inline]
pub fn checked_product<I, T>(values: I, init: T) -> Option<T>
where
    I: IntoIterator,
    I::Item: Into<T>,
    T: CheckedMul,
{
    values
        .into_iter()
        .try_fold(init, |acc, value| acc.checked_mul(&value.into()))
}

/// Returns the arithmetic mean of `values`, accumulated and divided in the
/// element type.
///
/// An empty sequence has mean zero. Integer means truncate towards zero.
/// Returns `None` only if the element count cannot be represented in `T`
/// (for example more than 127 values of type `i8`).
///
/// # Examples
///
/// ```rust
/// # use tandem_core::num::mean;
///
/// assert_eq!(mean([1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(mean(Vec::<i32>::new()), Some(0));
/// ```
#[inline]
pub fn mean<I, T>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Zero + Add<Output = T> + Div<Output = T> + NumCast,
{
    mean_as(values)
}

/// Returns the arithmetic mean of `values`, converting each element into
/// `R` before accumulating.
///
/// Choosing a wider `R` than the element type avoids overflow of the sum.
/// An empty sequence has mean zero; `None` is returned only if the element
/// count cannot be represented in `R`.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::num::mean_as;
///
/// let values = [i32::MAX, i32::MAX, i32::MAX];
/// assert_eq!(mean_as::<i64, _>(values), Some(i32::MAX as i64));
/// assert_eq!(mean_as::<f64, _>([1, 2]), Some(1.5));
/// ```
pub fn mean_as<R, I>(values: I) -> Option<R>
where
    I: IntoIterator,
    I::Item: Into<R>,
    R: Zero + Add<Output = R> + Div<Output = R> + NumCast,
{
    let (sum, count) = values
        .into_iter()
        .fold((R::zero(), 0usize), |(sum, count), value| {
            (sum + value.into(), count + 1)
        });
    if count == 0 {
        return Some(R::zero());
    }
    let divisor = <R as NumCast>::from(count)?;
    Some(sum / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_non_empty() {
        assert_eq!(product(&[1, 2, 3, 4], 1), 24);
    }

    #[test]
    fn test_product_with_initial_value() {
        assert_eq!(product(vec![1, 2, 3, 4], 2), 48);
    }

    #[test]
    fn test_product_empty_returns_init() {
        assert_eq!(product(Vec::<i32>::new(), 1), 1);
    }

    #[test]
    fn test_product_single_element() {
        assert_eq!(product([5], 1), 5);
    }

    #[test]
    fn test_product_with_zero() {
        assert_eq!(product([1, 2, 0, 4], 1), 0);
    }

    #[test]
    fn test_product_floats() {
        assert!((product([0.5f64, 4.0, 1.5], 1.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_checked_product_detects_overflow() {
        assert_eq!(checked_product([i32::MAX, 2], 1i32), None);
        assert_eq!(checked_product([3i64, -4], 1i64), Some(-12));
        assert_eq!(checked_product(Vec::<u8>::new(), 7u8), Some(7));
    }

    #[test]
    fn test_checked_product_widening() {
        assert_eq!(checked_product([200u8, 200], 1u32), Some(40_000));
    }

    #[test]
    fn test_mean_non_empty() {
        assert_eq!(mean(vec![1, 2, 3, 4, 5]), Some(3));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(Vec::<i32>::new()), Some(0));
    }

    #[test]
    fn test_mean_single_element() {
        assert_eq!(mean([42]), Some(42));
    }

    #[test]
    fn test_mean_floating_point() {
        let result = mean(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((result - 3.0f64).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_large_numbers() {
        let values: Vec<i64> = vec![
            1_000_000_000,
            2_000_000_000,
            3_000_000_000,
            4_000_000_000,
            5_000_000_000,
        ];
        assert_eq!(mean(values), Some(3_000_000_000));
    }

    #[test]
    fn test_mean_negative_numbers() {
        assert_eq!(mean([-1, -2, -3, -4, -5]), Some(-3));
    }

    #[test]
    fn test_mean_by_copied_references() {
        let values = vec![2, 4, 9];
        assert_eq!(mean(values.iter().copied()), Some(5));
    }

    #[test]
    fn test_mean_unrepresentable_count() {
        let values = vec![0i8; 200];
        assert_eq!(mean(values), None);
    }

    #[test]
    fn test_mean_as_widens_accumulator() {
        let values = vec![i32::MAX; 3];
        assert_eq!(mean_as::<i64, _>(values), Some(i32::MAX as i64));
    }

    #[test]
    fn test_mean_as_float_of_integers() {
        assert_eq!(mean_as::<f64, _>([1, 2, 3, 4]), Some(2.5));
    }

    #[test]
    fn test_mean_as_empty() {
        assert_eq!(mean_as::<i64, _>(Vec::<i32>::new()), Some(0));
    }
}

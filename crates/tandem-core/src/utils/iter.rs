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

//! # Iterator Stepping and Range Lengths
//!
//! Helpers for moving several iterators together and for comparing the
//! lengths of ranges.
//!
//! ## Highlights
//!
//! - `advance` steps a single iterator `n` times and reports how far it got.
//! - `advance_all!` steps any number of iterators (of possibly different
//!   types) by the same amount.
//! - `distance_difference` and `longer_range` compare range lengths.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::LinkedList;
//! use tandem_core::advance_all;
//!
//! let v = vec![1, 2, 3, 4, 5];
//! let l: LinkedList<i32> = (1..=5).collect();
//! let mut a = v.iter();
//! let mut b = l.iter();
//!
//! advance_all!(3; a, b);
//! assert_eq!(a.next(), Some(&4));
//! assert_eq!(b.next(), Some(&4));
//! ```

/// Steps `iter` forward `n` times, discarding the items.
///
/// Returns the number of steps actually taken, which is smaller than `n`
/// only if the iterator ran out.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::utils::iter::advance;
///
/// let mut it = [1, 2, 3].into_iter();
/// assert_eq!(advance(&mut it, 2), 2);
/// assert_eq!(it.next(), Some(3));
/// assert_eq!(advance(&mut it, 5), 0);
/// ```
#[inline]
pub fn advance<I>(iter: &mut I, n: usize) -> usize
where
    I: Iterator + ?Sized,
{
    let mut taken = 0;
    while taken < n && iter.next().is_some() {
        taken += 1;
    }
    taken
}

/// Steps every given iterator forward by the same amount (default 1).
///
/// ```rust
/// # use tandem_core::advance_all;
/// let mut a = [1, 2, 3].iter();
/// let mut b = "xyz".chars();
///
/// advance_all!(a, b);
/// assert_eq!((a.next(), b.next()), (Some(&2), Some('y')));
/// ```
#[macro_export]
macro_rules! advance_all {
    ($n:expr; $($iter:expr),+ $(,)?) => {{
        let n: usize = $n;
        $( $crate::utils::iter::advance(&mut $iter, n); )+
    }};
    ($($iter:expr),+ $(,)?) => {
        $crate::advance_all!(1; $($iter),+)
    };
}

/// Returns `len(first) - len(second)` as a signed number.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::utils::iter::distance_difference;
///
/// assert_eq!(distance_difference(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5, 6]), -1);
/// assert_eq!(distance_difference(&[1, 2], &[] as &[i32]), 2);
/// ```
#[inline]
pub fn distance_difference<A, B>(first: A, second: B) -> i64
where
    A: IntoIterator,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator,
    B::IntoIter: ExactSizeIterator,
{
    first.into_iter().len() as i64 - second.into_iter().len() as i64
}

/// Returns the longer of two slices, preferring `first` on a tie.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::utils::iter::longer_range;
///
/// let a = [1, 2, 3];
/// let b = [1, 2, 3, 4];
/// assert_eq!(longer_range(&a, &b), &b);
/// assert!(std::ptr::eq(longer_range(&a, &a[..]), &a[..]));
/// ```
#[inline]
pub fn longer_range<'a, T>(first: &'a [T], second: &'a [T]) -> &'a [T] {
    if distance_difference(first, second) >= 0 {
        first
    } else {
        second
    }
}

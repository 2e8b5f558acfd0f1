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

//! # In-Place Index Permutation
//!
//! Rearranges a sequence according to a permutation given as an array of
//! target indices, without allocating. Each permutation cycle is resolved by
//! following it once and swapping along the way, so the total work is
//! `Θ(n)` swaps regardless of the cycle structure and the extra space is
//! `O(1)`.
//!
//! The index array is used as working storage: when the call returns it has
//! been normalized to the identity `[0, 1, ..., n - 1]`. Callers that still
//! need the permutation afterwards must keep a copy.
//!
//! ## Directions
//!
//! - [`reorder_elements_by_indices`] scatters: the element at position `i`
//!   ends up at position `indices[i]`.
//! - [`gather_elements_by_indices`] gathers: position `p` receives the
//!   element that was at `indices[p]`. This is the natural way to apply a
//!   sorted order produced by `sort_by` on an index vector.
//!
//! Both directions agree on involutions such as reversals.
//!
//! ## Invalid input
//!
//! A permutation that is not a bijection on `0..n` is a caller error. The
//! unchecked entry points never loop forever and never touch memory out of
//! bounds on such input: they panic as soon as the walk hits an out-of-range
//! or duplicate index (debug builds validate the whole array up front). The
//! `try_*` variants validate first and leave both inputs untouched on error.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::algorithm::permutation::reorder_elements_by_indices;
//!
//! let mut elements = vec![10, 20, 30, 40];
//! let mut indices = vec![3, 2, 1, 0];
//! reorder_elements_by_indices(&mut elements, &mut indices);
//!
//! assert_eq!(elements, vec![40, 30, 20, 10]);
//! assert_eq!(indices, vec![0, 1, 2, 3]);
//! ```

use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

/// A positionally addressed sequence whose elements can be swapped in place.
///
/// This is the only capability the permutation engine needs. Implementing it
/// for a bundle of parallel sequences permutes all of them in lock-step.
pub trait Permutable {
    /// Returns the number of addressable positions.
    fn len(&self) -> usize;

    /// Returns `true` if there are no addressable positions.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swaps the elements at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `a` or `b` is out of bounds.
    fn swap_elements(&mut self, a: usize, b: usize);
}

impl<T> Permutable for [T] {
    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn swap_elements(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T> Permutable for Vec<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn swap_elements(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Permutable for VecDeque<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn swap_elements(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// The ways an index array can fail to be a permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermutationError {
    /// The index array and the element sequence have different lengths.
    LengthMismatch {
        /// The number of elements.
        elements: usize,
        /// The number of indices.
        indices: usize,
    },
    /// An index is not within `0..len`.
    OutOfRange {
        /// The position in the index array holding the bad index.
        position: usize,
        /// The offending index.
        index: usize,
        /// The length of the index array.
        len: usize,
    },
    /// An index occurs more than once.
    Duplicate {
        /// The position of the second occurrence.
        position: usize,
        /// The repeated index.
        index: usize,
    },
}

impl std::fmt::Display for PermutationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { elements, indices } => write!(
                f,
                "expected {} indices for {} elements but got {}",
                elements, elements, indices
            ),
            Self::OutOfRange {
                position,
                index,
                len,
            } => write!(
                f,
                "index {} at position {} is out of range for length {}",
                index, position, len
            ),
            Self::Duplicate { position, index } => {
                write!(f, "index {} at position {} occurs more than once", index, position)
            }
        }
    }
}

impl std::error::Error for PermutationError {}

/// Checks that `indices` is a bijection on `0..indices.len()`.
///
/// Returns the first defect found, scanning from the front.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::permutation::{validate_permutation, PermutationError};
///
/// assert!(validate_permutation(&[2, 0, 1]).is_ok());
/// assert_eq!(
///     validate_permutation(&[0, 0, 1]),
///     Err(PermutationError::Duplicate { position: 1, index: 0 })
/// );
/// ```
pub fn validate_permutation(indices: &[usize]) -> Result<(), PermutationError> {
    let len = indices.len();
    let mut seen = FixedBitSet::with_capacity(len);
    for (position, &index) in indices.iter().enumerate() {
        if index >= len {
            return Err(PermutationError::OutOfRange {
                position,
                index,
                len,
            });
        }
        if seen.put(index) {
            return Err(PermutationError::Duplicate { position, index });
        }
    }
    Ok(())
}

/// Returns the number of swaps either permutation direction performs for
/// `indices`, which is `n` minus the number of cycles.
///
/// Nothing is mutated.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::permutation::swap_count;
///
/// assert_eq!(swap_count(&[0, 1, 2]), Ok(0));
/// assert_eq!(swap_count(&[1, 2, 0]), Ok(2));
/// assert_eq!(swap_count(&[1, 0, 3, 2]), Ok(2));
/// ```
pub fn swap_count(indices: &[usize]) -> Result<usize, PermutationError> {
    validate_permutation(indices)?;

    let len = indices.len();
    let mut visited = FixedBitSet::with_capacity(len);
    let mut cycles = 0;
    for start in 0..len {
        if visited.contains(start) {
            continue;
        }
        cycles += 1;
        let mut current = start;
        while !visited.put(current) {
            current = indices[current];
        }
    }
    Ok(len - cycles)
}

#[inline(always)]
fn assert_matching_lengths(caller: &str, elements: usize, indices: usize) {
    assert_eq!(
        elements, indices,
        "called `{}` with mismatched lengths: there are {} elements but {} indices",
        caller, elements, indices
    );
}

/// Moves the element at position `i` to position `indices[i]`, in place.
///
/// Afterwards `indices` holds the identity permutation. Identity entries cost
/// nothing; every other element is swapped into its final position exactly
/// once.
///
/// # Panics
///
/// Panics if the lengths differ, or if `indices` is not a permutation of
/// `0..len` (an out-of-range or duplicate index is detected during the walk;
/// `elements` may then be partially permuted). Debug builds validate the
/// full index array before touching anything.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::permutation::reorder_elements_by_indices;
///
/// let mut elements = vec!['a', 'b', 'c'];
/// let mut indices = vec![1, 2, 0];
/// reorder_elements_by_indices(&mut elements, &mut indices);
///
/// // 'a' went to 1, 'b' went to 2, 'c' went to 0.
/// assert_eq!(elements, vec!['c', 'a', 'b']);
/// assert_eq!(indices, vec![0, 1, 2]);
/// ```
pub fn reorder_elements_by_indices<P>(elements: &mut P, indices: &mut [usize])
where
    P: Permutable + ?Sized,
{
    let len = elements.len();
    assert_matching_lengths("reorder_elements_by_indices", len, indices.len());
    debug_assert!(
        validate_permutation(indices).is_ok(),
        "called `reorder_elements_by_indices` with indices that are not a permutation: {:?}",
        validate_permutation(indices)
    );

    for position in 0..len {
        loop {
            let target = indices[position];
            if target == position {
                break;
            }
            assert!(
                target < len,
                "called `reorder_elements_by_indices` with index {} out of range for length {}",
                target,
                len
            );
            // `target` already holds its final element, so a second index claims it.
            assert!(
                indices[target] != target,
                "called `reorder_elements_by_indices` with duplicate index {}",
                target
            );
            elements.swap_elements(position, target);
            indices.swap(position, target);
        }
    }
}

/// Fills position `p` with the element that was at `indices[p]`, in place.
///
/// This is the inverse direction of [`reorder_elements_by_indices`]. Each
/// cycle is followed from its smallest position, swapping the current
/// element with its source and marking the visited entry as settled.
/// Afterwards `indices` holds the identity permutation.
///
/// # Panics
///
/// Same conditions as [`reorder_elements_by_indices`].
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::permutation::gather_elements_by_indices;
///
/// let mut elements = vec!['a', 'b', 'c'];
/// let mut indices = vec![1, 2, 0];
/// gather_elements_by_indices(&mut elements, &mut indices);
///
/// // Position 0 took 'b' (from 1), 1 took 'c' (from 2), 2 took 'a' (from 0).
/// assert_eq!(elements, vec!['b', 'c', 'a']);
/// assert_eq!(indices, vec![0, 1, 2]);
/// ```
pub fn gather_elements_by_indices<P>(elements: &mut P, indices: &mut [usize])
where
    P: Permutable + ?Sized,
{
    let len = elements.len();
    assert_matching_lengths("gather_elements_by_indices", len, indices.len());
    debug_assert!(
        validate_permutation(indices).is_ok(),
        "called `gather_elements_by_indices` with indices that are not a permutation: {:?}",
        validate_permutation(indices)
    );

    for start in 0..len {
        let mut current = start;
        while indices[current] != start {
            let next = indices[current];
            assert!(
                next < len,
                "called `gather_elements_by_indices` with index {} out of range for length {}",
                next,
                len
            );
            // Settled entries and untouched fixed points may not be reached twice.
            assert!(
                indices[next] != next,
                "called `gather_elements_by_indices` with duplicate index {}",
                next
            );
            elements.swap_elements(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}

#[inline]
fn validate_against<P>(elements: &P, indices: &[usize]) -> Result<(), PermutationError>
where
    P: Permutable + ?Sized,
{
    if elements.len() != indices.len() {
        return Err(PermutationError::LengthMismatch {
            elements: elements.len(),
            indices: indices.len(),
        });
    }
    validate_permutation(indices)
}

/// Checked variant of [`reorder_elements_by_indices`].
///
/// Validates the lengths and the permutation before moving anything; on
/// error both `elements` and `indices` are left untouched.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::permutation::{try_reorder_elements_by_indices, PermutationError};
///
/// let mut elements = vec![1, 2, 3];
/// let mut indices = vec![0, 3, 1];
/// let err = try_reorder_elements_by_indices(&mut elements, &mut indices).unwrap_err();
///
/// assert_eq!(err, PermutationError::OutOfRange { position: 1, index: 3, len: 3 });
/// assert_eq!(elements, vec![1, 2, 3]);
/// ```
pub fn try_reorder_elements_by_indices<P>(
    elements: &mut P,
    indices: &mut [usize],
) -> Result<(), PermutationError>
where
    P: Permutable + ?Sized,
{
    if let Err(error) = validate_against(elements, indices) {
        warn_log!(%error, "rejected index permutation");
        return Err(error);
    }
    reorder_elements_by_indices(elements, indices);
    Ok(())
}

/// Checked variant of [`gather_elements_by_indices`].
///
/// Validates the lengths and the permutation before moving anything; on
/// error both `elements` and `indices` are left untouched.
pub fn try_gather_elements_by_indices<P>(
    elements: &mut P,
    indices: &mut [usize],
) -> Result<(), PermutationError>
where
    P: Permutable + ?Sized,
{
    if let Err(error) = validate_against(elements, indices) {
        warn_log!(%error, "rejected index permutation");
        return Err(error);
    }
    gather_elements_by_indices(elements, indices);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;

    /// A slice wrapper that counts swaps.
    struct Counting<'a, T> {
        inner: &'a mut [T],
        swaps: usize,
    }

    impl<'a, T> Counting<'a, T> {
        fn new(inner: &'a mut [T]) -> Self {
            Self { inner, swaps: 0 }
        }
    }

    impl<T> Permutable for Counting<'_, T> {
        fn len(&self) -> usize {
            self.inner.len()
        }

        fn swap_elements(&mut self, a: usize, b: usize) {
            self.swaps += 1;
            self.inner.swap(a, b);
        }
    }

    fn random_permutation(rng: &mut ChaCha8Rng, len: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..len).collect();
        perm.shuffle(rng);
        perm
    }

    fn identity(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn test_reorder_reverses() {
        let mut elements = vec![10, 20, 30, 40];
        let mut indices = vec![3, 2, 1, 0];
        reorder_elements_by_indices(&mut elements, &mut indices);
        assert_eq!(elements, vec![40, 30, 20, 10]);
        assert_eq!(indices, identity(4));
    }

    #[test]
    fn test_reorder_identity_is_untouched() {
        let mut elements = vec![10, 20, 30, 40];
        let mut indices = identity(4);
        let mut counting = Counting::new(&mut elements);
        reorder_elements_by_indices(&mut counting, &mut indices);
        assert_eq!(counting.swaps, 0);
        assert_eq!(elements, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_reorder_single_element() {
        let mut elements = vec![10];
        let mut indices = vec![0];
        reorder_elements_by_indices(&mut elements, &mut indices);
        assert_eq!(elements, vec![10]);
        assert_eq!(indices, vec![0]);
    }

    #[test]
    fn test_reorder_empty() {
        let mut elements: Vec<i32> = vec![];
        let mut indices: Vec<usize> = vec![];
        reorder_elements_by_indices(&mut elements, &mut indices);
        assert!(elements.is_empty());
        assert!(indices.is_empty());
    }

    #[test]
    fn test_reorder_three_cycle_scatters() {
        let mut elements = vec!["a", "b", "c"];
        let mut indices = vec![1, 2, 0];
        reorder_elements_by_indices(&mut elements, &mut indices);
        assert_eq!(elements, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_gather_three_cycle() {
        let mut elements = vec!["a", "b", "c"];
        let mut indices = vec![1, 2, 0];
        gather_elements_by_indices(&mut elements, &mut indices);
        assert_eq!(elements, vec!["b", "c", "a"]);
        assert_eq!(indices, identity(3));
    }

    #[test]
    fn test_reorder_randomized_scatter_property() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for len in [0usize, 1, 2, 3, 7, 16, 100, 257] {
            let original: Vec<usize> = (0..len).map(|i| i * 10 + 1).collect();
            let perm = random_permutation(&mut rng, len);

            let mut elements = original.clone();
            let mut indices = perm.clone();
            reorder_elements_by_indices(&mut elements, &mut indices);

            for i in 0..len {
                assert_eq!(elements[perm[i]], original[i], "len {} position {}", len, i);
            }
            assert_eq!(indices, identity(len));
        }
    }

    #[test]
    fn test_gather_randomized_property() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for len in [0usize, 1, 5, 64, 300] {
            let original: Vec<usize> = (0..len).map(|i| i * 3).collect();
            let perm = random_permutation(&mut rng, len);

            let mut elements = original.clone();
            let mut indices = perm.clone();
            gather_elements_by_indices(&mut elements, &mut indices);

            for p in 0..len {
                assert_eq!(elements[p], original[perm[p]]);
            }
            assert_eq!(indices, identity(len));
        }
    }

    #[test]
    fn test_gather_undoes_reorder() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let original: Vec<u32> = (0..50).collect();
        let perm = random_permutation(&mut rng, 50);

        let mut elements = original.clone();
        let mut indices = perm.clone();
        reorder_elements_by_indices(&mut elements, &mut indices);
        let mut indices = perm.clone();
        gather_elements_by_indices(&mut elements, &mut indices);

        assert_eq!(elements, original);
    }

    #[test]
    fn test_swap_count_matches_engine() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for len in [0usize, 1, 2, 10, 99] {
            let perm = random_permutation(&mut rng, len);
            let expected = swap_count(&perm).unwrap();

            let mut elements: Vec<usize> = (0..len).collect();
            let mut counting = Counting::new(&mut elements);
            let mut indices = perm.clone();
            reorder_elements_by_indices(&mut counting, &mut indices);
            assert_eq!(counting.swaps, expected);

            let mut elements: Vec<usize> = (0..len).collect();
            let mut counting = Counting::new(&mut elements);
            let mut indices = perm.clone();
            gather_elements_by_indices(&mut counting, &mut indices);
            assert_eq!(counting.swaps, expected);
        }
    }

    #[test]
    fn test_reorder_vec_deque() {
        let mut elements: VecDeque<i32> = VecDeque::new();
        elements.push_back(2);
        elements.push_back(3);
        elements.push_front(1);
        let mut indices = vec![2, 0, 1];
        reorder_elements_by_indices(&mut elements, &mut indices);
        assert_eq!(elements, VecDeque::from(vec![2, 3, 1]));
    }

    #[test]
    fn test_reorder_subslice() {
        let mut elements = vec![0, 1, 2, 3, 4, 5];
        let mut indices = vec![1, 0];
        reorder_elements_by_indices(&mut elements[2..4], &mut indices);
        assert_eq!(elements, vec![0, 1, 3, 2, 4, 5]);
    }

    #[test]
    fn test_validate_permutation() {
        assert!(validate_permutation(&[]).is_ok());
        assert!(validate_permutation(&[0]).is_ok());
        assert!(validate_permutation(&[3, 1, 0, 2]).is_ok());
        assert_eq!(
            validate_permutation(&[0, 5, 1]),
            Err(PermutationError::OutOfRange {
                position: 1,
                index: 5,
                len: 3
            })
        );
        assert_eq!(
            validate_permutation(&[1, 2, 1]),
            Err(PermutationError::Duplicate {
                position: 2,
                index: 1
            })
        );
    }

    #[test]
    fn test_try_reorder_rejects_without_mutation() {
        let mut elements = vec![1, 2, 3];
        let mut indices = vec![1, 1, 0];
        let err = try_reorder_elements_by_indices(&mut elements, &mut indices).unwrap_err();
        assert_eq!(
            err,
            PermutationError::Duplicate {
                position: 1,
                index: 1
            }
        );
        assert_eq!(elements, vec![1, 2, 3]);
        assert_eq!(indices, vec![1, 1, 0]);
    }

    #[test]
    fn test_try_gather_rejects_without_mutation() {
        let mut elements = vec!['a', 'b', 'c'];
        let mut indices = vec![0, 3, 1];
        let err = try_gather_elements_by_indices(&mut elements, &mut indices).unwrap_err();
        assert_eq!(
            err,
            PermutationError::OutOfRange {
                position: 1,
                index: 3,
                len: 3
            }
        );
        assert_eq!(elements, vec!['a', 'b', 'c']);
        assert_eq!(indices, vec![0, 3, 1]);

        let mut indices = vec![2, 0, 2];
        assert_eq!(
            try_gather_elements_by_indices(&mut elements, &mut indices),
            Err(PermutationError::Duplicate {
                position: 2,
                index: 2
            })
        );
        assert_eq!(elements, vec!['a', 'b', 'c']);
        assert_eq!(indices, vec![2, 0, 2]);
    }

    #[test]
    fn test_try_gather_length_mismatch() {
        let mut elements = vec![1, 2];
        let mut indices = vec![0, 1, 2];
        assert_eq!(
            try_gather_elements_by_indices(&mut elements, &mut indices),
            Err(PermutationError::LengthMismatch {
                elements: 2,
                indices: 3
            })
        );
        assert_eq!(elements, vec![1, 2]);
    }

    #[test]
    fn test_try_reorder_length_mismatch() {
        let mut elements = vec![1, 2, 3];
        let mut indices = vec![0, 1];
        assert_eq!(
            try_reorder_elements_by_indices(&mut elements, &mut indices),
            Err(PermutationError::LengthMismatch {
                elements: 3,
                indices: 2
            })
        );
    }

    #[test]
    fn test_try_variants_accept_valid_input() {
        let mut elements = vec![10, 20, 30, 40];
        let mut indices = vec![3, 2, 1, 0];
        assert!(try_reorder_elements_by_indices(&mut elements, &mut indices).is_ok());
        assert_eq!(elements, vec![40, 30, 20, 10]);

        let mut indices = vec![1, 2, 3, 0];
        assert!(try_gather_elements_by_indices(&mut elements, &mut indices).is_ok());
        assert_eq!(elements, vec![30, 20, 10, 40]);
    }

    #[test]
    #[should_panic(expected = "mismatched lengths")]
    fn test_reorder_panics_on_length_mismatch() {
        let mut elements = vec![1, 2, 3];
        let mut indices = vec![0, 1];
        reorder_elements_by_indices(&mut elements, &mut indices);
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    #[cfg(debug_assertions)]
    fn test_reorder_panics_on_duplicate_in_debug() {
        let mut elements = vec![1, 2];
        let mut indices = vec![1, 1];
        reorder_elements_by_indices(&mut elements, &mut indices);
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    #[cfg(debug_assertions)]
    fn test_gather_panics_on_duplicate_in_debug() {
        let mut elements = vec![1, 2, 3];
        let mut indices = vec![1, 1, 0];
        gather_elements_by_indices(&mut elements, &mut indices);
    }

    #[test]
    #[should_panic(expected = "called `reorder_elements_by_indices` with duplicate index 2")]
    #[cfg(not(debug_assertions))]
    fn test_reorder_walk_detects_duplicate() {
        let mut elements = vec![1, 2, 3];
        let mut indices = vec![2, 2, 0];
        reorder_elements_by_indices(&mut elements, &mut indices);
    }

    #[test]
    #[should_panic(
        expected = "called `reorder_elements_by_indices` with index 3 out of range for length 3"
    )]
    #[cfg(not(debug_assertions))]
    fn test_reorder_walk_detects_out_of_range() {
        let mut elements = vec![1, 2, 3];
        let mut indices = vec![3, 0, 1];
        reorder_elements_by_indices(&mut elements, &mut indices);
    }

    #[test]
    #[should_panic(expected = "called `gather_elements_by_indices` with duplicate index 1")]
    #[cfg(not(debug_assertions))]
    fn test_gather_walk_detects_duplicate() {
        let mut elements = vec![1, 2, 3];
        let mut indices = vec![1, 1, 0];
        gather_elements_by_indices(&mut elements, &mut indices);
    }

    #[test]
    #[should_panic(
        expected = "called `gather_elements_by_indices` with index 5 out of range for length 3"
    )]
    #[cfg(not(debug_assertions))]
    fn test_gather_walk_detects_out_of_range() {
        let mut elements = vec![1, 2, 3];
        let mut indices = vec![0, 5, 1];
        gather_elements_by_indices(&mut elements, &mut indices);
    }

    #[test]
    fn test_display_permutation_error() {
        let err = PermutationError::OutOfRange {
            position: 0,
            index: 9,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "index 9 at position 0 is out of range for length 2"
        );
    }
}

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

//! # Sequence Algorithms
//!
//! Small algorithms over slices and iterators that the standard library
//! does not provide directly.
//!
//! ## Submodules
//!
//! - `permutation`: In-place application of index permutations in both
//!   directions (scatter and gather) with `O(1)` extra space, checked
//!   variants, and the `Permutable` trait that lets any swappable sequence
//!   (including bundles of parallel sequences) be permuted.
//! - `search`: Position-reporting maximum searches (`argmax`), optionally
//!   filtered by a parallel sequence of conditions.
//! - `copy`: Replicating a slice several times into a destination.
//! - `mismatch`: Longest common suffix detection.
//!
//! The most common entry points are re-exported here.

pub mod copy;
pub mod mismatch;
pub mod permutation;
pub mod search;

pub use copy::copy_range_n_times;
pub use mismatch::mismatch_from_end;
pub use permutation::{
    Permutable, PermutationError, gather_elements_by_indices, reorder_elements_by_indices,
    try_gather_elements_by_indices, try_reorder_elements_by_indices,
};
pub use search::{argmax, argmax_conditional, max_element_conditional};

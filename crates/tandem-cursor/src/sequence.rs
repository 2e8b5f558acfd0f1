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

//! # Sequences
//!
//! A [`Sequence`] is positional storage that can take part in a tandem: it
//! reports its length, hands out shared and exclusive references by
//! position, and swaps two positions in place. Its associated `Access`
//! marker fixes the capability of the cursors that address it.
//!
//! | Storage         | Access          |
//! |-----------------|-----------------|
//! | `[T]`, `Vec<T>` | `RandomAccess`  |
//! | `VecDeque<T>`   | `RandomAccess`  |
//! | `LinkedList<T>` | `Bidirectional` |
//!
//! `LinkedList` lookups walk the list, so they cost `O(position)`.

use crate::traversal::{Bidirectional, RandomAccess, Traversal};
use std::collections::{LinkedList, VecDeque};

/// Positional storage usable as one slot of a tandem.
pub trait Sequence {
    /// The element type.
    type Item;

    /// The capability of cursors into this sequence.
    type Access: Traversal;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Sequence for [T] {
    type Item = T;
    type Access = RandomAccess;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Access = RandomAccess;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Access = RandomAccess;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Access = Bidirectional;

    #[inline(always)]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        let len = LinkedList::len(self);
        assert!(
            a < len && b < len,
            "called `Sequence::swap` with positions {} and {} on a list of length {}",
            a,
            b,
            len
        );
        if a == b {
            return;
        }

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let mut iter = self.iter_mut();
        if let (Some(x), Some(y)) = (iter.nth(lo), iter.nth(hi - lo - 1)) {
            std::mem::swap(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::Capability;

    fn exercise<S>(seq: &mut S)
    where
        S: Sequence<Item = i32> + ?Sized,
    {
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.get(1), Some(&2));
        assert_eq!(seq.get(4), None);

        if let Some(x) = seq.get_mut(0) {
            *x = 10;
        }
        seq.swap(0, 3);
        seq.swap(2, 1);
        seq.swap(2, 2);
        let collected: Vec<i32> = (0..seq.len()).filter_map(|i| seq.get(i).copied()).collect();
        assert_eq!(collected, vec![4, 3, 2, 10]);
    }

    #[test]
    fn test_vec_sequence() {
        let mut v = vec![1, 2, 3, 4];
        exercise(&mut v);
    }

    #[test]
    fn test_slice_sequence() {
        let mut v = [1, 2, 3, 4];
        exercise(&mut v[..]);
    }

    #[test]
    fn test_vecdeque_sequence() {
        let mut d: VecDeque<i32> = VecDeque::new();
        d.push_back(3);
        d.push_back(4);
        d.push_front(2);
        d.push_front(1);
        exercise(&mut d);
    }

    #[test]
    fn test_linked_list_sequence() {
        let mut l: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        exercise(&mut l);
    }

    #[test]
    #[should_panic(expected = "called `Sequence::swap` with positions 1 and 5 on a list of length 4")]
    fn test_linked_list_swap_out_of_bounds_panics() {
        let mut l: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        Sequence::swap(&mut l, 1, 5);
    }

    #[test]
    fn test_access_markers() {
        assert_eq!(
            <<Vec<u8> as Sequence>::Access as Traversal>::CAPABILITY,
            Capability::RandomAccess
        );
        assert_eq!(
            <<LinkedList<u8> as Sequence>::Access as Traversal>::CAPABILITY,
            Capability::Bidirectional
        );
    }
}

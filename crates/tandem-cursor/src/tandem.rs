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

//! # Tandem
//!
//! A [`Tandem`] bundles exclusive borrows of one to six sequences and treats
//! them as one sequence of tuples. Multi-cursors from the tandem address
//! the same position in every slot; dereferencing one yields a
//! [`RefTuple`] whose writes land in the underlying sequences.
//!
//! ## Highlights
//!
//! - `begin`, `end` and `cursor_at` create lock-step cursors. `end` places
//!   each slot at its own sequence's length.
//! - `view` / `view_mut` dereference a cursor, returning `None` when any
//!   slot is out of bounds.
//! - `swap` exchanges the elements at two cursors in every slot.
//! - `sort_by`, `sort_by_key` and `sort` reorder a cursor range of all
//!   sequences jointly by a comparison on the views. The sort is stable and
//!   requires every slot to be random access; it computes the sorted order
//!   on an index vector and applies it with one in-place permutation pass.
//! - `Tandem` implements [`Permutable`], so the index permutation engine of
//!   `tandem-core` reorders all slots at once.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_cursor::tandem;
//!
//! let mut keys = vec![1, 2, 2, 1];
//! let mut values = vec!["a", "b", "c", "d"];
//!
//! let mut t = tandem!(keys, values);
//! let (first, last) = (t.begin(), t.end());
//! t.sort_by_key(&first, &last, |v| *v.slot::<0>());
//!
//! assert_eq!(keys, vec![1, 1, 2, 2]);
//! assert_eq!(values, vec!["a", "d", "b", "c"]);
//! ```
//!
//! A linked list in any slot makes the tandem bidirectional. Its cursors
//! still step both ways:
//!
//! ```rust
//! use std::collections::LinkedList;
//! use tandem_cursor::position::{BidirectionalCursor, Cursor};
//! use tandem_cursor::tandem;
//!
//! let mut keys = vec![2, 1];
//! let mut tags: LinkedList<char> = ['b', 'a'].into_iter().collect();
//! let t = tandem!(keys, tags);
//!
//! let mut c = t.begin();
//! c.step_forward();
//! c.step_backward();
//! assert_eq!(t.view(&c).map(|v| v.to_tuple()), Some((2, 'b')));
//! ```
//!
//! but they cannot jump, and the range cannot be sorted:
//!
//! ```compile_fail
//! use std::collections::LinkedList;
//! use tandem_cursor::position::RandomAccessCursor;
//! use tandem_cursor::tandem;
//!
//! let mut keys = vec![2, 1];
//! let mut tags: LinkedList<char> = ['b', 'a'].into_iter().collect();
//! let t = tandem!(keys, tags);
//! let _ = t.begin().jumped(1);
//! ```
//!
//! ```compile_fail
//! use std::collections::LinkedList;
//! use tandem_cursor::tandem;
//!
//! let mut keys = vec![2, 1];
//! let mut tags: LinkedList<char> = ['b', 'a'].into_iter().collect();
//! let mut t = tandem!(keys, tags);
//! let (first, last) = (t.begin(), t.end());
//! t.sort(&first, &last);
//! ```

use crate::multi_cursor::MultiCursor;
use crate::position::{Cursor, Position, RandomAccessCursor};
use crate::ref_tuple::RefTuple;
use crate::sequence::Sequence;
use crate::traversal::RandomAccessTraversal;
use std::cmp::Ordering;
use tandem_core::algorithm::permutation::{Permutable, gather_elements_by_indices};
use tandem_core::trace_log;

/// Creates a [`Tandem`] over mutable borrows of the given sequences.
///
/// ```rust
/// # use tandem_cursor::tandem;
/// let mut a = vec![1, 2];
/// let mut b = vec!['x', 'y'];
/// let t = tandem!(a, b);
/// assert_eq!(t.len(), 2);
/// ```
#[macro_export]
macro_rules! tandem {
    ($($sequence:expr),+ $(,)?) => {
        $crate::tandem::Tandem::new(($(&mut $sequence,)+))
    };
}

/// Exclusive borrows of several sequences, addressed in lock-step.
///
/// `S` is a tuple `(&mut A, &mut B, ...)` of one to six [`Sequence`]s.
#[derive(Debug)]
pub struct Tandem<S> {
    sequences: S,
}

impl<S> Tandem<S> {
    /// Bundles a tuple of sequence borrows.
    #[inline(always)]
    pub const fn new(sequences: S) -> Self {
        Self { sequences }
    }

    /// Releases the sequence borrows.
    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.sequences
    }
}

/// A window of a tandem exposed to the permutation engine with positions
/// relative to the start of a sorted range.
struct SwapWindow<F> {
    len: usize,
    swap: F,
}

impl<F> Permutable for SwapWindow<F>
where
    F: FnMut(usize, usize),
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn swap_elements(&mut self, a: usize, b: usize) {
        (self.swap)(a, b);
    }
}

macro_rules! count {
    () => {
        0
    };
    ($head:tt $($tail:tt)*) => {
        1 + count!($($tail)*)
    };
}

macro_rules! impl_tandem {
    ($($name:ident $idx:tt),+) => {
        impl<'a, $($name),+> Tandem<($(&'a mut $name,)+)>
        where
            $($name: Sequence + ?Sized,)+
        {
            /// The number of sequences in the tandem.
            pub const ARITY: usize = count!($($idx)+);

            /// Returns the length of the shortest sequence.
            #[inline]
            pub fn len(&self) -> usize {
                self.lens().into_iter().min().unwrap_or(0)
            }

            /// Returns `true` if any sequence is empty.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Returns the length of every sequence.
            #[inline]
            pub fn lens(&self) -> [usize; count!($($idx)+)] {
                [$(self.sequences.$idx.len()),+]
            }

            /// Returns a cursor at the start of every sequence.
            #[inline]
            pub fn begin(&self) -> MultiCursor<($(Position<$name::Access>,)+)> {
                self.cursor_at(0)
            }

            /// Returns a cursor one past the end of every sequence.
            ///
            /// Each slot is placed at its own sequence's length, so for
            /// sequences of different lengths the result is not aligned.
            #[inline]
            pub fn end(&self) -> MultiCursor<($(Position<$name::Access>,)+)> {
                MultiCursor::new(($(Position::new(self.sequences.$idx.len()),)+))
            }

            /// Returns a cursor at `offset` in every sequence.
            #[inline]
            pub fn cursor_at(&self, offset: usize) -> MultiCursor<($(Position<$name::Access>,)+)> {
                MultiCursor::new(($(Position::<$name::Access>::new(offset),)+))
            }

            /// Dereferences `at` into a read view, or `None` if any slot is
            /// out of bounds.
            #[inline]
            pub fn view(
                &self,
                at: &MultiCursor<($(Position<$name::Access>,)+)>,
            ) -> Option<RefTuple<($(&$name::Item,)+)>> {
                let cursors = at.cursors();
                Some(RefTuple::new(($(self.sequences.$idx.get(cursors.$idx.offset())?,)+)))
            }

            /// Dereferences `at` into a write view, or `None` if any slot is
            /// out of bounds.
            #[inline]
            pub fn view_mut(
                &mut self,
                at: &MultiCursor<($(Position<$name::Access>,)+)>,
            ) -> Option<RefTuple<($(&mut $name::Item,)+)>> {
                let cursors = at.cursors();
                let sequences = &mut self.sequences;
                Some(RefTuple::new(($(sequences.$idx.get_mut(cursors.$idx.offset())?,)+)))
            }

            /// Swaps the elements addressed by `a` and `b` in every slot.
            ///
            /// # Panics
            ///
            /// Panics if any slot of `a` or `b` is out of bounds.
            #[inline]
            pub fn swap(
                &mut self,
                a: &MultiCursor<($(Position<$name::Access>,)+)>,
                b: &MultiCursor<($(Position<$name::Access>,)+)>,
            ) {
                let (a, b) = (a.cursors(), b.cursors());
                $(self.sequences.$idx.swap(a.$idx.offset(), b.$idx.offset());)+
            }

            /// Iterates over read views from `first` up to, not including,
            /// `last`. Iteration also stops at the first out-of-bounds
            /// position.
            pub fn views<'s>(
                &'s self,
                first: &MultiCursor<($(Position<$name::Access>,)+)>,
                last: &MultiCursor<($(Position<$name::Access>,)+)>,
            ) -> impl Iterator<Item = RefTuple<($(&'s $name::Item,)+)>> + 's {
                let mut cursor = *first;
                let last = *last;
                std::iter::from_fn(move || {
                    if cursor == last {
                        return None;
                    }
                    let view = self.view(&cursor)?;
                    cursor.step_forward();
                    Some(view)
                })
            }

            /// Calls `f` with a write view for every position from `first`
            /// up to, not including, `last`.
            pub fn for_each_mut<Visit>(
                &mut self,
                first: &MultiCursor<($(Position<$name::Access>,)+)>,
                last: &MultiCursor<($(Position<$name::Access>,)+)>,
                mut f: Visit,
            ) where
                Visit: FnMut(RefTuple<($(&mut $name::Item,)+)>),
            {
                let mut cursor = *first;
                while cursor != *last {
                    match self.view_mut(&cursor) {
                        Some(view) => f(view),
                        None => break,
                    }
                    cursor.step_forward();
                }
            }

            /// Stably sorts the range `[first, last)` of all sequences
            /// jointly, ordering positions by `compare` on their views.
            ///
            /// # Panics
            ///
            /// Panics if `last` precedes `first` or if the range extends
            /// past the end of any sequence.
            pub fn sort_by<Compare>(
                &mut self,
                first: &MultiCursor<($(Position<$name::Access>,)+)>,
                last: &MultiCursor<($(Position<$name::Access>,)+)>,
                mut compare: Compare,
            ) where
                $($name::Access: RandomAccessTraversal,)+
                Compare: FnMut(
                    &RefTuple<($(&$name::Item,)+)>,
                    &RefTuple<($(&$name::Item,)+)>,
                ) -> Ordering,
            {
                let distance = last.offset_from(first);
                assert!(
                    distance >= 0,
                    "called `sort_by` with `last` {} positions before `first`",
                    -distance
                );
                let len = distance as usize;
                trace_log!(len, arity = Self::ARITY, "sorting tandem range");

                let mut order: Vec<usize> = (0..len).collect();
                {
                    let views: Vec<_> = self.views(first, last).take(len).collect();
                    assert!(
                        views.len() == len,
                        "called `sort_by` with a range of {} positions \
                         on sequences of lengths {:?}",
                        len,
                        self.lens()
                    );
                    order.sort_by(|&i, &j| compare(&views[i], &views[j]));
                }

                let bases = first.offsets();
                let sequences = &mut self.sequences;
                let mut window = SwapWindow {
                    len,
                    swap: |a: usize, b: usize| {
                        $(sequences.$idx.swap(bases[$idx] + a, bases[$idx] + b);)+
                    },
                };
                gather_elements_by_indices(&mut window, &mut order);
            }

            /// Stably sorts the range `[first, last)` of all sequences
            /// jointly by the key `key` extracts from each view.
            pub fn sort_by_key<Key, KeyFn>(
                &mut self,
                first: &MultiCursor<($(Position<$name::Access>,)+)>,
                last: &MultiCursor<($(Position<$name::Access>,)+)>,
                mut key: KeyFn,
            ) where
                $($name::Access: RandomAccessTraversal,)+
                Key: Ord,
                KeyFn: FnMut(&RefTuple<($(&$name::Item,)+)>) -> Key,
            {
                self.sort_by(first, last, |a, b| key(a).cmp(&key(b)));
            }

            /// Stably sorts the range `[first, last)` of all sequences
            /// jointly, comparing views lexicographically by slot.
            pub fn sort(
                &mut self,
                first: &MultiCursor<($(Position<$name::Access>,)+)>,
                last: &MultiCursor<($(Position<$name::Access>,)+)>,
            ) where
                $($name::Access: RandomAccessTraversal, $name::Item: Ord,)+
            {
                self.sort_by(first, last, |a, b| a.cmp(b));
            }
        }

        impl<'a, $($name),+> Permutable for Tandem<($(&'a mut $name,)+)>
        where
            $($name: Sequence + ?Sized,)+
        {
            #[inline]
            fn len(&self) -> usize {
                self.lens().into_iter().min().unwrap_or(0)
            }

            #[inline]
            fn swap_elements(&mut self, a: usize, b: usize) {
                $(self.sequences.$idx.swap(a, b);)+
            }
        }
    };
}

impl_tandem!(A 0);
impl_tandem!(A 0, B 1);
impl_tandem!(A 0, B 1, C 2);
impl_tandem!(A 0, B 1, C 2, D 3);
impl_tandem!(A 0, B 1, C 2, D 3, E 4);
impl_tandem!(A 0, B 1, C 2, D 3, E 4, F 5);

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

//! # Lock-Step Multi-Cursor
//!
//! [`MultiCursor`] wraps a tuple of one to six cursors and moves all of them
//! together. It implements each cursor trait exactly when every slot does,
//! so its capability is always the weakest slot's: pairing a vector
//! position with a linked-list position yields a bidirectional cursor, and
//! `jump` simply does not exist on it.
//!
//! ## Equality and ordering
//!
//! - `a == b` holds when every slot compares equal; `a != b` holds when any
//!   slot differs.
//! - Ordering and distance look at slot 0 only. Cursors that are moved in
//!   lock-step from a common start share one offset across all slots
//!   ([`MultiCursor::is_aligned`]); distance measurement checks this in
//!   debug builds. Two cursors that tie on slot 0 but differ elsewhere are
//!   incomparable (`partial_cmp` returns `None`), which keeps `==` and the
//!   ordering consistent.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_cursor::multi_cursor::MultiCursor;
//! use tandem_cursor::position::{Cursor, Position, RandomAccessCursor};
//! use tandem_cursor::traversal::{Capability, Bidirectional, RandomAccess};
//!
//! type Ra = Position<RandomAccess>;
//!
//! let begin = MultiCursor::new((Ra::new(0), Ra::new(0)));
//! let end = begin.jumped(2);
//! assert_eq!(end.offset_from(&begin), 2);
//! assert!(begin < end);
//!
//! type Mixed = MultiCursor<(Position<RandomAccess>, Position<Bidirectional>)>;
//! assert_eq!(<Mixed as Cursor>::CAPABILITY, Capability::Bidirectional);
//! ```
//!
//! ## Unsupported moves
//!
//! A forward-only slot removes backward steps from the whole cursor:
//!
//! ```compile_fail
//! use tandem_cursor::multi_cursor::MultiCursor;
//! use tandem_cursor::position::{BidirectionalCursor, Position};
//! use tandem_cursor::traversal::{Forward, RandomAccess};
//!
//! type Ra = Position<RandomAccess>;
//! type Fw = Position<Forward>;
//!
//! let mut c = MultiCursor::new((Ra::new(1), Fw::new(1)));
//! c.step_backward();
//! ```
//!
//! A slot without random access removes jumps, distances and ordering:
//!
//! ```compile_fail
//! use tandem_cursor::multi_cursor::MultiCursor;
//! use tandem_cursor::position::{Position, RandomAccessCursor};
//! use tandem_cursor::traversal::{Bidirectional, RandomAccess};
//!
//! type Ra = Position<RandomAccess>;
//! type Bi = Position<Bidirectional>;
//!
//! let c = MultiCursor::new((Ra::new(0), Bi::new(0)));
//! let _ = c.jumped(1);
//! ```
//!
//! ```compile_fail
//! use tandem_cursor::multi_cursor::MultiCursor;
//! use tandem_cursor::position::{Position, RandomAccessCursor};
//! use tandem_cursor::traversal::{Bidirectional, RandomAccess};
//!
//! type Ra = Position<RandomAccess>;
//! type Bi = Position<Bidirectional>;
//!
//! let a = MultiCursor::new((Ra::new(0), Bi::new(0)));
//! let b = MultiCursor::new((Ra::new(2), Bi::new(2)));
//! let _ = b.offset_from(&a);
//! ```
//!
//! ```compile_fail
//! use tandem_cursor::multi_cursor::MultiCursor;
//! use tandem_cursor::position::Position;
//! use tandem_cursor::traversal::{Bidirectional, RandomAccess};
//!
//! type Ra = Position<RandomAccess>;
//! type Bi = Position<Bidirectional>;
//!
//! let a = MultiCursor::new((Ra::new(0), Bi::new(0)));
//! let b = MultiCursor::new((Ra::new(2), Bi::new(2)));
//! let _ = a < b;
//! ```

use crate::position::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::traversal::Capability;
use std::cmp::Ordering;

/// A tuple of cursors that move together.
///
/// The tuple order defines the slot indices. Slot 0 is the reference slot
/// for ordering and distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MultiCursor<C> {
    cursors: C,
}

impl<C> MultiCursor<C> {
    /// Creates a multi-cursor from a tuple of cursors.
    #[inline(always)]
    pub const fn new(cursors: C) -> Self {
        Self { cursors }
    }

    /// Returns the slot cursors.
    #[inline(always)]
    pub const fn cursors(&self) -> &C {
        &self.cursors
    }

    /// Consumes the multi-cursor and returns the slot cursors.
    #[inline(always)]
    pub fn into_inner(self) -> C {
        self.cursors
    }
}

impl<C> From<C> for MultiCursor<C> {
    #[inline(always)]
    fn from(cursors: C) -> Self {
        Self::new(cursors)
    }
}

macro_rules! one {
    ($_slot:tt) => {
        1
    };
}

macro_rules! impl_multi_cursor {
    ($first:ident $first_idx:tt $(, $name:ident $idx:tt)*) => {
        impl<$first, $($name),*> MultiCursor<($first, $($name,)*)>
        where
            $first: Cursor,
            $($name: Cursor,)*
        {
            /// The number of slots.
            pub const ARITY: usize = 1 $(+ one!($idx))*;

            /// Returns `true` if every slot has the same offset as slot 0.
            #[inline]
            pub fn is_aligned(&self) -> bool {
                let [reference, rest @ ..] = self.offsets();
                rest.iter().all(|&offset| offset == reference)
            }

            /// Returns the offsets of all slots.
            #[inline]
            pub fn offsets(&self) -> [usize; 1 $(+ one!($idx))*] {
                [self.cursors.$first_idx.offset() $(, self.cursors.$idx.offset())*]
            }
        }

        impl<$first, $($name),*> Cursor for MultiCursor<($first, $($name,)*)>
        where
            $first: Cursor,
            $($name: Cursor,)*
        {
            const CAPABILITY: Capability = {
                let capability = <$first as Cursor>::CAPABILITY;
                $(let capability = capability.min(<$name as Cursor>::CAPABILITY);)*
                capability
            };

            #[inline(always)]
            fn offset(&self) -> usize {
                self.cursors.$first_idx.offset()
            }

            #[inline]
            fn step_forward(&mut self) {
                self.cursors.$first_idx.step_forward();
                $(self.cursors.$idx.step_forward();)*
            }

            #[inline]
            fn advance(&mut self, n: usize) {
                self.cursors.$first_idx.advance(n);
                $(self.cursors.$idx.advance(n);)*
            }
        }

        impl<$first, $($name),*> BidirectionalCursor for MultiCursor<($first, $($name,)*)>
        where
            $first: BidirectionalCursor,
            $($name: BidirectionalCursor,)*
        {
            #[inline]
            fn step_backward(&mut self) {
                self.cursors.$first_idx.step_backward();
                $(self.cursors.$idx.step_backward();)*
            }

            #[inline]
            fn retreat(&mut self, n: usize) {
                self.cursors.$first_idx.retreat(n);
                $(self.cursors.$idx.retreat(n);)*
            }
        }

        impl<$first, $($name),*> PartialOrd for MultiCursor<($first, $($name,)*)>
        where
            $first: RandomAccessCursor,
            $($name: RandomAccessCursor,)*
        {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                match self.cursors.$first_idx.partial_cmp(&other.cursors.$first_idx)? {
                    Ordering::Equal if self != other => None,
                    ordering => Some(ordering),
                }
            }
        }

        impl<$first, $($name),*> RandomAccessCursor for MultiCursor<($first, $($name,)*)>
        where
            $first: RandomAccessCursor,
            $($name: RandomAccessCursor,)*
        {
            #[inline]
            fn jump(&mut self, k: isize) {
                self.cursors.$first_idx.jump(k);
                $(self.cursors.$idx.jump(k);)*
            }

            #[inline]
            fn offset_from(&self, origin: &Self) -> isize {
                debug_assert!(
                    self.is_aligned() && origin.is_aligned(),
                    "called `offset_from` on misaligned multi-cursors {:?} and {:?}",
                    self.offsets(),
                    origin.offsets()
                );
                self.cursors.$first_idx.offset_from(&origin.cursors.$first_idx)
            }
        }

        impl<$first, $($name),*> MultiCursor<($first, $($name,)*)>
        where
            $first: RandomAccessCursor,
            $($name: RandomAccessCursor,)*
        {
            /// Returns the signed number of lock-step moves from `self` to
            /// `other`, measured on slot 0.
            #[inline]
            pub fn distance_to(&self, other: &Self) -> isize {
                other.offset_from(self)
            }
        }
    };
}

impl_multi_cursor!(A 0);
impl_multi_cursor!(A 0, B 1);
impl_multi_cursor!(A 0, B 1, C 2);
impl_multi_cursor!(A 0, B 1, C 2, D 3);
impl_multi_cursor!(A 0, B 1, C 2, D 3, E 4);
impl_multi_cursor!(A 0, B 1, C 2, D 3, E 4, F 5);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::traversal::{Bidirectional, Forward, RandomAccess};

    type Ra = Position<RandomAccess>;
    type Bi = Position<Bidirectional>;
    type Fw = Position<Forward>;

    fn ra2(a: usize, b: usize) -> MultiCursor<(Ra, Ra)> {
        MultiCursor::new((Ra::new(a), Ra::new(b)))
    }

    #[test]
    fn test_step_moves_all_slots() {
        let mut c = MultiCursor::new((Ra::new(0), Bi::new(0), Fw::new(0)));
        c.step_forward();
        assert_eq!(c.offsets(), [1, 1, 1]);
        c.advance(4);
        assert_eq!(c.offsets(), [5, 5, 5]);
    }

    #[test]
    fn test_step_backward_moves_all_slots() {
        let mut c = MultiCursor::new((Ra::new(3), Bi::new(3)));
        c.step_backward();
        assert_eq!(c.offsets(), [2, 2]);
        c.retreat(2);
        assert_eq!(c.offsets(), [0, 0]);
    }

    #[test]
    fn test_equality_requires_all_slots() {
        assert_eq!(ra2(1, 1), ra2(1, 1));
        assert_ne!(ra2(1, 1), ra2(1, 2));
        assert_ne!(ra2(1, 1), ra2(2, 1));
    }

    #[test]
    fn test_inequality_when_any_slot_differs() {
        let a = ra2(3, 3);
        let b = ra2(3, 4);
        assert!(a != b);
        assert!(!(a == b));
    }

    #[test]
    fn test_distance_between_offsets() {
        let begin = ra2(0, 0);
        let end = ra2(2, 2);
        assert_eq!(end.offset_from(&begin), 2);
        assert_eq!(begin.distance_to(&end), 2);
        assert_eq!(begin.offset_from(&end), -2);
    }

    #[test]
    fn test_jump_moves_all_slots() {
        let c = ra2(1, 1).jumped(3);
        assert_eq!(c, ra2(4, 4));
        assert_eq!(c.jumped(-4), ra2(0, 0));
    }

    #[test]
    fn test_ordering_uses_slot_zero() {
        assert!(ra2(0, 0) < ra2(1, 1));
        assert!(ra2(2, 2) >= ra2(1, 1));
        assert!(ra2(1, 1) <= ra2(1, 1));
        assert_eq!(ra2(1, 5).partial_cmp(&ra2(2, 0)), Some(Ordering::Less));
    }

    #[test]
    fn test_ordering_tie_on_slot_zero_is_incomparable() {
        assert_eq!(ra2(1, 2).partial_cmp(&ra2(1, 3)), None);
        assert!(!(ra2(1, 2) < ra2(1, 3)));
        assert!(!(ra2(1, 2) >= ra2(1, 3)));
    }

    #[test]
    fn test_is_aligned() {
        assert!(ra2(2, 2).is_aligned());
        assert!(!ra2(2, 3).is_aligned());
        assert!(MultiCursor::new((Fw::new(9),)).is_aligned());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called `offset_from` on misaligned multi-cursors")]
    fn test_distance_on_misaligned_cursors_panics_in_debug() {
        let _ = ra2(2, 3).offset_from(&ra2(0, 0));
    }

    #[test]
    fn test_capability_is_weakest_slot() {
        assert_eq!(
            <MultiCursor<(Ra, Ra)> as Cursor>::CAPABILITY,
            Capability::RandomAccess
        );
        assert_eq!(
            <MultiCursor<(Ra, Bi)> as Cursor>::CAPABILITY,
            Capability::Bidirectional
        );
        assert_eq!(
            <MultiCursor<(Bi, Ra, Fw)> as Cursor>::CAPABILITY,
            Capability::Forward
        );
        assert_eq!(
            <MultiCursor<(Ra, Ra, Ra, Ra, Ra, Bi)> as Cursor>::CAPABILITY,
            Capability::Bidirectional
        );
    }

    #[test]
    fn test_arity() {
        assert_eq!(MultiCursor::<(Ra,)>::ARITY, 1);
        assert_eq!(MultiCursor::<(Ra, Bi, Fw)>::ARITY, 3);
        assert_eq!(MultiCursor::<(Ra, Ra, Ra, Ra, Ra, Ra)>::ARITY, 6);
    }

    #[test]
    fn test_stepped_leaves_original() {
        let c = ra2(0, 0);
        let next = c.stepped();
        assert_eq!(c, ra2(0, 0));
        assert_eq!(next, ra2(1, 1));
    }
}

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

//! # Cursors and Positions
//!
//! A cursor names one place in one sequence. The cursor traits describe how
//! it may move, layered by capability:
//!
//! - [`Cursor`]: step forward, compare for equality, report its offset.
//! - [`BidirectionalCursor`]: additionally step backward.
//! - [`RandomAccessCursor`]: additionally jump by a signed distance and
//!   measure the signed distance to another cursor.
//!
//! [`Position<K>`] is the cursor used for every slot of a tandem. It is a
//! plain offset tagged with a capability marker `K`, so a position into a
//! linked list cannot be asked to jump while a position into a vector can.
//! A position does not borrow its sequence; dereferencing goes through the
//! container that owns the borrow.
//!
//! ```rust
//! use tandem_cursor::position::{Cursor, Position, RandomAccessCursor};
//! use tandem_cursor::traversal::RandomAccess;
//!
//! let mut p = Position::<RandomAccess>::new(1);
//! p.step_forward();
//! p.jump(3);
//! assert_eq!(p.offset(), 5);
//! assert_eq!(p.offset_from(&Position::new(2)), 3);
//! ```

use crate::traversal::{BidirectionalTraversal, Capability, RandomAccessTraversal, Traversal};

/// A cursor that can step forward.
pub trait Cursor: Clone + PartialEq + std::fmt::Debug {
    /// The movement this cursor supports.
    const CAPABILITY: Capability;

    /// Returns the offset of the addressed element from the start of its
    /// sequence.
    fn offset(&self) -> usize;

    /// Moves one element forward.
    fn step_forward(&mut self);

    /// Moves `n` elements forward. `n == 0` is a no-op.
    #[inline]
    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.step_forward();
        }
    }

    /// Returns a copy of this cursor moved one element forward.
    #[inline]
    fn stepped(&self) -> Self {
        let mut next = self.clone();
        next.step_forward();
        next
    }
}

/// A cursor that can also step backward.
pub trait BidirectionalCursor: Cursor {
    /// Moves one element backward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at offset zero.
    fn step_backward(&mut self);

    /// Moves `n` elements backward.
    #[inline]
    fn retreat(&mut self, n: usize) {
        for _ in 0..n {
            self.step_backward();
        }
    }
}

/// A cursor with constant-time jumps and distance measurement.
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Moves by `k` elements; negative `k` moves backward.
    ///
    /// # Panics
    ///
    /// Panics if the jump would move before offset zero.
    fn jump(&mut self, k: isize);

    /// Returns the signed distance from `origin` to `self`, such that
    /// `origin.jumped(d) == self` for `d = self.offset_from(origin)`.
    fn offset_from(&self, origin: &Self) -> isize;

    /// Returns a copy of this cursor moved by `k` elements.
    #[inline]
    fn jumped(&self, k: isize) -> Self {
        let mut moved = self.clone();
        moved.jump(k);
        moved
    }
}

/// A capability-tagged offset into a sequence.
///
/// Positions are compared by offset. They carry no borrow, so any number of
/// them can exist alongside a mutable view of the sequence.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position<K> {
    offset: usize,
    _marker: std::marker::PhantomData<K>,
}

impl<K> Position<K> {
    /// Creates a position at `offset`.
    #[inline(always)]
    pub const fn new(offset: usize) -> Self {
        Self {
            offset,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the offset.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.offset
    }
}

impl<K> From<usize> for Position<K> {
    #[inline(always)]
    fn from(offset: usize) -> Self {
        Self::new(offset)
    }
}

impl<K> From<Position<K>> for usize {
    #[inline(always)]
    fn from(position: Position<K>) -> Self {
        position.offset
    }
}

impl<K> PartialOrd for Position<K>
where
    K: Traversal,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Position<K>
where
    K: Traversal,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl<K> std::fmt::Debug for Position<K>
where
    K: Traversal,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position<{}>({})", K::CAPABILITY, self.offset)
    }
}

impl<K> std::fmt::Display for Position<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.offset)
    }
}

impl<K> Cursor for Position<K>
where
    K: Traversal,
{
    const CAPABILITY: Capability = K::CAPABILITY;

    #[inline(always)]
    fn offset(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    fn step_forward(&mut self) {
        self.offset += 1;
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        self.offset += n;
    }
}

impl<K> BidirectionalCursor for Position<K>
where
    K: BidirectionalTraversal,
{
    #[inline]
    fn step_backward(&mut self) {
        self.retreat(1);
    }

    #[inline]
    fn retreat(&mut self, n: usize) {
        assert!(
            n <= self.offset,
            "called `retreat` by {} on a position at offset {}",
            n,
            self.offset
        );
        self.offset -= n;
    }
}

impl<K> RandomAccessCursor for Position<K>
where
    K: RandomAccessTraversal,
{
    #[inline]
    fn jump(&mut self, k: isize) {
        match self.offset.checked_add_signed(k) {
            Some(offset) => self.offset = offset,
            None => panic!(
                "called `jump` by {} on a position at offset {}",
                k, self.offset
            ),
        }
    }

    #[inline(always)]
    fn offset_from(&self, origin: &Self) -> isize {
        self.offset as isize - origin.offset as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::{Bidirectional, Forward, RandomAccess};

    #[test]
    fn test_forward_steps() {
        let mut p = Position::<Forward>::new(0);
        p.step_forward();
        p.advance(3);
        assert_eq!(p.offset(), 4);
        assert_eq!(p.stepped().offset(), 5);
        assert_eq!(p.offset(), 4);
    }

    #[test]
    fn test_advance_zero_is_noop() {
        let mut p = Position::<Forward>::new(7);
        p.advance(0);
        assert_eq!(p, Position::new(7));
    }

    #[test]
    fn test_bidirectional_steps() {
        let mut p = Position::<Bidirectional>::new(3);
        p.step_backward();
        assert_eq!(p.offset(), 2);
        p.retreat(2);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    #[should_panic(expected = "called `retreat` by 1 on a position at offset 0")]
    fn test_step_backward_at_zero_panics() {
        let mut p = Position::<Bidirectional>::new(0);
        p.step_backward();
    }

    #[test]
    fn test_random_access_jump_and_distance() {
        let origin = Position::<RandomAccess>::new(0);
        let p = origin.jumped(2);
        assert_eq!(p.offset_from(&origin), 2);
        assert_eq!(origin.offset_from(&p), -2);
        assert_eq!(p.jumped(-2), origin);
        assert!(origin < p);
    }

    #[test]
    #[should_panic(expected = "called `jump` by -3 on a position at offset 2")]
    fn test_jump_before_start_panics() {
        Position::<RandomAccess>::new(2).jump(-3);
    }

    #[test]
    fn test_capability_constant() {
        assert_eq!(
            <Position<Forward> as Cursor>::CAPABILITY,
            Capability::Forward
        );
        assert_eq!(
            <Position<RandomAccess> as Cursor>::CAPABILITY,
            Capability::RandomAccess
        );
    }

    #[test]
    fn test_debug_and_display() {
        let p = Position::<Bidirectional>::new(4);
        assert_eq!(format!("{:?}", p), "Position<bidirectional>(4)");
        assert_eq!(p.to_string(), "4");
        assert_eq!(usize::from(p), 4);
    }
}

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

//! # Tandem Cursor
//!
//! Lock-step traversal of several parallel sequences. A tandem of, say, a
//! key vector and a payload vector behaves like one sequence of
//! `(key, payload)` tuples: cursors move through all sequences together,
//! dereferencing yields a view whose writes land in every sequence, and
//! sorting reorders all of them by a comparison on the views.
//!
//! ## Modules
//!
//! - `traversal`: Capability levels (`Forward`, `Bidirectional`,
//!   `RandomAccess`) as values and as type-level markers.
//! - `position`: The cursor traits and `Position<K>`, a capability-tagged
//!   offset.
//! - `multi_cursor`: `MultiCursor`, a tuple of cursors moved in lock-step
//!   whose capability is the weakest slot's.
//! - `ref_tuple`: `RefTuple`, the write-through view of one position in
//!   every sequence.
//! - `sequence`: The `Sequence` trait for slices, vectors, deques and
//!   linked lists.
//! - `tandem`: `Tandem`, the bundle of sequence borrows that dereferences,
//!   swaps and sorts.
//!
//! ## Ownership
//!
//! Cursors carry offsets, never borrows. All access to elements goes through
//! the `Tandem`, which holds the exclusive borrows, so views follow the usual
//! aliasing rules: any number of read views, or one write view at a time.
//!
//! ## Features
//!
//! - `tracing`: Enables the logging of `tandem-core`.

pub mod multi_cursor;
pub mod position;
pub mod ref_tuple;
pub mod sequence;
pub mod tandem;
pub mod traversal;

pub use multi_cursor::MultiCursor;
pub use position::{BidirectionalCursor, Cursor, Position, RandomAccessCursor};
pub use ref_tuple::RefTuple;
pub use sequence::Sequence;
pub use tandem::Tandem;
pub use traversal::Capability;

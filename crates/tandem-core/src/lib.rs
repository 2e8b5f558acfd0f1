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

//! # Tandem Core
//!
//! In-place sequence algorithms and small generic helpers. The centerpiece is
//! the index permutation engine, which rearranges any swappable sequence
//! according to an index permutation using `O(1)` extra space. The
//! `tandem-cursor` crate builds its joint sort of parallel sequences on it.
//!
//! ## Modules
//!
//! - `algorithm`: Index permutation (scatter and gather, checked variants),
//!   `argmax` and its condition-filtered variants, range replication, and
//!   longest-common-suffix detection.
//! - `num`: Generic `product` and `mean` over iterators, including a mean
//!   that accumulates in a wider type.
//! - `utils`: Iterator stepping and length helpers, and reference retrieval
//!   from optional handles.
//! - `fs`: Non-recursive directory listing into any extendable container.
//! - `error`: The crate error type.
//!
//! ## Features
//!
//! - `tracing`: Emit diagnostics through the `tracing` crate. Without it,
//!   the internal logging macros expand to nothing.

#[macro_use]
#[doc(hidden)]
pub mod tracing_helpers;

pub mod algorithm;
pub mod error;
pub mod fs;
pub mod num;
pub mod utils;

pub use error::{Error, Result};

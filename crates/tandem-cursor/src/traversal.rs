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

//! # Traversal Capabilities
//!
//! A cursor's capability says which movements it supports. The levels form a
//! chain, so combining cursors of different strengths yields the weakest
//! one: a random-access cursor paired with a list cursor can only move the
//! way a list cursor can.
//!
//! Capabilities exist twice. At the type level, the marker types
//! [`Forward`], [`Bidirectional`] and [`RandomAccess`] gate which cursor
//! traits are implemented, so an unsupported movement fails to compile. At
//! the value level, [`Capability`] reports the same information for
//! diagnostics and tests.
//!
//! ```rust
//! use tandem_cursor::traversal::Capability;
//!
//! assert_eq!(
//!     Capability::RandomAccess.min(Capability::Bidirectional),
//!     Capability::Bidirectional
//! );
//! assert!(Capability::RandomAccess.supports(Capability::Forward));
//! ```

/// The movement a cursor supports, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Single steps forward.
    Forward,
    /// Single steps in both directions.
    Bidirectional,
    /// Jumps by arbitrary signed distances and distance measurement.
    RandomAccess,
}

impl Capability {
    /// Returns the weaker of the two capabilities.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Returns `true` if a cursor with this capability can do everything
    /// `required` asks for.
    #[inline]
    pub const fn supports(self, required: Self) -> bool {
        (self as u8) >= (required as u8)
    }

    /// Returns a short human-readable name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Bidirectional => "bidirectional",
            Self::RandomAccess => "random-access",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A type-level capability marker.
pub trait Traversal: Copy + Default + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// The value-level capability of this marker.
    const CAPABILITY: Capability;
}

/// Markers that allow stepping backward.
pub trait BidirectionalTraversal: Traversal {}

/// Markers that allow jumps and distance measurement.
pub trait RandomAccessTraversal: BidirectionalTraversal {}

/// Marker for cursors that only step forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Forward;

/// Marker for cursors that step in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bidirectional;

/// Marker for cursors with constant-time jumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RandomAccess;

impl Traversal for Forward {
    const CAPABILITY: Capability = Capability::Forward;
}

impl Traversal for Bidirectional {
    const CAPABILITY: Capability = Capability::Bidirectional;
}

impl Traversal for RandomAccess {
    const CAPABILITY: Capability = Capability::RandomAccess;
}

impl BidirectionalTraversal for Bidirectional {}
impl BidirectionalTraversal for RandomAccess {}
impl RandomAccessTraversal for RandomAccess {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_order() {
        assert!(Capability::Forward < Capability::Bidirectional);
        assert!(Capability::Bidirectional < Capability::RandomAccess);
    }

    #[test]
    fn test_capability_min_is_weakest() {
        use Capability::*;
        let all = [Forward, Bidirectional, RandomAccess];
        for &a in &all {
            for &b in &all {
                assert_eq!(a.min(b), std::cmp::min(a, b));
                assert_eq!(a.min(b), b.min(a));
            }
        }
    }

    #[test]
    fn test_capability_min_in_const_context() {
        const C: Capability = Capability::RandomAccess
            .min(Capability::Bidirectional)
            .min(Capability::RandomAccess);
        assert_eq!(C, Capability::Bidirectional);
    }

    #[test]
    fn test_supports() {
        assert!(Capability::RandomAccess.supports(Capability::RandomAccess));
        assert!(Capability::Bidirectional.supports(Capability::Forward));
        assert!(!Capability::Forward.supports(Capability::Bidirectional));
        assert!(!Capability::Bidirectional.supports(Capability::RandomAccess));
    }

    #[test]
    fn test_marker_capabilities() {
        assert_eq!(Forward::CAPABILITY, Capability::Forward);
        assert_eq!(Bidirectional::CAPABILITY, Capability::Bidirectional);
        assert_eq!(RandomAccess::CAPABILITY, Capability::RandomAccess);
    }

    #[test]
    fn test_display() {
        assert_eq!(Capability::RandomAccess.to_string(), "random-access");
        assert_eq!(Capability::Forward.to_string(), "forward");
    }
}

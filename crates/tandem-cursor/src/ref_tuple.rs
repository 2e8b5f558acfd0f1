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

//! # Reference Tuples
//!
//! [`RefTuple`] is the view a tandem hands out when a multi-cursor is
//! dereferenced: a tuple of references, one per slot, to the elements at the
//! cursor's position. Read views hold `&T` slots; write views hold `&mut T`
//! slots and write through to the underlying sequences.
//!
//! ## Highlights
//!
//! - Reads: [`values`](RefTuple::values) borrows all slots at once,
//!   [`to_tuple`](RefTuple::to_tuple) clones them into a value tuple, and
//!   [`slot::<I>()`](RefTuple::slot) reaches a single slot.
//! - Writes: `set` stores a value tuple, `assign` clones from another view,
//!   `take_from` moves from another view (leaving `Default` values behind),
//!   and `swap_with` exchanges element values. None of them change which
//!   elements the view refers to.
//! - Views compare by element value, lexicographically by slot.
//! - `Display` renders `[v0, v1, ..., vN-1]`.
//!
//! ```rust
//! use tandem_cursor::ref_tuple::RefTuple;
//!
//! let (mut a, mut b) = (1, "x".to_string());
//! let mut view = RefTuple::new((&mut a, &mut b));
//! view.set((2, "y".to_string()));
//! assert_eq!(view.to_string(), "[2, y]");
//! assert_eq!(*view.slot::<0>(), 2);
//! drop(view);
//! assert_eq!((a, b.as_str()), (2, "y"));
//! ```

use std::cmp::Ordering;

/// A reference that can serve as a slot of a [`RefTuple`].
pub trait ElementRef {
    /// The referenced element type.
    type Target: ?Sized;

    /// Returns a shared reference to the element.
    fn element(&self) -> &Self::Target;
}

/// A slot reference that permits mutation.
pub trait ElementMut: ElementRef {
    /// Returns an exclusive reference to the element.
    fn element_mut(&mut self) -> &mut Self::Target;
}

impl<T: ?Sized> ElementRef for &T {
    type Target = T;

    #[inline(always)]
    fn element(&self) -> &T {
        self
    }
}

impl<T: ?Sized> ElementRef for &mut T {
    type Target = T;

    #[inline(always)]
    fn element(&self) -> &T {
        self
    }
}

impl<T: ?Sized> ElementMut for &mut T {
    #[inline(always)]
    fn element_mut(&mut self) -> &mut T {
        self
    }
}

/// Shared access to slot `I` of a view.
pub trait Slot<const I: usize> {
    /// The element type of slot `I`.
    type Target: ?Sized;

    /// Returns a shared reference to the element in slot `I`.
    fn slot_ref(&self) -> &Self::Target;
}

/// Exclusive access to slot `I` of a write view.
pub trait SlotMut<const I: usize>: Slot<I> {
    /// Returns an exclusive reference to the element in slot `I`.
    fn slot_mut_ref(&mut self) -> &mut Self::Target;
}

/// A tuple of references to one element in each of several sequences.
#[derive(Debug, Clone, Copy, Hash)]
pub struct RefTuple<R> {
    refs: R,
}

impl<R> RefTuple<R> {
    /// Creates a view from a tuple of references.
    #[inline(always)]
    pub const fn new(refs: R) -> Self {
        Self { refs }
    }

    /// Returns the underlying tuple of references.
    #[inline(always)]
    pub fn into_inner(self) -> R {
        self.refs
    }

    /// Returns the element in slot `I`.
    #[inline(always)]
    pub fn slot<const I: usize>(&self) -> &<Self as Slot<I>>::Target
    where
        Self: Slot<I>,
    {
        <Self as Slot<I>>::slot_ref(self)
    }

    /// Returns the element in slot `I` for writing.
    #[inline(always)]
    pub fn slot_mut<const I: usize>(&mut self) -> &mut <Self as Slot<I>>::Target
    where
        Self: SlotMut<I>,
    {
        <Self as SlotMut<I>>::slot_mut_ref(self)
    }
}

macro_rules! impl_slot {
    ([$($all:ident),+]; $name:ident $idx:tt) => {
        impl<$($all: ElementRef),+> Slot<$idx> for RefTuple<($($all,)+)> {
            type Target = $name::Target;

            #[inline(always)]
            fn slot_ref(&self) -> &$name::Target {
                ElementRef::element(&self.refs.$idx)
            }
        }

        impl<$($all: ElementRef),+> SlotMut<$idx> for RefTuple<($($all,)+)>
        where
            $name: ElementMut,
        {
            #[inline(always)]
            fn slot_mut_ref(&mut self) -> &mut $name::Target {
                ElementMut::element_mut(&mut self.refs.$idx)
            }
        }
    };
}

macro_rules! impl_ref_tuple {
    ($($name:ident $other:ident $idx:tt),+) => {
        impl<$($name: ElementRef),+> RefTuple<($($name,)+)> {
            /// Borrows every slot at once.
            #[inline]
            pub fn values(&self) -> ($(&$name::Target,)+) {
                ($(ElementRef::element(&self.refs.$idx),)+)
            }

            /// Clones every slot into a tuple of values.
            #[inline]
            pub fn to_tuple(&self) -> ($($name::Target,)+)
            where
                $($name::Target: Clone,)+
            {
                ($(ElementRef::element(&self.refs.$idx).clone(),)+)
            }
        }

        impl<$($name: ElementMut),+> RefTuple<($($name,)+)> {
            /// Stores `values` into the referenced elements.
            #[inline]
            pub fn set(&mut self, values: ($($name::Target,)+))
            where
                $($name::Target: Sized,)+
            {
                $(*ElementMut::element_mut(&mut self.refs.$idx) = values.$idx;)+
            }

            /// Clones the elements referenced by `source` into the elements
            /// referenced by `self`.
            #[inline]
            pub fn assign<$($other),+>(&mut self, source: &RefTuple<($($other,)+)>)
            where
                $($other: ElementRef<Target = $name::Target>, $name::Target: Clone,)+
            {
                $(ElementMut::element_mut(&mut self.refs.$idx)
                    .clone_from(ElementRef::element(&source.refs.$idx));)+
            }

            /// Moves the elements referenced by `source` into the elements
            /// referenced by `self`, leaving `Default` values in `source`.
            #[inline]
            pub fn take_from<$($other),+>(&mut self, source: &mut RefTuple<($($other,)+)>)
            where
                $($other: ElementMut<Target = $name::Target>, $name::Target: Default,)+
            {
                $(*ElementMut::element_mut(&mut self.refs.$idx) =
                    std::mem::take(ElementMut::element_mut(&mut source.refs.$idx));)+
            }

            /// Exchanges the element values of `self` and `other`.
            #[inline]
            pub fn swap_with<$($other),+>(&mut self, other: &mut RefTuple<($($other,)+)>)
            where
                $($other: ElementMut<Target = $name::Target>, $name::Target: Sized,)+
            {
                $(std::mem::swap(
                    ElementMut::element_mut(&mut self.refs.$idx),
                    ElementMut::element_mut(&mut other.refs.$idx),
                );)+
            }
        }

        impl<$($name, $other),+> PartialEq<RefTuple<($($other,)+)>> for RefTuple<($($name,)+)>
        where
            $($name: ElementRef, $other: ElementRef, $name::Target: PartialEq<$other::Target>,)+
        {
            #[inline]
            fn eq(&self, other: &RefTuple<($($other,)+)>) -> bool {
                true $(&& ElementRef::element(&self.refs.$idx)
                    == ElementRef::element(&other.refs.$idx))+
            }
        }

        impl<$($name),+> Eq for RefTuple<($($name,)+)>
        where
            $($name: ElementRef, $name::Target: Eq,)+
        {
        }

        impl<$($name),+> PartialOrd for RefTuple<($($name,)+)>
        where
            $($name: ElementRef, $name::Target: PartialOrd,)+
        {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.values().partial_cmp(&other.values())
            }
        }

        impl<$($name),+> Ord for RefTuple<($($name,)+)>
        where
            $($name: ElementRef, $name::Target: Ord,)+
        {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                self.values().cmp(&other.values())
            }
        }

        impl<$($name),+> std::fmt::Display for RefTuple<($($name,)+)>
        where
            $($name: ElementRef, $name::Target: std::fmt::Display,)+
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("[")?;
                $(
                    if $idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", ElementRef::element(&self.refs.$idx))?;
                )+
                f.write_str("]")
            }
        }

        impl_slots!([$($name),+]; $($name $idx),+);
    };
}

macro_rules! impl_slots {
    ($all:tt; $($name:ident $idx:tt),+) => {
        $(impl_slot!($all; $name $idx);)+
    };
}

impl_ref_tuple!(A A2 0);
impl_ref_tuple!(A A2 0, B B2 1);
impl_ref_tuple!(A A2 0, B B2 1, C C2 2);
impl_ref_tuple!(A A2 0, B B2 1, C C2 2, D D2 3);
impl_ref_tuple!(A A2 0, B B2 1, C C2 2, D D2 3, E E2 4);
impl_ref_tuple!(A A2 0, B B2 1, C C2 2, D D2 3, E E2 4, F F2 5);

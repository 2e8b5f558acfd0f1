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

//! Turning possibly-absent handles into references.
//!
//! An absent handle is reported as [`Error::NullReference`] at the point of
//! use; there is no fallback value.

use crate::error::{Error, Result};

/// Returns the reference held by `handle`, or [`Error::NullReference`].
///
/// # Examples
///
/// ```rust
/// # use tandem_core::utils::reference::get_reference;
///
/// let value = 42;
/// assert!(std::ptr::eq(get_reference(Some(&value)).unwrap(), &value));
/// assert!(get_reference::<i32>(None).is_err());
/// ```
#[inline]
pub fn get_reference<T>(handle: Option<&T>) -> Result<&T>
where
    T: ?Sized,
{
    handle.ok_or(Error::NullReference)
}

/// Mutable counterpart of [`get_reference`].
#[inline]
pub fn get_reference_mut<T>(handle: Option<&mut T>) -> Result<&mut T>
where
    T: ?Sized,
{
    handle.ok_or(Error::NullReference)
}

/// Dereferences a raw pointer, reporting a null pointer as
/// [`Error::NullReference`].
///
/// # Safety
///
/// If `ptr` is non-null it must be properly aligned and point to a value
/// that stays valid and unmutated for `'a`.
#[inline]
pub unsafe fn get_reference_from_ptr<'a, T>(ptr: *const T) -> Result<&'a T> {
    // SAFETY: upheld by the caller; `as_ref` handles the null case.
    unsafe { ptr.as_ref() }.ok_or(Error::NullReference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_reference_for_value() {
        let value = 42;
        let reference = get_reference(Some(&value)).unwrap();
        assert!(std::ptr::eq(reference, &value));
    }

    #[test]
    fn test_null_reference_is_error() {
        assert!(matches!(
            get_reference::<i32>(None),
            Err(Error::NullReference)
        ));
    }

    #[test]
    fn test_mutable_reference_writes_through() {
        let mut value = 1;
        *get_reference_mut(Some(&mut value)).unwrap() = 5;
        assert_eq!(value, 5);
        assert!(get_reference_mut::<i32>(None).is_err());
    }

    #[test]
    fn test_unsized_reference() {
        let text = "hello";
        assert_eq!(get_reference(Some(text)).unwrap(), "hello");
    }

    #[test]
    fn test_reference_from_pointer() {
        let value = 7u64;
        let ptr: *const u64 = &value;
        let reference = unsafe { get_reference_from_ptr(ptr) }.unwrap();
        assert!(std::ptr::eq(reference, &value));
    }

    #[test]
    fn test_reference_from_null_pointer() {
        let ptr: *const u64 = std::ptr::null();
        assert!(matches!(
            unsafe { get_reference_from_ptr(ptr) },
            Err(Error::NullReference)
        ));
    }
}

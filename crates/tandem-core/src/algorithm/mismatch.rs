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

/// Finds where two sequences stop agreeing when compared from their ends.
///
/// Returns the start positions of the longest common suffix in `first` and
/// `second`. For equal sequences this is `(0, 0)`; if the last elements
/// already differ it is `(first.len(), second.len())`. The comparison never
/// reads past the front of the shorter sequence.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::mismatch_from_end;
///
/// assert_eq!(mismatch_from_end(&[3, 4, 5], &[1, 2, 3, 4, 5]), (0, 2));
/// assert_eq!(mismatch_from_end(&[1, 2, 3], &[1, 2, 4]), (3, 3));
/// ```
pub fn mismatch_from_end<T, U>(first: &[T], second: &[U]) -> (usize, usize)
where
    T: PartialEq<U>,
{
    let common = first
        .iter()
        .rev()
        .zip(second.iter().rev())
        .take_while(|(a, b)| *a == *b)
        .count();
    (first.len() - common, second.len() - common)
}

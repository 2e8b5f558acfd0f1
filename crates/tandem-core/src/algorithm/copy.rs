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

/// Writes `n` back-to-back clones of `source` to the front of `destination`.
///
/// Returns the position one past the last written element, which is
/// `n * source.len()`. Elements of `destination` beyond that position are
/// left untouched. Nothing is written if `n` is zero or `source` is empty.
///
/// # Panics
///
/// Panics if `destination` is shorter than `n * source.len()`.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::copy_range_n_times;
///
/// let mut destination = [0; 9];
/// let end = copy_range_n_times(&[1, 2, 3], &mut destination, 3);
///
/// assert_eq!(end, 9);
/// assert_eq!(destination, [1, 2, 3, 1, 2, 3, 1, 2, 3]);
/// ```
pub fn copy_range_n_times<T>(source: &[T], destination: &mut [T], n: usize) -> usize
where
    T: Clone,
{
    let len = source.len();
    if n == 0 || len == 0 {
        return 0;
    }

    let total = len.saturating_mul(n);
    assert!(
        total <= destination.len(),
        "called `copy_range_n_times` with a destination of length {} but {} copies of {} elements were requested",
        destination.len(),
        n,
        len
    );

    for chunk in destination[..total].chunks_exact_mut(len) {
        chunk.clone_from_slice(source);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_range_multiple_times() {
        let source = [1, 2, 3];
        let mut destination = vec![0; 9];
        let end = copy_range_n_times(&source, &mut destination, 3);
        assert_eq!(destination, vec![1, 2, 3, 1, 2, 3, 1, 2, 3]);
        assert_eq!(end, destination.len());
    }

    #[test]
    fn test_copies_range_once() {
        let source = [1, 2, 3];
        let mut destination = vec![0; 3];
        let end = copy_range_n_times(&source, &mut destination, 1);
        assert_eq!(destination, vec![1, 2, 3]);
        assert_eq!(end, 3);
    }

    #[test]
    fn test_empty_source() {
        let source: [i32; 0] = [];
        let mut destination: Vec<i32> = vec![];
        assert_eq!(copy_range_n_times(&source, &mut destination, 3), 0);
        assert!(destination.is_empty());
    }

    #[test]
    fn test_zero_copies_leave_destination_untouched() {
        let mut destination = vec![7, 7];
        assert_eq!(copy_range_n_times(&[1, 2], &mut destination, 0), 0);
        assert_eq!(destination, vec![7, 7]);
    }

    #[test]
    fn test_longer_destination_keeps_tail() {
        let mut destination = vec![0; 5];
        let end = copy_range_n_times(&[9, 8], &mut destination, 2);
        assert_eq!(end, 4);
        assert_eq!(destination, vec![9, 8, 9, 8, 0]);
    }

    #[test]
    fn test_clones_owned_values() {
        let source = vec![String::from("ab"), String::from("c")];
        let mut destination = vec![String::new(); 4];
        copy_range_n_times(&source, &mut destination, 2);
        assert_eq!(destination, vec!["ab", "c", "ab", "c"]);
    }

    #[test]
    #[should_panic(expected = "called `copy_range_n_times` with a destination of length 5")]
    fn test_short_destination_panics() {
        let mut destination = vec![0; 5];
        copy_range_n_times(&[1, 2, 3], &mut destination, 2);
    }
}

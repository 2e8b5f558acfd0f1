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

//! Maximum searches that report positions.
//!
//! `Iterator::max_by` keeps the *last* of several equal maxima and does not
//! say where it was. The functions here return the position of the *first*
//! maximum, optionally restricted to positions whose companion "condition"
//! value satisfies a predicate. Values only need `PartialOrd`; incomparable
//! values (such as `NaN`) never replace the current best.

/// Returns the position of the first maximal element, or `None` if `values`
/// is empty.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::argmax;
///
/// assert_eq!(argmax([1, 3, 5, 7, 9]), Some(4));
/// assert_eq!(argmax([5, 5, 5]), Some(0));
/// assert_eq!(argmax(Vec::<i32>::new()), None);
/// ```
pub fn argmax<I>(values: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut iter = values.into_iter().enumerate();
    let (mut best_index, mut best) = iter.next()?;
    for (index, value) in iter {
        if best < value {
            best_index = index;
            best = value;
        }
    }
    Some(best_index)
}

#[inline]
fn max_conditional<I, C, P>(values: I, conditions: C, mut predicate: P) -> Option<(usize, I::Item)>
where
    I: IntoIterator,
    I::Item: PartialOrd,
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    let mut best: Option<(usize, I::Item)> = None;
    for (index, (value, condition)) in values.into_iter().zip(conditions).enumerate() {
        if !predicate(condition) {
            continue;
        }
        let better = match &best {
            Some((_, current)) => *current < value,
            None => true,
        };
        if better {
            best = Some((index, value));
        }
    }
    best
}

/// Returns the position of the first maximum among the elements of `values`
/// whose parallel entry in `conditions` satisfies `predicate`.
///
/// The two sequences are walked in lock-step and the shorter one bounds the
/// search. Returns `None` if no position qualifies.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::argmax_conditional;
///
/// let values = [1, 3, 5, 7, 9];
/// let flags = [0, 1, 0, 1, 0];
/// assert_eq!(argmax_conditional(&values, &flags, |&f| f == 1), Some(3));
/// assert_eq!(argmax_conditional(&values, &flags, |&f| f == 2), None);
/// ```
pub fn argmax_conditional<I, C, P>(values: I, conditions: C, predicate: P) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    max_conditional(values, conditions, predicate).map(|(index, _)| index)
}

/// Like [`argmax_conditional`] but returns the maximal element itself.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::algorithm::max_element_conditional;
///
/// let values = vec![1, 3, 5, 7, 9];
/// let flags = vec![0, 1, 0, 1, 0];
/// assert_eq!(max_element_conditional(&values, &flags, |&f| f == 1), Some(&7));
/// ```
pub fn max_element_conditional<I, C, P>(values: I, conditions: C, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    max_conditional(values, conditions, predicate).map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_one(x: &i32) -> bool {
        *x == 1
    }

    #[test]
    fn test_argmax_finds_last_position_of_increasing() {
        assert_eq!(argmax(vec![1, 3, 5, 7, 9]), Some(4));
    }

    #[test]
    fn test_argmax_single_element() {
        assert_eq!(argmax([42]), Some(0));
    }

    #[test]
    fn test_argmax_empty() {
        assert_eq!(argmax(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_argmax_all_equal_returns_first() {
        assert_eq!(argmax([5, 5, 5, 5, 5]), Some(0));
    }

    #[test]
    fn test_argmax_negative_numbers() {
        assert_eq!(argmax([-1, -3, -5, -7, -9]), Some(0));
    }

    #[test]
    fn test_argmax_floats_skip_nan() {
        assert_eq!(argmax([1.0, f64::NAN, 3.0, 2.0]), Some(2));
    }

    #[test]
    fn test_argmax_by_reference() {
        let words = ["pear", "apple", "zucchini", "fig"];
        assert_eq!(argmax(words.iter()), Some(2));
    }

    #[test]
    fn test_argmax_conditional_with_predicate() {
        let v1 = [1, 3, 5, 7, 9];
        let v2 = [0, 1, 0, 1, 0];
        assert_eq!(argmax_conditional(&v1, &v2, is_one), Some(3));
    }

    #[test]
    fn test_argmax_conditional_none_satisfies() {
        let v1 = [1, 3, 5, 7, 9];
        let v2 = [0, 0, 0, 0, 0];
        assert_eq!(argmax_conditional(&v1, &v2, is_one), None);
    }

    #[test]
    fn test_argmax_conditional_empty() {
        let v1: [i32; 0] = [];
        let v2: [i32; 0] = [];
        assert_eq!(argmax_conditional(&v1, &v2, is_one), None);
    }

    #[test]
    fn test_argmax_conditional_single_element() {
        assert_eq!(argmax_conditional(&[1], &[1], is_one), Some(0));
    }

    #[test]
    fn test_argmax_conditional_all_satisfy() {
        let v1 = [1, 3, 5, 7, 9];
        let v2 = [1, 1, 1, 1, 1];
        assert_eq!(argmax_conditional(&v1, &v2, is_one), Some(4));
    }

    #[test]
    fn test_argmax_conditional_ties_keep_first() {
        let v1 = [4, 9, 2, 9];
        let v2 = [true, true, false, true];
        assert_eq!(argmax_conditional(v1, v2, |c| c), Some(1));
    }

    #[test]
    fn test_argmax_conditional_shorter_conditions_bound_search() {
        let v1 = [1, 2, 3, 100];
        let v2 = [1, 1, 1];
        assert_eq!(argmax_conditional(&v1, &v2, is_one), Some(2));
    }

    #[test]
    fn test_max_element_conditional() {
        let v1 = vec![1, 3, 5, 7, 9];
        let v2 = vec![0, 1, 0, 1, 0];
        assert_eq!(max_element_conditional(&v1, &v2, is_one), Some(&7));
    }

    #[test]
    fn test_max_element_conditional_none_satisfies() {
        let v1 = vec![1, 3, 5, 7, 9];
        let v2 = vec![0, 0, 0, 0, 0];
        assert_eq!(max_element_conditional(&v1, &v2, is_one), None);
    }

    #[test]
    fn test_max_element_conditional_empty() {
        let v1: Vec<i32> = vec![];
        let v2: Vec<i32> = vec![];
        assert_eq!(max_element_conditional(&v1, &v2, is_one), None);
    }

    #[test]
    fn test_max_element_conditional_single() {
        assert_eq!(max_element_conditional(&[1], &[1], is_one), Some(&1));
    }
}

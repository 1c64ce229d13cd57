//! Sequence generation: [`Sequence::range`] and [`Sequence::repeat`].
//!
//! Counts are taken as signed integers and validated before any element is
//! produced, so a negative count is a reportable domain error rather than a
//! silent impossibility.

use super::Sequence;
use crate::error::QueryError;

impl Sequence<i64> {
    /// Produces the sequence `start, start + 1, ..., start + count - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NegativeCount`] when `count` is negative and
    /// [`QueryError::Overflow`] when the final element would not fit in an
    /// `i64`. Both checks run before anything is allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::{QueryError, Sequence};
    ///
    /// assert_eq!(Sequence::range(5, 3), Ok(Sequence::from(vec![5, 6, 7])));
    /// assert_eq!(Sequence::range(5, 0), Ok(Sequence::new()));
    /// assert_eq!(Sequence::range(5, -1), Err(QueryError::NegativeCount));
    /// ```
    pub fn range(start: i64, count: i64) -> Result<Self, QueryError> {
        if count < 0 {
            return Err(QueryError::NegativeCount);
        }
        if count > 0 && start.checked_add(count - 1).is_none() {
            return Err(QueryError::Overflow);
        }
        Ok((0..count).map(|offset| start + offset).collect())
    }
}

impl<T: Clone> Sequence<T> {
    /// Produces a sequence of `count` clones of `element`.
    ///
    /// Clones are whatever `T::clone` produces; shared-ownership types like
    /// `Rc` repeat the same referent rather than deep copies.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NegativeCount`] when `count` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::{QueryError, Sequence};
    ///
    /// assert_eq!(
    ///     Sequence::repeat("ha", 3),
    ///     Ok(Sequence::from(vec!["ha", "ha", "ha"]))
    /// );
    /// assert_eq!(Sequence::<i32>::repeat(1, -2), Err(QueryError::NegativeCount));
    /// ```
    pub fn repeat(element: T, count: i64) -> Result<Self, QueryError> {
        let count = usize::try_from(count).map_err(|_| QueryError::NegativeCount)?;
        Ok(std::iter::repeat_n(element, count).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    #[rstest]
    #[case::from_zero(0, 4, vec![0, 1, 2, 3])]
    #[case::from_negative(-2, 5, vec![-2, -1, 0, 1, 2])]
    #[case::empty(9, 0, vec![])]
    #[case::single(9, 1, vec![9])]
    fn test_range(#[case] start: i64, #[case] count: i64, #[case] expected: Vec<i64>) {
        assert_eq!(Sequence::range(start, count), Ok(Sequence::from(expected)));
    }

    #[rstest]
    fn test_range_rejects_negative_count() {
        assert_eq!(Sequence::range(0, -1), Err(QueryError::NegativeCount));
    }

    #[rstest]
    fn test_range_rejects_overflowing_end() {
        assert_eq!(Sequence::range(i64::MAX, 2), Err(QueryError::Overflow));
        // The last representable element is still fine.
        assert_eq!(
            Sequence::range(i64::MAX, 1),
            Ok(Sequence::from(vec![i64::MAX]))
        );
    }

    #[rstest]
    fn test_range_positions_follow_start() {
        let sequence = Sequence::range(100, 10).unwrap();
        assert_eq!(sequence.len(), 10);
        for (index, element) in sequence.iter().enumerate() {
            assert_eq!(*element, 100 + i64::try_from(index).unwrap());
        }
    }

    #[rstest]
    #[case::several(3, vec!["x", "x", "x"])]
    #[case::once(1, vec!["x"])]
    #[case::never(0, vec![])]
    fn test_repeat(#[case] count: i64, #[case] expected: Vec<&str>) {
        assert_eq!(
            Sequence::repeat("x", count),
            Ok(Sequence::from(expected))
        );
    }

    #[rstest]
    fn test_repeat_rejects_negative_count() {
        assert_eq!(Sequence::repeat('a', -1), Err(QueryError::NegativeCount));
    }

    #[rstest]
    fn test_repeat_shares_rather_than_deep_copies() {
        let shared = Rc::new(42);
        let sequence = Sequence::repeat(Rc::clone(&shared), 3).unwrap();
        assert_eq!(sequence.len(), 3);
        // Three clones of the Rc plus the original: four strong references
        // to a single allocation.
        assert_eq!(Rc::strong_count(&shared), 4);
        assert!(sequence.iter().all(|element| Rc::ptr_eq(element, &shared)));
    }
}

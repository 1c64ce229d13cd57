//! The eager [`Sequence`] type and its positional operators.
//!
//! A [`Sequence`] is an ordered, finite, owned collection of elements of a
//! single type, addressed by 0-based position. It is the receiver of every
//! query operator in this crate:
//!
//! - positional access and the single-element family live in this module
//! - comparer-driven set semantics: `contains`, `distinct`, `except`,
//!   `intersect`
//! - folds: `all`, `any`, `count`, `average`, `min`, `max`
//! - projection and filtering: `select`, `where_by`
//! - generation: [`Sequence::range`], [`Sequence::repeat`]
//!
//! # Defensive copies
//!
//! Operators never mutate their receiver and never retain a reference to it
//! after returning. Every operator that produces a sequence allocates a fresh
//! one; the only pass-through case, [`Sequence::default_if_empty`] on a
//! non-empty receiver, returns a copy of the input rather than the input
//! itself.
//!
//! # Examples
//!
//! ```rust
//! use seqlinq::Sequence;
//!
//! let numbers = Sequence::from(vec![10, 20, 30]);
//! assert_eq!(numbers.element_at(1), Ok(&20));
//! assert_eq!(numbers.first(), Ok(&10));
//! assert_eq!(numbers.last(), Ok(&30));
//!
//! // The original is untouched by any operator.
//! let doubled = numbers.select(|n, _| n * 2);
//! assert_eq!(numbers.len(), 3);
//! assert_eq!(doubled, Sequence::from(vec![20, 40, 60]));
//! ```

mod aggregate;
mod generate;
mod membership;
mod project;

use crate::error::QueryError;

/// An ordered, finite sequence of elements, addressed by 0-based position.
///
/// `Sequence` owns its elements. Query operators take `&self` and return
/// freshly allocated sequences or scalars; the receiver is never mutated.
///
/// # Examples
///
/// ```rust
/// use seqlinq::Sequence;
///
/// let sequence: Sequence<i32> = (1..=3).collect();
/// assert_eq!(sequence.len(), 3);
/// assert!(sequence.contains(&2));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements.
    ///
    /// This is also the no-predicate form of `count`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence contains no elements.
    ///
    /// The no-predicate form of `any` is its negation: a sequence "has any
    /// elements" iff `!is_empty()`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over references to the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a reference to the element at `position`, or `None` if out
    /// of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.elements.get(position)
    }

    /// Consumes the sequence and returns the backing `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a reference to the element at the given signed `index`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::IndexOutOfBounds`] when `index` is negative or
    /// not less than the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::{QueryError, Sequence};
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(sequence.element_at(0), Ok(&1));
    /// assert_eq!(sequence.element_at(3), Err(QueryError::IndexOutOfBounds));
    /// assert_eq!(sequence.element_at(-1), Err(QueryError::IndexOutOfBounds));
    /// ```
    pub fn element_at(&self, index: i64) -> Result<&T, QueryError> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.elements.get(position))
            .ok_or(QueryError::IndexOutOfBounds)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoMatch`] when the sequence is empty.
    pub fn first(&self) -> Result<&T, QueryError> {
        self.elements.first().ok_or(QueryError::NoMatch)
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// The predicate must return `true` for a match; no other value counts.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoMatch`] when no element satisfies the
    /// predicate, including when the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::{QueryError, Sequence};
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(sequence.first_where(|n| n % 2 == 0), Ok(&2));
    /// assert_eq!(
    ///     sequence.first_where(|n| *n > 9),
    ///     Err(QueryError::NoMatch)
    /// );
    /// ```
    pub fn first_where<P>(&self, predicate: P) -> Result<&T, QueryError>
    where
        P: Fn(&T) -> bool,
    {
        self.elements
            .iter()
            .find(|element| predicate(element))
            .ok_or(QueryError::NoMatch)
    }

    /// Fallible-predicate form of [`Sequence::first_where`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPredicate`] when the predicate itself
    /// fails, and [`QueryError::NoMatch`] when it never matches. The two
    /// channels stay distinct: a missing match is not a predicate failure.
    pub fn try_first_where<P, E>(&self, predicate: P) -> Result<&T, QueryError>
    where
        P: Fn(&T) -> Result<bool, E>,
    {
        for element in &self.elements {
            if predicate(element).map_err(|_| QueryError::InvalidPredicate)? {
                return Ok(element);
            }
        }
        Err(QueryError::NoMatch)
    }

    /// Returns the first element, or `None` if the sequence is empty.
    ///
    /// Null-safe companion to [`Sequence::first`]: never produces an error.
    #[inline]
    #[must_use]
    pub fn first_or_default(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the first element satisfying `predicate`, or `None`.
    ///
    /// Null-safe companion to [`Sequence::first_where`].
    #[must_use]
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.elements.iter().find(|element| predicate(element))
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoMatch`] when the sequence is empty.
    pub fn last(&self) -> Result<&T, QueryError> {
        self.elements.last().ok_or(QueryError::NoMatch)
    }

    /// Returns the last element satisfying `predicate`, scanning from the
    /// end.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoMatch`] when no element satisfies the
    /// predicate, including when the sequence is empty.
    pub fn last_where<P>(&self, predicate: P) -> Result<&T, QueryError>
    where
        P: Fn(&T) -> bool,
    {
        self.elements
            .iter()
            .rev()
            .find(|element| predicate(element))
            .ok_or(QueryError::NoMatch)
    }

    /// Returns the last element, or `None` if the sequence is empty.
    ///
    /// Null-safe companion to [`Sequence::last`].
    #[inline]
    #[must_use]
    pub fn last_or_default(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the last element satisfying `predicate`, or `None`.
    ///
    /// Null-safe companion to [`Sequence::last_where`].
    #[must_use]
    pub fn rfind<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.elements.iter().rev().find(|element| predicate(element))
    }

    /// Returns the sole element of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for an empty sequence and
    /// [`QueryError::MoreThanOneElement`] for a sequence of length two or
    /// more.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::{QueryError, Sequence};
    ///
    /// assert_eq!(Sequence::from(vec![5]).single(), Ok(&5));
    /// assert_eq!(
    ///     Sequence::from(vec![5, 6]).single(),
    ///     Err(QueryError::MoreThanOneElement)
    /// );
    /// assert_eq!(
    ///     Sequence::<i32>::new().single(),
    ///     Err(QueryError::Empty)
    /// );
    /// ```
    pub fn single(&self) -> Result<&T, QueryError> {
        match self.elements.as_slice() {
            [] => Err(QueryError::Empty),
            [only] => Ok(only),
            _ => Err(QueryError::MoreThanOneElement),
        }
    }

    /// Returns the unique element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoMatch`] when no element satisfies the
    /// predicate and [`QueryError::MoreThanOneMatch`] when more than one
    /// does.
    pub fn single_where<P>(&self, predicate: P) -> Result<&T, QueryError>
    where
        P: Fn(&T) -> bool,
    {
        let mut matches = self.elements.iter().filter(|element| predicate(element));
        let found = matches.next().ok_or(QueryError::NoMatch)?;
        if matches.next().is_some() {
            return Err(QueryError::MoreThanOneMatch);
        }
        Ok(found)
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a copy of the sequence, or a singleton of `default` when the
    /// sequence is empty.
    ///
    /// The default value is always supplied explicitly; there is no implicit
    /// zero value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert_eq!(empty.default_if_empty(7), Sequence::from(vec![7]));
    ///
    /// let full = Sequence::from(vec![1, 2]);
    /// assert_eq!(full.default_if_empty(7), full);
    /// ```
    #[must_use]
    pub fn default_if_empty(&self, default: T) -> Self {
        if self.is_empty() {
            Self {
                elements: vec![default],
            }
        } else {
            self.clone()
        }
    }

    /// Returns a `Vec` containing clones of all elements, in order.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    #[inline]
    fn from(elements: &[T]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> std::ops::Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, position: usize) -> &T {
        &self.elements[position]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let sequence: Sequence<i32> = Sequence::new();
        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
    }

    #[rstest]
    #[case::front(0, Ok(&1))]
    #[case::middle(1, Ok(&2))]
    #[case::back(2, Ok(&3))]
    #[case::past_end(3, Err(QueryError::IndexOutOfBounds))]
    #[case::negative(-1, Err(QueryError::IndexOutOfBounds))]
    fn test_element_at(#[case] index: i64, #[case] expected: Result<&i32, QueryError>) {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.element_at(index), expected);
    }

    #[rstest]
    fn test_first_and_last() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.first(), Ok(&1));
        assert_eq!(sequence.last(), Ok(&3));
    }

    #[rstest]
    fn test_first_and_last_on_empty() {
        let sequence: Sequence<i32> = Sequence::new();
        assert_eq!(sequence.first(), Err(QueryError::NoMatch));
        assert_eq!(sequence.last(), Err(QueryError::NoMatch));
    }

    #[rstest]
    fn test_first_where_returns_first_match() {
        let sequence = Sequence::from(vec![1, 2, 3, 4]);
        assert_eq!(sequence.first_where(|n| n % 2 == 0), Ok(&2));
    }

    #[rstest]
    fn test_last_where_scans_from_the_end() {
        let sequence = Sequence::from(vec![1, 2, 3, 4]);
        assert_eq!(sequence.last_where(|n| n % 2 == 0), Ok(&4));
    }

    #[rstest]
    fn test_first_where_without_match() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.first_where(|n| *n > 9), Err(QueryError::NoMatch));
    }

    #[rstest]
    fn test_try_first_where_distinguishes_failure_from_no_match() {
        let sequence = Sequence::from(vec![1, 2, 3]);

        let failing = sequence.try_first_where(|_: &i32| Err::<bool, &str>("boom"));
        assert_eq!(failing, Err(QueryError::InvalidPredicate));

        let no_match = sequence.try_first_where(|n| Ok::<bool, &str>(*n > 9));
        assert_eq!(no_match, Err(QueryError::NoMatch));

        let matched = sequence.try_first_where(|n| Ok::<bool, &str>(*n > 1));
        assert_eq!(matched, Ok(&2));
    }

    #[rstest]
    fn test_or_default_family_never_errors() {
        let empty: Sequence<i32> = Sequence::new();
        assert_eq!(empty.first_or_default(), None);
        assert_eq!(empty.last_or_default(), None);
        assert_eq!(empty.find(|_| true), None);
        assert_eq!(empty.rfind(|_| true), None);

        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.first_or_default(), Some(&1));
        assert_eq!(sequence.last_or_default(), Some(&3));
        assert_eq!(sequence.find(|n| n % 2 == 0), Some(&2));
        assert_eq!(sequence.rfind(|n| *n < 3), Some(&2));
    }

    #[rstest]
    #[case::sole_element(vec![5], Ok(&5))]
    #[case::empty(vec![], Err(QueryError::Empty))]
    #[case::two_elements(vec![5, 6], Err(QueryError::MoreThanOneElement))]
    fn test_single(#[case] elements: Vec<i32>, #[case] expected: Result<&i32, QueryError>) {
        assert_eq!(Sequence::from(elements).single(), expected);
    }

    #[rstest]
    fn test_single_where() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.single_where(|n| *n == 2), Ok(&2));
        assert_eq!(
            sequence.single_where(|n| *n > 9),
            Err(QueryError::NoMatch)
        );
        assert_eq!(
            sequence.single_where(|n| *n > 1),
            Err(QueryError::MoreThanOneMatch)
        );
    }

    #[rstest]
    fn test_default_if_empty_copies_non_empty_input() {
        let sequence = Sequence::from(vec![1, 2]);
        let copy = sequence.default_if_empty(9);
        assert_eq!(copy, sequence);
    }

    #[rstest]
    fn test_default_if_empty_produces_singleton() {
        let empty: Sequence<i32> = Sequence::new();
        assert_eq!(empty.default_if_empty(9), Sequence::from(vec![9]));
    }

    #[rstest]
    fn test_round_trip_conversions() {
        let sequence: Sequence<i32> = vec![1, 2, 3].into();
        assert_eq!(sequence.as_slice(), &[1, 2, 3]);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
        assert_eq!(sequence.clone().into_vec(), vec![1, 2, 3]);

        let collected: Sequence<i32> = sequence.iter().copied().collect();
        assert_eq!(collected, sequence);
    }

    #[rstest]
    fn test_index_and_get() {
        let sequence = Sequence::from(vec![10, 20]);
        assert_eq!(sequence[1], 20);
        assert_eq!(sequence.get(1), Some(&20));
        assert_eq!(sequence.get(2), None);
    }

    #[rstest]
    fn test_debug_formats_as_list() {
        let sequence = Sequence::from(vec![1, 2]);
        assert_eq!(format!("{sequence:?}"), "[1, 2]");
    }
}

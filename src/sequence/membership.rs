//! Comparer-driven membership: `contains`, `distinct`, `except`,
//! `intersect`.
//!
//! This module provides the equality-semantics layer of the crate. Each
//! operator here is parameterized by a *comparer*, a pure, symmetric
//! `Fn(&T, &T) -> bool`; the `_by` variants accept one explicitly and the
//! plain variants default to `PartialEq`. Internally the operators share
//! [`UniqueSet`], a call-scoped, append-only store of element references
//! that answers membership queries under the given comparer.
//!
//! # Membership model
//!
//! A comparer is not required to be transitive, and no hashing or ordering
//! is assumed, so membership testing is a linear scan against the stored
//! elements. That makes the operators O(n·m) in the comparer:
//!
//! | Operator       | Comparisons            |
//! |----------------|------------------------|
//! | `contains_by`  | O(n)                   |
//! | `distinct_by`  | O(n·k), k kept so far  |
//! | `except_by`    | O(n·(m + k))           |
//! | `intersect_by` | O(n·(m + k))           |
//!
//! # First-occurrence semantics
//!
//! `distinct_by` keeps the first occurrence of each equivalence class, where
//! a candidate is tested **only against previously kept elements**, not
//! against the full pairwise closure. For a non-transitive comparer the
//! outcome is therefore order-dependent; two kept elements may both be
//! "equal" to a third under the comparer without being equal to each other.
//! Symmetric comparers are assumed; asymmetric ones produce unspecified
//! results.
//!
//! # Examples
//!
//! ```rust
//! use seqlinq::Sequence;
//!
//! let left = Sequence::from(vec![1, 1, 2, 3, 1]);
//! let right = Sequence::from(vec![4, 5, 6]);
//!
//! assert_eq!(left.distinct(), Sequence::from(vec![1, 2, 3]));
//! assert_eq!(left.except(&right), Sequence::from(vec![1, 2, 3]));
//! assert_eq!(left.except(&left), Sequence::new());
//! ```

use smallvec::SmallVec;

use super::Sequence;
use crate::error::QueryError;

/// Inline capacity of the membership store before it spills to the heap.
///
/// Matches the small-collection representation used elsewhere in the
/// ecosystem: reference collections in query expressions are usually tiny,
/// so the common case stays allocation-free.
const INLINE_CAPACITY: usize = 8;

/// A call-scoped, append-only collection of element references under a
/// caller-supplied equality notion.
///
/// Invariant: no two *added* elements satisfy the comparer pairwise. Seeding
/// does not deduplicate; callers seed only with reference collections whose
/// duplicates are harmless for membership queries.
///
/// `UniqueSet` never validates inputs; validation is the responsibility of
/// the operators built on top of it. Its lifetime is strictly nested inside
/// a single operator call and it is never shared or persisted.
pub(crate) struct UniqueSet<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    elements: SmallVec<[&'a T; INLINE_CAPACITY]>,
    comparer: F,
}

impl<'a, T, F> UniqueSet<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty set using `comparer` as its equality notion.
    pub(crate) fn with_comparer(comparer: F) -> Self {
        Self {
            elements: SmallVec::new(),
            comparer,
        }
    }

    /// Creates a set seeded with references to every element of `seed`, in
    /// order, without deduplicating.
    pub(crate) fn seeded(seed: &'a [T], comparer: F) -> Self {
        Self {
            elements: seed.iter().collect(),
            comparer,
        }
    }

    /// Returns `true` iff some stored element `kept` satisfies
    /// `comparer(element, kept)`. O(current size).
    pub(crate) fn contains(&self, element: &T) -> bool {
        self.elements.iter().any(|kept| (self.comparer)(element, kept))
    }

    /// Inserts `element` if it is absent. Returns whether it was inserted.
    ///
    /// The sole mutator.
    pub(crate) fn add(&mut self, element: &'a T) -> bool {
        if self.contains(element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// The stored references, insertion order preserved.
    pub(crate) fn elements(&self) -> &[&'a T] {
        &self.elements
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if some element equals `value` under `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert!(sequence.contains(&2));
    /// assert!(!sequence.contains(&9));
    /// assert!(!Sequence::<i32>::new().contains(&1));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T> Sequence<T> {
    /// Returns `true` if some element equals `value` under `comparer`.
    ///
    /// The scan is linear and stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let words = Sequence::from(vec!["Alpha", "Beta"]);
    /// assert!(words.contains_by(&"beta", |left, right| {
    ///     left.eq_ignore_ascii_case(right)
    /// }));
    /// ```
    #[must_use]
    pub fn contains_by<F>(&self, value: &T, comparer: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        self.iter().any(|element| comparer(element, value))
    }

    /// Fallible-comparer form of [`Sequence::contains_by`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidComparer`] when the comparer itself
    /// fails; the underlying failure is not propagated.
    pub fn try_contains_by<F, E>(&self, value: &T, comparer: F) -> Result<bool, QueryError>
    where
        F: Fn(&T, &T) -> Result<bool, E>,
    {
        for element in self.iter() {
            if comparer(element, value).map_err(|_| QueryError::InvalidComparer)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns the distinct elements under `PartialEq`, first occurrence
    /// kept, input order preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 1, 2, 3, 1]);
    /// assert_eq!(sequence.distinct(), Sequence::from(vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self
    where
        T: PartialEq,
    {
        self.distinct_by(|left, right| left == right)
    }

    /// Returns the distinct elements under `comparer`, first occurrence
    /// kept, input order preserved.
    ///
    /// A candidate is kept iff it matches **no previously kept element**.
    /// The full pairwise closure is never computed, so a non-transitive
    /// comparer yields order-dependent, first-occurrence-wins results (see
    /// the module documentation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let words = Sequence::from(vec!["one", "two", "three", "four"]);
    /// let by_length = words.distinct_by(|left, right| left.len() == right.len());
    /// assert_eq!(by_length, Sequence::from(vec!["one", "three", "four"]));
    /// ```
    #[must_use]
    pub fn distinct_by<F>(&self, comparer: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut kept = UniqueSet::with_comparer(comparer);
        for element in self.iter() {
            kept.add(element);
        }
        kept.elements().iter().copied().cloned().collect()
    }

    /// Returns the elements of `self` not present in `other` under
    /// `PartialEq`, with duplicates of `self` removed as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let left = Sequence::from(vec![1, 1, 2, 3, 1]);
    /// let right = Sequence::from(vec![4, 5, 6]);
    /// assert_eq!(left.except(&right), Sequence::from(vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn except(&self, other: &Self) -> Self
    where
        T: PartialEq,
    {
        self.except_by(other, |left, right| left == right)
    }

    /// Returns the elements of `self` not present in `other` under
    /// `comparer`.
    ///
    /// The exclusion set is seeded with `other` and then grows: each kept
    /// element of `self` is added to it, so a repeated element of `self` is
    /// excluded after its first occurrence. `sequence.except_by(&sequence, ..)`
    /// is therefore always empty.
    #[must_use]
    pub fn except_by<F>(&self, other: &Self, comparer: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut excluded = UniqueSet::seeded(other.as_slice(), comparer);
        let mut kept = Vec::new();
        for element in self.iter() {
            if excluded.add(element) {
                kept.push(element.clone());
            }
        }
        Self::from(kept)
    }

    /// Returns the elements present in both `self` and `other` under
    /// `PartialEq`, deduplicated, in `self`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let left = Sequence::from(vec![1, 2, 3]);
    /// let right = Sequence::from(vec![3, 4, 5]);
    /// assert_eq!(left.intersect(&right), Sequence::from(vec![3]));
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self
    where
        T: PartialEq,
    {
        self.intersect_by(other, |left, right| left == right)
    }

    /// Returns the elements present in both `self` and `other` under
    /// `comparer`, deduplicated, in `self`'s order.
    ///
    /// Two sets share the comparer: an exclusion set seeded from `other`
    /// answers "is this element of `self` present in `other`?", and an
    /// initially empty result set deduplicates what passes. The result never
    /// contains duplicates, regardless of duplicates in either operand.
    #[must_use]
    pub fn intersect_by<F>(&self, other: &Self, comparer: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let reference = UniqueSet::seeded(other.as_slice(), &comparer);
        let mut kept = UniqueSet::with_comparer(&comparer);
        let mut result = Vec::new();
        for element in self.iter() {
            if reference.contains(element) && kept.add(element) {
                result.push(element.clone());
            }
        }
        Self::from(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unique_set_add_rejects_duplicates() {
        let elements = [1, 2, 2, 3];
        let mut set = UniqueSet::with_comparer(|left: &i32, right: &i32| left == right);

        assert!(set.add(&elements[0]));
        assert!(set.add(&elements[1]));
        assert!(!set.add(&elements[2]));
        assert!(set.add(&elements[3]));
        assert_eq!(set.elements(), &[&1, &2, &3]);
    }

    #[rstest]
    fn test_unique_set_seeding_does_not_deduplicate() {
        let seed = [1, 1, 2];
        let set = UniqueSet::seeded(&seed, |left: &i32, right: &i32| left == right);
        assert_eq!(set.elements().len(), 3);
        assert!(set.contains(&1));
        assert!(!set.contains(&3));
    }

    #[rstest]
    fn test_unique_set_preserves_insertion_order() {
        let elements = [3, 1, 2];
        let mut set = UniqueSet::with_comparer(|left: &i32, right: &i32| left == right);
        for element in &elements {
            set.add(element);
        }
        assert_eq!(set.elements(), &[&3, &1, &2]);
    }

    #[rstest]
    #[case::duplicates(vec![1, 1, 2, 3, 1], vec![1, 2, 3])]
    #[case::already_distinct(vec![1, 2, 3], vec![1, 2, 3])]
    #[case::single_element(vec![7], vec![7])]
    #[case::empty(vec![], vec![])]
    fn test_distinct(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(
            Sequence::from(input).distinct(),
            Sequence::from(expected)
        );
    }

    #[rstest]
    fn test_distinct_by_custom_comparer() {
        let words = Sequence::from(vec!["Alpha", "alpha", "beta", "ALPHA"]);
        let distinct = words.distinct_by(|left, right| left.eq_ignore_ascii_case(right));
        assert_eq!(distinct, Sequence::from(vec!["Alpha", "beta"]));
    }

    // With |a, b| (a - b).abs() <= 1: 1 is kept; 2 matches kept 1 and is
    // dropped; 3 matches no kept element (|3 - 1| = 2) and is kept, even
    // though 3 would have matched the dropped 2. Kept-only scanning,
    // first occurrence wins.
    #[rstest]
    fn test_distinct_by_non_transitive_comparer_is_order_dependent() {
        let numbers = Sequence::from(vec![1i32, 2, 3]);
        let close = numbers.distinct_by(|left, right| (left - right).abs() <= 1);
        assert_eq!(close, Sequence::from(vec![1, 3]));

        let reordered = Sequence::from(vec![2i32, 1, 3]);
        let close = reordered.distinct_by(|left, right| (left - right).abs() <= 1);
        assert_eq!(close, Sequence::from(vec![2]));
    }

    #[rstest]
    #[case::disjoint(vec![1, 1, 2, 3, 1], vec![4, 5, 6], vec![1, 2, 3])]
    #[case::overlapping(vec![1, 2, 3, 4], vec![2, 4], vec![1, 3])]
    #[case::empty_other(vec![1, 2, 1], vec![], vec![1, 2])]
    #[case::empty_self(vec![], vec![1, 2], vec![])]
    fn test_except(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(
            Sequence::from(left).except(&Sequence::from(right)),
            Sequence::from(expected)
        );
    }

    #[rstest]
    fn test_except_self_is_empty() {
        let sequence = Sequence::from(vec![1, 2, 3, 2, 1]);
        assert_eq!(sequence.except(&sequence), Sequence::new());
    }

    #[rstest]
    fn test_except_excludes_repeats_of_already_kept_elements() {
        let left = Sequence::from(vec![1, 2, 1, 1]);
        let right = Sequence::from(vec![9]);
        assert_eq!(left.except(&right), Sequence::from(vec![1, 2]));
    }

    #[rstest]
    #[case::basic(vec![1, 2, 3], vec![3, 4, 5], vec![3])]
    #[case::duplicates_in_self(vec![1, 2, 2, 3, 3], vec![2, 3], vec![2, 3])]
    #[case::duplicates_in_other(vec![1, 2], vec![2, 2, 2], vec![2])]
    #[case::disjoint(vec![1, 2], vec![3, 4], vec![])]
    #[case::empty_other(vec![1, 2], vec![], vec![])]
    fn test_intersect(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(
            Sequence::from(left).intersect(&Sequence::from(right)),
            Sequence::from(expected)
        );
    }

    #[rstest]
    fn test_intersect_by_custom_comparer() {
        let left = Sequence::from(vec!["Alpha", "Beta", "GAMMA"]);
        let right = Sequence::from(vec!["alpha", "gamma"]);
        let shared = left.intersect_by(&right, |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(shared, Sequence::from(vec!["Alpha", "GAMMA"]));
    }

    #[rstest]
    fn test_contains_with_default_and_custom_comparers() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert!(sequence.contains(&2));
        assert!(!sequence.contains(&9));
        assert!(sequence.contains_by(&12, |left, right| left % 10 == right % 10));
    }

    #[rstest]
    fn test_try_contains_by_resignals_comparer_failure() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        let result =
            sequence.try_contains_by(&2, |_: &i32, _: &i32| Err::<bool, &str>("boom"));
        assert_eq!(result, Err(QueryError::InvalidComparer));

        let found = sequence.try_contains_by(&2, |left, right| Ok::<bool, &str>(left == right));
        assert_eq!(found, Ok(true));
    }

    #[rstest]
    fn test_operators_leave_input_untouched() {
        let sequence = Sequence::from(vec![1, 1, 2]);
        let _ = sequence.distinct();
        let _ = sequence.except(&Sequence::from(vec![2]));
        let _ = sequence.intersect(&Sequence::from(vec![1]));
        assert_eq!(sequence, Sequence::from(vec![1, 1, 2]));
    }
}

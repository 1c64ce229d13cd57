//! Projection and filtering: `select`, `where_by`.

use super::Sequence;
use crate::error::QueryError;

impl<T> Sequence<T> {
    /// Maps every element (and its 0-based position) through `selector`,
    /// preserving order and length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let numbers = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(
    ///     numbers.select(|n, _| n * 2),
    ///     Sequence::from(vec![2, 4, 6])
    /// );
    /// assert_eq!(
    ///     numbers.select(|_, index| index),
    ///     Sequence::from(vec![0, 1, 2])
    /// );
    /// ```
    #[must_use]
    pub fn select<R, F>(&self, selector: F) -> Sequence<R>
    where
        F: Fn(&T, usize) -> R,
    {
        self.iter()
            .enumerate()
            .map(|(index, element)| selector(element, index))
            .collect()
    }

    /// Fallible-selector form of [`Sequence::select`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidSelector`] when the selector fails; the
    /// underlying failure is not propagated and no partial result is
    /// returned.
    pub fn try_select<R, F, E>(&self, selector: F) -> Result<Sequence<R>, QueryError>
    where
        F: Fn(&T, usize) -> Result<R, E>,
    {
        let mut projected = Vec::with_capacity(self.len());
        for (index, element) in self.iter().enumerate() {
            projected.push(selector(element, index).map_err(|_| QueryError::InvalidSelector)?);
        }
        Ok(Sequence::from(projected))
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns the elements satisfying `predicate`, in order.
    ///
    /// Named `where_by` because `where` is a Rust keyword.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let numbers = Sequence::from(vec![1, 2, 3, 4]);
    /// assert_eq!(
    ///     numbers.where_by(|n| n % 2 == 0),
    ///     Sequence::from(vec![2, 4])
    /// );
    /// ```
    #[must_use]
    pub fn where_by<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Fallible-predicate form of [`Sequence::where_by`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPredicate`] when the predicate fails.
    pub fn try_where<P, E>(&self, predicate: P) -> Result<Self, QueryError>
    where
        P: Fn(&T) -> Result<bool, E>,
    {
        let mut kept = Vec::new();
        for element in self.iter() {
            if predicate(element).map_err(|_| QueryError::InvalidPredicate)? {
                kept.push(element.clone());
            }
        }
        Ok(Self::from(kept))
    }
}

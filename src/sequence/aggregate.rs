//! Predicate tests and folds: `all`, `any`, `count`, `average`, `min`,
//! `max`.
//!
//! Each operator runs a single eager pass over the sequence. The aggregates
//! that are undefined on empty input (`average`, `min`, `max`) check
//! emptiness before invoking any caller-supplied callback, so a selector is
//! never run against a sequence whose aggregate cannot exist.
//!
//! `min`/`max` fold with strict `<`/`>` comparisons under `PartialOrd`; an
//! incomparable candidate (such as a `NaN`) never displaces the current
//! best.

use super::Sequence;
use crate::error::QueryError;

impl<T> Sequence<T> {
    /// Returns `true` iff every element satisfies `predicate`.
    ///
    /// An empty sequence satisfies every predicate vacuously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let numbers = Sequence::from(vec![2, 4, 6]);
    /// assert!(numbers.all(|n| n % 2 == 0));
    /// assert!(!numbers.all(|n| *n > 2));
    /// assert!(Sequence::<i32>::new().all(|_| false));
    /// ```
    #[must_use]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().all(|element| predicate(element))
    }

    /// Returns `true` iff some element satisfies `predicate`.
    ///
    /// The no-predicate form ("does the sequence contain any elements?") is
    /// `!self.is_empty()`.
    #[must_use]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().any(|element| predicate(element))
    }

    /// Returns the number of elements satisfying `predicate`.
    ///
    /// The no-predicate form is [`Sequence::len`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let numbers = Sequence::from(vec![1, 2, 3, 4]);
    /// assert_eq!(numbers.count(|n| n % 2 == 0), 2);
    /// assert_eq!(numbers.count(|_| true), numbers.len());
    /// ```
    #[must_use]
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).count()
    }

    /// Returns the arithmetic mean of `selector` over all elements.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for an empty sequence; the average of
    /// nothing is an error here, never a `NaN`. The check runs before the
    /// selector is invoked even once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::{QueryError, Sequence};
    ///
    /// let numbers = Sequence::from(vec![1, 2, 3, 4]);
    /// assert_eq!(numbers.average(|n| f64::from(*n)), Ok(2.5));
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert_eq!(empty.average(|n| f64::from(*n)), Err(QueryError::Empty));
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn average<F>(&self, selector: F) -> Result<f64, QueryError>
    where
        F: Fn(&T) -> f64,
    {
        if self.is_empty() {
            return Err(QueryError::Empty);
        }
        let sum: f64 = self.iter().map(selector).sum();
        Ok(sum / self.len() as f64)
    }

    /// Returns the smallest element under strict `<` comparison.
    ///
    /// Of equal candidates the earliest wins; an incomparable candidate
    /// never displaces the current best.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for an empty sequence.
    pub fn min(&self) -> Result<&T, QueryError>
    where
        T: PartialOrd,
    {
        let mut iter = self.iter();
        let first = iter.next().ok_or(QueryError::Empty)?;
        Ok(iter.fold(first, |best, candidate| {
            if candidate < best { candidate } else { best }
        }))
    }

    /// Returns the largest element under strict `>` comparison.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for an empty sequence.
    pub fn max(&self) -> Result<&T, QueryError>
    where
        T: PartialOrd,
    {
        let mut iter = self.iter();
        let first = iter.next().ok_or(QueryError::Empty)?;
        Ok(iter.fold(first, |best, candidate| {
            if candidate > best { candidate } else { best }
        }))
    }

    /// Returns the smallest value of `selector` over all elements.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for an empty sequence, before the
    /// selector is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlinq::Sequence;
    ///
    /// let words = Sequence::from(vec!["query", "all", "select"]);
    /// assert_eq!(words.min_by_key(|word| word.len()), Ok(3));
    /// ```
    pub fn min_by_key<R, F>(&self, selector: F) -> Result<R, QueryError>
    where
        R: PartialOrd,
        F: Fn(&T) -> R,
    {
        let mut iter = self.iter();
        let mut best = selector(iter.next().ok_or(QueryError::Empty)?);
        for element in iter {
            let candidate = selector(element);
            if candidate < best {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// Returns the largest value of `selector` over all elements.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for an empty sequence, before the
    /// selector is invoked.
    pub fn max_by_key<R, F>(&self, selector: F) -> Result<R, QueryError>
    where
        R: PartialOrd,
        F: Fn(&T) -> R,
    {
        let mut iter = self.iter();
        let mut best = selector(iter.next().ok_or(QueryError::Empty)?);
        for element in iter {
            let candidate = selector(element);
            if candidate > best {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// Fallible-predicate form of [`Sequence::all`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPredicate`] when the predicate fails;
    /// the underlying failure is not propagated.
    pub fn try_all<P, E>(&self, predicate: P) -> Result<bool, QueryError>
    where
        P: Fn(&T) -> Result<bool, E>,
    {
        for element in self.iter() {
            if !predicate(element).map_err(|_| QueryError::InvalidPredicate)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Fallible-predicate form of [`Sequence::any`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPredicate`] when the predicate fails.
    pub fn try_any<P, E>(&self, predicate: P) -> Result<bool, QueryError>
    where
        P: Fn(&T) -> Result<bool, E>,
    {
        for element in self.iter() {
            if predicate(element).map_err(|_| QueryError::InvalidPredicate)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Fallible-selector form of [`Sequence::average`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for an empty sequence (checked first)
    /// and [`QueryError::InvalidSelector`] when the selector fails.
    #[allow(clippy::cast_precision_loss)]
    pub fn try_average<F, E>(&self, selector: F) -> Result<f64, QueryError>
    where
        F: Fn(&T) -> Result<f64, E>,
    {
        if self.is_empty() {
            return Err(QueryError::Empty);
        }
        let mut sum = 0.0;
        for element in self.iter() {
            sum += selector(element).map_err(|_| QueryError::InvalidSelector)?;
        }
        Ok(sum / self.len() as f64)
    }
}

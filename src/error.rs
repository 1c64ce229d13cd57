//! Error types for query operators.
//!
//! Every fallible operator reports failures through [`QueryError`], a flat
//! enum split into two families:
//!
//! - **Argument errors** ([`InvalidPredicate`], [`InvalidSelector`],
//!   [`InvalidComparer`]): a caller-supplied callback failed while the
//!   operator was invoking it. The `try_*` operator variants catch the
//!   callback's own error at the call site and re-signal it as the
//!   corresponding argument error.
//! - **Domain errors** (the remaining variants): the operation is undefined
//!   for the given well-typed input, such as an aggregate over an empty
//!   sequence or an out-of-range position.
//!
//! Domain errors always propagate to the caller; no operator recovers
//! internally or returns a partial result.
//!
//! [`InvalidPredicate`]: QueryError::InvalidPredicate
//! [`InvalidSelector`]: QueryError::InvalidSelector
//! [`InvalidComparer`]: QueryError::InvalidComparer

/// Represents a failure raised by a query operator.
///
/// # Examples
///
/// ```rust
/// use seqlinq::{QueryError, Sequence};
///
/// let empty: Sequence<i32> = Sequence::new();
/// assert_eq!(empty.average(|n| f64::from(*n)), Err(QueryError::Empty));
/// assert_eq!(format!("{}", QueryError::Empty), "array is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryError {
    /// A predicate callback failed while being invoked.
    InvalidPredicate,
    /// A selector callback failed while being invoked.
    InvalidSelector,
    /// A comparer callback failed while being invoked.
    InvalidComparer,
    /// The operation is undefined for an empty sequence.
    Empty,
    /// No element satisfies the predicate, or there was nothing to scan.
    NoMatch,
    /// `single` was applied to a sequence with more than one element.
    MoreThanOneElement,
    /// More than one element satisfies the predicate given to `single_where`.
    MoreThanOneMatch,
    /// The requested position is outside the sequence bounds.
    IndexOutOfBounds,
    /// A generation operator received a negative count.
    NegativeCount,
    /// A generated sequence would leave the representable numeric range.
    Overflow,
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InvalidPredicate => "invalid predicate",
            Self::InvalidSelector => "invalid selector",
            Self::InvalidComparer => "invalid comparer",
            Self::Empty => "array is empty",
            Self::NoMatch => "no elements satisfy the condition or the array is empty",
            Self::MoreThanOneElement => "more than one element",
            Self::MoreThanOneMatch => "more than one element satisfies the condition",
            Self::IndexOutOfBounds => "index out of bounds",
            Self::NegativeCount => "expected a non-negative count",
            Self::Overflow => "sequence end exceeds the representable range",
        };
        formatter.write_str(message)
    }
}

impl std::error::Error for QueryError {}

//! # seqlinq
//!
//! Eager LINQ-style query operators over in-memory sequences with
//! pluggable equality.
//!
//! ## Overview
//!
//! This library augments ordered, finite sequences with the classic
//! query-operator vocabulary:
//!
//! - **Predicate tests**: `all`, `any`
//! - **Aggregation**: `count`, `average`, `min`, `max`
//! - **Projection and filtering**: `select`, `where_by`
//! - **Set semantics**: `contains`, `distinct`, `except`, `intersect`,
//!   each accepting a custom equality comparer
//! - **Positional access**: `element_at`, `first`, `last`, `single` and
//!   their null-safe companions
//! - **Generation**: [`Sequence::range`], [`Sequence::repeat`]
//!
//! Every operator is eager: it consumes its input fully and returns a new
//! concrete [`Sequence`] or a scalar before control returns to the caller.
//! No operator mutates its input.
//!
//! ## Pluggable equality
//!
//! The set-semantics operators are parameterized by a *comparer*, a pure,
//! symmetric `Fn(&T, &T) -> bool`. The `_by` variants accept one explicitly;
//! the plain variants default to `PartialEq`:
//!
//! ```rust
//! use seqlinq::Sequence;
//!
//! let words = Sequence::from(vec!["Query", "query", "select"]);
//! let distinct = words.distinct_by(|left, right| left.eq_ignore_ascii_case(right));
//! assert_eq!(distinct, Sequence::from(vec!["Query", "select"]));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Sequence`]
//!
//! ## Example
//!
//! ```rust
//! use seqlinq::prelude::*;
//!
//! let numbers = Sequence::from(vec![1, 1, 2, 3, 1]);
//! assert_eq!(numbers.distinct(), Sequence::from(vec![1, 2, 3]));
//! assert_eq!(numbers.count(|n| *n > 1), 2);
//! assert_eq!(numbers.average(|n| f64::from(*n))?, 1.6);
//! # Ok::<(), seqlinq::QueryError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use seqlinq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::QueryError;
    pub use crate::sequence::Sequence;
}

pub mod error;
pub mod sequence;

pub use error::QueryError;
pub use sequence::Sequence;

//! Greedy validation - collect every failure.
//!
//! This module provides [`GreedyValidation<V, E>`], a validation
//! accumulator that runs every check regardless of earlier failures and
//! collects every error produced, in order. The value under validation is
//! retained throughout, even after failures accumulate.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::Maybe;
//! use railway::validate::GreedyValidation;
//!
//! let validation = GreedyValidation::<i32, &str>::new(-3)
//!     .validate(|n| Maybe::some_if("must be positive", *n <= 0))
//!     .validate(|n| Maybe::some_if("must be even", *n % 2 != 0));
//!
//! assert!(!validation.is_valid());
//! assert_eq!(validation.errors(), &["must be positive", "must be even"]);
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::rail::{Maybe, Outcome, Verdict};

// Most validations fail with a handful of errors at most; four inline
// slots keep the common case off the heap.
type ErrorList<E> = SmallVec<[E; 4]>;

/// A validation that runs every check and collects every failure.
///
/// The value is carried regardless of validity, alongside an ordered
/// sequence of errors. The machine is valid exactly when that sequence is
/// empty; errors are only ever appended, never removed or reordered.
///
/// # Type Parameters
///
/// * `V` - The value being validated
/// * `E` - The error type the checks produce
///
/// # Examples
///
/// ```rust
/// use railway::validate::GreedyValidation;
///
/// let validation = GreedyValidation::<&str, String>::new("input")
///     .add_error("first".to_string())
///     .add_errors(vec!["second".to_string(), "third".to_string()]);
///
/// assert_eq!(validation.errors().len(), 3);
/// assert_eq!(validation.value_ref(), &"input");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyValidation<V, E> {
    value: V,
    errors: ErrorList<E>,
}

impl<V, E> GreedyValidation<V, E> {
    /// Starts a validation with no errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, String>::new(5);
    /// assert!(validation.is_valid());
    /// ```
    #[inline]
    pub fn new(value: V) -> Self {
        Self {
            value,
            errors: ErrorList::new(),
        }
    }

    // =========================================================================
    // Checks
    // =========================================================================

    /// Runs a check that reports at most one error. The check always runs,
    /// regardless of earlier failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(-3)
    ///     .validate(|n| Maybe::some_if("must be positive", *n <= 0));
    /// assert_eq!(validation.errors(), &["must be positive"]);
    /// ```
    #[inline]
    pub fn validate<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&V) -> Maybe<E>,
    {
        if let Maybe::Some(error) = check(&self.value) {
            self.errors.push(error);
        }
        self
    }

    /// Runs a check that reports a sequence of errors; all of them append,
    /// in order. An empty sequence appends nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(-3)
    ///     .validate_all(|n| {
    ///         let mut errors = Vec::new();
    ///         if *n <= 0 {
    ///             errors.push("must be positive");
    ///         }
    ///         if *n % 2 != 0 {
    ///             errors.push("must be even");
    ///         }
    ///         errors
    ///     });
    ///
    /// assert_eq!(validation.errors(), &["must be positive", "must be even"]);
    /// ```
    #[inline]
    pub fn validate_all<F, I>(mut self, check: F) -> Self
    where
        F: FnOnce(&V) -> I,
        I: IntoIterator<Item = E>,
    {
        self.errors.extend(check(&self.value));
        self
    }

    /// Runs a check that reports through a [`Verdict`]; its failure
    /// appends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(3)
    ///     .validate_verdict(|n| {
    ///         if *n % 2 == 0 { Verdict::Success } else { Verdict::Failure("must be even") }
    ///     });
    /// assert!(!validation.is_valid());
    /// ```
    #[inline]
    pub fn validate_verdict<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&V) -> Verdict<E>,
    {
        if let Verdict::Failure(error) = check(&self.value) {
            self.errors.push(error);
        }
        self
    }

    /// Runs a nested validation over the same value and appends whatever
    /// errors it collected, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// fn range_checks(n: &i32) -> GreedyValidation<i32, &'static str> {
    ///     GreedyValidation::new(*n)
    ///         .validate_all(|n| if *n < 0 { vec!["too small"] } else { vec![] })
    /// }
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(-1)
    ///     .validate_with(|n| range_checks(n));
    /// assert_eq!(validation.errors(), &["too small"]);
    /// ```
    #[inline]
    pub fn validate_with<F, U>(mut self, check: F) -> Self
    where
        F: FnOnce(&V) -> GreedyValidation<U, E>,
    {
        let nested = check(&self.value);
        self.errors.extend(nested.errors);
        self
    }

    // =========================================================================
    // Direct Accumulation
    // =========================================================================

    /// Appends a single error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(5).add_error("bad");
    /// assert!(!validation.is_valid());
    /// ```
    #[inline]
    pub fn add_error(mut self, error: E) -> Self {
        self.errors.push(error);
        self
    }

    /// Appends a collection of errors, preserving their order. Appending
    /// an empty collection changes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(5)
    ///     .add_errors(vec!["first", "second"])
    ///     .add_errors(Vec::new());
    /// assert_eq!(validation.errors(), &["first", "second"]);
    /// ```
    #[inline]
    pub fn add_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.errors.extend(errors);
        self
    }

    // =========================================================================
    // State Inspection
    // =========================================================================

    /// Returns `true` exactly when no errors have accumulated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// assert!(GreedyValidation::<i32, &str>::new(5).is_valid());
    /// assert!(!GreedyValidation::<i32, &str>::new(5).add_error("bad").is_valid());
    /// ```
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a reference to the value under validation. The value is
    /// retained regardless of validity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(5).add_error("bad");
    /// assert_eq!(validation.value_ref(), &5);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> &V {
        &self.value
    }

    /// Returns the accumulated errors in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(5).add_errors(vec!["a", "b"]);
    /// assert_eq!(validation.errors(), &["a", "b"]);
    /// ```
    #[inline]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    // =========================================================================
    // Elimination and Mapping
    // =========================================================================

    /// Eliminates the validation by applying exactly one of two functions.
    /// The invalid branch receives both the value and the collected errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let report = GreedyValidation::<i32, &str>::new(5)
    ///     .add_error("bad")
    ///     .fold(|n| n.to_string(), |n, errors| format!("{n}: {}", errors.len()));
    /// assert_eq!(report, "5: 1");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_valid: F, on_invalid: G) -> T
    where
        F: FnOnce(V) -> T,
        G: FnOnce(V, Vec<E>) -> T,
    {
        if self.errors.is_empty() {
            on_valid(self.value)
        } else {
            on_invalid(self.value, self.errors.into_vec())
        }
    }

    /// Transforms the value being threaded; the accumulated errors carry
    /// over unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let validation = GreedyValidation::<i32, &str>::new(5)
    ///     .add_error("bad")
    ///     .map(|n| n * 2);
    /// assert_eq!(validation.value_ref(), &10);
    /// assert_eq!(validation.errors(), &["bad"]);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> GreedyValidation<U, E>
    where
        F: FnOnce(V) -> U,
    {
        GreedyValidation {
            value: function(self.value),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts the final state into an [`Outcome`], failing with the full
    /// error sequence when any error accumulated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    /// use railway::validate::GreedyValidation;
    ///
    /// let outcome = GreedyValidation::<i32, &str>::new(5).into_outcome();
    /// assert_eq!(outcome, Outcome::Success(5));
    ///
    /// let outcome = GreedyValidation::<i32, &str>::new(5).add_error("bad").into_outcome();
    /// assert_eq!(outcome, Outcome::Failure(vec!["bad"]));
    /// ```
    #[inline]
    pub fn into_outcome(self) -> Outcome<V, Vec<E>> {
        if self.errors.is_empty() {
            Outcome::Success(self.value)
        } else {
            Outcome::Failure(self.errors.into_vec())
        }
    }

    /// Dismantles the validation into the value and the collected errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::GreedyValidation;
    ///
    /// let (value, errors) = GreedyValidation::<i32, &str>::new(5).add_error("bad").into_parts();
    /// assert_eq!(value, 5);
    /// assert_eq!(errors, vec!["bad"]);
    /// ```
    #[inline]
    pub fn into_parts(self) -> (V, Vec<E>) {
        (self.value, self.errors.into_vec())
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for GreedyValidation<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GreedyValidation")
            .field("value", &self.value)
            .field("errors", &self.errors)
            .finish()
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for GreedyValidation<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(formatter, "Valid({})", self.value)
        } else {
            write!(formatter, "Invalid({}, [", self.value)?;
            for (index, error) in self.errors.iter().enumerate() {
                if index > 0 {
                    formatter.write_str(", ")?;
                }
                write!(formatter, "{error}")?;
            }
            formatter.write_str("])")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(GreedyValidation<i32, String>: Send, Sync, Unpin);

    #[rstest]
    fn validity_tracks_the_error_count() {
        let validation = GreedyValidation::<i32, &str>::new(5);
        assert!(validation.is_valid());
        assert!(validation.errors().is_empty());

        let validation = validation.add_error("bad");
        assert!(!validation.is_valid());
        assert_eq!(validation.errors().len(), 1);
    }

    #[rstest]
    fn every_check_runs_even_after_failures() {
        let invocations = std::cell::Cell::new(0);
        let validation = GreedyValidation::<i32, &str>::new(0)
            .validate(|_| {
                invocations.set(invocations.get() + 1);
                Maybe::Some("first")
            })
            .validate(|_| {
                invocations.set(invocations.get() + 1);
                Maybe::Some("second")
            });

        assert_eq!(invocations.get(), 2);
        assert_eq!(validation.errors(), &["first", "second"]);
    }
}

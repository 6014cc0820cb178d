//! Lazy validation - stop at the first failure.
//!
//! This module provides [`LazyValidation<V, E>`], a validation state machine
//! that threads a value through a chain of checks and latches on the first
//! error. Once invalid, every subsequent `validate*` call is a no-op that
//! returns the invalid state unchanged; the check is never invoked.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::Maybe;
//! use railway::validate::LazyValidation;
//!
//! let validation = LazyValidation::<i32, &str>::Valid(7)
//!     .validate(|n| Maybe::some_if("must be positive", *n <= 0))
//!     .validate(|n| Maybe::some_if("must be odd", *n % 2 == 0));
//!
//! assert!(validation.is_valid());
//! ```

use std::fmt;

use crate::rail::{Maybe, Outcome, Verdict};

/// A validation that stops at the first failure.
///
/// While `Valid`, it carries the value being threaded through checks. Once
/// a check produces an error it transitions to `Invalid` carrying exactly
/// that first error, the value becomes inaccessible through the failure
/// path, and the machine never transitions back: validity is a one-way
/// latch.
///
/// # Type Parameters
///
/// * `V` - The value being validated
/// * `E` - The error type a failing check produces
///
/// # Examples
///
/// ```rust
/// use railway::rail::Maybe;
/// use railway::validate::LazyValidation;
///
/// let validation = LazyValidation::<i32, &str>::Valid(-3)
///     .validate(|n| Maybe::some_if("must be positive", *n <= 0))
///     .validate(|n| Maybe::some_if("must be odd", *n % 2 == 0));
///
/// // The second check never ran; only the first error is carried.
/// assert_eq!(validation.invalid_ref(), Some(&"must be positive"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LazyValidation<V, E> {
    /// All checks so far have passed; carries the value under validation.
    Valid(V),
    /// A check failed; carries the first error encountered.
    Invalid(E),
}

impl<V, E> LazyValidation<V, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` while no check has failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// assert!(LazyValidation::<i32, &str>::Valid(1).is_valid());
    /// assert!(!LazyValidation::<i32, &str>::Invalid("bad").is_valid());
    /// ```
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` once a check has failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// assert!(LazyValidation::<i32, &str>::Invalid("bad").is_invalid());
    /// ```
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    // =========================================================================
    // Checks
    // =========================================================================

    /// Runs a check that reports at most one error.
    ///
    /// While `Valid`, the check sees the value; `Some(error)` latches the
    /// machine to `Invalid(error)`, `None` keeps it `Valid`. Once
    /// `Invalid`, the check is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::validate::LazyValidation;
    ///
    /// let validation = LazyValidation::<i32, &str>::Valid(4)
    ///     .validate(|n| Maybe::some_if("must be even", *n % 2 != 0));
    /// assert!(validation.is_valid());
    /// ```
    #[inline]
    pub fn validate<F>(self, check: F) -> Self
    where
        F: FnOnce(&V) -> Maybe<E>,
    {
        match self {
            Self::Valid(value) => match check(&value) {
                Maybe::Some(error) => Self::Invalid(error),
                Maybe::None => Self::Valid(value),
            },
            Self::Invalid(error) => Self::Invalid(error),
        }
    }

    /// Runs a check that reports a sequence of errors; the first element,
    /// if any, becomes the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// let validation = LazyValidation::<i32, &str>::Valid(-4)
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
    /// assert_eq!(validation.invalid_ref(), Some(&"must be positive"));
    /// ```
    #[inline]
    pub fn validate_all<F, I>(self, check: F) -> Self
    where
        F: FnOnce(&V) -> I,
        I: IntoIterator<Item = E>,
    {
        match self {
            Self::Valid(value) => match check(&value).into_iter().next() {
                Some(error) => Self::Invalid(error),
                None => Self::Valid(value),
            },
            Self::Invalid(error) => Self::Invalid(error),
        }
    }

    /// Runs a check that reports through a [`Verdict`]; its failure becomes
    /// the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    /// use railway::validate::LazyValidation;
    ///
    /// let validation = LazyValidation::<i32, &str>::Valid(3)
    ///     .validate_verdict(|n| {
    ///         if *n % 2 == 0 { Verdict::Success } else { Verdict::Failure("must be even") }
    ///     });
    ///
    /// assert!(validation.is_invalid());
    /// ```
    #[inline]
    pub fn validate_verdict<F>(self, check: F) -> Self
    where
        F: FnOnce(&V) -> Verdict<E>,
    {
        match self {
            Self::Valid(value) => match check(&value) {
                Verdict::Success => Self::Valid(value),
                Verdict::Failure(error) => Self::Invalid(error),
            },
            Self::Invalid(error) => Self::Invalid(error),
        }
    }

    /// Runs a nested validation, consuming the value; whatever state the
    /// nested run produces becomes the new state. Once `Invalid`, the
    /// check is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// fn normalized(n: i32) -> LazyValidation<i32, &'static str> {
    ///     if n >= 0 {
    ///         LazyValidation::Valid(n % 100)
    ///     } else {
    ///         LazyValidation::Invalid("must not be negative")
    ///     }
    /// }
    ///
    /// let validation = LazyValidation::Valid(123).validate_with(normalized);
    /// assert_eq!(validation, LazyValidation::Valid(23));
    /// ```
    #[inline]
    pub fn validate_with<F>(self, check: F) -> Self
    where
        F: FnOnce(V) -> Self,
    {
        match self {
            Self::Valid(value) => check(value),
            Self::Invalid(error) => Self::Invalid(error),
        }
    }

    // =========================================================================
    // Elimination and Mapping
    // =========================================================================

    /// Eliminates the validation by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// let validation = LazyValidation::<i32, &str>::Valid(5);
    /// assert_eq!(validation.fold(|n| n, |_| -1), 5);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_valid: F, on_invalid: G) -> T
    where
        F: FnOnce(V) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(error) => on_invalid(error),
        }
    }

    /// Transforms the value being threaded, leaving an invalid state
    /// untouched and uninvoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// let validation = LazyValidation::<i32, &str>::Valid(5).map(|n| n * 2);
    /// assert_eq!(validation, LazyValidation::Valid(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> LazyValidation<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Valid(value) => LazyValidation::Valid(function(value)),
            Self::Invalid(error) => LazyValidation::Invalid(error),
        }
    }

    /// Transforms the carried error, leaving a valid state untouched and
    /// uninvoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// let validation = LazyValidation::<i32, &str>::Invalid("bad").map_error(|e| e.len());
    /// assert_eq!(validation, LazyValidation::Invalid(3));
    /// ```
    #[inline]
    pub fn map_error<F, G>(self, function: G) -> LazyValidation<V, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Valid(value) => LazyValidation::Valid(value),
            Self::Invalid(error) => LazyValidation::Invalid(function(error)),
        }
    }

    // =========================================================================
    // Access and Conversion
    // =========================================================================

    /// Returns a reference to the value if still valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// assert_eq!(LazyValidation::<i32, &str>::Valid(5).valid_ref(), Some(&5));
    /// assert_eq!(LazyValidation::<i32, &str>::Invalid("bad").valid_ref(), None);
    /// ```
    #[inline]
    pub const fn valid_ref(&self) -> Option<&V> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns a reference to the first error if invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::validate::LazyValidation;
    ///
    /// assert_eq!(LazyValidation::<i32, &str>::Invalid("bad").invalid_ref(), Some(&"bad"));
    /// ```
    #[inline]
    pub const fn invalid_ref(&self) -> Option<&E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Converts the final state into an [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    /// use railway::validate::LazyValidation;
    ///
    /// let outcome = LazyValidation::<i32, &str>::Valid(5).into_outcome();
    /// assert_eq!(outcome, Outcome::Success(5));
    /// ```
    #[inline]
    pub fn into_outcome(self) -> Outcome<V, E> {
        match self {
            Self::Valid(value) => Outcome::Success(value),
            Self::Invalid(error) => Outcome::Failure(error),
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for LazyValidation<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => formatter.debug_tuple("Valid").field(value).finish(),
            Self::Invalid(error) => formatter.debug_tuple("Invalid").field(error).finish(),
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for LazyValidation<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write!(formatter, "Valid({value})"),
            Self::Invalid(error) => write!(formatter, "Invalid({error})"),
        }
    }
}

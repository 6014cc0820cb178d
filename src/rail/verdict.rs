//! Verdict type - a result whose success carries no payload.
//!
//! This module provides the [`Verdict<E>`] type, the error-only result of
//! the crate's algebra. A `Verdict<E>` is exactly one of:
//!
//! - `Success`: the operation succeeded; there is nothing to report
//! - `Failure(error)`: the operation failed with an `E`
//!
//! It is the "Outcome over Unit-success" specialization kept as a distinct
//! first-class type: call sites that only care whether something worked
//! get to skip the phantom success payload. [`with_value`](Verdict::with_value)
//! widens back to a full [`Outcome`] by supplying one.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::Verdict;
//!
//! fn check_name(name: &str) -> Verdict<String> {
//!     if name.is_empty() {
//!         Verdict::Failure("name must not be empty".to_string())
//!     } else {
//!         Verdict::Success
//!     }
//! }
//!
//! assert!(check_name("ada").is_success());
//! assert!(check_name("").is_failure());
//! ```

use std::fmt;

use super::maybe::Maybe;
use super::outcome::Outcome;
use super::unit::Unit;

/// A result that either succeeded with nothing to report, or failed with
/// an `E`.
///
/// # Type Parameters
///
/// * `E` - The type carried on the failure rail
///
/// # Examples
///
/// ```rust
/// use railway::rail::Verdict;
///
/// let verdict: Verdict<String> = Verdict::Success;
/// let message = verdict.fold(|| "all good".to_string(), |e| e);
/// assert_eq!(message, "all good");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict<E> {
    /// The operation succeeded; no payload.
    #[default]
    Success,
    /// The operation failed with an error.
    Failure(E),
}

impl<E> Verdict<E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the verdict is `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// assert!(Verdict::<String>::Success.is_success());
    /// assert!(!Verdict::Failure("bad").is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` if the verdict is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// assert!(Verdict::Failure("bad").is_failure());
    /// assert!(!Verdict::<String>::Success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Verdict` by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// let verdict: Verdict<String> = Verdict::Failure("bad".to_string());
    /// assert_eq!(verdict.fold(|| 0, |e| e.len()), 3);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_success: F, on_failure: G) -> T
    where
        F: FnOnce() -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Success => on_success(),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the failure payload, leaving a success
    /// untouched and uninvoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// let verdict: Verdict<String> = Verdict::Failure("bad".to_string());
    /// assert_eq!(verdict.map_failure(|e| e.len()), Verdict::Failure(3));
    ///
    /// let verdict: Verdict<String> = Verdict::Success;
    /// assert_eq!(verdict.map_failure(|e| e.len()), Verdict::Success);
    /// ```
    #[inline]
    pub fn map_failure<F, G>(self, function: G) -> Verdict<F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success => Verdict::Success,
            Self::Failure(error) => Verdict::Failure(function(error)),
        }
    }

    /// Sequences a follow-up verdict after a success; a failure
    /// short-circuits without invoking the function.
    ///
    /// This is the monadic bind specialized to a payload-free success rail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// let chained: Verdict<String> = Verdict::Success.flat_map(|| Verdict::Failure("late".to_string()));
    /// assert_eq!(chained, Verdict::Failure("late".to_string()));
    ///
    /// let short_circuited: Verdict<String> =
    ///     Verdict::Failure("early".to_string()).flat_map(|| Verdict::Success);
    /// assert_eq!(short_circuited, Verdict::Failure("early".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success => function(),
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Monadic bind on the failure rail; a success short-circuits without
    /// invoking the function. Useful for recovery.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// let recovered: Verdict<i32> = Verdict::Failure("bad").flat_map_failure(|_| Verdict::Success);
    /// assert_eq!(recovered, Verdict::Success);
    /// ```
    #[inline]
    pub fn flat_map_failure<F, G>(self, function: G) -> Verdict<F>
    where
        G: FnOnce(E) -> Verdict<F>,
    {
        match self {
            Self::Success => Verdict::Success,
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Failure Extraction
    // =========================================================================

    /// Returns the failure payload, or the given default on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// assert_eq!(Verdict::Failure("bad").failure_or("fine"), "bad");
    /// assert_eq!(Verdict::Success.failure_or("fine"), "fine");
    /// ```
    #[inline]
    pub fn failure_or(self, default: E) -> E {
        match self {
            Self::Success => default,
            Self::Failure(error) => error,
        }
    }

    /// Returns the failure payload, or the result of the supplier on
    /// success. The supplier is not invoked on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// assert_eq!(Verdict::<i32>::Success.failure_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn failure_or_else<F>(self, supplier: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Success => supplier(),
            Self::Failure(error) => error,
        }
    }

    /// Returns the failure payload, consuming the `Verdict`.
    ///
    /// # Panics
    ///
    /// Panics if the verdict is `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// assert_eq!(Verdict::Failure("bad").unwrap_failure(), "bad");
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success => panic!("called `Verdict::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    /// Returns a reference to the failure payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// let verdict = Verdict::Failure("bad");
    /// assert_eq!(verdict.failure_ref(), Some(&"bad"));
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts the failure rail to a [`Maybe`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Verdict};
    ///
    /// assert_eq!(Verdict::Failure("bad").failure_maybe(), Maybe::Some("bad"));
    /// assert_eq!(Verdict::<&str>::Success.failure_maybe(), Maybe::None);
    /// ```
    #[inline]
    pub fn failure_maybe(self) -> Maybe<E> {
        match self {
            Self::Success => Maybe::None,
            Self::Failure(error) => Maybe::Some(error),
        }
    }

    // =========================================================================
    // Widening
    // =========================================================================

    /// Widens to a full [`Outcome`] by supplying a success payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Outcome, Verdict};
    ///
    /// let verdict: Verdict<String> = Verdict::Success;
    /// assert_eq!(verdict.with_value(5), Outcome::Success(5));
    ///
    /// let verdict: Verdict<String> = Verdict::Failure("bad".to_string());
    /// assert_eq!(verdict.with_value(5), Outcome::Failure("bad".to_string()));
    /// ```
    #[inline]
    pub fn with_value<V>(self, value: V) -> Outcome<V, E> {
        match self {
            Self::Success => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Widens to a full [`Outcome`] with a lazily supplied success payload.
    /// The supplier is not invoked on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Outcome, Verdict};
    ///
    /// let verdict: Verdict<String> = Verdict::Success;
    /// assert_eq!(verdict.with_value_else(|| 5), Outcome::Success(5));
    /// ```
    #[inline]
    pub fn with_value_else<V, F>(self, supplier: F) -> Outcome<V, E>
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Success => Outcome::Success(supplier()),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Widens to `Outcome<Unit, E>`, the canonical payload-carrying form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Outcome, Unit, Verdict};
    ///
    /// let verdict: Verdict<String> = Verdict::Success;
    /// assert_eq!(verdict.into_outcome(), Outcome::Success(Unit));
    /// ```
    #[inline]
    pub fn into_outcome(self) -> Outcome<Unit, E> {
        self.with_value(Unit)
    }
}

// =============================================================================
// Asynchronous Combinators
// =============================================================================

#[cfg(feature = "async")]
impl<E> Verdict<E> {
    /// Sequences an asynchronous follow-up verdict after a success; a
    /// failure short-circuits without constructing the continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Verdict;
    ///
    /// let chained = Verdict::<String>::Success
    ///     .flat_map_async(|| async { Verdict::<String>::Success })
    ///     .await;
    /// assert_eq!(chained, Verdict::Success);
    /// # }
    /// ```
    #[inline]
    pub async fn flat_map_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Self::Success => function().await,
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Applies an asynchronous function to the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Verdict;
    ///
    /// let coded = Verdict::Failure("bad".to_string())
    ///     .map_failure_async(|e| async move { e.len() })
    ///     .await;
    /// assert_eq!(coded, Verdict::Failure(3));
    /// # }
    /// ```
    #[inline]
    pub async fn map_failure_async<F, G, Fut>(self, function: G) -> Verdict<F>
    where
        G: FnOnce(E) -> Fut,
        Fut: Future<Output = F>,
    {
        match self {
            Self::Success => Verdict::Success,
            Self::Failure(error) => Verdict::Failure(function(error).await),
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<E: fmt::Debug> fmt::Debug for Verdict<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => formatter.write_str("Success"),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Verdict<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => formatter.write_str("Success"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E> From<Result<(), E>> for Verdict<E> {
    /// Converts a payload-free standard `Result` into a `Verdict`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// let verdict: Verdict<String> = Ok(()).into();
    /// assert_eq!(verdict, Verdict::Success);
    /// ```
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E> From<Verdict<E>> for Result<(), E> {
    /// Converts a `Verdict` into a payload-free standard `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Verdict;
    ///
    /// let result: Result<(), String> = Verdict::Success.into();
    /// assert_eq!(result, Ok(()));
    /// ```
    #[inline]
    fn from(verdict: Verdict<E>) -> Self {
        match verdict {
            Verdict::Success => Ok(()),
            Verdict::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Verdict<String>: Send, Sync, Unpin);

    #[rstest]
    fn success_is_success() {
        let verdict: Verdict<String> = Verdict::Success;
        assert!(verdict.is_success());
        assert!(!verdict.is_failure());
    }

    #[rstest]
    fn failure_is_failure() {
        let verdict: Verdict<String> = Verdict::Failure("bad".to_string());
        assert!(verdict.is_failure());
        assert!(!verdict.is_success());
    }

    #[rstest]
    #[should_panic(expected = "called `Verdict::unwrap_failure()` on a `Success` value")]
    fn unwrap_failure_on_success_panics() {
        let verdict: Verdict<String> = Verdict::Success;
        let _ = verdict.unwrap_failure();
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let verdict: Verdict<String> = Err("bad".to_string()).into();
        let result: Result<(), String> = verdict.into();
        assert_eq!(result, Err("bad".to_string()));
    }
}

//! Outcome type - a computation that succeeded or failed.
//!
//! This module provides the [`Outcome<V, E>`] type, the two-rail result of
//! the crate's algebra. An `Outcome<V, E>` is exactly one of:
//!
//! - `Success(value)`: the success rail, carrying a `V`
//! - `Failure(error)`: the failure rail, carrying an `E`
//!
//! Both rails carry a payload, and every combinator is rail-selective: it
//! transforms one rail and passes the other through untouched, never
//! invoking the caller-supplied function for the rail it does not apply to.
//! Domain failures are ordinary data on the failure rail; they are never
//! raised, and combinators never catch anything a caller-supplied function
//! panics with.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::Outcome;
//!
//! let success: Outcome<i32, String> = Outcome::Success(5);
//! assert_eq!(success.map(|n| n * 2).value_or(-1), 10);
//!
//! let failure: Outcome<i32, String> = Outcome::Failure("bad".to_string());
//! assert_eq!(failure.map(|n| n * 2).value_or(-1), -1);
//! ```

use std::fmt;

use super::maybe::Maybe;
use super::unit::Unit;
use super::verdict::Verdict;

/// A computation that succeeded with a `V` or failed with an `E`.
///
/// Exactly one rail is active at any time, selected by the discriminant.
/// By convention the failure payload models a domain error, but nothing in
/// the algebra requires it: [`invert`](Self::invert) swaps the roles.
///
/// # Type Parameters
///
/// * `V` - The type carried on the success rail
/// * `E` - The type carried on the failure rail
///
/// # Examples
///
/// ```rust
/// use railway::rail::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::Success(42);
/// let message = parsed.fold(
///     |n| format!("got {n}"),
///     |e| format!("failed: {e}"),
/// );
/// assert_eq!(message, "got 42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<V, E> {
    /// The success rail.
    Success(V),
    /// The failure rail.
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    // =========================================================================
    // Named Constructors
    // =========================================================================

    /// Places a bare value on the success rail.
    ///
    /// An explicit conversion site: this crate never coerces a bare value
    /// into a tagged union implicitly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::from_value(5);
    /// assert_eq!(outcome, Outcome::Success(5));
    /// ```
    #[inline]
    pub const fn from_value(value: V) -> Self {
        Self::Success(value)
    }

    /// Places a bare error on the failure rail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::from_error("bad");
    /// assert_eq!(outcome, Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub const fn from_error(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the success rail is active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(1);
    /// assert!(outcome.is_success());
    /// assert!(!outcome.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the failure rail is active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Failure("bad");
    /// assert!(outcome.is_failure());
    /// assert!(!outcome.is_success());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Outcome` by applying exactly one of two functions,
    /// selected by the active rail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.fold(|n| n * 2, |_| -1), 10);
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.fold(|n| n * 2, |_| -1), -1);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_success: F, on_failure: G) -> T
    where
        F: FnOnce(V) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload, leaving a failure
    /// untouched and uninvoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.map(|n| n * 2), Outcome::Success(10));
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.map(|n| n * 2), Outcome::Failure("bad".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure payload, leaving a success
    /// untouched and uninvoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.map_failure(|e| e.len()), Outcome::Failure(3));
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.map_failure(|e| e.len()), Outcome::Success(5));
    /// ```
    #[inline]
    pub fn map_failure<F, G>(self, function: G) -> Outcome<V, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies one of two functions, transforming both rails at once.
    ///
    /// Exactly one of the two functions is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// let transformed = outcome.bimap(|n| n * 2, |e: String| e.len());
    /// assert_eq!(transformed, Outcome::Success(10));
    /// ```
    #[inline]
    pub fn bimap<U, F, G, H>(self, success_function: G, failure_function: H) -> Outcome<U, F>
    where
        G: FnOnce(V) -> U,
        H: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(success_function(value)),
            Self::Failure(error) => Outcome::Failure(failure_function(error)),
        }
    }

    /// Monadic bind on the success rail; a failure short-circuits without
    /// invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// fn checked_half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Success(n / 2)
    ///     } else {
    ///         Outcome::Failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Success(8).flat_map(checked_half), Outcome::Success(4));
    /// assert_eq!(Outcome::Success(7).flat_map(checked_half), Outcome::Failure("7 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Monadic bind on the failure rail; a success short-circuits without
    /// invoking the function. Useful for recovery chains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// let recovered: Outcome<i32, String> = outcome.flat_map_failure(|_| Outcome::Success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn flat_map_failure<F, G>(self, function: G) -> Outcome<V, F>
    where
        G: FnOnce(E) -> Outcome<V, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Payload Replacement
    // =========================================================================

    /// Substitutes the success payload wholesale, preserving an active
    /// failure untouched.
    ///
    /// Equivalent to `map(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.replace_value("done"), Outcome::Success("done"));
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.replace_value("done"), Outcome::Failure("bad".to_string()));
    /// ```
    #[inline]
    pub fn replace_value<U>(self, value: U) -> Outcome<U, E> {
        self.map(|_| value)
    }

    /// Substitutes the failure payload wholesale, preserving an active
    /// success untouched.
    ///
    /// Equivalent to `map_failure(|_| error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.replace_failure(404), Outcome::Failure(404));
    /// ```
    #[inline]
    pub fn replace_failure<F>(self, error: F) -> Outcome<V, F> {
        self.map_failure(|_| error)
    }

    // =========================================================================
    // Polarity and Payload Erasure
    // =========================================================================

    /// Swaps the meaning of the two rails: success becomes failure and
    /// vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.invert(), Outcome::Failure(5));
    /// ```
    #[inline]
    pub fn invert(self) -> Outcome<E, V> {
        match self {
            Self::Success(value) => Outcome::Failure(value),
            Self::Failure(error) => Outcome::Success(error),
        }
    }

    /// Erases the success payload to [`Unit`], preserving the discriminant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Outcome, Unit};
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.erase_value(), Outcome::Success(Unit));
    /// ```
    #[inline]
    pub fn erase_value(self) -> Outcome<Unit, E> {
        self.replace_value(Unit)
    }

    /// Erases the failure payload to [`Unit`], preserving the discriminant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Outcome, Unit};
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.erase_failure(), Outcome::Failure(Unit));
    /// ```
    #[inline]
    pub fn erase_failure(self) -> Outcome<V, Unit> {
        self.replace_failure(Unit)
    }

    /// Discards the success payload entirely, narrowing to a [`Verdict`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Outcome, Verdict};
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.into_verdict(), Verdict::Success);
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.into_verdict(), Verdict::Failure("bad".to_string()));
    /// ```
    #[inline]
    pub fn into_verdict(self) -> Verdict<E> {
        match self {
            Self::Success(_) => Verdict::Success,
            Self::Failure(error) => Verdict::Failure(error),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success payload, or the given default on failure.
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.value_or(-1), 5);
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.value_or(-1), -1);
    /// ```
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or computes a fallback from the failure
    /// payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<usize, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.value_or_else(|e| e.len()), 3);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Returns the failure payload, or the given default on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.failure_or("fine".to_string()), "bad".to_string());
    /// ```
    #[inline]
    pub fn failure_or(self, default: E) -> E {
        match self {
            Self::Success(_) => default,
            Self::Failure(error) => error,
        }
    }

    /// Returns the failure payload, or computes a fallback from the success
    /// payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.failure_or_else(|n| n.to_string()), "5".to_string());
    /// ```
    #[inline]
    pub fn failure_or_else<F>(self, fallback: F) -> E
    where
        F: FnOnce(V) -> E,
    {
        match self {
            Self::Success(value) => fallback(value),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success payload, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics if the failure rail is active. This is the API-misuse
    /// accessor; prefer [`value_or`](Self::value_or) for total extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.unwrap_success(), 5);
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Returns the failure payload, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics if the success rail is active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.unwrap_failure(), "bad".to_string());
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Reference Extraction
    // =========================================================================

    /// Returns a reference to the success payload if the success rail is
    /// active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.success_ref(), Some(&5));
    /// assert_eq!(outcome.failure_ref(), None);
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure payload if the failure rail is
    /// active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.failure_ref(), Some(&"bad".to_string()));
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<V, E>` to `Outcome<&V, &E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<String, String> = Outcome::Success("ok".to_string());
    /// let length = outcome.as_ref().map(|s| s.len());
    /// assert_eq!(length, Outcome::Success(2));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Conversions to Maybe
    // =========================================================================

    /// Converts the success rail to a [`Maybe`], discarding a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Outcome};
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.success_maybe(), Maybe::Some(5));
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.success_maybe(), Maybe::None);
    /// ```
    #[inline]
    pub fn success_maybe(self) -> Maybe<V> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts the failure rail to a [`Maybe`], discarding a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Outcome};
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.failure_maybe(), Maybe::Some("bad".to_string()));
    /// ```
    #[inline]
    pub fn failure_maybe(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failure(error) => Maybe::Some(error),
        }
    }

    /// Converts into a standard `Result<V, E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(outcome.into_result(), Ok(5));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<V: Default, E> Outcome<V, E> {
    /// Returns the success payload, or `V::default()` on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(outcome.value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => V::default(),
        }
    }
}

// =============================================================================
// Asynchronous Combinators
// =============================================================================

#[cfg(feature = "async")]
impl<V, E> Outcome<V, E> {
    /// Applies an asynchronous function to the success payload.
    ///
    /// The continuation is only constructed (and therefore only ever
    /// polled) when the success rail is active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// let doubled = outcome.map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(doubled, Outcome::Success(10));
    /// # }
    /// ```
    #[inline]
    pub async fn map_async<U, F, Fut>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies an asynchronous function to the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// let coded = outcome.map_failure_async(|e| async move { e.len() }).await;
    /// assert_eq!(coded, Outcome::Failure(3));
    /// # }
    /// ```
    #[inline]
    pub async fn map_failure_async<F, G, Fut>(self, function: G) -> Outcome<V, F>
    where
        G: FnOnce(E) -> Fut,
        Fut: Future<Output = F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error).await),
        }
    }

    /// Asynchronous monadic bind on the success rail; a failure
    /// short-circuits without constructing the continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// let chained = outcome
    ///     .flat_map_async(|n| async move { Outcome::<i32, String>::Success(n + 1) })
    ///     .await;
    /// assert_eq!(chained, Outcome::Success(6));
    /// # }
    /// ```
    #[inline]
    pub async fn flat_map_async<U, F, Fut>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Asynchronous monadic bind on the failure rail; a success
    /// short-circuits without constructing the continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    /// let recovered = outcome
    ///     .flat_map_failure_async(|_| async { Outcome::<i32, String>::Success(0) })
    ///     .await;
    /// assert_eq!(recovered, Outcome::Success(0));
    /// # }
    /// ```
    #[inline]
    pub async fn flat_map_failure_async<F, G, Fut>(self, function: G) -> Outcome<V, F>
    where
        G: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<V, F>>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error).await,
        }
    }

    /// Eliminates the `Outcome` by awaiting exactly one of two asynchronous
    /// branches. The untouched rail's continuation is never constructed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// let text = outcome
    ///     .fold_async(
    ///         |n| async move { n.to_string() },
    ///         |e| async move { format!("failed: {e}") },
    ///     )
    ///     .await;
    /// assert_eq!(text, "5");
    /// # }
    /// ```
    #[inline]
    pub async fn fold_async<T, F, G, FutSuccess, FutFailure>(
        self,
        on_success: F,
        on_failure: G,
    ) -> T
    where
        F: FnOnce(V) -> FutSuccess,
        G: FnOnce(E) -> FutFailure,
        FutSuccess: Future<Output = T>,
        FutFailure: Future<Output = T>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_failure(error).await,
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    /// Converts a standard `Result` into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Ok(5).into();
    /// assert_eq!(outcome, Outcome::Success(5));
    /// ```
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    /// Converts an `Outcome` into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let result: Result<i32, String> = Outcome::Success(5).into();
    /// assert_eq!(result, Ok(5));
    /// ```
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

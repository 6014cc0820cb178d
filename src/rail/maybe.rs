//! Maybe type - a value that is present or absent.
//!
//! This module provides the [`Maybe<T>`] type, the optional container of the
//! crate's algebra. A `Maybe<T>` is exactly one of:
//!
//! - `Some(value)`: a value is present
//! - `None`: no value
//!
//! It mirrors `std::option::Option` deliberately (and converts to and from
//! it at the boundary), but lives inside this crate's family so it can carry
//! the conversions into [`Outcome`] and [`Verdict`] that make the algebra
//! coherent: a `Maybe<T>` is isomorphic to both `Outcome<T, Unit>` and
//! `Outcome<Unit, T>`, and both directions are meaningful.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::{Maybe, Outcome};
//!
//! let present = Maybe::Some(5);
//! let doubled = present.map(|n| n * 2);
//! assert_eq!(doubled, Maybe::Some(10));
//!
//! // Presence as success, absence as a supplied failure:
//! let outcome: Outcome<i32, &str> = doubled.success_or("nothing here");
//! assert_eq!(outcome, Outcome::Success(10));
//! ```

use std::fmt;

use super::outcome::Outcome;
use super::verdict::Verdict;

/// A value that is present or absent.
///
/// `Maybe<T>` represents an optional value: `Some(value)` when present,
/// `None` when absent. No combinator ever observes a payload through the
/// absent state, and no combinator invokes a caller-supplied function on
/// the state it does not apply to.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use railway::rail::Maybe;
///
/// let present: Maybe<i32> = Maybe::Some(42);
/// let absent: Maybe<i32> = Maybe::None;
///
/// assert_eq!(present.value_or(0), 42);
/// assert_eq!(absent.value_or(0), 0);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present.
    Some(T),
    /// No value.
    #[default]
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Conditional Constructors
    // =========================================================================

    /// Produces `Some(value)` if the condition holds, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::some_if(5, true), Maybe::Some(5));
    /// assert_eq!(Maybe::some_if(5, false), Maybe::None);
    /// ```
    #[inline]
    pub fn some_if(value: T, condition: bool) -> Self {
        if condition { Self::Some(value) } else { Self::None }
    }

    /// Produces `Some(value)` if the predicate holds for the value,
    /// otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::some_when(5, |n| *n > 0), Maybe::Some(5));
    /// assert_eq!(Maybe::some_when(-5, |n| *n > 0), Maybe::None);
    /// ```
    #[inline]
    pub fn some_when<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let present = predicate(&value);
        Self::some_if(value, present)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert!(Maybe::Some(1).is_some());
    /// assert!(!Maybe::<i32>::None.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert!(Maybe::<i32>::None.is_none());
    /// assert!(!Maybe::Some(1).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Maybe` by applying exactly one of two functions.
    ///
    /// `Some(value)` invokes `on_some(value)`; `None` invokes `on_none()`.
    /// The branch that does not apply is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// let present = Maybe::Some(5);
    /// assert_eq!(present.fold(|n| n * 2, || -1), 10);
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.fold(|n| n * 2, || -1), -1);
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_some: F, on_none: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value, if any.
    ///
    /// `Some(value)` becomes `Some(function(value))`; `None` stays `None`
    /// and the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).map(|n| n * 2), Maybe::Some(10));
    /// assert_eq!(Maybe::<i32>::None.map(|n| n * 2), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Monadic bind: applies a `Maybe`-producing function to the contained
    /// value and flattens the result.
    ///
    /// Absence propagates without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     Maybe::some_if(n / 2, n % 2 == 0)
    /// }
    ///
    /// assert_eq!(Maybe::Some(8).flat_map(half), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(7).flat_map(half), Maybe::None);
    /// assert_eq!(Maybe::None.flat_map(half), Maybe::None);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the contained value only if the predicate holds for it.
    ///
    /// `Some(value)` survives iff `predicate(&value)` is `true`; otherwise
    /// the result is `None`. `None` stays `None` without invoking the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(4).filter(|n| n % 2 == 0), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(3).filter(|n| n % 2 == 0), Maybe::None);
    /// assert_eq!(Maybe::<i32>::None.filter(|n| n % 2 == 0), Maybe::None);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns the `Maybe` itself if present, otherwise the supplied
    /// alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).or(Maybe::Some(2)), Maybe::Some(1));
    /// assert_eq!(Maybe::None.or(Maybe::Some(2)), Maybe::Some(2));
    /// ```
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative,
        }
    }

    /// Returns the `Maybe` itself if present, otherwise the result of the
    /// supplier. The supplier is not invoked when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).or_else(|| Maybe::Some(2)), Maybe::Some(1));
    /// assert_eq!(Maybe::None.or_else(|| Maybe::Some(2)), Maybe::Some(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => supplier(),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, or the given default if absent.
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).value_or(0), 5);
    /// assert_eq!(Maybe::None.value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value, or the result of the supplier if absent.
    /// The supplier is not invoked when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).value_or_else(|| 0), 5);
    /// assert_eq!(Maybe::None.value_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    /// Returns a reference to the contained value if present.
    ///
    /// This is the borrow-friendly form of checked extraction: callers who
    /// want imperative control flow test the returned `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// let present = Maybe::Some(5);
    /// assert_eq!(present.value_ref(), Some(&5));
    /// assert_eq!(Maybe::<i32>::None.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// let text = Maybe::Some("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Some(5));
    /// // `text` is still usable here.
    /// assert!(text.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent. This is the API-misuse accessor;
    /// prefer [`value_or`](Self::value_or) and friends for total extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).unwrap(), 5);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Returns the contained value, panicking with the given message if
    /// absent.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).expect("value must be present"), 5);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    // =========================================================================
    // Conversions to Outcome / Verdict
    // =========================================================================

    /// Treats presence as success and absence as the supplied failure.
    ///
    /// `Some(value)` becomes `Success(value)`; `None` becomes
    /// `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::Some(5).success_or("missing"), Outcome::Success(5));
    /// assert_eq!(Maybe::<i32>::None.success_or("missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn success_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error),
        }
    }

    /// Treats presence as success and absence as a lazily supplied failure.
    /// The supplier is not invoked when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Outcome};
    ///
    /// let outcome = Maybe::<i32>::None.success_or_else(|| "missing".to_string());
    /// assert_eq!(outcome, Outcome::Failure("missing".to_string()));
    /// ```
    #[inline]
    pub fn success_or_else<E, F>(self, supplier: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(supplier()),
        }
    }

    /// Treats presence as failure and absence as the supplied success.
    ///
    /// This is the mirror of [`success_or`](Self::success_or): a present
    /// value lands on the failure rail. A `Maybe<T>` is isomorphic to both
    /// `Outcome<T, Unit>` and `Outcome<Unit, T>`, so both polarities are
    /// legitimate conversions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Outcome};
    ///
    /// let problem = Maybe::Some("disk full");
    /// assert_eq!(problem.failure_or(42), Outcome::Failure("disk full"));
    ///
    /// let no_problem: Maybe<&str> = Maybe::None;
    /// assert_eq!(no_problem.failure_or(42), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn failure_or<V>(self, value: V) -> Outcome<V, T> {
        match self {
            Self::Some(error) => Outcome::Failure(error),
            Self::None => Outcome::Success(value),
        }
    }

    /// Treats presence as failure and absence as a lazily supplied success.
    /// The supplier is not invoked when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Outcome};
    ///
    /// let no_problem: Maybe<&str> = Maybe::None;
    /// assert_eq!(no_problem.failure_or_else(|| 42), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn failure_or_else<V, F>(self, supplier: F) -> Outcome<V, T>
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Some(error) => Outcome::Failure(error),
            Self::None => Outcome::Success(supplier()),
        }
    }

    /// Treats a present value as a failure payload and absence as a
    /// payload-free success, producing a [`Verdict`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Verdict};
    ///
    /// assert_eq!(Maybe::Some("bad").into_verdict(), Verdict::Failure("bad"));
    /// assert_eq!(Maybe::<&str>::None.into_verdict(), Verdict::Success);
    /// ```
    #[inline]
    pub fn into_verdict(self) -> Verdict<T> {
        match self {
            Self::Some(error) => Verdict::Failure(error),
            Self::None => Verdict::Success,
        }
    }

    /// Converts into a standard `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).into_option(), Some(5));
    /// assert_eq!(Maybe::<i32>::None.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the contained value, or `T::default()` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).value_or_default(), 5);
    /// assert_eq!(Maybe::<i32>::None.value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

// =============================================================================
// Asynchronous Combinators
// =============================================================================

#[cfg(feature = "async")]
impl<T> Maybe<T> {
    /// Applies an asynchronous function to the contained value, if any.
    ///
    /// The future is only constructed (and therefore only ever polled) when
    /// a value is present; `None` resolves immediately to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Maybe;
    ///
    /// let doubled = Maybe::Some(5).map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(doubled, Maybe::Some(10));
    /// # }
    /// ```
    #[inline]
    pub async fn map_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value).await),
            Self::None => Maybe::None,
        }
    }

    /// Asynchronous monadic bind. Absence propagates without constructing
    /// the continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Maybe;
    ///
    /// let found = Maybe::Some(5)
    ///     .flat_map_async(|n| async move { Maybe::some_if(n, n > 0) })
    ///     .await;
    /// assert_eq!(found, Maybe::Some(5));
    /// # }
    /// ```
    #[inline]
    pub async fn flat_map_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(value) => function(value).await,
            Self::None => Maybe::None,
        }
    }

    /// Eliminates the `Maybe` by awaiting exactly one of two asynchronous
    /// branches. The branch that does not apply is never constructed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::Maybe;
    ///
    /// let text = Maybe::Some(5)
    ///     .fold_async(|n| async move { n.to_string() }, || async { "absent".to_string() })
    ///     .await;
    /// assert_eq!(text, "5");
    /// # }
    /// ```
    #[inline]
    pub async fn fold_async<U, F, G, FutSome, FutNone>(self, on_some: F, on_none: G) -> U
    where
        F: FnOnce(T) -> FutSome,
        G: FnOnce() -> FutNone,
        FutSome: Future<Output = U>,
        FutNone: Future<Output = U>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => on_none().await,
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Bridges a nullable input into the option algebra: `Option::None`
    /// becomes `Maybe::None`, `Option::Some` becomes `Maybe::Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(5).into();
    /// assert_eq!(maybe, Maybe::Some(5));
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts back to a standard `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// let option: Option<i32> = Maybe::Some(5).into();
    /// assert_eq!(option, Some(5));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Maybe<i32>: Send, Sync, Copy, Unpin);

    #[rstest]
    fn some_is_present() {
        let value = Maybe::Some(42);
        assert!(value.is_some());
        assert!(!value.is_none());
    }

    #[rstest]
    fn none_is_absent() {
        let value: Maybe<i32> = Maybe::None;
        assert!(value.is_none());
        assert!(!value.is_some());
    }

    #[rstest]
    fn option_roundtrip() {
        let maybe: Maybe<i32> = Some(42).into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(42));

        let maybe: Maybe<i32> = None.into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, None);
    }

    #[rstest]
    #[should_panic(expected = "called `Maybe::unwrap()` on a `None` value")]
    fn unwrap_on_none_panics() {
        let absent: Maybe<i32> = Maybe::None;
        let _ = absent.unwrap();
    }
}

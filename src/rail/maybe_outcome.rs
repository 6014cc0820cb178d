//! MaybeOutcome type - ok, error, or neither.
//!
//! This module provides the [`MaybeOutcome<V, E>`] type, the tri-state
//! hybrid of optional and result. A `MaybeOutcome<V, E>` is exactly one of:
//!
//! - `Ok(value)`: a success carrying a `V`
//! - `Error(error)`: a failure carrying an `E`
//! - `Neither`: no value and no error
//!
//! The three states are mutually exclusive and partition every instance.
//! `Neither` is what a `None` collapses to when a [`Maybe`]-wrapped value
//! or error is lifted into the tri-state form; a plain [`Outcome`] lifts to
//! the two payload-carrying states only.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::MaybeOutcome;
//!
//! let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
//! let rendered = state.fold(
//!     |n| format!("ok {n}"),
//!     |e| format!("error {e}"),
//!     || "neither".to_string(),
//! );
//! assert_eq!(rendered, "ok 5");
//! ```

use std::fmt;

use super::maybe::Maybe;
use super::outcome::Outcome;

/// Exactly one of three states: a value, an error, or neither.
///
/// # Type Parameters
///
/// * `V` - The type carried in the `Ok` state
/// * `E` - The type carried in the `Error` state
///
/// # Examples
///
/// ```rust
/// use railway::rail::MaybeOutcome;
///
/// let ok: MaybeOutcome<i32, String> = MaybeOutcome::Ok(1);
/// let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
///
/// assert!(ok.is_ok());
/// assert!(neither.is_neither());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaybeOutcome<V, E> {
    /// A success carrying a value.
    Ok(V),
    /// A failure carrying an error.
    Error(E),
    /// Neither a value nor an error.
    Neither,
}

impl<V, E> MaybeOutcome<V, E> {
    // =========================================================================
    // Conditional Constructors
    // =========================================================================

    /// Produces `Ok(value)` if the condition holds, otherwise `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let present: MaybeOutcome<i32, String> = MaybeOutcome::ok_if(5, true);
    /// assert_eq!(present, MaybeOutcome::Ok(5));
    ///
    /// let absent: MaybeOutcome<i32, String> = MaybeOutcome::ok_if(5, false);
    /// assert_eq!(absent, MaybeOutcome::Neither);
    /// ```
    #[inline]
    pub fn ok_if(value: V, condition: bool) -> Self {
        if condition { Self::Ok(value) } else { Self::Neither }
    }

    /// Produces `Ok(value)` if the predicate holds for the value,
    /// otherwise `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let present: MaybeOutcome<i32, String> = MaybeOutcome::ok_when(5, |n| *n > 0);
    /// assert_eq!(present, MaybeOutcome::Ok(5));
    /// ```
    #[inline]
    pub fn ok_when<P>(value: V, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        let present = predicate(&value);
        Self::ok_if(value, present)
    }

    /// Produces `Error(error)` if the condition holds, otherwise `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let failed: MaybeOutcome<i32, &str> = MaybeOutcome::error_if("bad", true);
    /// assert_eq!(failed, MaybeOutcome::Error("bad"));
    /// ```
    #[inline]
    pub fn error_if(error: E, condition: bool) -> Self {
        if condition { Self::Error(error) } else { Self::Neither }
    }

    /// Produces `Error(error)` if the predicate holds for the error,
    /// otherwise `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let quiet: MaybeOutcome<i32, &str> = MaybeOutcome::error_when("", |e| !e.is_empty());
    /// assert_eq!(quiet, MaybeOutcome::Neither);
    /// ```
    #[inline]
    pub fn error_when<P>(error: E, predicate: P) -> Self
    where
        P: FnOnce(&E) -> bool,
    {
        let failed = predicate(&error);
        Self::error_if(error, failed)
    }

    // =========================================================================
    // Bridging Constructors
    // =========================================================================

    /// Lifts a `Maybe`-wrapped value: `Some` becomes `Ok`, `None` collapses
    /// to `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, MaybeOutcome};
    ///
    /// let lifted: MaybeOutcome<i32, String> = MaybeOutcome::from_maybe_value(Maybe::Some(5));
    /// assert_eq!(lifted, MaybeOutcome::Ok(5));
    ///
    /// let collapsed: MaybeOutcome<i32, String> = MaybeOutcome::from_maybe_value(Maybe::None);
    /// assert_eq!(collapsed, MaybeOutcome::Neither);
    /// ```
    #[inline]
    pub fn from_maybe_value(maybe: Maybe<V>) -> Self {
        match maybe {
            Maybe::Some(value) => Self::Ok(value),
            Maybe::None => Self::Neither,
        }
    }

    /// Lifts a `Maybe`-wrapped error: `Some` becomes `Error`, `None`
    /// collapses to `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, MaybeOutcome};
    ///
    /// let lifted: MaybeOutcome<i32, &str> = MaybeOutcome::from_maybe_error(Maybe::Some("bad"));
    /// assert_eq!(lifted, MaybeOutcome::Error("bad"));
    /// ```
    #[inline]
    pub fn from_maybe_error(maybe: Maybe<E>) -> Self {
        match maybe {
            Maybe::Some(error) => Self::Error(error),
            Maybe::None => Self::Neither,
        }
    }

    /// Lifts a two-state [`Outcome`]; no `Neither` is reachable from a
    /// two-state source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{MaybeOutcome, Outcome};
    ///
    /// let lifted = MaybeOutcome::from_outcome(Outcome::<i32, String>::Success(5));
    /// assert_eq!(lifted, MaybeOutcome::Ok(5));
    /// ```
    #[inline]
    pub fn from_outcome(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Ok(value),
            Outcome::Failure(error) => Self::Error(error),
        }
    }

    /// Flattens a `Maybe`-of-`Outcome`: `None` collapses to `Neither`, a
    /// present outcome keeps its rail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, MaybeOutcome, Outcome};
    ///
    /// let nested = Maybe::Some(Outcome::<i32, String>::Success(5));
    /// assert_eq!(MaybeOutcome::from_maybe_outcome(nested), MaybeOutcome::Ok(5));
    ///
    /// let absent: Maybe<Outcome<i32, String>> = Maybe::None;
    /// assert_eq!(MaybeOutcome::from_maybe_outcome(absent), MaybeOutcome::Neither);
    /// ```
    #[inline]
    pub fn from_maybe_outcome(maybe: Maybe<Outcome<V, E>>) -> Self {
        match maybe {
            Maybe::Some(outcome) => Self::from_outcome(outcome),
            Maybe::None => Self::Neither,
        }
    }

    /// Flattens an `Outcome` whose success rail is optional: an absent
    /// success collapses to `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, MaybeOutcome, Outcome};
    ///
    /// let nested: Outcome<Maybe<i32>, String> = Outcome::Success(Maybe::None);
    /// assert_eq!(MaybeOutcome::from_outcome_maybe(nested), MaybeOutcome::Neither);
    /// ```
    #[inline]
    pub fn from_outcome_maybe(outcome: Outcome<Maybe<V>, E>) -> Self {
        match outcome {
            Outcome::Success(Maybe::Some(value)) => Self::Ok(value),
            Outcome::Success(Maybe::None) => Self::Neither,
            Outcome::Failure(error) => Self::Error(error),
        }
    }

    /// Flattens an `Outcome` whose failure rail is optional: an absent
    /// failure collapses to `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, MaybeOutcome, Outcome};
    ///
    /// let nested: Outcome<i32, Maybe<String>> = Outcome::Failure(Maybe::None);
    /// assert_eq!(MaybeOutcome::from_outcome_maybe_error(nested), MaybeOutcome::Neither);
    /// ```
    #[inline]
    pub fn from_outcome_maybe_error(outcome: Outcome<V, Maybe<E>>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Ok(value),
            Outcome::Failure(Maybe::Some(error)) => Self::Error(error),
            Outcome::Failure(Maybe::None) => Self::Neither,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` in the `Ok` state.
    ///
    /// The three checks `is_ok`, [`is_error`](Self::is_error), and
    /// [`is_neither`](Self::is_neither) partition all instances: exactly
    /// one of them is `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(1);
    /// assert!(state.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` in the `Error` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, &str> = MaybeOutcome::Error("bad");
    /// assert!(state.is_error());
    /// ```
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` in the `Neither` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    /// assert!(state.is_neither());
    /// ```
    #[inline]
    pub const fn is_neither(&self) -> bool {
        matches!(self, Self::Neither)
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `MaybeOutcome` by applying exactly one of three
    /// functions, selected by the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    /// assert_eq!(state.fold(|n| n, |_| -1, || 0), 0);
    /// ```
    #[inline]
    pub fn fold<T, F, G, H>(self, on_ok: F, on_error: G, on_neither: H) -> T
    where
        F: FnOnce(V) -> T,
        G: FnOnce(E) -> T,
        H: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Error(error) => on_error(error),
            Self::Neither => on_neither(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the `Ok` payload, leaving `Error` and
    /// `Neither` untouched and uninvoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// assert_eq!(state.map(|n| n * 2), MaybeOutcome::Ok(10));
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    /// assert_eq!(state.map(|n| n * 2), MaybeOutcome::Neither);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> MaybeOutcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => MaybeOutcome::Ok(function(value)),
            Self::Error(error) => MaybeOutcome::Error(error),
            Self::Neither => MaybeOutcome::Neither,
        }
    }

    /// Monadic bind on the `Ok` state; `Error` and `Neither` short-circuit
    /// without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// let chained = state.flat_map(|n| MaybeOutcome::ok_if(n * 2, n > 0));
    /// assert_eq!(chained, MaybeOutcome::Ok(10));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> MaybeOutcome<U, E>
    where
        F: FnOnce(V) -> MaybeOutcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Error(error) => MaybeOutcome::Error(error),
            Self::Neither => MaybeOutcome::Neither,
        }
    }

    /// Applies a function to the `Error` payload, leaving `Ok` and
    /// `Neither` untouched and uninvoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    /// assert_eq!(state.map_error(|e| e.len()), MaybeOutcome::Error(3));
    /// ```
    #[inline]
    pub fn map_error<F, G>(self, function: G) -> MaybeOutcome<V, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => MaybeOutcome::Ok(value),
            Self::Error(error) => MaybeOutcome::Error(function(error)),
            Self::Neither => MaybeOutcome::Neither,
        }
    }

    /// Monadic bind on the `Error` state; `Ok` and `Neither` short-circuit
    /// without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    /// let recovered: MaybeOutcome<i32, String> = state.flat_map_error(|_| MaybeOutcome::Ok(0));
    /// assert_eq!(recovered, MaybeOutcome::Ok(0));
    /// ```
    #[inline]
    pub fn flat_map_error<F, G>(self, function: G) -> MaybeOutcome<V, F>
    where
        G: FnOnce(E) -> MaybeOutcome<V, F>,
    {
        match self {
            Self::Ok(value) => MaybeOutcome::Ok(value),
            Self::Error(error) => function(error),
            Self::Neither => MaybeOutcome::Neither,
        }
    }

    /// Supplies a replacement computation only in the `Neither` state; `Ok`
    /// and `Error` pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    /// let filled = state.flat_map_neither(|| MaybeOutcome::Ok(0));
    /// assert_eq!(filled, MaybeOutcome::Ok(0));
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// let untouched = state.flat_map_neither(|| MaybeOutcome::Ok(0));
    /// assert_eq!(untouched, MaybeOutcome::Ok(5));
    /// ```
    #[inline]
    pub fn flat_map_neither<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Error(error) => Self::Error(error),
            Self::Neither => function(),
        }
    }

    // =========================================================================
    // Polarity
    // =========================================================================

    /// Swaps the roles of `Ok` and `Error`; `Neither` is fixed.
    ///
    /// This changes meaning rather than representation, so it is an
    /// explicit operation, never an implicit conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// assert_eq!(state.invert(), MaybeOutcome::Error(5));
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    /// assert_eq!(state.invert(), MaybeOutcome::Neither);
    /// ```
    #[inline]
    pub fn invert(self) -> MaybeOutcome<E, V> {
        match self {
            Self::Ok(value) => MaybeOutcome::Error(value),
            Self::Error(error) => MaybeOutcome::Ok(error),
            Self::Neither => MaybeOutcome::Neither,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the `Ok` payload, or the given default otherwise.
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// assert_eq!(state.value_or(-1), 5);
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    /// assert_eq!(state.value_or(-1), -1);
    /// ```
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) | Self::Neither => default,
        }
    }

    /// Returns the `Ok` payload, or the result of the supplier otherwise.
    /// The supplier is not invoked in the `Ok` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    /// assert_eq!(state.value_or_else(|| -1), -1);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, supplier: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) | Self::Neither => supplier(),
        }
    }

    /// Returns a reference to the `Ok` payload if in the `Ok` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// assert_eq!(state.ok_ref(), Some(&5));
    /// ```
    #[inline]
    pub const fn ok_ref(&self) -> Option<&V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) | Self::Neither => None,
        }
    }

    /// Returns a reference to the `Error` payload if in the `Error` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    /// assert_eq!(state.error_ref(), Some(&"bad".to_string()));
    /// ```
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Ok(_) | Self::Neither => None,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts the `Ok` state to a [`Maybe`]; `Error` and `Neither` both
    /// become `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, MaybeOutcome};
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// assert_eq!(state.ok_maybe(), Maybe::Some(5));
    /// ```
    #[inline]
    pub fn ok_maybe(self) -> Maybe<V> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Error(_) | Self::Neither => Maybe::None,
        }
    }

    /// Converts the `Error` state to a [`Maybe`]; `Ok` and `Neither` both
    /// become `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, MaybeOutcome};
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    /// assert_eq!(state.error_maybe(), Maybe::Some("bad".to_string()));
    /// ```
    #[inline]
    pub fn error_maybe(self) -> Maybe<E> {
        match self {
            Self::Error(error) => Maybe::Some(error),
            Self::Ok(_) | Self::Neither => Maybe::None,
        }
    }

    /// Alias for [`ok_maybe`](Self::ok_maybe): narrows the tri-state to
    /// the optional container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, MaybeOutcome};
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    /// assert_eq!(state.into_maybe(), Maybe::None);
    /// ```
    #[inline]
    pub fn into_maybe(self) -> Maybe<V> {
        self.ok_maybe()
    }

    /// Narrows to a two-state [`Outcome`], mapping `Neither` to the
    /// supplied error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{MaybeOutcome, Outcome};
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    /// let outcome = state.into_outcome("empty".to_string());
    /// assert_eq!(outcome, Outcome::Failure("empty".to_string()));
    /// ```
    #[inline]
    pub fn into_outcome(self, error_when_neither: E) -> Outcome<V, E> {
        match self {
            Self::Ok(value) => Outcome::Success(value),
            Self::Error(error) => Outcome::Failure(error),
            Self::Neither => Outcome::Failure(error_when_neither),
        }
    }
}

// =============================================================================
// Asynchronous Combinators
// =============================================================================

#[cfg(feature = "async")]
impl<V, E> MaybeOutcome<V, E> {
    /// Applies an asynchronous function to the `Ok` payload; `Error` and
    /// `Neither` resolve immediately without constructing the continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// let doubled = state.map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(doubled, MaybeOutcome::Ok(10));
    /// # }
    /// ```
    #[inline]
    pub async fn map_async<U, F, Fut>(self, function: F) -> MaybeOutcome<U, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => MaybeOutcome::Ok(function(value).await),
            Self::Error(error) => MaybeOutcome::Error(error),
            Self::Neither => MaybeOutcome::Neither,
        }
    }

    /// Asynchronous monadic bind on the `Ok` state; the other two states
    /// short-circuit without constructing the continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # async fn demo() {
    /// use railway::rail::MaybeOutcome;
    ///
    /// let state: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    /// let chained = state
    ///     .flat_map_async(|n| async move { MaybeOutcome::<i32, String>::ok_if(n, n > 0) })
    ///     .await;
    /// assert_eq!(chained, MaybeOutcome::Ok(5));
    /// # }
    /// ```
    #[inline]
    pub async fn flat_map_async<U, F, Fut>(self, function: F) -> MaybeOutcome<U, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = MaybeOutcome<U, E>>,
    {
        match self {
            Self::Ok(value) => function(value).await,
            Self::Error(error) => MaybeOutcome::Error(error),
            Self::Neither => MaybeOutcome::Neither,
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for MaybeOutcome<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Error(error) => formatter.debug_tuple("Error").field(error).finish(),
            Self::Neither => formatter.write_str("Neither"),
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for MaybeOutcome<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Error(error) => write!(formatter, "Error({error})"),
            Self::Neither => formatter.write_str("Neither"),
        }
    }
}

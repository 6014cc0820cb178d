//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! - **Left identity**: `Self::pure(a).flat_map(f) == f(a)`
//! - **Right identity**: `m.flat_map(Self::pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! The property tests in `tests/typeclass_laws.rs` exercise all three.

use super::applicative::Applicative;
use crate::rail::{Maybe, MaybeOutcome, Outcome};

/// A type class for containers that can sequence dependent computations.
///
/// `flat_map` lets the result of one computation choose the next one, with
/// the container's inert states short-circuiting the chain: the
/// continuation is never invoked for an absent, failed, or neither state.
///
/// # Examples
///
/// ```rust
/// use railway::rail::Maybe;
/// use railway::typeclass::Monad;
///
/// let result = Maybe::Some(5).flat_map(|n| Maybe::some_if(n * 2, n > 0));
/// assert_eq!(result, Maybe::Some(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a container-producing function to the payload and flattens
    /// the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    /// use railway::typeclass::Monad;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(5);
    /// let chained = Monad::flat_map(outcome, |n| Outcome::Success(n + 1));
    /// assert_eq!(chained, Outcome::Success(6));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Self::flat_map), matching the naming of
    /// `Option::and_then` and `Result::and_then`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Some(5).and_then(|n| Maybe::Some(n * 2)), Maybe::Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first payload. An inert
    /// first computation propagates and `next` is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Some(5).then(Maybe::Some("next")), Maybe::Some("next"));
    /// assert_eq!(Maybe::<i32>::None.then(Maybe::Some("next")), Maybe::None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<V, E: Clone> Monad for Outcome<V, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(V) -> Outcome<B, E>,
    {
        Self::flat_map(self, function)
    }
}

impl<V, E: Clone> Monad for MaybeOutcome<V, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> MaybeOutcome<B, E>
    where
        F: FnOnce(V) -> MaybeOutcome<B, E>,
    {
        Self::flat_map(self, function)
    }
}

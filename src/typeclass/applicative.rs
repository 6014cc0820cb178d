//! Applicative type class - lifting values and combining independent
//! computations.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! - **Identity**: `Self::pure(|x| x).apply(v) == v`
//! - **Homomorphism**: `Self::pure(f).apply(Self::pure(x)) == Self::pure(f(x))`
//!
//! together with the composition and interchange laws; the property tests
//! in `tests/typeclass_laws.rs` exercise the observable consequences.

use super::functor::Functor;
use crate::rail::{Maybe, MaybeOutcome, Outcome};

/// A type class for containers that can lift bare values and combine
/// independent computations.
///
/// If any participating computation is in an inert state (absent, failed,
/// or neither), the combination is inert the same way, and the combining
/// function is never invoked.
///
/// # Examples
///
/// ```rust
/// use railway::rail::Maybe;
/// use railway::typeclass::Applicative;
///
/// let sum = Maybe::Some(3).map2(Maybe::Some(4), |a, b| a + b);
/// assert_eq!(sum, Maybe::Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a bare value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::typeclass::Applicative;
    ///
    /// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(lifted, Maybe::Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    /// use railway::typeclass::Applicative;
    ///
    /// let a: Outcome<i32, String> = Outcome::Success(1);
    /// let b: Outcome<i32, String> = Outcome::Success(2);
    /// assert_eq!(a.map2(b, |x, y| x + y), Outcome::Success(3));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self: Sized,
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a contained function to a contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Some(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::Some(5)), Maybe::Some(6));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }
}

impl<V, E: Clone> Applicative for Outcome<V, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    // Left-biased: the first failure encountered wins.
    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(V, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }
}

impl<V, E: Clone> Applicative for MaybeOutcome<V, E> {
    #[inline]
    fn pure<B>(value: B) -> MaybeOutcome<B, E> {
        MaybeOutcome::Ok(value)
    }

    // An error outranks a neither; among errors the first wins.
    #[inline]
    fn map2<B, C, F>(self, other: MaybeOutcome<B, E>, function: F) -> MaybeOutcome<C, E>
    where
        F: FnOnce(V, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), MaybeOutcome::Ok(b)) => MaybeOutcome::Ok(function(a, b)),
            (Self::Error(error), _) | (_, MaybeOutcome::Error(error)) => {
                MaybeOutcome::Error(error)
            }
            _ => MaybeOutcome::Neither,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map2_short_circuits_on_the_first_failure() {
        let first: Outcome<i32, &str> = Outcome::Failure("first");
        let second: Outcome<i32, &str> = Outcome::Failure("second");
        assert_eq!(first.map2(second, |a, b| a + b), Outcome::Failure("first"));
    }

    #[rstest]
    fn map2_prefers_error_over_neither() {
        let neither: MaybeOutcome<i32, &str> = MaybeOutcome::Neither;
        let error: MaybeOutcome<i32, &str> = MaybeOutcome::Error("bad");
        assert_eq!(neither.map2(error, |a, b| a + b), MaybeOutcome::Error("bad"));
    }
}

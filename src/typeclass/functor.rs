//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy:
//!
//! - **Identity**: `fa.fmap(|x| x) == fa`
//! - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Both laws are exercised by the property tests in `tests/typeclass_laws.rs`.

use super::higher::TypeConstructor;
use crate::rail::{Maybe, MaybeOutcome, Outcome};

/// A type class for containers whose primary payload can be transformed
/// while preserving the container's shape.
///
/// For the two-rail and tri-state containers the "primary payload" is the
/// success/ok rail; the other states pass through untouched and the
/// function is never invoked for them.
///
/// # Examples
///
/// ```rust
/// use railway::rail::Outcome;
/// use railway::typeclass::Functor;
///
/// let outcome: Outcome<i32, String> = Outcome::Success(5);
/// assert_eq!(outcome.fmap(|n| n * 2), Outcome::Success(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the payload inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Some(5).fmap(|n| n * 2), Maybe::Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to the payload by reference, leaving the
    /// original container intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::typeclass::Functor;
    ///
    /// let text = Maybe::Some("hello".to_string());
    /// assert_eq!(text.fmap_ref(|s| s.len()), Maybe::Some(5));
    /// assert!(text.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the payload with a constant value.
    ///
    /// Equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Some(5).replace("done"), Maybe::Some("done"));
    /// assert_eq!(Maybe::<i32>::None.replace("done"), Maybe::None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only the container's shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    /// use railway::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Some(5).void(), Maybe::Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

// Rebuilding a failure from a reference needs to clone the error.
impl<V, E: Clone> Functor for Outcome<V, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(V) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&V) -> B,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

impl<V, E: Clone> Functor for MaybeOutcome<V, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> MaybeOutcome<B, E>
    where
        F: FnOnce(V) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> MaybeOutcome<B, E>
    where
        F: FnOnce(&V) -> B,
    {
        match self {
            MaybeOutcome::Ok(value) => MaybeOutcome::Ok(function(value)),
            MaybeOutcome::Error(error) => MaybeOutcome::Error(error.clone()),
            MaybeOutcome::Neither => MaybeOutcome::Neither,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_agrees_with_the_inherent_map() {
        let maybe = Maybe::Some(5);
        assert_eq!(maybe.fmap(|n| n + 1), maybe.map(|n| n + 1));
    }

    #[rstest]
    fn fmap_ref_leaves_the_original_usable() {
        let outcome: Outcome<String, String> = Outcome::Success("ok".to_string());
        assert_eq!(outcome.fmap_ref(|s| s.len()), Outcome::Success(2));
        assert!(outcome.is_success());

        let failure: Outcome<String, String> = Outcome::Failure("bad".to_string());
        assert_eq!(
            failure.fmap_ref(|s| s.len()),
            Outcome::Failure("bad".to_string())
        );
    }

    #[rstest]
    fn replace_leaves_inert_states_untouched() {
        let failure: Outcome<i32, &str> = Outcome::Failure("bad");
        assert_eq!(failure.replace(1), Outcome::Failure("bad"));

        let neither: MaybeOutcome<i32, &str> = MaybeOutcome::Neither;
        assert_eq!(neither.void(), MaybeOutcome::Neither);
    }
}

//! Cross-type conversions: flattening and transposition of nested shapes.
//!
//! The leaf containers nest freely, and the standard monad-flattening and
//! applicative-transpose operations keep the algebra coherent:
//!
//! - `Maybe<Maybe<T>>` flattens to `Maybe<T>`
//! - `Outcome<Outcome<V, E>, E>` flattens to `Outcome<V, E>`
//! - `Maybe<Outcome<V, E>>` transposes to `Outcome<Maybe<V>, E>`
//! - `Outcome<Maybe<V>, E>` transposes to `Maybe<Outcome<V, E>>`
//!
//! All of these are explicit method calls. Deliberately, there are no
//! blanket `From` conversions between `Maybe<T>` and `Outcome<T, Unit>` /
//! `Outcome<Unit, T>`: the two isomorphisms overlap at `T = Unit`, and a
//! silent coercion would hide which polarity a call site meant. The named
//! methods on [`Maybe`] and [`Outcome`] (`success_or`, `failure_or`,
//! `success_maybe`, `failure_maybe`, `erase_value`, `erase_failure`) are
//! the conversion sites.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::{Maybe, Outcome};
//!
//! let nested = Maybe::Some(Maybe::Some(5));
//! assert_eq!(nested.flatten(), Maybe::Some(5));
//!
//! let nested: Maybe<Outcome<i32, String>> = Maybe::Some(Outcome::Success(5));
//! assert_eq!(nested.transpose(), Outcome::Success(Maybe::Some(5)));
//! ```

use crate::rail::{Maybe, Outcome};

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting: `Some(Some(x))` becomes `Some(x)`,
    /// everything else becomes `None`.
    ///
    /// Equivalent to `flat_map(|inner| inner)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Maybe;
    ///
    /// assert_eq!(Maybe::Some(Maybe::Some(5)).flatten(), Maybe::Some(5));
    /// assert_eq!(Maybe::Some(Maybe::<i32>::None).flatten(), Maybe::None);
    /// assert_eq!(Maybe::<Maybe<i32>>::None.flatten(), Maybe::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Removes one level of success-rail nesting:
    /// `Success(Success(v))` becomes `Success(v)`, an inner or outer
    /// failure becomes `Failure(e)`.
    ///
    /// Equivalent to `flat_map(|inner| inner)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, String>, String> = Outcome::Success(Outcome::Success(5));
    /// assert_eq!(nested.flatten(), Outcome::Success(5));
    ///
    /// let nested: Outcome<Outcome<i32, String>, String> =
    ///     Outcome::Success(Outcome::Failure("inner".to_string()));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner".to_string()));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<V, E> {
        self.flat_map(|inner| inner)
    }
}

impl<V, E> Maybe<Outcome<V, E>> {
    /// Transposes a `Maybe` of an `Outcome` into an `Outcome` of a `Maybe`.
    ///
    /// `None` becomes `Success(None)`: absence is not a failure, it is a
    /// successfully absent value. An inner failure surfaces as the outer
    /// failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Outcome};
    ///
    /// let present: Maybe<Outcome<i32, String>> = Maybe::Some(Outcome::Success(5));
    /// assert_eq!(present.transpose(), Outcome::Success(Maybe::Some(5)));
    ///
    /// let absent: Maybe<Outcome<i32, String>> = Maybe::None;
    /// assert_eq!(absent.transpose(), Outcome::Success(Maybe::None));
    ///
    /// let failed: Maybe<Outcome<i32, String>> = Maybe::Some(Outcome::Failure("bad".to_string()));
    /// assert_eq!(failed.transpose(), Outcome::Failure("bad".to_string()));
    /// ```
    #[inline]
    pub fn transpose(self) -> Outcome<Maybe<V>, E> {
        match self {
            Self::Some(Outcome::Success(value)) => Outcome::Success(Maybe::Some(value)),
            Self::Some(Outcome::Failure(error)) => Outcome::Failure(error),
            Self::None => Outcome::Success(Maybe::None),
        }
    }
}

impl<V, E> Outcome<Maybe<V>, E> {
    /// Transposes an `Outcome` of a `Maybe` into a `Maybe` of an `Outcome`.
    ///
    /// `Success(None)` becomes `None`; a failure is always present, as
    /// `Some(Failure(e))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::rail::{Maybe, Outcome};
    ///
    /// let present: Outcome<Maybe<i32>, String> = Outcome::Success(Maybe::Some(5));
    /// assert_eq!(present.transpose(), Maybe::Some(Outcome::Success(5)));
    ///
    /// let absent: Outcome<Maybe<i32>, String> = Outcome::Success(Maybe::None);
    /// assert_eq!(absent.transpose(), Maybe::None);
    ///
    /// let failed: Outcome<Maybe<i32>, String> = Outcome::Failure("bad".to_string());
    /// assert_eq!(failed.transpose(), Maybe::Some(Outcome::Failure("bad".to_string())));
    /// ```
    #[inline]
    pub fn transpose(self) -> Maybe<Outcome<V, E>> {
        match self {
            Self::Success(Maybe::Some(value)) => Maybe::Some(Outcome::Success(value)),
            Self::Success(Maybe::None) => Maybe::None,
            Self::Failure(error) => Maybe::Some(Outcome::Failure(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::rail::{Maybe, Outcome};
    use rstest::rstest;

    #[rstest]
    fn transposes_are_mutually_inverse_on_present_values() {
        let start: Maybe<Outcome<i32, String>> = Maybe::Some(Outcome::Success(5));
        assert_eq!(start.clone().transpose().transpose(), start);

        let start: Outcome<Maybe<i32>, String> = Outcome::Failure("bad".to_string());
        assert_eq!(start.clone().transpose().transpose(), start);
    }

    #[rstest]
    fn flatten_is_left_biased_on_outer_failure() {
        let nested: Outcome<Outcome<i32, String>, String> = Outcome::Failure("outer".to_string());
        assert_eq!(nested.flatten(), Outcome::Failure("outer".to_string()));
    }
}

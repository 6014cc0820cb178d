//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types: there is no way to write a trait
//! abstracting over `Maybe<_>` and `Outcome<_, E>` as bare type
//! constructors. This module works around that with a GAT: a container
//! names its current payload (`Inner`) and how to rebuild itself around a
//! different payload (`WithType<B>`), which is all Functor and friends
//! need.

use crate::rail::{Maybe, MaybeOutcome, Outcome};

/// A trait representing a type constructor.
///
/// Implementors are containers applied to some payload type; the associated
/// types recover the payload and the constructor.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is the same type
/// as `F`.
///
/// # Examples
///
/// ```rust
/// use railway::rail::Maybe;
/// use railway::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The payload type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to a different payload type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<V, E> TypeConstructor for Outcome<V, E> {
    type Inner = V;
    type WithType<B> = Outcome<B, E>;
}

impl<V, E> TypeConstructor for MaybeOutcome<V, E> {
    type Inner = V;
    type WithType<B> = MaybeOutcome<B, E>;
}

//! # railway
//!
//! Railway-oriented sum types for Rust: an optional container, two-rail
//! outcomes, an error-only verdict, a tri-state hybrid, and validation
//! accumulators.
//!
//! ## Overview
//!
//! This library provides a small algebra of immutable value containers for
//! expressing presence/absence and success/failure without null references
//! or exceptions-as-control-flow:
//!
//! - [`Unit`](rail::Unit): the zero-information marker value
//! - [`Maybe<T>`](rail::Maybe): a value that is present or absent
//! - [`Outcome<V, E>`](rail::Outcome): success or failure, both carrying payloads
//! - [`Verdict<E>`](rail::Verdict): success without payload, or failure
//! - [`MaybeOutcome<V, E>`](rail::MaybeOutcome): ok, error, or neither
//! - [`LazyValidation`](validate::LazyValidation) / [`GreedyValidation`](validate::GreedyValidation):
//!   stop-at-first vs. collect-all validation
//!
//! Every container is an ordinary Rust enum (or struct) with public
//! variants, so native exhaustive `match` is always available; each also
//! carries a `fold` eliminator and the usual combinator family (`map`,
//! `flat_map`, conversions) for pipeline-style code.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor/Applicative/Monad traits over the containers
//! - `async`: `*_async` combinator variants (plain `async fn`, no runtime)
//! - `serde`: `Serialize`/`Deserialize` for every container
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::rail::{Maybe, Outcome};
//!
//! let outcome: Outcome<i32, String> = Maybe::Some(5)
//!     .filter(|n| *n > 0)
//!     .map(|n| n * 2)
//!     .success_or_else(|| "missing".to_string());
//!
//! assert_eq!(outcome, Outcome::Success(10));
//! assert_eq!(outcome.value_or(-1), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
///
/// let present: Maybe<i32> = Maybe::Some(1);
/// assert!(present.is_some());
/// ```
pub mod prelude {
    pub use crate::rail::{Maybe, MaybeOutcome, Outcome, Unit, Verdict};

    pub use crate::validate::{GreedyValidation, LazyValidation};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};
}

pub mod convert;
pub mod rail;
pub mod validate;

#[cfg(feature = "typeclass")]
pub mod typeclass;

//! Type classes over the crate's containers.
//!
//! This module provides the classic functional-programming abstraction
//! ladder, emulated through Generic Associated Types:
//!
//! - [`TypeConstructor`]: the HKT foundation (`Maybe<_>`, `Outcome<_, E>`, ...)
//! - [`Functor`]: mapping over the primary payload
//! - [`Applicative`]: lifting values and combining independent computations
//! - [`Monad`]: sequencing dependent computations
//!
//! The instances cover [`Maybe`](crate::rail::Maybe),
//! [`Outcome`](crate::rail::Outcome) (success rail), and
//! [`MaybeOutcome`](crate::rail::MaybeOutcome) (ok rail). The trait methods
//! agree with the inherent combinators of the same names; the traits exist
//! so generic code can abstract over which container it runs in.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::Maybe;
//! use railway::typeclass::Functor;
//!
//! fn double_inside<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_inside(Maybe::Some(21)), Maybe::Some(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

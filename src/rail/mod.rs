//! The leaf sum-type containers.
//!
//! This module provides the five value containers the rest of the crate is
//! built from:
//!
//! - [`Unit`]: the zero-information marker value
//! - [`Maybe`]: a value that is present or absent
//! - [`Outcome`]: success or failure, both rails carrying a payload
//! - [`Verdict`]: success without payload, or failure
//! - [`MaybeOutcome`]: ok, error, or neither
//!
//! All of them are immutable value types: once constructed, the payload and
//! the discriminant never change, and every "modifying" combinator returns
//! a new instance. They are free of interior mutability, so sharing them
//! across threads needs no synchronization.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::{Maybe, Outcome};
//!
//! let maybe = Maybe::Some(21);
//! let outcome: Outcome<i32, &str> = maybe.map(|n| n * 2).success_or("absent");
//! assert_eq!(outcome, Outcome::Success(42));
//! ```

mod maybe;
mod maybe_outcome;
mod outcome;
mod unit;
mod verdict;

pub use maybe::Maybe;
pub use maybe_outcome::MaybeOutcome;
pub use outcome::Outcome;
pub use unit::Unit;
pub use verdict::Verdict;

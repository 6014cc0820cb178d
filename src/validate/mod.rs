//! Validation accumulators.
//!
//! This module provides two state machines that thread a value through an
//! ordered sequence of checks, differing only in failure policy:
//!
//! - [`LazyValidation`]: stop at the first failure. Once invalid, the
//!   machine latches and later checks are never run.
//! - [`GreedyValidation`]: collect every failure. Every check always runs
//!   and its errors append, in order, to the accumulated sequence.
//!
//! Both are built atop the leaf containers: checks may report through
//! [`Maybe`](crate::rail::Maybe), [`Verdict`](crate::rail::Verdict), or a
//! plain error iterator, and both machines convert into an
//! [`Outcome`](crate::rail::Outcome) when the pipeline is done.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::Maybe;
//! use railway::validate::GreedyValidation;
//!
//! let validation = GreedyValidation::<&str, String>::new("")
//!     .validate(|name| {
//!         Maybe::some_if("name must not be empty".to_string(), name.is_empty())
//!     })
//!     .validate(|name| {
//!         Maybe::some_if("name must be lowercase".to_string(), name.chars().any(char::is_uppercase))
//!     });
//!
//! assert!(!validation.is_valid());
//! assert_eq!(validation.errors().len(), 1);
//! ```

mod greedy;
mod lazy;

pub use greedy::GreedyValidation;
pub use lazy::LazyValidation;

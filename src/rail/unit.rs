//! Unit type - the value that carries no information.
//!
//! This module provides [`Unit`], a type with exactly one value. It stands
//! in for "no payload" inside the generic containers, so that a result
//! without a success payload is still an ordinary two-parameter
//! [`Outcome`](crate::rail::Outcome) rather than a special case.
//!
//! # Examples
//!
//! ```rust
//! use railway::rail::{Outcome, Unit};
//!
//! // Erasing the success payload leaves the discriminant intact.
//! let outcome: Outcome<i32, String> = Outcome::Success(42);
//! assert_eq!(outcome.erase_value(), Outcome::Success(Unit));
//! ```

use std::fmt;

/// A type with exactly one value.
///
/// `Unit` is the canonical "no information" payload. Any two `Unit` values
/// are equal, it hashes to a constant, and it occupies no space.
///
/// It differs from `()` only in being a nameable local type, which lets the
/// containers in this crate implement traits over it without coherence
/// issues; [`From`] conversions bridge the two.
///
/// # Examples
///
/// ```rust
/// use railway::rail::Unit;
///
/// assert_eq!(Unit, Unit);
/// assert_eq!(Unit::default(), Unit);
/// assert_eq!(Unit.to_string(), "()");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl fmt::Debug for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Unit")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Unit: Send, Sync, Copy, Unpin);

    #[rstest]
    fn unit_is_always_equal_to_itself() {
        assert_eq!(Unit, Unit);
        assert_eq!(Unit.clone(), Unit);
    }

    #[rstest]
    fn unit_bridges_to_the_empty_tuple() {
        let unit: Unit = ().into();
        let tuple: () = unit.into();
        assert_eq!(tuple, ());
    }

    #[rstest]
    fn unit_renders_as_empty_tuple() {
        assert_eq!(Unit.to_string(), "()");
        assert_eq!(format!("{Unit:?}"), "Unit");
    }
}

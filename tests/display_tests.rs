//! Integration tests for the Display and Debug renderings.
//!
//! Display shows the state name and the payload's own Display form; Debug
//! mirrors the structural shape, including nested payloads.

use railway::rail::{Maybe, MaybeOutcome, Outcome, Unit, Verdict};
use railway::validate::{GreedyValidation, LazyValidation};
use rstest::rstest;

// =============================================================================
// Display
// =============================================================================

#[rstest]
fn unit_displays_as_the_empty_tuple() {
    assert_eq!(Unit.to_string(), "()");
    assert_eq!(format!("{Unit:?}"), "Unit");
}

#[rstest]
#[case(Maybe::Some(5), "Some(5)")]
#[case(Maybe::None, "None")]
fn maybe_displays_its_state(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
#[case(Outcome::Success(5), "Success(5)")]
#[case(Outcome::Failure("bad"), "Failure(bad)")]
fn outcome_displays_its_rail(#[case] value: Outcome<i32, &str>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
#[case(Verdict::Success, "Success")]
#[case(Verdict::Failure("bad"), "Failure(bad)")]
fn verdict_displays_its_state(#[case] value: Verdict<&str>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
#[case(MaybeOutcome::Ok(5), "Ok(5)")]
#[case(MaybeOutcome::Error("bad"), "Error(bad)")]
#[case(MaybeOutcome::Neither, "Neither")]
fn maybe_outcome_displays_its_state(
    #[case] value: MaybeOutcome<i32, &str>,
    #[case] expected: &str,
) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
#[case(LazyValidation::Valid(5), "Valid(5)")]
#[case(LazyValidation::Invalid("bad"), "Invalid(bad)")]
fn lazy_validation_displays_its_state(
    #[case] value: LazyValidation<i32, &str>,
    #[case] expected: &str,
) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
fn greedy_validation_displays_the_value_and_every_error() {
    let valid = GreedyValidation::<i32, &str>::new(5);
    assert_eq!(valid.to_string(), "Valid(5)");

    let invalid = GreedyValidation::<i32, &str>::new(5).add_errors(vec!["first", "second"]);
    assert_eq!(invalid.to_string(), "Invalid(5, [first, second])");
}

#[rstest]
fn display_uses_the_payload_display_not_debug() {
    // A String payload renders without quotes under Display.
    let outcome: Outcome<i32, String> = Outcome::Failure("no quotes".to_string());
    assert_eq!(outcome.to_string(), "Failure(no quotes)");
}

// =============================================================================
// Debug
// =============================================================================

#[rstest]
fn debug_renders_nested_payloads_structurally() {
    let nested: Maybe<Outcome<i32, String>> = Maybe::Some(Outcome::Failure("bad".to_string()));
    assert_eq!(format!("{nested:?}"), "Some(Failure(\"bad\"))");

    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    assert_eq!(format!("{neither:?}"), "Neither");
}

#[rstest]
fn debug_renders_the_greedy_accumulator_as_a_struct() {
    let validation = GreedyValidation::<i32, &str>::new(5).add_error("bad");
    assert_eq!(
        format!("{validation:?}"),
        "GreedyValidation { value: 5, errors: [\"bad\"] }"
    );
}

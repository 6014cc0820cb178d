//! Unit tests for the MaybeOutcome<V, E> tri-state container.
//!
//! MaybeOutcome<V, E> is exactly one of:
//! - `Ok(value)`: a success carrying a value
//! - `Error(error)`: a failure carrying an error
//! - `Neither`: no value and no error
//!
//! These tests cover the three-way partition, the lifting constructors that
//! collapse `None` to `Neither`, per-state combinators, and the narrowing
//! conversions back to Maybe and Outcome.

use railway::rail::{Maybe, MaybeOutcome, Outcome};
use rstest::rstest;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
#[case(MaybeOutcome::Ok(1), true, false, false)]
#[case(MaybeOutcome::Error("bad"), false, true, false)]
#[case(MaybeOutcome::Neither, false, false, true)]
fn exactly_one_state_holds(
    #[case] state: MaybeOutcome<i32, &str>,
    #[case] ok: bool,
    #[case] error: bool,
    #[case] neither: bool,
) {
    assert_eq!(state.is_ok(), ok);
    assert_eq!(state.is_error(), error);
    assert_eq!(state.is_neither(), neither);
}

#[rstest]
fn conditional_constructors_fall_back_to_neither() {
    assert_eq!(
        MaybeOutcome::<i32, &str>::ok_if(5, true),
        MaybeOutcome::Ok(5)
    );
    assert_eq!(
        MaybeOutcome::<i32, &str>::ok_if(5, false),
        MaybeOutcome::Neither
    );
    assert_eq!(
        MaybeOutcome::<i32, &str>::error_if("bad", true),
        MaybeOutcome::Error("bad")
    );
    assert_eq!(
        MaybeOutcome::<i32, &str>::error_when("", |e| !e.is_empty()),
        MaybeOutcome::Neither
    );
    assert_eq!(
        MaybeOutcome::<i32, &str>::ok_when(5, |n| *n > 0),
        MaybeOutcome::Ok(5)
    );
}

// =============================================================================
// Lifting Constructors
// =============================================================================

#[rstest]
fn lifting_a_maybe_value_collapses_none_to_neither() {
    let lifted: MaybeOutcome<i32, String> = MaybeOutcome::from_maybe_value(Maybe::Some(5));
    assert_eq!(lifted, MaybeOutcome::Ok(5));

    let collapsed: MaybeOutcome<i32, String> = MaybeOutcome::from_maybe_value(Maybe::None);
    assert_eq!(collapsed, MaybeOutcome::Neither);
}

#[rstest]
fn lifting_a_maybe_error_collapses_none_to_neither() {
    let lifted: MaybeOutcome<i32, &str> = MaybeOutcome::from_maybe_error(Maybe::Some("bad"));
    assert_eq!(lifted, MaybeOutcome::Error("bad"));

    let collapsed: MaybeOutcome<i32, &str> = MaybeOutcome::from_maybe_error(Maybe::None);
    assert_eq!(collapsed, MaybeOutcome::Neither);
}

#[rstest]
fn lifting_an_outcome_never_produces_neither() {
    assert_eq!(
        MaybeOutcome::from_outcome(Outcome::<i32, String>::Success(5)),
        MaybeOutcome::Ok(5)
    );
    assert_eq!(
        MaybeOutcome::from_outcome(Outcome::<i32, String>::Failure("bad".to_string())),
        MaybeOutcome::Error("bad".to_string())
    );
}

#[rstest]
fn nested_lifts_collapse_exactly_the_absent_layer() {
    let absent: Maybe<Outcome<i32, String>> = Maybe::None;
    assert_eq!(
        MaybeOutcome::from_maybe_outcome(absent),
        MaybeOutcome::Neither
    );
    assert_eq!(
        MaybeOutcome::from_maybe_outcome(Maybe::Some(Outcome::<i32, String>::Success(5))),
        MaybeOutcome::Ok(5)
    );

    let absent_success: Outcome<Maybe<i32>, String> = Outcome::Success(Maybe::None);
    assert_eq!(
        MaybeOutcome::from_outcome_maybe(absent_success),
        MaybeOutcome::Neither
    );

    let absent_failure: Outcome<i32, Maybe<String>> = Outcome::Failure(Maybe::None);
    assert_eq!(
        MaybeOutcome::from_outcome_maybe_error(absent_failure),
        MaybeOutcome::Neither
    );
    let present_failure: Outcome<i32, Maybe<String>> =
        Outcome::Failure(Maybe::Some("bad".to_string()));
    assert_eq!(
        MaybeOutcome::from_outcome_maybe_error(present_failure),
        MaybeOutcome::Error("bad".to_string())
    );
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
fn fold_invokes_exactly_the_active_branch() {
    let ok: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    assert_eq!(ok.fold(|n| n * 2, |_| unreachable!(), || unreachable!()), 10);

    let error: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    assert_eq!(
        error.fold(|_| unreachable!(), |e| e.len(), || unreachable!()),
        3
    );

    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    assert_eq!(neither.fold(|_| unreachable!(), |_| unreachable!(), || 0), 0);
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_touches_only_the_ok_state() {
    let ok: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    assert_eq!(ok.map(|n| n * 2), MaybeOutcome::Ok(10));

    let error: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    let mapped: MaybeOutcome<i32, String> = error.map(|_| unreachable!());
    assert_eq!(mapped, MaybeOutcome::Error("bad".to_string()));

    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    let mapped: MaybeOutcome<i32, String> = neither.map(|_| unreachable!());
    assert_eq!(mapped, MaybeOutcome::Neither);
}

#[rstest]
fn flat_map_short_circuits_error_and_neither() {
    let ok: MaybeOutcome<i32, String> = MaybeOutcome::Ok(8);
    assert_eq!(
        ok.flat_map(|n| MaybeOutcome::ok_if(n / 2, n % 2 == 0)),
        MaybeOutcome::Ok(4)
    );

    let error: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    let chained: MaybeOutcome<i32, String> = error.flat_map(|_| unreachable!());
    assert_eq!(chained, MaybeOutcome::Error("bad".to_string()));

    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    let chained: MaybeOutcome<i32, String> = neither.flat_map(|_| unreachable!());
    assert_eq!(chained, MaybeOutcome::Neither);
}

#[rstest]
fn map_error_touches_only_the_error_state() {
    let error: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    assert_eq!(error.map_error(|e| e.len()), MaybeOutcome::Error(3));

    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    let mapped: MaybeOutcome<i32, usize> = neither.map_error(|_| unreachable!());
    assert_eq!(mapped, MaybeOutcome::Neither);
}

#[rstest]
fn flat_map_error_recovers_only_errors() {
    let error: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    assert_eq!(
        error.flat_map_error(|_| MaybeOutcome::<i32, String>::Ok(0)),
        MaybeOutcome::Ok(0)
    );

    let ok: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    let untouched: MaybeOutcome<i32, String> = ok.flat_map_error(|_| unreachable!());
    assert_eq!(untouched, MaybeOutcome::Ok(5));
}

#[rstest]
fn flat_map_neither_fills_only_the_empty_state() {
    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    assert_eq!(
        neither.flat_map_neither(|| MaybeOutcome::Ok(0)),
        MaybeOutcome::Ok(0)
    );

    let error: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    assert_eq!(
        error.flat_map_neither(|| unreachable!()),
        MaybeOutcome::Error("bad".to_string())
    );
}

// =============================================================================
// Polarity
// =============================================================================

#[rstest]
fn invert_swaps_ok_and_error_and_fixes_neither() {
    let ok: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    assert_eq!(ok.invert(), MaybeOutcome::Error(5));

    let error: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    assert_eq!(error.invert(), MaybeOutcome::Ok("bad".to_string()));

    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    assert_eq!(neither.invert(), MaybeOutcome::Neither);
}

#[rstest]
fn invert_is_an_involution() {
    let states: [MaybeOutcome<i32, i32>; 3] = [
        MaybeOutcome::Ok(1),
        MaybeOutcome::Error(2),
        MaybeOutcome::Neither,
    ];
    for state in states {
        assert_eq!(state.invert().invert(), state);
    }
}

// =============================================================================
// Extraction and Narrowing
// =============================================================================

#[rstest]
fn value_extraction_is_total() {
    assert_eq!(MaybeOutcome::<i32, &str>::Ok(5).value_or(-1), 5);
    assert_eq!(MaybeOutcome::<i32, &str>::Error("bad").value_or(-1), -1);
    assert_eq!(MaybeOutcome::<i32, &str>::Neither.value_or(-1), -1);
    assert_eq!(
        MaybeOutcome::<i32, &str>::Ok(5).value_or_else(|| unreachable!()),
        5
    );
    assert_eq!(MaybeOutcome::<i32, &str>::Neither.value_or_else(|| 0), 0);
}

#[rstest]
fn reference_accessors_report_only_their_own_state() {
    let ok: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    assert_eq!(ok.ok_ref(), Some(&5));
    assert_eq!(ok.error_ref(), None);

    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    assert_eq!(neither.ok_ref(), None);
    assert_eq!(neither.error_ref(), None);
}

#[rstest]
fn narrowing_to_maybe_merges_error_and_neither() {
    assert_eq!(MaybeOutcome::<i32, &str>::Ok(5).into_maybe(), Maybe::Some(5));
    assert_eq!(
        MaybeOutcome::<i32, &str>::Error("bad").into_maybe(),
        Maybe::None
    );
    assert_eq!(MaybeOutcome::<i32, &str>::Neither.into_maybe(), Maybe::None);

    assert_eq!(
        MaybeOutcome::<i32, &str>::Error("bad").error_maybe(),
        Maybe::Some("bad")
    );
    assert_eq!(MaybeOutcome::<i32, &str>::Neither.error_maybe(), Maybe::None);
}

#[rstest]
fn narrowing_to_outcome_names_the_neither_error() {
    assert_eq!(
        MaybeOutcome::<i32, &str>::Ok(5).into_outcome("empty"),
        Outcome::Success(5)
    );
    assert_eq!(
        MaybeOutcome::<i32, &str>::Error("bad").into_outcome("empty"),
        Outcome::Failure("bad")
    );
    assert_eq!(
        MaybeOutcome::<i32, &str>::Neither.into_outcome("empty"),
        Outcome::Failure("empty")
    );
}

#[rstest]
fn lift_then_narrow_round_trips_both_payload_states() {
    let success = Outcome::<i32, String>::Success(5);
    assert_eq!(
        MaybeOutcome::from_outcome(success.clone()).into_outcome("unused".to_string()),
        success
    );

    let failure = Outcome::<i32, String>::Failure("bad".to_string());
    assert_eq!(
        MaybeOutcome::from_outcome(failure.clone()).into_outcome("unused".to_string()),
        failure
    );
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn equality_requires_the_same_state() {
    assert_eq!(MaybeOutcome::<i32, i32>::Ok(1), MaybeOutcome::Ok(1));
    assert_ne!(MaybeOutcome::<i32, i32>::Ok(1), MaybeOutcome::Error(1));
    assert_ne!(MaybeOutcome::<i32, i32>::Ok(1), MaybeOutcome::Neither);
    assert_eq!(MaybeOutcome::<i32, i32>::Neither, MaybeOutcome::Neither);
}

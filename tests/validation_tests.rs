//! Integration tests for the two validation accumulators.
//!
//! LazyValidation stops at the first failure; GreedyValidation runs every
//! check and collects every error in order. These tests pin down the
//! behaviors that distinguish the two: invocation counts, error ordering,
//! and what each carries after failures.

use std::cell::Cell;

use railway::rail::{Maybe, Outcome, Verdict};
use railway::validate::{GreedyValidation, LazyValidation};
use rstest::rstest;

// =============================================================================
// Lazy: First Failure Wins
// =============================================================================

#[rstest]
fn lazy_carries_only_the_first_error() {
    let validation = LazyValidation::<i32, &str>::Valid(-3)
        .validate(|n| Maybe::some_if("must be positive", *n <= 0))
        .validate(|n| Maybe::some_if("must be even", *n % 2 != 0))
        .validate(|_| Maybe::Some("never reached"));

    assert_eq!(validation, LazyValidation::Invalid("must be positive"));
}

#[rstest]
fn lazy_runs_exactly_one_check_after_a_failure() {
    let invocations = Cell::new(0);
    let count = |error| {
        invocations.set(invocations.get() + 1);
        Maybe::Some(error)
    };

    let validation = LazyValidation::<i32, &str>::Valid(0)
        .validate(|_| count("first"))
        .validate(|_| count("second"))
        .validate(|_| count("third"));

    assert_eq!(invocations.get(), 1);
    assert_eq!(validation.invalid_ref(), Some(&"first"));
}

#[rstest]
fn lazy_threads_the_value_through_passing_checks() {
    let validation = LazyValidation::<i32, &str>::Valid(6)
        .validate(|n| Maybe::some_if("must be positive", *n <= 0))
        .validate(|n| Maybe::some_if("must be even", *n % 2 != 0));

    assert_eq!(validation.valid_ref(), Some(&6));
}

#[rstest]
fn lazy_validate_all_latches_on_the_first_reported_error() {
    let validation = LazyValidation::<i32, &str>::Valid(-3).validate_all(|n| {
        let mut errors = Vec::new();
        if *n <= 0 {
            errors.push("must be positive");
        }
        if *n % 2 == 0 {
            errors.push("must be odd");
        }
        errors
    });

    assert_eq!(validation, LazyValidation::Invalid("must be positive"));
}

#[rstest]
fn lazy_validate_verdict_latches_on_failure() {
    let validation = LazyValidation::<i32, &str>::Valid(3).validate_verdict(|n| {
        if *n % 2 == 0 {
            Verdict::Success
        } else {
            Verdict::Failure("must be even")
        }
    });

    assert_eq!(validation, LazyValidation::Invalid("must be even"));
}

#[rstest]
fn lazy_validate_with_adopts_the_nested_state() {
    fn halved(n: i32) -> LazyValidation<i32, &'static str> {
        if n % 2 == 0 {
            LazyValidation::Valid(n / 2)
        } else {
            LazyValidation::Invalid("must be even")
        }
    }

    assert_eq!(
        LazyValidation::Valid(8).validate_with(halved),
        LazyValidation::Valid(4)
    );
    assert_eq!(
        LazyValidation::Valid(7).validate_with(halved),
        LazyValidation::Invalid("must be even")
    );
    assert_eq!(
        LazyValidation::Invalid("earlier").validate_with(halved),
        LazyValidation::Invalid("earlier")
    );
}

#[rstest]
fn lazy_into_outcome_keeps_the_rail() {
    assert_eq!(
        LazyValidation::<i32, &str>::Valid(5).into_outcome(),
        Outcome::Success(5)
    );
    assert_eq!(
        LazyValidation::<i32, &str>::Invalid("bad").into_outcome(),
        Outcome::Failure("bad")
    );
}

// =============================================================================
// Greedy: Every Check Runs, Every Error Collects
// =============================================================================

#[rstest]
fn greedy_collects_errors_in_check_order() {
    let validation = GreedyValidation::<i32, &str>::new(-3)
        .validate(|n| Maybe::some_if("must be positive", *n <= 0))
        .validate(|n| Maybe::some_if("must be even", *n % 2 != 0))
        .validate(|n| Maybe::some_if("must be large", *n < 100));

    assert_eq!(
        validation.errors(),
        &["must be positive", "must be even", "must be large"]
    );
}

#[rstest]
fn greedy_runs_every_check_despite_failures() {
    let invocations = Cell::new(0);
    let count = |error| {
        invocations.set(invocations.get() + 1);
        Maybe::Some(error)
    };

    let validation = GreedyValidation::<i32, &str>::new(0)
        .validate(|_| count("first"))
        .validate(|_| count("second"))
        .validate(|_| count("third"));

    assert_eq!(invocations.get(), 3);
    assert_eq!(validation.errors(), &["first", "second", "third"]);
}

#[rstest]
fn greedy_passing_checks_append_nothing() {
    let validation = GreedyValidation::<i32, &str>::new(6)
        .validate(|n| Maybe::some_if("must be positive", *n <= 0))
        .validate_all(|_| Vec::new())
        .validate_verdict(|_| Verdict::Success);

    assert!(validation.is_valid());
    assert!(validation.errors().is_empty());
}

#[rstest]
fn greedy_retains_the_value_after_failures() {
    let validation = GreedyValidation::<i32, &str>::new(-3)
        .validate(|n| Maybe::some_if("must be positive", *n <= 0));

    assert!(!validation.is_valid());
    assert_eq!(validation.value_ref(), &-3);
}

#[rstest]
fn greedy_mixed_check_kinds_preserve_interleaved_order() {
    let validation = GreedyValidation::<i32, &str>::new(0)
        .validate(|_| Maybe::Some("one"))
        .validate_all(|_| vec!["two", "three"])
        .validate_verdict(|_| Verdict::Failure("four"))
        .add_error("five");

    assert_eq!(validation.errors(), &["one", "two", "three", "four", "five"]);
}

#[rstest]
fn greedy_validate_with_appends_the_nested_errors_in_order() {
    fn sign_checks(n: &i32) -> GreedyValidation<i32, &'static str> {
        GreedyValidation::new(*n)
            .validate(|n| Maybe::some_if("must be positive", *n <= 0))
            .validate(|n| Maybe::some_if("must be nonzero", *n == 0))
    }

    let validation = GreedyValidation::<i32, &str>::new(0)
        .add_error("outer")
        .validate_with(sign_checks);

    assert_eq!(
        validation.errors(),
        &["outer", "must be positive", "must be nonzero"]
    );
}

#[rstest]
fn greedy_fold_hands_the_invalid_branch_value_and_errors() {
    let valid_ran = Cell::new(false);
    let report = GreedyValidation::<i32, &str>::new(-3)
        .add_errors(vec!["first", "second"])
        .fold(
            |_| {
                valid_ran.set(true);
                String::new()
            },
            |value, errors| format!("{value} failed {} checks", errors.len()),
        );

    assert!(!valid_ran.get());
    assert_eq!(report, "-3 failed 2 checks");
}

#[rstest]
fn greedy_into_outcome_fails_with_the_full_error_sequence() {
    assert_eq!(
        GreedyValidation::<i32, &str>::new(5).into_outcome(),
        Outcome::Success(5)
    );
    assert_eq!(
        GreedyValidation::<i32, &str>::new(5)
            .add_errors(vec!["first", "second"])
            .into_outcome(),
        Outcome::Failure(vec!["first", "second"])
    );
}

#[rstest]
fn greedy_map_transforms_the_value_and_keeps_the_errors() {
    let validation = GreedyValidation::<i32, &str>::new(5)
        .add_error("bad")
        .map(|n| n.to_string());

    assert_eq!(validation.value_ref(), &"5".to_string());
    assert_eq!(validation.errors(), &["bad"]);
}

// =============================================================================
// Lazy vs. Greedy on the Same Checks
// =============================================================================

#[rstest]
fn the_two_accumulators_diverge_on_a_doubly_failing_input() {
    let positive = |n: &i32| Maybe::some_if("must be positive", *n <= 0);
    let even = |n: &i32| Maybe::some_if("must be even", *n % 2 != 0);

    let lazy = LazyValidation::<i32, &str>::Valid(-3)
        .validate(positive)
        .validate(even);
    let greedy = GreedyValidation::<i32, &str>::new(-3)
        .validate(positive)
        .validate(even);

    assert_eq!(lazy.into_outcome(), Outcome::Failure("must be positive"));
    assert_eq!(
        greedy.into_outcome(),
        Outcome::Failure(vec!["must be positive", "must be even"])
    );
}

//! Integration tests for the asynchronous combinator variants.
//!
//! The async variants mirror their synchronous counterparts exactly; on an
//! inert state the continuation is never invoked, so its future is never
//! even constructed.

#![cfg(feature = "async")]

use std::cell::Cell;

use railway::rail::{Maybe, MaybeOutcome, Outcome, Verdict};

// =============================================================================
// Maybe
// =============================================================================

#[tokio::test]
async fn maybe_map_async_transforms_a_present_value() {
    let doubled = Maybe::Some(5).map_async(|n| async move { n * 2 }).await;
    assert_eq!(doubled, Maybe::Some(10));
}

#[tokio::test]
async fn maybe_map_async_never_constructs_the_future_when_absent() {
    let constructed = Cell::new(false);
    let absent: Maybe<i32> = Maybe::None;
    let result = absent
        .map_async(|n| {
            constructed.set(true);
            async move { n * 2 }
        })
        .await;

    assert_eq!(result, Maybe::None);
    assert!(!constructed.get());
}

#[tokio::test]
async fn maybe_flat_map_async_chains_and_short_circuits() {
    let chained = Maybe::Some(8)
        .flat_map_async(|n| async move { Maybe::some_if(n / 2, n % 2 == 0) })
        .await;
    assert_eq!(chained, Maybe::Some(4));

    let absent: Maybe<i32> = Maybe::None;
    let result: Maybe<i32> = absent
        .flat_map_async(|_| async move { unreachable!() })
        .await;
    assert_eq!(result, Maybe::None);
}

#[tokio::test]
async fn maybe_fold_async_awaits_exactly_the_active_branch() {
    let rendered = Maybe::Some(5)
        .fold_async(
            |n| async move { format!("value {n}") },
            || async { "absent".to_string() },
        )
        .await;
    assert_eq!(rendered, "value 5");

    let absent: Maybe<i32> = Maybe::None;
    let rendered = absent
        .fold_async(
            |n| async move { format!("value {n}") },
            || async { "absent".to_string() },
        )
        .await;
    assert_eq!(rendered, "absent");
}

// =============================================================================
// Outcome
// =============================================================================

#[tokio::test]
async fn outcome_map_async_touches_only_the_success_rail() {
    let success: Outcome<i32, String> = Outcome::Success(5);
    assert_eq!(
        success.map_async(|n| async move { n * 2 }).await,
        Outcome::Success(10)
    );

    let failure: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    let mapped: Outcome<i32, String> = failure.map_async(|n| async move { n * 2 }).await;
    assert_eq!(mapped, Outcome::Failure("bad".to_string()));
}

#[tokio::test]
async fn outcome_map_failure_async_touches_only_the_failure_rail() {
    let failure: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    assert_eq!(
        failure.map_failure_async(|e| async move { e.len() }).await,
        Outcome::Failure(3)
    );
}

#[tokio::test]
async fn outcome_flat_map_async_short_circuits_failures() {
    let constructed = Cell::new(false);
    let failure: Outcome<i32, String> = Outcome::Failure("early".to_string());
    let chained: Outcome<i32, String> = failure
        .flat_map_async(|n| {
            constructed.set(true);
            async move { Outcome::Success(n) }
        })
        .await;

    assert_eq!(chained, Outcome::Failure("early".to_string()));
    assert!(!constructed.get());
}

#[tokio::test]
async fn outcome_flat_map_failure_async_recovers_only_failures() {
    let failure: Outcome<i32, String> = Outcome::Failure("bad".to_string());
    let recovered: Outcome<i32, String> = failure
        .flat_map_failure_async(|_| async { Outcome::Success(0) })
        .await;
    assert_eq!(recovered, Outcome::Success(0));

    let success: Outcome<i32, String> = Outcome::Success(5);
    let untouched: Outcome<i32, String> = success
        .flat_map_failure_async(|_| async { Outcome::Success(0) })
        .await;
    assert_eq!(untouched, Outcome::Success(5));
}

#[tokio::test]
async fn outcome_fold_async_awaits_exactly_the_active_rail() {
    let success: Outcome<i32, String> = Outcome::Success(5);
    let rendered = success
        .fold_async(
            |n| async move { format!("ok {n}") },
            |e| async move { format!("err {e}") },
        )
        .await;
    assert_eq!(rendered, "ok 5");
}

// =============================================================================
// Verdict and MaybeOutcome
// =============================================================================

#[tokio::test]
async fn verdict_flat_map_async_sequences_after_success() {
    let chained: Verdict<String> = Verdict::Success
        .flat_map_async(|| async { Verdict::Failure("late".to_string()) })
        .await;
    assert_eq!(chained, Verdict::Failure("late".to_string()));

    let constructed = Cell::new(false);
    let failure: Verdict<String> = Verdict::Failure("early".to_string());
    let stopped = failure
        .flat_map_async(|| {
            constructed.set(true);
            async { Verdict::Success }
        })
        .await;
    assert_eq!(stopped, Verdict::Failure("early".to_string()));
    assert!(!constructed.get());
}

#[tokio::test]
async fn verdict_map_failure_async_touches_only_failures() {
    let failure: Verdict<String> = Verdict::Failure("bad".to_string());
    assert_eq!(
        failure.map_failure_async(|e| async move { e.len() }).await,
        Verdict::Failure(3)
    );

    let success: Verdict<String> = Verdict::Success;
    let mapped: Verdict<usize> = success.map_failure_async(|e| async move { e.len() }).await;
    assert_eq!(mapped, Verdict::Success);
}

#[tokio::test]
async fn maybe_outcome_async_combinators_respect_all_three_states() {
    let ok: MaybeOutcome<i32, String> = MaybeOutcome::Ok(5);
    assert_eq!(
        ok.map_async(|n| async move { n * 2 }).await,
        MaybeOutcome::Ok(10)
    );

    let neither: MaybeOutcome<i32, String> = MaybeOutcome::Neither;
    let chained: MaybeOutcome<i32, String> = neither
        .flat_map_async(|n| async move { MaybeOutcome::Ok(n) })
        .await;
    assert_eq!(chained, MaybeOutcome::Neither);

    let error: MaybeOutcome<i32, String> = MaybeOutcome::Error("bad".to_string());
    let chained: MaybeOutcome<i32, String> = error
        .flat_map_async(|n| async move { MaybeOutcome::Ok(n) })
        .await;
    assert_eq!(chained, MaybeOutcome::Error("bad".to_string()));
}

// =============================================================================
// Mixed Chains
// =============================================================================

#[tokio::test]
async fn async_and_sync_combinators_compose() {
    let result = Outcome::<i32, String>::Success(5)
        .map(|n| n + 1)
        .map_async(|n| async move { n * 2 })
        .await
        .flat_map(|n| {
            if n > 10 {
                Outcome::Success(n)
            } else {
                Outcome::Failure("too small".to_string())
            }
        });

    assert_eq!(result, Outcome::Success(12));
}

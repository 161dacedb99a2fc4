//! Stack safety and correctness of the derived `tail_rec_m`.
//!
//! Tests cover:
//! - Deep loops (100000 steps) on every built-in witness
//! - Agreement with naive recursion for small counts
//! - Positions that stop after different numbers of steps

#![cfg(feature = "representable")]

use proptest::prelude::*;
use rstest::rstest;
use tabula::control::Either;
use tabula::derivation::derive_monad;
use tabula::representable::Representable;
use tabula::typeclass::{Function, FunctionKind, Identity, IdentityKind, Monad, PairKind};

const DEEP: u64 = 100_000;

fn count_down(n: u64) -> Either<u64, &'static str> {
    if n == 0 { Either::Right("done") } else { Either::Left(n - 1) }
}

fn naive_sum(n: u64) -> u64 {
    if n == 0 { 0 } else { n + naive_sum(n - 1) }
}

// =============================================================================
// Deep Loops
// =============================================================================

#[rstest]
fn identity_countdown_terminates() {
    let monad = derive_monad(IdentityKind);
    let result = monad.tail_rec_m(DEEP, |n| Identity(count_down(n)));
    assert_eq!(result, Identity("done"));
}

#[rstest]
fn pair_countdown_terminates_at_both_positions() {
    let monad = derive_monad(PairKind);
    let result = monad.tail_rec_m(DEEP, |n| (count_down(n), count_down(n)));
    assert_eq!(result, ("done", "done"));
}

#[rstest]
fn function_countdown_terminates_at_every_position() {
    let monad = derive_monad(FunctionKind::<u8>::new());
    let result = monad.tail_rec_m(DEEP, |n| Function::new(move |_: u8| count_down(n)));
    assert_eq!(result.apply(0), "done");
    assert_eq!(result.apply(u8::MAX), "done");
}

#[rstest]
fn composed_countdown_terminates() {
    let monad = derive_monad(PairKind.compose(PairKind));
    let result = monad.tail_rec_m(DEEP, |n| {
        ((count_down(n), count_down(n)), (count_down(n), count_down(n)))
    });
    assert_eq!(result, (("done", "done"), ("done", "done")));
}

// =============================================================================
// Per-position Behaviour
// =============================================================================

#[rstest]
fn positions_stop_independently() {
    // The first position halves, the second decrements; both stop at zero.
    let monad = derive_monad(PairKind);
    let result = monad.tail_rec_m((DEEP, 0_u32), |(n, steps)| {
        let halve = if n == 0 { Either::Right(steps) } else { Either::Left((n / 2, steps + 1)) };
        let decrement = if n == 0 { Either::Right(steps) } else { Either::Left((n - 1, steps + 1)) };
        (halve, decrement)
    });
    assert_eq!(result, (17, 100_000));
}

#[rstest]
fn function_position_drives_the_loop() {
    let monad = derive_monad(FunctionKind::<u64>::new());
    let result = monad.tail_rec_m(0_u64, |n| {
        Function::new(move |limit: u64| if n >= limit { Either::Right(n) } else { Either::Left(n + 1) })
    });
    assert_eq!(result.apply(0), 0);
    assert_eq!(result.apply(DEEP), DEEP);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(4, 10)]
#[case(100, 5050)]
fn accumulating_loop_matches_closed_form(#[case] limit: u64, #[case] expected: u64) {
    let monad = derive_monad(IdentityKind);
    let result = monad.tail_rec_m((limit, 0_u64), |(remaining, total)| {
        Identity(if remaining == 0 {
            Either::Right(total)
        } else {
            Either::Left((remaining - 1, total + remaining))
        })
    });
    assert_eq!(result.0, expected);
}

proptest! {
    /// tail_rec_m agrees with naive recursion for small counts
    #[test]
    fn prop_tail_rec_m_agrees_with_recursion(limit in 0_u64..500) {
        let monad = derive_monad(PairKind);
        let result = monad.tail_rec_m((limit, 0_u64), |(remaining, total)| {
            let step = if remaining == 0 {
                Either::Right(total)
            } else {
                Either::Left((remaining - 1, total + remaining))
            };
            (step, step)
        });
        prop_assert_eq!(result, (naive_sum(limit), naive_sum(limit)));
    }

    /// A step that stops immediately is pure
    #[test]
    fn prop_immediate_stop_is_pure(value in any::<i32>()) {
        let monad = derive_monad(PairKind);
        let result = monad.tail_rec_m(value, |n| (Either::<i32, i32>::Right(n), Either::Right(n)));
        prop_assert_eq!(result, monad.pure(value));
    }
}

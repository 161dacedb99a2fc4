//! Property-based tests for the Representable laws.
//!
//! Every built-in witness, and witnesses built with `compose`, must satisfy:
//!
//! - **Index then tabulate**: `tabulate(index(fa)) == fa`
//! - **Tabulate then index**: `index(tabulate(g))(r) == g(r)`
//!
//! The first half runs the packaged rule set; the second half states the
//! same laws directly with `proptest!` for the witnesses whose structures
//! are plain data.

#![cfg(feature = "laws")]

use proptest::prelude::*;
use tabula::laws::{Equality, LawConfig, LawContext, assert_laws, representable_laws};
use tabula::representable::{ComposeKind, Representable};
use tabula::typeclass::{Function, FunctionKind, Identity, IdentityKind, PairKind};

fn config() -> LawConfig {
    LawConfig::default().with_cases(64)
}

fn pair_selectors() -> impl Strategy<Value = Function<bool, i32>> {
    any::<(i32, i32)>().prop_map(|(yes, no)| Function::new(move |b: bool| if b { yes } else { no }))
}

fn byte_tables() -> impl Strategy<Value = Function<u8, i32>> {
    any::<(i32, i32)>().prop_map(|(scale, offset)| {
        Function::new(move |n: u8| i32::from(n).wrapping_mul(scale).wrapping_add(offset))
    })
}

// =============================================================================
// Rule Set
// =============================================================================

#[test]
fn pair_kind_satisfies_representable_laws() {
    let context = LawContext::new()
        .with_arbitrary::<(i32, i32)>()
        .with_arbitrary::<i32>()
        .with_arbitrary::<bool>()
        .with_samples::<Function<bool, i32>, _>(pair_selectors());

    let laws = representable_laws::<PairKind, bool, _, i32>(PairKind, &context).unwrap();
    assert_laws(&laws, &config());
}

#[test]
fn identity_kind_satisfies_representable_laws() {
    let context = LawContext::new()
        .with_samples::<Identity<i32>, _>(any::<i32>().prop_map(Identity))
        .with_natural_equality::<Identity<i32>>()
        .with_arbitrary::<i32>()
        .with_arbitrary::<()>()
        .with_samples::<Function<(), i32>, _>(any::<i32>().prop_map(|n| Function::new(move |()| n)));

    let laws = representable_laws::<IdentityKind, (), _, i32>(IdentityKind, &context).unwrap();
    assert_laws(&laws, &config());
}

#[test]
fn function_kind_satisfies_representable_laws() {
    let every_byte: Vec<u8> = (0..=u8::MAX).collect();
    let context = LawContext::new()
        .with_samples::<Function<u8, i32>, _>(byte_tables())
        .with_equality(Equality::<i32>::natural().pointwise(every_byte))
        .with_arbitrary::<i32>()
        .with_arbitrary::<u8>();

    let witness = FunctionKind::<u8>::new();
    let laws = representable_laws::<FunctionKind<u8>, u8, _, i32>(witness, &context).unwrap();
    assert_laws(&laws, &config());
}

#[test]
fn composed_pair_kind_satisfies_representable_laws() {
    let corners = || {
        any::<(i32, i32, i32, i32)>().prop_map(|(a, b, c, d)| {
            Function::new(move |(row, column): (bool, bool)| match (row, column) {
                (true, true) => a,
                (true, false) => b,
                (false, true) => c,
                (false, false) => d,
            })
        })
    };
    let context = LawContext::new()
        .with_arbitrary::<((i32, i32), (i32, i32))>()
        .with_arbitrary::<i32>()
        .with_arbitrary::<(bool, bool)>()
        .with_samples::<Function<(bool, bool), i32>, _>(corners());

    let grid = PairKind.compose(PairKind);
    let laws = representable_laws::<ComposeKind<PairKind, PairKind>, (bool, bool), _, i32>(grid, &context)
        .unwrap();
    assert_laws(&laws, &config());
}

#[test]
fn function_composed_with_pair_satisfies_representable_laws() {
    let points: Vec<(u8, bool)> = [0_u8, 1, 127, 255]
        .into_iter()
        .flat_map(|n| [(n, true), (n, false)])
        .collect();
    let rows = || {
        any::<(i32, i32)>().prop_map(|(even, odd)| {
            Function::new(move |n: u8| (i32::from(n).wrapping_add(even), i32::from(n).wrapping_sub(odd)))
        })
    };
    let tables = || {
        any::<i32>().prop_map(|seed| {
            Function::new(move |(n, flag): (u8, bool)| {
                if flag { i32::from(n) ^ seed } else { seed.wrapping_sub(i32::from(n)) }
            })
        })
    };
    let witness = FunctionKind::<u8>::new().compose(PairKind);
    let context = LawContext::new()
        .with_samples::<Function<u8, (i32, i32)>, _>(rows())
        .with_equality(
            Equality::<i32>::natural()
                .through_index::<ComposeKind<FunctionKind<u8>, PairKind>, (u8, bool), _>(witness.clone(), points),
        )
        .with_samples::<Function<(u8, bool), i32>, _>(tables())
        .with_arbitrary::<i32>()
        .with_arbitrary::<(u8, bool)>();

    let laws =
        representable_laws::<ComposeKind<FunctionKind<u8>, PairKind>, (u8, bool), _, i32>(witness, &context)
            .unwrap();
    assert_laws(&laws, &config());
}

// =============================================================================
// Direct Properties
// =============================================================================

proptest! {
    /// Index then tabulate for pairs of strings
    #[test]
    fn prop_pair_index_then_tabulate(pair in any::<(String, String)>()) {
        let index = PairKind.index(pair.clone());
        prop_assert_eq!(PairKind.tabulate(move |b: bool| index.apply(b)), pair);
    }

    /// Tabulate then index for pairs
    #[test]
    fn prop_pair_tabulate_then_index(yes in any::<i64>(), no in any::<i64>(), position in any::<bool>()) {
        let table = PairKind.tabulate(move |b: bool| if b { yes } else { no });
        let expected = if position { yes } else { no };
        prop_assert_eq!(PairKind.index_at(table, position), expected);
    }

    /// Index then tabulate for a pair of pairs, three layers deep
    #[test]
    fn prop_nested_composition_round_trip(cube in any::<(((u8, u8), (u8, u8)), ((u8, u8), (u8, u8)))>()) {
        let witness = PairKind.compose(PairKind).compose(PairKind);
        let index = witness.index(cube.clone());
        prop_assert_eq!(witness.tabulate(move |position: ((bool, bool), bool)| index.apply(position)), cube);
    }

    /// Positions of the identity witness are the unit
    #[test]
    fn prop_identity_index_is_constant(value in any::<i32>()) {
        prop_assert_eq!(IdentityKind.index_at(Identity(value), ()), value);
    }
}

#[test]
fn pair_tabulate_selects_first_on_true() {
    assert_eq!(
        PairKind.tabulate(|b: bool| if b { "foo" } else { "bar" }),
        ("foo", "bar")
    );
    assert_eq!(PairKind.index(("foo", "bar")).apply(false), "bar");
}

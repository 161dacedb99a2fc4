//! Integration tests for the law harness itself.
//!
//! Tests cover:
//! - Every suite passing on the built-in instances
//! - Broken witnesses reported as violations naming the law
//! - A `tail_rec_m` that recurses once per step failing the stack safety law
//! - Missing providers and equalities surfacing at construction time
//! - Seeded checks being reproducible
//! - The serialised form of a report (with the `serde` feature)

#![cfg(feature = "laws")]

use std::any::type_name;

use proptest::prelude::*;
use rstest::{fixture, rstest};
use tabula::control::Either;
use tabula::derivation::derive_monad;
use tabula::laws::{
    LawConfig, LawContext, LawError, LawOutcome, RuleSet, assert_laws, functor_laws, monad_laws,
    representable_laws,
};
use tabula::representable::Representable;
use tabula::typeclass::{
    Function, Functor, Identity, IdentityKind, Monad, OptionKind, PairKind, TypeConstructor, VecKind,
};

// =============================================================================
// A Broken Witness
// =============================================================================

/// Indexes pairs like `PairKind` but tabulates them the other way round.
#[derive(Debug, Clone, Copy)]
struct Backwards;

impl Representable<PairKind, bool> for Backwards {
    type Functor = PairKind;

    fn functor(&self) -> PairKind {
        PairKind
    }

    fn index<A>(&self, fa: <PairKind as TypeConstructor>::WithType<A>) -> Function<bool, A>
    where
        A: Clone + 'static,
    {
        PairKind.index(fa)
    }

    fn tabulate<A, Body>(&self, body: Body) -> <PairKind as TypeConstructor>::WithType<A>
    where
        A: Clone + 'static,
        Body: Fn(bool) -> A + 'static,
    {
        (body(false), body(true))
    }
}

#[fixture]
fn pair_context() -> LawContext {
    let selectors = any::<(i32, i32)>()
        .prop_map(|(yes, no)| Function::new(move |b: bool| if b { yes } else { no }));
    let offsets = any::<i32>().prop_map(|offset| Function::new(move |n: i32| n.wrapping_add(offset)));
    let splits = any::<(i32, i32)>()
        .prop_map(|(x, y)| Function::new(move |n: i32| (n.wrapping_add(x), n.wrapping_sub(y))));
    LawContext::new()
        .with_arbitrary::<i32>()
        .with_arbitrary::<bool>()
        .with_arbitrary::<(i32, i32)>()
        .with_samples::<Function<bool, i32>, _>(selectors)
        .with_samples::<Function<i32, i32>, _>(offsets)
        .with_samples::<Function<i32, (i32, i32)>, _>(splits)
}

#[fixture]
fn seeded() -> LawConfig {
    LawConfig::default().with_cases(64).with_seed([42; 32])
}

#[rstest]
fn backwards_witness_is_reported_by_law_name(pair_context: LawContext, seeded: LawConfig) {
    let laws = representable_laws::<PairKind, bool, _, i32>(Backwards, &pair_context).unwrap();
    let report = laws.check(&seeded);

    assert!(!report.is_success());
    let violated: Vec<&str> = report.violations().map(|violation| violation.law.as_str()).collect();
    assert!(violated.contains(&"index andThen tabulate = id"));
    assert!(violated.contains(&"tabulate andThen index = id"));
    assert!(violated.contains(&"positions index to themselves"));
    assert!(report.violations().all(|violation| violation.suite == "representable"));
}

#[rstest]
fn backwards_witness_breaks_the_derived_monad(pair_context: LawContext, seeded: LawConfig) {
    let laws = monad_laws::<PairKind, _, i32, i32, i32>(derive_monad(Backwards), &pair_context).unwrap();
    let report = laws.check(&seeded);

    let violated: Vec<&str> = report.violations().map(|violation| violation.law.as_str()).collect();
    assert!(violated.contains(&"monad right identity"));
    // The functor parent only depends on `fmap`, which is still lawful.
    assert!(
        report
            .outcomes()
            .iter()
            .filter(|outcome| outcome.suite() == "functor")
            .all(LawOutcome::is_passed)
    );
}

#[rstest]
fn violation_carries_a_counterexample(pair_context: LawContext, seeded: LawConfig) {
    let laws = representable_laws::<PairKind, bool, _, i32>(Backwards, &pair_context).unwrap();
    let report = laws.check(&seeded);

    let violation = report
        .violations()
        .find(|violation| violation.law == "index andThen tabulate = id")
        .unwrap();
    assert_eq!(violation.reason, "expected tabulate(index(fa)) == fa");
    assert!(violation.counterexample.starts_with('('));
}

#[rstest]
fn into_result_returns_the_first_violation(pair_context: LawContext, seeded: LawConfig) {
    let laws = representable_laws::<PairKind, bool, _, i32>(Backwards, &pair_context).unwrap();
    let error = laws.check(&seeded).into_result().unwrap_err();

    assert!(error.is_violation());
    assert!(matches!(
        error,
        LawError::Violation(ref violation) if violation.law == "index andThen tabulate = id"
    ));
}

#[rstest]
#[should_panic(expected = "index andThen tabulate = id ... FAILED")]
fn assert_laws_panics_with_the_report(pair_context: LawContext, seeded: LawConfig) {
    let laws = representable_laws::<PairKind, bool, _, i32>(Backwards, &pair_context).unwrap();
    assert_laws(&laws, &seeded);
}

#[rstest]
fn seeded_checks_are_reproducible(pair_context: LawContext, seeded: LawConfig) {
    let laws = representable_laws::<PairKind, bool, _, i32>(Backwards, &pair_context).unwrap();
    assert_eq!(laws.check(&seeded), laws.check(&seeded));
}

// =============================================================================
// A Recursive tailRecM
// =============================================================================

/// Deepest call chain `Recursive::tail_rec_m` survives, standing in for a
/// thread's stack.
const CALL_DEPTH_LIMIT: u32 = 1_000;

/// An identity monad whose `tail_rec_m` calls itself once per step.
#[derive(Debug, Clone, Copy)]
struct Recursive;

impl Functor<IdentityKind> for Recursive {
    fn fmap<A, B, Mapper>(&self, fa: Identity<A>, function: Mapper) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        IdentityKind.fmap(fa, function)
    }
}

impl Monad<IdentityKind> for Recursive {
    fn pure<A>(&self, value: A) -> Identity<A>
    where
        A: Clone + 'static,
    {
        Identity(value)
    }

    fn flat_map<A, B, Binder>(&self, fa: Identity<A>, function: Binder) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Binder: Fn(A) -> Identity<B> + 'static,
    {
        function(fa.0)
    }

    fn tail_rec_m<A, B, Step>(&self, initial: A, step: Step) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Step: Fn(A) -> Identity<Either<A, B>> + 'static,
    {
        fn go<A, B>(current: A, step: &dyn Fn(A) -> Identity<Either<A, B>>, depth: u32) -> Identity<B> {
            assert!(depth < CALL_DEPTH_LIMIT, "stack exhausted at depth {depth}");
            match step(current).0 {
                Either::Left(next) => go(next, step, depth + 1),
                Either::Right(result) => Identity(result),
            }
        }
        go(initial, &step, 0)
    }
}

fn identity_context() -> LawContext {
    let offsets = || any::<i32>().prop_map(|offset| Function::new(move |n: i32| n.wrapping_add(offset)));
    LawContext::new()
        .with_arbitrary::<i32>()
        .with_samples::<Identity<i32>, _>(any::<i32>().prop_map(Identity))
        .with_natural_equality::<Identity<i32>>()
        .with_samples::<Function<i32, i32>, _>(offsets())
        .with_samples::<Function<i32, Identity<i32>>, _>(
            offsets().prop_map(|f| Function::new(move |n: i32| Identity(f.apply(n)))),
        )
}

#[rstest]
fn recursive_tail_rec_m_fails_only_the_stack_safety_law(seeded: LawConfig) {
    let laws = monad_laws::<IdentityKind, _, i32, i32, i32>(Recursive, &identity_context()).unwrap();
    let report = laws.check(&seeded.with_cases(8));

    let violated: Vec<&str> = report.violations().map(|violation| violation.law.as_str()).collect();
    assert_eq!(violated, vec!["tailRecM stack safety"]);
}

// =============================================================================
// Built-in Instances
// =============================================================================

#[rstest]
fn built_in_functors_pass(pair_context: LawContext) {
    let context = pair_context
        .with_arbitrary::<Option<i32>>()
        .with_arbitrary::<Vec<i32>>();
    let config = LawConfig::default().with_cases(64);

    assert_laws(&functor_laws::<OptionKind, _, i32, i32, i32>(OptionKind, &context).unwrap(), &config);
    assert_laws(&functor_laws::<VecKind, _, i32, i32, i32>(VecKind, &context).unwrap(), &config);
    assert_laws(&functor_laws::<PairKind, _, i32, i32, i32>(PairKind, &context).unwrap(), &config);
}

#[rstest]
fn derived_pair_monad_passes(pair_context: LawContext, seeded: LawConfig) {
    let laws = monad_laws::<PairKind, _, i32, i32, i32>(derive_monad(PairKind), &pair_context).unwrap();
    let report = laws.check(&seeded);

    assert!(report.is_success(), "{report}");
    assert_eq!(report.rule_set(), "monad");
    assert_eq!(report.outcomes().len(), 2 + 7);
}

#[rstest]
fn properties_lists_parents_first(pair_context: LawContext) {
    let laws = monad_laws::<PairKind, _, i32, i32, i32>(derive_monad(PairKind), &pair_context).unwrap();
    let properties: Vec<(&str, &str)> = laws
        .properties()
        .into_iter()
        .map(|property| (property.suite, property.law.name()))
        .collect();

    assert_eq!(properties[0], ("functor", "covariant identity"));
    assert_eq!(properties[1], ("functor", "covariant composition"));
    assert_eq!(properties[2], ("monad", "monad left identity"));
    assert_eq!(properties[7], ("monad", "tailRecM consistent flatMap"));
    assert_eq!(properties.last(), Some(&("monad", "tailRecM stack safety")));
}

// =============================================================================
// Construction Errors
// =============================================================================

#[rstest]
fn empty_context_reports_missing_provider() {
    let error = monad_laws::<PairKind, _, i32, i32, i32>(derive_monad(PairKind), &LawContext::new())
        .unwrap_err();
    assert_eq!(
        error,
        LawError::MissingProvider {
            type_name: type_name::<(i32, i32)>()
        }
    );
}

#[rstest]
fn samples_without_equality_report_missing_equality() {
    let context = LawContext::new()
        .with_samples::<(i32, i32), _>(any::<(i32, i32)>())
        .with_samples::<Function<i32, i32>, _>(Just(Function::new(|n: i32| n)));
    let error = functor_laws::<PairKind, _, i32, i32, i32>(PairKind, &context).unwrap_err();
    assert_eq!(
        error,
        LawError::MissingEquality {
            type_name: type_name::<(i32, i32)>()
        }
    );
}

#[rstest]
fn duplicate_parents_are_rejected(pair_context: LawContext) {
    let functor = functor_laws::<PairKind, _, i32, i32, i32>(PairKind, &pair_context).unwrap();
    let error = RuleSet::new("twice", vec![functor.clone(), functor], Vec::new()).unwrap_err();
    assert_eq!(
        error,
        LawError::DuplicateParent {
            rule_set: "twice".to_owned(),
            parent: "functor".to_owned(),
        }
    );
}

// =============================================================================
// Serialisation
// =============================================================================

#[cfg(feature = "serde")]
#[rstest]
fn report_serialises_with_status_tags(pair_context: LawContext, seeded: LawConfig) {
    let laws = representable_laws::<PairKind, bool, _, i32>(Backwards, &pair_context).unwrap();
    let report = laws.check(&seeded);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["rule_set"], "representable");
    let outcomes = json["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|outcome| outcome["status"] == "violated"));
    assert_eq!(outcomes[0]["suite"], "representable");
    assert_eq!(outcomes[0]["law"], "index andThen tabulate = id");
}

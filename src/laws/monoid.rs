//! Semigroup and monoid laws.

use super::context::{LawContext, Sample};
use super::error::LawError;
use super::rule_set::{Law, RuleSet, ensure_equal};
use crate::typeclass::{Monoid, Semigroup};

/// The rule set every [`Semigroup`] must satisfy.
///
/// Laws: "semigroup associativity" and "reduceAll consistent combine".
///
/// Needs samples of and an equality on `T`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
pub fn semigroup_laws<T, S>(semigroup: S, context: &LawContext) -> Result<RuleSet, LawError>
where
    T: Clone + 'static,
    S: Semigroup<T> + Clone + 'static,
{
    let values = context.samples::<T>()?;
    let same = context.equality::<T>()?;

    let associativity = {
        let semigroup = semigroup.clone();
        let same = same.clone();
        Law::new(
            "semigroup associativity",
            (values.clone(), values.clone(), values.clone()),
            move |(a, b, c): (Sample<T>, Sample<T>, Sample<T>)| {
                let (a, b, c) = (a.into_inner(), b.into_inner(), c.into_inner());
                let left = semigroup.combine(semigroup.combine(a.clone(), b.clone()), c.clone());
                let right = semigroup.combine(a, semigroup.combine(b, c));
                ensure_equal(&same, &left, &right, "combine(combine(a, b), c) == combine(a, combine(b, c))")
            },
        )
    };

    let reduce_all = Law::new(
        "reduceAll consistent combine",
        (values.clone(), values.clone(), values),
        move |(a, b, c): (Sample<T>, Sample<T>, Sample<T>)| {
            let (a, b, c) = (a.into_inner(), b.into_inner(), c.into_inner());
            let folded = semigroup.combine(semigroup.combine(a.clone(), b.clone()), c.clone());
            match semigroup.reduce_all(vec![a, b, c]) {
                Some(reduced) => ensure_equal(
                    &same,
                    &reduced,
                    &folded,
                    "reduceAll([a, b, c]) == combine(combine(a, b), c)",
                ),
                None => Err(proptest::test_runner::TestCaseError::fail(
                    "expected reduceAll of three values to be defined",
                )),
            }
        },
    );

    RuleSet::new("semigroup", Vec::new(), vec![associativity, reduce_all])
}

/// The rule set every [`Monoid`] must satisfy; its parent is
/// [`semigroup_laws`].
///
/// Own laws: "monoid left identity", "monoid right identity",
/// "combineAll of nothing is empty" and "combineAll consistent combine".
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks samples of or an equality on `T`.
///
/// # Examples
///
/// ```rust
/// use tabula::laws::{LawConfig, LawContext, assert_laws, monoid_laws};
/// use tabula::typeclass::Additive;
///
/// let context = LawContext::new().with_arbitrary::<i64>();
/// let laws = monoid_laws::<i64, _>(Additive, &context).unwrap();
/// assert_laws(&laws, &LawConfig::default());
/// ```
pub fn monoid_laws<T, M>(monoid: M, context: &LawContext) -> Result<RuleSet, LawError>
where
    T: Clone + 'static,
    M: Monoid<T> + Clone + 'static,
{
    let semigroup = semigroup_laws::<T, M>(monoid.clone(), context)?;

    let values = context.samples::<T>()?;
    let same = context.equality::<T>()?;

    let left_identity = {
        let monoid = monoid.clone();
        let same = same.clone();
        Law::new("monoid left identity", values.clone(), move |a: Sample<T>| {
            let a = a.into_inner();
            ensure_equal(&same, &monoid.combine(monoid.empty(), a.clone()), &a, "combine(empty, a) == a")
        })
    };

    let right_identity = {
        let monoid = monoid.clone();
        let same = same.clone();
        Law::new("monoid right identity", values.clone(), move |a: Sample<T>| {
            let a = a.into_inner();
            ensure_equal(&same, &monoid.combine(a.clone(), monoid.empty()), &a, "combine(a, empty) == a")
        })
    };

    let combine_all_empty = {
        let monoid = monoid.clone();
        let same = same.clone();
        Law::new("combineAll of nothing is empty", proptest::strategy::Just(()), move |()| {
            ensure_equal(
                &same,
                &monoid.combine_all(Vec::new()),
                &monoid.empty(),
                "combineAll([]) == empty",
            )
        })
    };

    let combine_all = Law::new(
        "combineAll consistent combine",
        (values.clone(), values),
        move |(a, b): (Sample<T>, Sample<T>)| {
            let (a, b) = (a.into_inner(), b.into_inner());
            let combined = monoid.combine(a.clone(), b.clone());
            ensure_equal(
                &same,
                &monoid.combine_all(vec![a, b]),
                &combined,
                "combineAll([a, b]) == combine(a, b)",
            )
        },
    );

    RuleSet::new(
        "monoid",
        vec![semigroup],
        vec![left_identity, right_identity, combine_all_empty, combine_all],
    )
}

//! Comonad and bimonad laws.

use super::context::{LawContext, Sample};
use super::error::LawError;
use super::functor::functor_laws;
use super::monad::monad_laws;
use super::rule_set::{Law, RuleSet, ensure_equal};
use crate::typeclass::{Bimonad, Comonad, Function, TypeConstructor};

/// The rule set every [`Comonad`] must satisfy; its parent is
/// [`functor_laws`].
///
/// Needs, beyond the functor laws, samples of `Function<F<A>, B>` and
/// `Function<F<B>, C>`, and equalities on `B` and `F<B>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
pub fn comonad_laws<F, W, A, B, C>(comonad: W, context: &LawContext) -> Result<RuleSet, LawError>
where
    F: TypeConstructor,
    W: Comonad<F> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let functor = functor_laws::<F, W, A, B, C>(comonad.clone(), context)?;

    let structures = context.samples::<F::WithType<A>>()?;
    let mappers = context.samples::<Function<A, B>>()?;
    let first_extenders = context.samples::<Function<F::WithType<A>, B>>()?;
    let second_extenders = context.samples::<Function<F::WithType<B>, C>>()?;
    let same_a = context.equality::<F::WithType<A>>()?;
    let same_b = context.equality::<F::WithType<B>>()?;
    let same_c = context.equality::<F::WithType<C>>()?;
    let same_value = context.equality::<B>()?;

    let associativity = {
        let comonad = comonad.clone();
        Law::new(
            "coflatMap associativity",
            (structures.clone(), first_extenders.clone(), second_extenders),
            move |(fa, f, g): (
                Sample<F::WithType<A>>,
                Sample<Function<F::WithType<A>, B>>,
                Sample<Function<F::WithType<B>, C>>,
            )| {
                let (fa, f, g) = (fa.into_inner(), f.into_inner(), g.into_inner());
                let stepwise = {
                    let (f, g) = (f.clone(), g.clone());
                    comonad.coflat_map(
                        comonad.coflat_map(fa.clone(), move |view| f.apply(view)),
                        move |view| g.apply(view),
                    )
                };
                let inner = comonad.clone();
                let nested = comonad.coflat_map(fa, move |view: F::WithType<A>| {
                    let f = f.clone();
                    g.apply(inner.coflat_map(view, move |inner_view| f.apply(inner_view)))
                });
                ensure_equal(
                    &same_c,
                    &stepwise,
                    &nested,
                    "coflatMap(coflatMap(fa, f), g) == coflatMap(fa, x => g(coflatMap(x, f)))",
                )
            },
        )
    };

    let extract_coflatten = {
        let comonad = comonad.clone();
        let same_a = same_a.clone();
        Law::new(
            "extract coflatten identity",
            structures.clone(),
            move |fa: Sample<F::WithType<A>>| {
                let fa = fa.into_inner();
                let extracted = comonad.extract(comonad.coflatten(fa.clone()));
                ensure_equal(&same_a, &extracted, &fa, "extract(coflatten(fa)) == fa")
            },
        )
    };

    let map_coflatten = {
        let comonad = comonad.clone();
        let same_a = same_a.clone();
        Law::new(
            "map coflatten identity",
            structures.clone(),
            move |fa: Sample<F::WithType<A>>| {
                let fa = fa.into_inner();
                let inner = comonad.clone();
                let mapped = comonad.fmap(comonad.coflatten(fa.clone()), move |view: F::WithType<A>| {
                    inner.extract(view)
                });
                ensure_equal(&same_a, &mapped, &fa, "fmap(coflatten(fa), extract) == fa")
            },
        )
    };

    let map_coherence = {
        let comonad = comonad.clone();
        Law::new(
            "map coflatMap coherence",
            (structures.clone(), mappers),
            move |(fa, h): (Sample<F::WithType<A>>, Sample<Function<A, B>>)| {
                let (fa, h) = (fa.into_inner(), h.into_inner());
                let inner = comonad.clone();
                let extended = {
                    let h = h.clone();
                    comonad.coflat_map(fa.clone(), move |view| h.apply(inner.extract(view)))
                };
                let mapped = comonad.fmap(fa, move |a: A| h.apply(a));
                ensure_equal(&same_b, &mapped, &extended, "fmap(fa, h) == coflatMap(fa, x => h(extract(x)))")
            },
        )
    };

    let left_identity = {
        let comonad = comonad.clone();
        Law::new(
            "comonad left identity",
            structures.clone(),
            move |fa: Sample<F::WithType<A>>| {
                let fa = fa.into_inner();
                let inner = comonad.clone();
                let extended = comonad.coflat_map(fa.clone(), move |view| inner.extract(view));
                ensure_equal(&same_a, &extended, &fa, "coflatMap(fa, extract) == fa")
            },
        )
    };

    let right_identity = Law::new(
        "comonad right identity",
        (structures, first_extenders),
        move |(fa, f): (Sample<F::WithType<A>>, Sample<Function<F::WithType<A>, B>>)| {
            let (fa, f) = (fa.into_inner(), f.into_inner());
            let extended = {
                let f = f.clone();
                comonad.coflat_map(fa.clone(), move |view| f.apply(view))
            };
            ensure_equal(
                &same_value,
                &comonad.extract(extended),
                &f.apply(fa),
                "extract(coflatMap(fa, f)) == f(fa)",
            )
        },
    );

    RuleSet::new(
        "comonad",
        vec![functor],
        vec![
            associativity,
            extract_coflatten,
            map_coflatten,
            map_coherence,
            left_identity,
            right_identity,
        ],
    )
}

/// The rule set every [`Bimonad`] must satisfy; its parents are
/// [`monad_laws`] and [`comonad_laws`].
///
/// Own laws: "pure and extract compose", "extract/flatMap entwining" and
/// "pure/coflatMap entwining".
///
/// Needs, beyond the parents, samples of `F<F<A>>` and equalities on `A`
/// and `F<F<A>>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
pub fn bimonad_laws<F, W, A, B, C>(bimonad: W, context: &LawContext) -> Result<RuleSet, LawError>
where
    F: TypeConstructor,
    W: Bimonad<F> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let monad = monad_laws::<F, W, A, B, C>(bimonad.clone(), context)?;
    let comonad = comonad_laws::<F, W, A, B, C>(bimonad.clone(), context)?;

    let values = context.samples::<A>()?;
    let nested = context.samples::<F::WithType<F::WithType<A>>>()?;
    let same_value = context.equality::<A>()?;
    let same_nested = context.equality::<F::WithType<F::WithType<A>>>()?;

    let pure_extract = {
        let bimonad = bimonad.clone();
        let same_value = same_value.clone();
        Law::new(
            "pure and extract compose",
            values.clone(),
            move |a: Sample<A>| {
                let a = a.into_inner();
                let round_trip = bimonad.extract(bimonad.pure(a.clone()));
                ensure_equal(&same_value, &round_trip, &a, "extract(pure(a)) == a")
            },
        )
    };

    let extract_flat_map = {
        let bimonad = bimonad.clone();
        Law::new(
            "extract/flatMap entwining",
            nested,
            move |ffa: Sample<F::WithType<F::WithType<A>>>| {
                let ffa = ffa.into_inner();
                let inner = bimonad.clone();
                let through_flatten = bimonad.extract(bimonad.flatten(ffa.clone()));
                let through_map =
                    bimonad.extract(bimonad.fmap(ffa, move |fa: F::WithType<A>| inner.extract(fa)));
                ensure_equal(
                    &same_value,
                    &through_flatten,
                    &through_map,
                    "extract(flatten(ffa)) == extract(fmap(ffa, extract))",
                )
            },
        )
    };

    let pure_coflat_map = Law::new(
        "pure/coflatMap entwining",
        values,
        move |a: Sample<A>| {
            let a = a.into_inner();
            let inner = bimonad.clone();
            let duplicated = bimonad.coflatten(bimonad.pure(a.clone()));
            let lifted = bimonad.fmap(bimonad.pure(a), move |x: A| inner.pure(x));
            ensure_equal(
                &same_nested,
                &duplicated,
                &lifted,
                "coflatten(pure(a)) == fmap(pure(a), pure)",
            )
        },
    );

    RuleSet::new(
        "bimonad",
        vec![monad, comonad],
        vec![pure_extract, extract_flat_map, pure_coflat_map],
    )
}

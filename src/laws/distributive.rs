//! Distributive laws.

use super::context::{LawContext, Sample};
use super::error::LawError;
use super::functor::functor_laws;
use super::rule_set::{Law, RuleSet, ensure_equal};
use crate::typeclass::{Distributive, Function, Identity, IdentityKind, TypeConstructor};

/// The rule set every [`Distributive`] must satisfy; its parent is
/// [`functor_laws`].
///
/// Own laws: "distribute identity" and "cosequence identity" (distributing
/// over [`Identity`] changes nothing), and "cosequence twice is id"
/// (swapping two layers of `F` twice restores them).
///
/// Needs, beyond the functor laws, samples of `A`, `Function<A, F<B>>` and
/// `F<F<A>>`, and equalities on `F<B>` and `F<F<A>>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
pub fn distributive_laws<F, W, A, B, C>(
    distributive: W,
    context: &LawContext,
) -> Result<RuleSet, LawError>
where
    F: TypeConstructor,
    W: Distributive<F> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let functor = functor_laws::<F, W, A, B, C>(distributive.clone(), context)?;

    let values = context.samples::<A>()?;
    let structures = context.samples::<F::WithType<A>>()?;
    let binders = context.samples::<Function<A, F::WithType<B>>>()?;
    let nested = context.samples::<F::WithType<F::WithType<A>>>()?;
    let same_a = context.equality::<F::WithType<A>>()?;
    let same_b = context.equality::<F::WithType<B>>()?;
    let same_nested = context.equality::<F::WithType<F::WithType<A>>>()?;

    let distribute_identity = {
        let distributive = distributive.clone();
        Law::new(
            "distribute identity",
            (values, binders),
            move |(a, f): (Sample<A>, Sample<Function<A, F::WithType<B>>>)| {
                let (a, f) = (a.into_inner(), f.into_inner());
                let distributed = {
                    let f = f.clone();
                    distributive.distribute::<IdentityKind, _, A, B, _>(
                        Identity(a.clone()),
                        IdentityKind,
                        move |x: A| f.apply(x),
                    )
                };
                let unwrapped = distributive.fmap(distributed, |wrapped: Identity<B>| wrapped.0);
                ensure_equal(
                    &same_b,
                    &unwrapped,
                    &f.apply(a),
                    "distribute(Identity(a), f) == fmap(f(a), Identity)",
                )
            },
        )
    };

    let cosequence_identity = {
        let distributive = distributive.clone();
        Law::new(
            "cosequence identity",
            structures,
            move |fa: Sample<F::WithType<A>>| {
                let fa = fa.into_inner();
                let swapped =
                    distributive.cosequence::<IdentityKind, _, A>(Identity(fa.clone()), IdentityKind);
                let unwrapped = distributive.fmap(swapped, |wrapped: Identity<A>| wrapped.0);
                ensure_equal(&same_a, &unwrapped, &fa, "cosequence(Identity(fa)) == fmap(fa, Identity)")
            },
        )
    };

    let cosequence_twice = Law::new(
        "cosequence twice is id",
        nested,
        move |ffa: Sample<F::WithType<F::WithType<A>>>| {
            let ffa = ffa.into_inner();
            let swapped = distributive.cosequence::<F, W, A>(ffa.clone(), distributive.clone());
            let restored = distributive.cosequence::<F, W, A>(swapped, distributive.clone());
            ensure_equal(&same_nested, &restored, &ffa, "cosequence(cosequence(ffa)) == ffa")
        },
    );

    RuleSet::new(
        "distributive",
        vec![functor],
        vec![distribute_identity, cosequence_identity, cosequence_twice],
    )
}

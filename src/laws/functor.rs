//! Functor laws.

use super::context::{LawContext, Sample};
use super::error::LawError;
use super::rule_set::{Law, RuleSet, ensure_equal};
use crate::typeclass::{Function, Functor, TypeConstructor};

/// The rule set every [`Functor`] must satisfy.
///
/// Laws: "covariant identity" and "covariant composition".
///
/// Needs samples of `F<A>`, `Function<A, B>` and `Function<B, C>`, and
/// equalities on `F<A>` and `F<C>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
///
/// # Examples
///
/// ```rust
/// use proptest::prelude::*;
/// use tabula::laws::{LawConfig, LawContext, assert_laws, functor_laws};
/// use tabula::typeclass::{Function, OptionKind};
///
/// let increments = any::<i8>().prop_map(|k| Function::new(move |n: i8| n.wrapping_add(k)));
/// let context = LawContext::new()
///     .with_arbitrary::<Option<i8>>()
///     .with_samples::<Function<i8, i8>, _>(increments);
///
/// let laws = functor_laws::<OptionKind, _, i8, i8, i8>(OptionKind, &context).unwrap();
/// assert_laws(&laws, &LawConfig::default());
/// ```
pub fn functor_laws<F, W, A, B, C>(functor: W, context: &LawContext) -> Result<RuleSet, LawError>
where
    F: TypeConstructor,
    W: Functor<F> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let structures = context.samples::<F::WithType<A>>()?;
    let firsts = context.samples::<Function<A, B>>()?;
    let seconds = context.samples::<Function<B, C>>()?;
    let same_structure = context.equality::<F::WithType<A>>()?;
    let same_result = context.equality::<F::WithType<C>>()?;

    let identity = {
        let functor = functor.clone();
        Law::new(
            "covariant identity",
            structures.clone(),
            move |fa: Sample<F::WithType<A>>| {
                let fa = fa.into_inner();
                let mapped = functor.fmap(fa.clone(), |a: A| a);
                ensure_equal(&same_structure, &mapped, &fa, "fmap(fa, identity) == fa")
            },
        )
    };

    let composition = Law::new(
        "covariant composition",
        (structures, firsts, seconds),
        move |(fa, f, g): (Sample<F::WithType<A>>, Sample<Function<A, B>>, Sample<Function<B, C>>)| {
            let (fa, f, g) = (fa.into_inner(), f.into_inner(), g.into_inner());
            let f_then_g = {
                let g = g.clone();
                f.and_then(move |b: B| g.apply(b))
            };
            let stepwise =
                functor.fmap(functor.fmap(fa.clone(), move |a: A| f.apply(a)), move |b: B| g.apply(b));
            let fused = functor.fmap(fa, move |a: A| f_then_g.apply(a));
            ensure_equal(
                &same_result,
                &stepwise,
                &fused,
                "fmap(fmap(fa, f), g) == fmap(fa, f andThen g)",
            )
        },
    );

    RuleSet::new("functor", Vec::new(), vec![identity, composition])
}

//! Monad laws.

use super::context::{LawContext, Sample};
use super::error::LawError;
use super::functor::functor_laws;
use super::rule_set::{Law, RuleSet, ensure_equal};
use crate::control::Either;
use crate::typeclass::{Function, Monad, TypeConstructor};

/// Iterations driven through `tail_rec_m` by the "tailRecM stack safety" law.
pub const STACK_SAFETY_STEPS: u32 = 50_000;

/// The rule set every [`Monad`] must satisfy; its parent is
/// [`functor_laws`].
///
/// Own laws: "monad left identity", "monad right identity",
/// "flatMap associativity", "map flatMap coherence",
/// "flatten consistent flatMap", "tailRecM consistent flatMap" and
/// "tailRecM stack safety". The last one walks [`STACK_SAFETY_STEPS`]
/// iterations per case, so a `tail_rec_m` that recurses once per step
/// overflows the stack instead of passing.
///
/// Needs, beyond the functor laws, samples of `A`, `Function<A, F<A>>`,
/// `Function<A, F<B>>` and `Function<B, F<C>>`, and an equality on `F<B>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
pub fn monad_laws<F, W, A, B, C>(monad: W, context: &LawContext) -> Result<RuleSet, LawError>
where
    F: TypeConstructor,
    W: Monad<F> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let functor = functor_laws::<F, W, A, B, C>(monad.clone(), context)?;

    let values = context.samples::<A>()?;
    let structures = context.samples::<F::WithType<A>>()?;
    let mappers = context.samples::<Function<A, B>>()?;
    let endo_binders = context.samples::<Function<A, F::WithType<A>>>()?;
    let first_binders = context.samples::<Function<A, F::WithType<B>>>()?;
    let second_binders = context.samples::<Function<B, F::WithType<C>>>()?;
    let same_a = context.equality::<F::WithType<A>>()?;
    let same_b = context.equality::<F::WithType<B>>()?;
    let same_c = context.equality::<F::WithType<C>>()?;

    let left_identity = {
        let monad = monad.clone();
        let same_b = same_b.clone();
        Law::new(
            "monad left identity",
            (values.clone(), first_binders.clone()),
            move |(a, f): (Sample<A>, Sample<Function<A, F::WithType<B>>>)| {
                let (a, f) = (a.into_inner(), f.into_inner());
                let bound = {
                    let f = f.clone();
                    monad.flat_map(monad.pure(a.clone()), move |x: A| f.apply(x))
                };
                ensure_equal(&same_b, &bound, &f.apply(a), "flatMap(pure(a), f) == f(a)")
            },
        )
    };

    let right_identity = {
        let monad = monad.clone();
        let same_a = same_a.clone();
        Law::new(
            "monad right identity",
            structures.clone(),
            move |fa: Sample<F::WithType<A>>| {
                let fa = fa.into_inner();
                let inner = monad.clone();
                let bound = monad.flat_map(fa.clone(), move |a: A| inner.pure(a));
                ensure_equal(&same_a, &bound, &fa, "flatMap(fa, pure) == fa")
            },
        )
    };

    let associativity = {
        let monad = monad.clone();
        Law::new(
            "flatMap associativity",
            (structures.clone(), first_binders.clone(), second_binders),
            move |(fa, f, g): (
                Sample<F::WithType<A>>,
                Sample<Function<A, F::WithType<B>>>,
                Sample<Function<B, F::WithType<C>>>,
            )| {
                let (fa, f, g) = (fa.into_inner(), f.into_inner(), g.into_inner());
                let stepwise = {
                    let (f, g) = (f.clone(), g.clone());
                    monad.flat_map(monad.flat_map(fa.clone(), move |a: A| f.apply(a)), move |b: B| {
                        g.apply(b)
                    })
                };
                let inner = monad.clone();
                let nested = monad.flat_map(fa, move |a: A| {
                    let g = g.clone();
                    inner.flat_map(f.apply(a), move |b: B| g.apply(b))
                });
                ensure_equal(
                    &same_c,
                    &stepwise,
                    &nested,
                    "flatMap(flatMap(fa, f), g) == flatMap(fa, a => flatMap(f(a), g))",
                )
            },
        )
    };

    let map_coherence = {
        let monad = monad.clone();
        let same_b = same_b.clone();
        Law::new(
            "map flatMap coherence",
            (structures.clone(), mappers),
            move |(fa, h): (Sample<F::WithType<A>>, Sample<Function<A, B>>)| {
                let (fa, h) = (fa.into_inner(), h.into_inner());
                let inner = monad.clone();
                let bound = {
                    let h = h.clone();
                    monad.flat_map(fa.clone(), move |a: A| inner.pure(h.apply(a)))
                };
                let mapped = monad.fmap(fa, move |a: A| h.apply(a));
                ensure_equal(&same_b, &bound, &mapped, "flatMap(fa, a => pure(h(a))) == fmap(fa, h)")
            },
        )
    };

    let flatten_consistency = {
        let monad = monad.clone();
        Law::new(
            "flatten consistent flatMap",
            (structures, first_binders),
            move |(fa, f): (Sample<F::WithType<A>>, Sample<Function<A, F::WithType<B>>>)| {
                let (fa, f) = (fa.into_inner(), f.into_inner());
                let flattened = {
                    let f = f.clone();
                    monad.flatten(monad.fmap(fa.clone(), move |a: A| f.apply(a)))
                };
                let bound = monad.flat_map(fa, move |a: A| f.apply(a));
                ensure_equal(&same_b, &flattened, &bound, "flatten(fmap(fa, f)) == flatMap(fa, f)")
            },
        )
    };

    let tail_rec_stack_safety = {
        let monad = monad.clone();
        let same_a = same_a.clone();
        Law::new(
            "tailRecM stack safety",
            values.clone(),
            move |terminal: Sample<A>| {
                let terminal = terminal.into_inner();
                let inner = monad.clone();
                let landing = terminal.clone();
                let looped = monad.tail_rec_m::<u32, A, _>(STACK_SAFETY_STEPS, move |remaining: u32| {
                    let landing = landing.clone();
                    inner.fmap::<u32, Either<u32, A>, _>(inner.pure(remaining), move |remaining: u32| {
                        if remaining == 0 {
                            Either::Right(landing.clone())
                        } else {
                            Either::Left(remaining - 1)
                        }
                    })
                });
                ensure_equal(
                    &same_a,
                    &looped,
                    &monad.pure(terminal),
                    "counting down through tailRecM == pure(terminal)",
                )
            },
        )
    };

    let tail_rec_consistency = Law::new(
        "tailRecM consistent flatMap",
        (values, endo_binders),
        move |(a, f): (Sample<A>, Sample<Function<A, F::WithType<A>>>)| {
            let (a, f) = (a.into_inner(), f.into_inner());
            let looped = bounce::<F, W, A>(&monad, a.clone(), f.clone(), 1);
            let step = f.clone();
            let bound = monad.flat_map(bounce::<F, W, A>(&monad, a, f, 0), move |x: A| step.apply(x));
            ensure_equal(
                &same_a,
                &looped,
                &bound,
                "bounce(1) == flatMap(bounce(0), f), where bounce(n) applies f n + 1 times via tailRecM",
            )
        },
    );

    RuleSet::new(
        "monad",
        vec![functor],
        vec![
            left_identity,
            right_identity,
            associativity,
            map_coherence,
            flatten_consistency,
            tail_rec_consistency,
            tail_rec_stack_safety,
        ],
    )
}

/// Applies `step` `rounds + 1` times through `tail_rec_m`.
fn bounce<F, W, A>(monad: &W, start: A, step: Function<A, F::WithType<A>>, rounds: u32) -> F::WithType<A>
where
    F: TypeConstructor,
    W: Monad<F> + Clone + 'static,
    A: Clone + 'static,
{
    let inner = monad.clone();
    monad.tail_rec_m((start, rounds), move |(current, remaining): (A, u32)| {
        let next = step.apply(current);
        if remaining > 0 {
            inner.fmap(next, move |a: A| Either::<(A, u32), A>::Left((a, remaining - 1)))
        } else {
            inner.fmap(next, |a: A| Either::<(A, u32), A>::Right(a))
        }
    })
}

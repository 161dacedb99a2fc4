//! Category, Arrow, Choice and ArrowChoice laws.
//!
//! The four suites form a diamond: [`arrow_laws`] and [`choice_laws`] both
//! extend [`category_laws`], and [`arrow_choice_laws`] extends both, so
//! the category laws are checked once through each parent.

use proptest::strategy::Just;

use super::context::{LawContext, Sample};
use super::error::LawError;
use super::rule_set::{Law, RuleSet, ensure_equal};
use crate::control::Either;
use crate::typeclass::{Arrow, ArrowChoice, Category, Choice, Function, TypeConstructor2};

/// The rule set every [`Category`] must satisfy.
///
/// Laws: "category left identity", "category right identity" and
/// "compose associativity".
///
/// Needs samples of `P<A, B>`, `P<B, C>` and `P<C, D>`, and equalities on
/// `P<A, B>` and `P<A, D>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
pub fn category_laws<P, W, A, B, C, D>(category: W, context: &LawContext) -> Result<RuleSet, LawError>
where
    P: TypeConstructor2,
    W: Category<P> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
{
    let firsts = context.samples::<P::WithTypes<A, B>>()?;
    let seconds = context.samples::<P::WithTypes<B, C>>()?;
    let thirds = context.samples::<P::WithTypes<C, D>>()?;
    let same_ab = context.equality::<P::WithTypes<A, B>>()?;
    let same_ad = context.equality::<P::WithTypes<A, D>>()?;

    let left_identity = {
        let category = category.clone();
        let same_ab = same_ab.clone();
        Law::new(
            "category left identity",
            firsts.clone(),
            move |f: Sample<P::WithTypes<A, B>>| {
                let f = f.into_inner();
                let composed = category.and_then(category.identity::<A>(), f.clone());
                ensure_equal(&same_ab, &composed, &f, "identity >>> f == f")
            },
        )
    };

    let right_identity = {
        let category = category.clone();
        Law::new(
            "category right identity",
            firsts.clone(),
            move |f: Sample<P::WithTypes<A, B>>| {
                let f = f.into_inner();
                let composed = category.and_then(f.clone(), category.identity::<B>());
                ensure_equal(&same_ab, &composed, &f, "f >>> identity == f")
            },
        )
    };

    let associativity = Law::new(
        "compose associativity",
        (firsts, seconds, thirds),
        move |(f, g, h): (
            Sample<P::WithTypes<A, B>>,
            Sample<P::WithTypes<B, C>>,
            Sample<P::WithTypes<C, D>>,
        )| {
            let (f, g, h) = (f.into_inner(), g.into_inner(), h.into_inner());
            let left_nested = category.and_then(category.and_then(f.clone(), g.clone()), h.clone());
            let right_nested = category.and_then(f, category.and_then(g, h));
            ensure_equal(&same_ad, &left_nested, &right_nested, "(f >>> g) >>> h == f >>> (g >>> h)")
        },
    );

    RuleSet::new(
        "category",
        Vec::new(),
        vec![left_identity, right_identity, associativity],
    )
}

/// The rule set every [`Arrow`] must satisfy; its parent is
/// [`category_laws`].
///
/// Own laws: "arrow identity", "arrow composition", "arrow extension",
/// "arrow functor", "arrow exchange", "arrow unit" and
/// "arrow association".
///
/// Needs, beyond the category laws, samples of `Function<A, B>`,
/// `Function<B, C>` and `Function<C, D>`, and equalities on `P<A, A>`,
/// `P<A, C>`, `P<(A, C), (B, C)>`, `P<(A, D), (C, D)>`,
/// `P<(A, C), (B, D)>`, `P<(A, C), B>` and `P<((A, C), D), (B, (C, D))>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
#[allow(clippy::too_many_lines)]
pub fn arrow_laws<P, W, A, B, C, D>(arrow: W, context: &LawContext) -> Result<RuleSet, LawError>
where
    P: TypeConstructor2,
    W: Arrow<P> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
{
    let category = category_laws::<P, W, A, B, C, D>(arrow.clone(), context)?;

    let arrows_ab = context.samples::<P::WithTypes<A, B>>()?;
    let arrows_bc = context.samples::<P::WithTypes<B, C>>()?;
    let functions_ab = context.samples::<Function<A, B>>()?;
    let functions_bc = context.samples::<Function<B, C>>()?;
    let functions_cd = context.samples::<Function<C, D>>()?;
    let same_aa = context.equality::<P::WithTypes<A, A>>()?;
    let same_ac = context.equality::<P::WithTypes<A, C>>()?;
    let same_extension = context.equality::<P::WithTypes<(A, C), (B, C)>>()?;
    let same_functor = context.equality::<P::WithTypes<(A, D), (C, D)>>()?;
    let same_exchange = context.equality::<P::WithTypes<(A, C), (B, D)>>()?;
    let same_unit = context.equality::<P::WithTypes<(A, C), B>>()?;
    let same_association = context.equality::<P::WithTypes<((A, C), D), (B, (C, D))>>()?;

    let identity = {
        let arrow = arrow.clone();
        Law::new("arrow identity", Just(()), move |()| {
            ensure_equal(
                &same_aa,
                &arrow.lift(|a: A| a),
                &arrow.identity::<A>(),
                "lift(identity) == identity",
            )
        })
    };

    let composition = {
        let arrow = arrow.clone();
        Law::new(
            "arrow composition",
            (functions_ab.clone(), functions_bc),
            move |(f, g): (Sample<Function<A, B>>, Sample<Function<B, C>>)| {
                let (f, g) = (f.into_inner(), g.into_inner());
                let fused = {
                    let (f, g) = (f.clone(), g.clone());
                    arrow.lift(move |a: A| g.apply(f.apply(a)))
                };
                let stepwise = arrow.and_then(
                    arrow.lift(move |a: A| f.apply(a)),
                    arrow.lift(move |b: B| g.apply(b)),
                );
                ensure_equal(&same_ac, &fused, &stepwise, "lift(f andThen g) == lift(f) >>> lift(g)")
            },
        )
    };

    let extension = {
        let arrow = arrow.clone();
        Law::new(
            "arrow extension",
            functions_ab,
            move |f: Sample<Function<A, B>>| {
                let f = f.into_inner();
                let lifted_first = {
                    let f = f.clone();
                    arrow.first::<A, B, C>(arrow.lift(move |a: A| f.apply(a)))
                };
                let first_lifted = arrow.lift(move |(a, c): (A, C)| (f.apply(a), c));
                ensure_equal(
                    &same_extension,
                    &lifted_first,
                    &first_lifted,
                    "first(lift(f)) == lift(f *** identity)",
                )
            },
        )
    };

    let functor = {
        let arrow = arrow.clone();
        Law::new(
            "arrow functor",
            (arrows_ab.clone(), arrows_bc),
            move |(f, g): (Sample<P::WithTypes<A, B>>, Sample<P::WithTypes<B, C>>)| {
                let (f, g) = (f.into_inner(), g.into_inner());
                let first_of_composed = arrow.first::<A, C, D>(arrow.and_then(f.clone(), g.clone()));
                let composed_firsts =
                    arrow.and_then(arrow.first::<A, B, D>(f), arrow.first::<B, C, D>(g));
                ensure_equal(
                    &same_functor,
                    &first_of_composed,
                    &composed_firsts,
                    "first(f >>> g) == first(f) >>> first(g)",
                )
            },
        )
    };

    let exchange = {
        let arrow = arrow.clone();
        Law::new(
            "arrow exchange",
            (arrows_ab.clone(), functions_cd),
            move |(f, g): (Sample<P::WithTypes<A, B>>, Sample<Function<C, D>>)| {
                let (f, g) = (f.into_inner(), g.into_inner());
                let after = {
                    let g = g.clone();
                    arrow.and_then(
                        arrow.first::<A, B, C>(f.clone()),
                        arrow.lift(move |(b, c): (B, C)| (b, g.apply(c))),
                    )
                };
                let before = arrow.and_then(
                    arrow.lift(move |(a, c): (A, C)| (a, g.apply(c))),
                    arrow.first::<A, B, D>(f),
                );
                ensure_equal(
                    &same_exchange,
                    &after,
                    &before,
                    "first(f) >>> lift(identity *** g) == lift(identity *** g) >>> first(f)",
                )
            },
        )
    };

    let unit = {
        let arrow = arrow.clone();
        Law::new(
            "arrow unit",
            arrows_ab.clone(),
            move |f: Sample<P::WithTypes<A, B>>| {
                let f = f.into_inner();
                let after = arrow.and_then(
                    arrow.first::<A, B, C>(f.clone()),
                    arrow.lift(|(b, _): (B, C)| b),
                );
                let before = arrow.and_then(arrow.lift(|(a, _): (A, C)| a), f);
                ensure_equal(&same_unit, &after, &before, "first(f) >>> lift(fst) == lift(fst) >>> f")
            },
        )
    };

    let association = Law::new(
        "arrow association",
        arrows_ab,
        move |f: Sample<P::WithTypes<A, B>>| {
            let f = f.into_inner();
            let after = arrow.and_then(
                arrow.first::<(A, C), (B, C), D>(arrow.first::<A, B, C>(f.clone())),
                arrow.lift(|((b, c), d): ((B, C), D)| (b, (c, d))),
            );
            let before = arrow.and_then(
                arrow.lift(|((a, c), d): ((A, C), D)| (a, (c, d))),
                arrow.first::<A, B, (C, D)>(f),
            );
            ensure_equal(
                &same_association,
                &after,
                &before,
                "first(first(f)) >>> lift(assoc) == lift(assoc) >>> first(f)",
            )
        },
    );

    RuleSet::new(
        "arrow",
        vec![category],
        vec![
            identity,
            composition,
            extension,
            functor,
            exchange,
            unit,
            association,
        ],
    )
}

/// The rule set every [`Choice`] must satisfy; its parent is
/// [`category_laws`].
///
/// Own laws: "choice composition distributivity" and
/// "codiagonal consistent choice".
///
/// Needs, beyond the category laws, samples of `P<A, C>` and `P<B, C>`,
/// and equalities on `P<Either<A, B>, D>` and `P<Either<A, A>, A>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
pub fn choice_laws<P, W, A, B, C, D>(choice: W, context: &LawContext) -> Result<RuleSet, LawError>
where
    P: TypeConstructor2,
    W: Choice<P> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
{
    let category = category_laws::<P, W, A, B, C, D>(choice.clone(), context)?;

    let on_lefts = context.samples::<P::WithTypes<A, C>>()?;
    let on_rights = context.samples::<P::WithTypes<B, C>>()?;
    let afters = context.samples::<P::WithTypes<C, D>>()?;
    let same_distributed = context.equality::<P::WithTypes<Either<A, B>, D>>()?;
    let same_codiagonal = context.equality::<P::WithTypes<Either<A, A>, A>>()?;

    let distributivity = {
        let choice = choice.clone();
        Law::new(
            "choice composition distributivity",
            (on_lefts, on_rights, afters),
            move |(f, g, h): (
                Sample<P::WithTypes<A, C>>,
                Sample<P::WithTypes<B, C>>,
                Sample<P::WithTypes<C, D>>,
            )| {
                let (f, g, h) = (f.into_inner(), g.into_inner(), h.into_inner());
                let merged_then = choice.and_then(choice.choice(f.clone(), g.clone()), h.clone());
                let each_then = choice.choice(choice.and_then(f, h.clone()), choice.and_then(g, h));
                ensure_equal(
                    &same_distributed,
                    &merged_then,
                    &each_then,
                    "(f ||| g) >>> h == (f >>> h) ||| (g >>> h)",
                )
            },
        )
    };

    let codiagonal = Law::new("codiagonal consistent choice", Just(()), move |()| {
        ensure_equal(
            &same_codiagonal,
            &choice.choice(choice.identity::<A>(), choice.identity::<A>()),
            &choice.codiagonal::<A>(),
            "identity ||| identity == codiagonal",
        )
    });

    RuleSet::new("choice", vec![category], vec![distributivity, codiagonal])
}

/// The rule set every [`ArrowChoice`] must satisfy; its parents are
/// [`arrow_laws`] (over `A, B, C, D`) and [`choice_laws`] (over
/// `A, B, E, G`).
///
/// Own laws: "left and lift commute", "left and compose commute",
/// "left and right consistent", "left and then lift (Left) commutes",
/// "left and then identity +++ g commutes" and
/// "left commutes with sum association".
///
/// Needs, beyond the parents, samples of `P<A, D>`, and equalities on
/// `P<Either<A, C>, Either<B, C>>`, `P<Either<A, D>, Either<C, D>>`,
/// `P<Either<C, A>, Either<C, B>>`, `P<A, Either<B, C>>`,
/// `P<Either<A, C>, Either<B, D>>` and
/// `P<Either<Either<A, B>, C>, Either<D, Either<B, C>>>`.
///
/// # Errors
///
/// Returns [`LawError::MissingProvider`] or [`LawError::MissingEquality`]
/// if `context` lacks one of the above.
#[allow(clippy::too_many_lines)]
pub fn arrow_choice_laws<P, W, A, B, C, D, E, G>(
    arrow_choice: W,
    context: &LawContext,
) -> Result<RuleSet, LawError>
where
    P: TypeConstructor2,
    W: ArrowChoice<P> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
    E: Clone + 'static,
    G: Clone + 'static,
{
    let arrow = arrow_laws::<P, W, A, B, C, D>(arrow_choice.clone(), context)?;
    let choice = choice_laws::<P, W, A, B, E, G>(arrow_choice.clone(), context)?;

    let functions_ab = context.samples::<Function<A, B>>()?;
    let functions_cd = context.samples::<Function<C, D>>()?;
    let arrows_ab = context.samples::<P::WithTypes<A, B>>()?;
    let arrows_bc = context.samples::<P::WithTypes<B, C>>()?;
    let arrows_ad = context.samples::<P::WithTypes<A, D>>()?;
    let same_left_lift = context.equality::<P::WithTypes<Either<A, C>, Either<B, C>>>()?;
    let same_left_compose = context.equality::<P::WithTypes<Either<A, D>, Either<C, D>>>()?;
    let same_right = context.equality::<P::WithTypes<Either<C, A>, Either<C, B>>>()?;
    let same_injected = context.equality::<P::WithTypes<A, Either<B, C>>>()?;
    let same_sum = context.equality::<P::WithTypes<Either<A, C>, Either<B, D>>>()?;
    let same_association =
        context.equality::<P::WithTypes<Either<Either<A, B>, C>, Either<D, Either<B, C>>>>()?;

    let left_lift = {
        let instance = arrow_choice.clone();
        Law::new(
            "left and lift commute",
            functions_ab.clone(),
            move |f: Sample<Function<A, B>>| {
                let f = f.into_inner();
                let left_of_lifted = {
                    let f = f.clone();
                    instance.left::<A, B, C>(instance.lift(move |a: A| f.apply(a)))
                };
                let lifted_left =
                    instance.lift(move |either: Either<A, C>| either.map_left(|a| f.apply(a)));
                ensure_equal(
                    &same_left_lift,
                    &left_of_lifted,
                    &lifted_left,
                    "left(lift(f)) == lift(left map f)",
                )
            },
        )
    };

    let left_compose = {
        let instance = arrow_choice.clone();
        Law::new(
            "left and compose commute",
            (arrows_ab.clone(), arrows_bc),
            move |(f, g): (Sample<P::WithTypes<A, B>>, Sample<P::WithTypes<B, C>>)| {
                let (f, g) = (f.into_inner(), g.into_inner());
                let left_of_composed = instance.left::<A, C, D>(instance.and_then(f.clone(), g.clone()));
                let composed_lefts =
                    instance.and_then(instance.left::<A, B, D>(f), instance.left::<B, C, D>(g));
                ensure_equal(
                    &same_left_compose,
                    &left_of_composed,
                    &composed_lefts,
                    "left(f >>> g) == left(f) >>> left(g)",
                )
            },
        )
    };

    let left_right = {
        let instance = arrow_choice.clone();
        Law::new(
            "left and right consistent",
            functions_ab,
            move |f: Sample<Function<A, B>>| {
                let f = f.into_inner();
                let right_of_lifted = {
                    let f = f.clone();
                    instance.right::<A, B, C>(instance.lift(move |a: A| f.apply(a)))
                };
                let mirrored_left = instance.dimap(
                    instance.left::<A, B, C>(instance.lift(move |a: A| f.apply(a))),
                    |either: Either<C, A>| either.swap(),
                    |either: Either<B, C>| either.swap(),
                );
                ensure_equal(
                    &same_right,
                    &right_of_lifted,
                    &mirrored_left,
                    "right(lift(f)) == dimap(left(lift(f)), swap, swap)",
                )
            },
        )
    };

    let lift_left = {
        let instance = arrow_choice.clone();
        Law::new(
            "left and then lift (Left) commutes",
            arrows_ab.clone(),
            move |f: Sample<P::WithTypes<A, B>>| {
                let f = f.into_inner();
                let inject_after = instance.and_then(
                    f.clone(),
                    instance.lift(|b: B| Either::<B, C>::Left(b)),
                );
                let inject_before = instance.and_then(
                    instance.lift(|a: A| Either::<A, C>::Left(a)),
                    instance.left::<A, B, C>(f),
                );
                ensure_equal(
                    &same_injected,
                    &inject_after,
                    &inject_before,
                    "f >>> lift(Left) == lift(Left) >>> left(f)",
                )
            },
        )
    };

    let left_sum = {
        let instance = arrow_choice.clone();
        Law::new(
            "left and then identity +++ g commutes",
            (arrows_ab, functions_cd),
            move |(f, g): (Sample<P::WithTypes<A, B>>, Sample<Function<C, D>>)| {
                let (f, g) = (f.into_inner(), g.into_inner());
                let after = {
                    let g = g.clone();
                    instance.and_then(
                        instance.left::<A, B, C>(f.clone()),
                        instance.lift(move |either: Either<B, C>| either.map_right(|c| g.apply(c))),
                    )
                };
                let before = instance.and_then(
                    instance.lift(move |either: Either<A, C>| either.map_right(|c| g.apply(c))),
                    instance.left::<A, B, D>(f),
                );
                ensure_equal(
                    &same_sum,
                    &after,
                    &before,
                    "left(f) >>> lift(identity +++ g) == lift(identity +++ g) >>> left(f)",
                )
            },
        )
    };

    let sum_association = Law::new(
        "left commutes with sum association",
        arrows_ad,
        move |f: Sample<P::WithTypes<A, D>>| {
            let f = f.into_inner();
            let twice_left = arrow_choice.left::<Either<A, B>, Either<D, B>, C>(
                arrow_choice.left::<A, D, B>(f.clone()),
            );
            let after = arrow_choice.and_then(
                twice_left,
                arrow_choice.lift(|either: Either<Either<D, B>, C>| either.reassociate()),
            );
            let before = arrow_choice.and_then(
                arrow_choice.lift(|either: Either<Either<A, B>, C>| either.reassociate()),
                arrow_choice.left::<A, D, Either<B, C>>(f),
            );
            ensure_equal(
                &same_association,
                &after,
                &before,
                "left(left(f)) >>> lift(assoc) == lift(assoc) >>> left(f)",
            )
        },
    );

    RuleSet::new(
        "arrow choice",
        vec![arrow, choice],
        vec![
            left_lift,
            left_compose,
            left_right,
            lift_left,
            left_sum,
            sum_association,
        ],
    )
}

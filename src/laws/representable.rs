//! Representable laws.

use super::context::{LawContext, Sample};
use super::error::LawError;
use super::rule_set::{Law, RuleSet, ensure_equal};
use crate::representable::Representable;
use crate::typeclass::{Function, TypeConstructor};

/// The rule set every [`Representable`] witness must satisfy.
///
/// Laws: "index andThen tabulate = id", "tabulate andThen index = id" and
/// "positions index to themselves".
///
/// Needs samples of `F<A>`, `Function<R, A>` and `R`, and equalities on
/// `F<A>`, `A` and `R`.
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
/// use tabula::laws::{LawConfig, LawContext, assert_laws, representable_laws};
/// use tabula::typeclass::{Function, PairKind};
///
/// let selectors = any::<(i32, i32)>()
///     .prop_map(|(yes, no)| Function::new(move |b: bool| if b { yes } else { no }));
/// let context = LawContext::new()
///     .with_arbitrary::<(i32, i32)>()
///     .with_arbitrary::<i32>()
///     .with_arbitrary::<bool>()
///     .with_samples::<Function<bool, i32>, _>(selectors);
///
/// let laws = representable_laws::<PairKind, bool, _, i32>(PairKind, &context).unwrap();
/// assert_laws(&laws, &LawConfig::default());
/// ```
pub fn representable_laws<F, R, W, A>(witness: W, context: &LawContext) -> Result<RuleSet, LawError>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
    A: Clone + 'static,
{
    let structures = context.samples::<F::WithType<A>>()?;
    let tables = context.samples::<Function<R, A>>()?;
    let positions = context.samples::<R>()?;
    let same_structure = context.equality::<F::WithType<A>>()?;
    let same_element = context.equality::<A>()?;
    let same_position = context.equality::<R>()?;

    let index_tabulate = {
        let witness = witness.clone();
        Law::new(
            "index andThen tabulate = id",
            structures,
            move |fa: Sample<F::WithType<A>>| {
                let fa = fa.into_inner();
                let index = witness.index(fa.clone());
                let rebuilt = witness.tabulate(move |position: R| index.apply(position));
                ensure_equal(&same_structure, &rebuilt, &fa, "tabulate(index(fa)) == fa")
            },
        )
    };

    let tabulate_index = {
        let witness = witness.clone();
        Law::new(
            "tabulate andThen index = id",
            (tables, positions.clone()),
            move |(g, position): (Sample<Function<R, A>>, Sample<R>)| {
                let (g, position) = (g.into_inner(), position.into_inner());
                let table = {
                    let g = g.clone();
                    witness.tabulate(move |r: R| g.apply(r))
                };
                ensure_equal(
                    &same_element,
                    &witness.index_at(table, position.clone()),
                    &g.apply(position),
                    "index(tabulate(g))(r) == g(r)",
                )
            },
        )
    };

    let positions_index = Law::new(
        "positions index to themselves",
        positions,
        move |position: Sample<R>| {
            let position = position.into_inner();
            ensure_equal(
                &same_position,
                &witness.index_at(witness.positions(), position.clone()),
                &position,
                "index(positions)(r) == r",
            )
        },
    );

    RuleSet::new(
        "representable",
        Vec::new(),
        vec![index_tabulate, tabulate_index, positions_index],
    )
}

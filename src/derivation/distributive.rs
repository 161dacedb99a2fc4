//! The distributive instance of a representable functor.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::representable::Representable;
use crate::typeclass::{Distributive, Functor, TypeConstructor};

/// The [`Distributive`] derived from a representable witness `W` with
/// representation `R`.
///
/// `distribute(ga, f)` is, at each position `r`, the `G` structure
/// obtained by mapping every `a` to the element of `f(a)` at `r`.
pub struct RepresentableDistributive<W, R> {
    witness: W,
    representation: PhantomData<fn() -> R>,
}

impl<W, R> RepresentableDistributive<W, R> {
    /// Wraps a representable witness.
    pub const fn new(witness: W) -> Self {
        Self {
            witness,
            representation: PhantomData,
        }
    }

    /// The underlying witness.
    pub const fn witness(&self) -> &W {
        &self.witness
    }
}

impl<W: Clone, R> Clone for RepresentableDistributive<W, R> {
    fn clone(&self) -> Self {
        Self::new(self.witness.clone())
    }
}

impl<W: Copy, R> Copy for RepresentableDistributive<W, R> {}

impl<W: fmt::Debug, R> fmt::Debug for RepresentableDistributive<W, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RepresentableDistributive")
            .field("witness", &self.witness)
            .finish()
    }
}

/// Derives the [`Distributive`] instance of a representable functor.
///
/// # Examples
///
/// ```rust
/// use tabula::derivation::derive_distributive;
/// use tabula::typeclass::{Distributive, PairKind, VecKind};
///
/// let distributive = derive_distributive(PairKind);
/// let split = distributive.distribute(vec![1, 2, 3], VecKind, |n: i32| (n, -n));
/// assert_eq!(split, (vec![1, 2, 3], vec![-1, -2, -3]));
/// ```
pub const fn derive_distributive<F, R, W>(witness: W) -> RepresentableDistributive<W, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
{
    RepresentableDistributive::new(witness)
}

impl<F, R, W> Functor<F> for RepresentableDistributive<W, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
{
    #[inline]
    fn fmap<A, B, Mapper>(&self, fa: F::WithType<A>, function: Mapper) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        self.witness.functor().fmap(fa, function)
    }
}

impl<F, R, W> Distributive<F> for RepresentableDistributive<W, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
{
    fn distribute<G, Outer, A, B, Mapper>(
        &self,
        ga: G::WithType<A>,
        outer: Outer,
        function: Mapper,
    ) -> F::WithType<G::WithType<B>>
    where
        G: TypeConstructor,
        Outer: Functor<G> + Clone + 'static,
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> F::WithType<B> + 'static,
    {
        let function = Rc::new(function);
        let witness = self.witness.clone();
        self.witness.tabulate(move |position: R| {
            let function = Rc::clone(&function);
            let witness = witness.clone();
            outer.fmap(ga.clone(), move |a| {
                witness.index_at(function(a), position.clone())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Function, FunctionKind, OptionKind, PairKind, VecKind};
    use rstest::rstest;

    #[rstest]
    fn pair_distribute_over_vec_unzips() {
        let distributive = derive_distributive(PairKind);
        let split = distributive.distribute(vec![1, 2, 3], VecKind, |n: i32| (n, n * n));
        assert_eq!(split, (vec![1, 2, 3], vec![1, 4, 9]));
    }

    #[rstest]
    #[case(Some((1, 2)), (Some(1), Some(2)))]
    #[case(None, (None, None))]
    fn pair_cosequence_over_option(
        #[case] input: Option<(i32, i32)>,
        #[case] expected: (Option<i32>, Option<i32>),
    ) {
        assert_eq!(derive_distributive(PairKind).cosequence(input, OptionKind), expected);
    }

    #[rstest]
    fn cosequence_twice_restores_the_nesting() {
        let distributive = derive_distributive(PairKind);
        let nested = ((1, 2), (3, 4));
        let swapped = distributive.cosequence(nested, PairKind);
        assert_eq!(swapped, ((1, 3), (2, 4)));
        assert_eq!(distributive.cosequence(swapped, PairKind), nested);
    }

    #[rstest]
    fn derived_fmap_agrees_with_witness() {
        let distributive = derive_distributive(PairKind);
        assert_eq!(
            distributive.fmap(("a", "bc"), |s: &str| s.len()),
            PairKind.fmap(("a", "bc"), |s: &str| s.len())
        );
    }

    #[rstest]
    fn function_distribute_over_vec_reads_every_function() {
        let distributive = derive_distributive(FunctionKind::<i32>::new());
        let offsets = vec![0, 10, 100];
        let table = distributive.distribute(offsets, VecKind, |offset: i32| {
            Function::new(move |n: i32| n + offset)
        });
        assert_eq!(table.apply(1), vec![1, 11, 101]);
    }
}

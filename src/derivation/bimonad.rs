//! The bimonad of a representable functor whose representation is a monoid.

use std::fmt;
use std::rc::Rc;

use super::monad::RepresentableMonad;
use crate::control::Either;
use crate::representable::Representable;
use crate::typeclass::{Bimonad, Comonad, Functor, Monad, Monoid, TypeConstructor};

/// The [`Bimonad`] derived from a representable witness `W` and a
/// [`Monoid`] witness `M` on its representation `R`.
///
/// The monad half is [`RepresentableMonad`]. The comonad half focuses on
/// the position `M::empty()`:
///
/// - `extract(w)` reads `w` at `empty()`,
/// - `coflat_map(w, f)` evaluates `f`, at every position `m`, on `w`
///   shifted so that its focus moves to `m` (position `x` of the shifted
///   structure holds `w[combine(m, x)]`).
pub struct RepresentableBimonad<W, M, R> {
    monad: RepresentableMonad<W, R>,
    monoid: M,
}

impl<W, M, R> RepresentableBimonad<W, M, R> {
    /// Pairs a representable witness with a monoid on its representation.
    pub const fn new(witness: W, monoid: M) -> Self {
        Self {
            monad: RepresentableMonad::new(witness),
            monoid,
        }
    }

    /// The underlying witness.
    pub const fn witness(&self) -> &W {
        self.monad.witness()
    }

    /// The monoid on the representation type.
    pub const fn monoid(&self) -> &M {
        &self.monoid
    }
}

impl<W: Clone, M: Clone, R> Clone for RepresentableBimonad<W, M, R> {
    fn clone(&self) -> Self {
        Self {
            monad: self.monad.clone(),
            monoid: self.monoid.clone(),
        }
    }
}

impl<W: fmt::Debug, M: fmt::Debug, R> fmt::Debug for RepresentableBimonad<W, M, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RepresentableBimonad")
            .field("witness", self.witness())
            .field("monoid", &self.monoid)
            .finish()
    }
}

/// Derives the [`Bimonad`] of a representable functor from a monoid on its
/// representation type.
///
/// # Examples
///
/// ```rust
/// use tabula::derivation::derive_bimonad;
/// use tabula::typeclass::{All, Any, Comonad, PairKind};
///
/// // `All::empty()` is `true`, the position of the first component.
/// assert_eq!(derive_bimonad(PairKind, All).extract((1, 2)), 1);
/// // `Any::empty()` is `false`, the position of the second component.
/// assert_eq!(derive_bimonad(PairKind, Any).extract((1, 2)), 2);
/// ```
pub const fn derive_bimonad<F, R, W, M>(witness: W, monoid: M) -> RepresentableBimonad<W, M, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
    M: Monoid<R> + Clone + 'static,
{
    RepresentableBimonad::new(witness, monoid)
}

impl<F, R, W, M> Functor<F> for RepresentableBimonad<W, M, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
    M: Monoid<R> + Clone + 'static,
{
    #[inline]
    fn fmap<A, B, Mapper>(&self, fa: F::WithType<A>, function: Mapper) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        self.monad.fmap(fa, function)
    }
}

impl<F, R, W, M> Monad<F> for RepresentableBimonad<W, M, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
    M: Monoid<R> + Clone + 'static,
{
    #[inline]
    fn pure<A>(&self, value: A) -> F::WithType<A>
    where
        A: Clone + 'static,
    {
        self.monad.pure(value)
    }

    #[inline]
    fn flat_map<A, B, Binder>(&self, fa: F::WithType<A>, function: Binder) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Binder: Fn(A) -> F::WithType<B> + 'static,
    {
        self.monad.flat_map(fa, function)
    }

    #[inline]
    fn tail_rec_m<A, B, Step>(&self, initial: A, step: Step) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Step: Fn(A) -> F::WithType<Either<A, B>> + 'static,
    {
        self.monad.tail_rec_m(initial, step)
    }
}

impl<F, R, W, M> Comonad<F> for RepresentableBimonad<W, M, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
    M: Monoid<R> + Clone + 'static,
{
    fn extract<A>(&self, fa: F::WithType<A>) -> A
    where
        A: Clone + 'static,
    {
        self.witness().index_at(fa, self.monoid.empty())
    }

    fn coflat_map<A, B, Extender>(&self, fa: F::WithType<A>, function: Extender) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Extender: Fn(F::WithType<A>) -> B + 'static,
    {
        let source = self.witness().index(fa);
        let witness = self.witness().clone();
        let monoid = Rc::new(self.monoid.clone());
        self.witness().tabulate(move |focus: R| {
            let source = source.clone();
            let monoid = Rc::clone(&monoid);
            let shifted = witness.tabulate(move |offset: R| {
                source.apply(monoid.combine(focus.clone(), offset))
            });
            function(shifted)
        })
    }
}

impl<F, R, W, M> Bimonad<F> for RepresentableBimonad<W, M, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
    M: Monoid<R> + Clone + 'static,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{
        Additive, All, Any, Function, FunctionKind, Identity, IdentityKind, PairKind,
        ProductMonoid, Trivial,
    };
    use rstest::rstest;

    #[rstest]
    #[case(true, "first")]
    #[case(false, "second")]
    fn pair_extract_reads_the_monoid_identity(#[case] use_all: bool, #[case] expected: &str) {
        let pair = ("first", "second");
        let extracted = if use_all {
            derive_bimonad(PairKind, All).extract(pair)
        } else {
            derive_bimonad(PairKind, Any).extract(pair)
        };
        assert_eq!(extracted, expected);
    }

    #[rstest]
    fn pair_coflat_map_shifts_the_focus() {
        let bimonad = derive_bimonad(PairKind, All);
        // Focus `false` combined with any offset is `false`.
        let result = bimonad.coflat_map((1, 2), |(first, second): (i32, i32)| first * 10 + second);
        assert_eq!(result, (12, 22));
    }

    #[rstest]
    fn extract_after_coflat_map_applies_the_function() {
        let bimonad = derive_bimonad(PairKind, Any);
        let summarize = |(first, second): (i32, i32)| first - second;
        let pair = (7, 3);
        assert_eq!(bimonad.extract(bimonad.coflat_map(pair, summarize)), summarize(pair));
    }

    #[rstest]
    fn coflat_map_extract_is_identity() {
        let bimonad = derive_bimonad(PairKind, Any);
        let extractor = bimonad.clone();
        assert_eq!(
            bimonad.coflat_map(('x', 'y'), move |view| extractor.extract(view)),
            ('x', 'y')
        );
    }

    #[rstest]
    fn identity_bimonad_uses_trivial_monoid() {
        let bimonad = derive_bimonad(IdentityKind, Trivial);
        assert_eq!(bimonad.extract(bimonad.pure(9)), 9);
    }

    #[rstest]
    fn function_bimonad_is_the_store_like_comonad() {
        let bimonad = derive_bimonad(FunctionKind::<i32>::new(), Additive);
        let square = Function::new(|n: i32| n.wrapping_mul(n));
        let difference = bimonad.coflat_map(square, |view: Function<i32, i32>| {
            view.apply(1) - view.apply(0)
        });
        // At focus m: (m + 1)^2 - m^2 = 2m + 1.
        assert_eq!(difference.apply(3), 7);
        assert_eq!(bimonad.extract(difference), 1);
    }

    #[rstest]
    fn composed_bimonad_uses_product_monoid() {
        let bimonad = derive_bimonad(PairKind.compose(PairKind), ProductMonoid::new(All, Any));
        assert_eq!(bimonad.extract(((1, 2), (3, 4))), 2);
    }

    #[rstest]
    fn bimonad_identity_wrapper_extract() {
        assert_eq!(derive_bimonad(IdentityKind, Trivial).extract(Identity("only")), "only");
    }
}

//! The monad of a representable functor.

use std::fmt;
use std::marker::PhantomData;

use crate::control::Either;
use crate::representable::Representable;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// The [`Monad`] derived from a representable witness `W` with
/// representation `R`.
///
/// - `pure(x)` is the structure holding `x` at every position.
/// - `flat_map(fa, f)` reads, at each position `r`, the element of
///   `f(fa[r])` at that same `r`.
/// - `tail_rec_m` iterates the step function independently at each
///   position in constant stack space.
pub struct RepresentableMonad<W, R> {
    witness: W,
    representation: PhantomData<fn() -> R>,
}

impl<W, R> RepresentableMonad<W, R> {
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

impl<W: Clone, R> Clone for RepresentableMonad<W, R> {
    fn clone(&self) -> Self {
        Self::new(self.witness.clone())
    }
}

impl<W: Copy, R> Copy for RepresentableMonad<W, R> {}

impl<W: fmt::Debug, R> fmt::Debug for RepresentableMonad<W, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RepresentableMonad")
            .field("witness", &self.witness)
            .finish()
    }
}

/// Derives the [`Monad`] of a representable functor.
///
/// # Examples
///
/// ```rust
/// use tabula::derivation::derive_monad;
/// use tabula::typeclass::{Monad, PairKind};
///
/// let monad = derive_monad(PairKind);
/// assert_eq!(monad.pure("x"), ("x", "x"));
///
/// let doubled = monad.flat_map(("a", "b"), |s: &str| (s.repeat(2), s.repeat(3)));
/// assert_eq!(doubled, ("aa".to_string(), "bbb".to_string()));
/// ```
pub const fn derive_monad<F, R, W>(witness: W) -> RepresentableMonad<W, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
{
    RepresentableMonad::new(witness)
}

impl<F, R, W> Functor<F> for RepresentableMonad<W, R>
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

impl<F, R, W> Monad<F> for RepresentableMonad<W, R>
where
    F: TypeConstructor,
    R: Clone + 'static,
    W: Representable<F, R>,
{
    fn pure<A>(&self, value: A) -> F::WithType<A>
    where
        A: Clone + 'static,
    {
        self.witness.tabulate(move |_| value.clone())
    }

    fn flat_map<A, B, Binder>(&self, fa: F::WithType<A>, function: Binder) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Binder: Fn(A) -> F::WithType<B> + 'static,
    {
        let source = self.witness.index(fa);
        let witness = self.witness.clone();
        self.witness.tabulate(move |position: R| {
            witness.index_at(function(source.apply(position.clone())), position)
        })
    }

    fn tail_rec_m<A, B, Step>(&self, initial: A, step: Step) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Step: Fn(A) -> F::WithType<Either<A, B>> + 'static,
    {
        let witness = self.witness.clone();
        self.witness.tabulate(move |position: R| {
            let mut current = initial.clone();
            loop {
                match witness.index_at(step(current), position.clone()) {
                    Either::Left(next) => current = next,
                    Either::Right(result) => break result,
                }
            }
        })
    }
}

static_assertions::assert_impl_all!(RepresentableMonad<crate::typeclass::PairKind, bool>: Copy, Send, Sync);

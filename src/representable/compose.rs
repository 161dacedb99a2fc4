//! Composition of representable witnesses.
//!
//! If `F` is represented by `R1` and `G` by `R2`, then `F<G<_>>` is
//! represented by `(R1, R2)`: the outer position selects a `G`, the inner
//! position selects an element inside it.

use std::marker::PhantomData;
use std::rc::Rc;

use super::Representable;
use crate::typeclass::{Function, Functor, TypeConstructor};

/// The type constructor `F<G<_>>`.
pub struct ComposeKind<F, G>(PhantomData<fn() -> (F, G)>);

impl<F: TypeConstructor, G: TypeConstructor> TypeConstructor for ComposeKind<F, G> {
    type WithType<A: Clone + 'static> = F::WithType<G::WithType<A>>;
}

/// The functor of `F<G<_>>`, mapping with the inner functor under the
/// outer one.
#[derive(Debug, Clone, Copy)]
pub struct ComposeFunctor<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> ComposeFunctor<Outer, Inner> {
    /// Pairs the outer and inner functor capabilities.
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }
}

impl<F, G, Outer, Inner> Functor<ComposeKind<F, G>> for ComposeFunctor<Outer, Inner>
where
    F: TypeConstructor,
    G: TypeConstructor,
    Outer: Functor<F>,
    Inner: Functor<G> + Clone + 'static,
{
    fn fmap<A, B, Mapper>(
        &self,
        fa: F::WithType<G::WithType<A>>,
        function: Mapper,
    ) -> F::WithType<G::WithType<B>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        let inner = self.inner.clone();
        self.outer.fmap(fa, move |ga: G::WithType<A>| {
            let function = Rc::clone(&function);
            inner.fmap(ga, move |a| function(a))
        })
    }
}

/// The witness for `F<G<_>>` built by [`Representable::compose`].
#[derive(Debug, Clone, Copy)]
pub struct Composed<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> Composed<Outer, Inner> {
    /// Composes `outer` (for `F`) with `inner` (for `G`).
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }

    /// The witness of the outer layer.
    pub const fn outer(&self) -> &Outer {
        &self.outer
    }

    /// The witness of the inner layer.
    pub const fn inner(&self) -> &Inner {
        &self.inner
    }
}

impl<F, G, R1, R2, Outer, Inner> Representable<ComposeKind<F, G>, (R1, R2)>
    for Composed<Outer, Inner>
where
    F: TypeConstructor,
    G: TypeConstructor,
    R1: Clone + 'static,
    R2: Clone + 'static,
    Outer: Representable<F, R1>,
    Inner: Representable<G, R2>,
{
    type Functor = ComposeFunctor<Outer::Functor, Inner::Functor>;

    fn functor(&self) -> Self::Functor {
        ComposeFunctor::new(self.outer.functor(), self.inner.functor())
    }

    fn index<A>(&self, fa: F::WithType<G::WithType<A>>) -> Function<(R1, R2), A>
    where
        A: Clone + 'static,
    {
        let rows = self.outer.index(fa);
        let inner = self.inner.clone();
        Function::new(move |(outer_position, inner_position): (R1, R2)| {
            inner.index_at(rows.apply(outer_position), inner_position)
        })
    }

    fn tabulate<A, Body>(&self, body: Body) -> F::WithType<G::WithType<A>>
    where
        A: Clone + 'static,
        Body: Fn((R1, R2)) -> A + 'static,
    {
        let body = Rc::new(body);
        let curried = self.outer.tabulate(move |outer_position: R1| {
            let body = Rc::clone(&body);
            Function::new(move |inner_position: R2| body((outer_position.clone(), inner_position)))
        });
        let inner = self.inner.clone();
        self.outer.functor().fmap(curried, move |row: Function<R2, A>| {
            inner.tabulate(move |inner_position| row.apply(inner_position))
        })
    }
}

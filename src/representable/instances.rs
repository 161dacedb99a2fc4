//! Representable witnesses for the built-in type constructors.

use super::Representable;
use crate::typeclass::{Function, FunctionKind, Identity, IdentityKind, PairKind};

/// `(A, A)` is a function out of `bool`; `true` selects the first component.
impl Representable<PairKind, bool> for PairKind {
    type Functor = Self;

    #[inline]
    fn functor(&self) -> Self {
        *self
    }

    fn index<A>(&self, (first, second): (A, A)) -> Function<bool, A>
    where
        A: Clone + 'static,
    {
        Function::new(move |is_first: bool| {
            if is_first {
                first.clone()
            } else {
                second.clone()
            }
        })
    }

    #[inline]
    fn tabulate<A, Body>(&self, body: Body) -> (A, A)
    where
        A: Clone + 'static,
        Body: Fn(bool) -> A + 'static,
    {
        (body(true), body(false))
    }
}

impl Representable<IdentityKind, ()> for IdentityKind {
    type Functor = Self;

    #[inline]
    fn functor(&self) -> Self {
        *self
    }

    fn index<A>(&self, fa: Identity<A>) -> Function<(), A>
    where
        A: Clone + 'static,
    {
        let value = fa.0;
        Function::new(move |()| value.clone())
    }

    #[inline]
    fn tabulate<A, Body>(&self, body: Body) -> Identity<A>
    where
        A: Clone + 'static,
        Body: Fn(()) -> A + 'static,
    {
        Identity(body(()))
    }
}

impl<R: Clone + 'static> Representable<FunctionKind<R>, R> for FunctionKind<R> {
    type Functor = Self;

    #[inline]
    fn functor(&self) -> Self {
        *self
    }

    #[inline]
    fn index<A>(&self, fa: Function<R, A>) -> Function<R, A>
    where
        A: Clone + 'static,
    {
        fa
    }

    #[inline]
    fn tabulate<A, Body>(&self, body: Body) -> Function<R, A>
    where
        A: Clone + 'static,
        Body: Fn(R) -> A + 'static,
    {
        Function::new(body)
    }
}

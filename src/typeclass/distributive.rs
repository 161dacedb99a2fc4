//! Distributive type class - the dual of Traversable.
//!
//! A distributive functor `F` can be pulled out of any functor `G`:
//! `G<F<A>>` becomes `F<G<A>>`. Every representable functor is
//! distributive.
//!
//! # Laws
//!
//! ```text
//! distribute(Identity(a), f) == fmap(f(a), Identity)
//! cosequence(Identity(fa)) == fmap(fa, Identity)
//! cosequence(cosequence(ffa)) == ffa
//! ```

use super::functor::Functor;
use super::higher::TypeConstructor;

/// A witness that `F` distributes over every functor.
pub trait Distributive<F: TypeConstructor>: Functor<F> {
    /// Maps `function` over `ga` and pulls the resulting `F` layer outside.
    ///
    /// `outer` is the functor witness of the container `G` being
    /// distributed over.
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
        Mapper: Fn(A) -> F::WithType<B> + 'static;

    /// Swaps the nesting of `G<F<A>>`; `distribute` with the identity.
    #[inline]
    fn cosequence<G, Outer, A>(
        &self,
        gfa: G::WithType<F::WithType<A>>,
        outer: Outer,
    ) -> F::WithType<G::WithType<A>>
    where
        G: TypeConstructor,
        Outer: Functor<G> + Clone + 'static,
        A: Clone + 'static,
    {
        self.distribute::<G, Outer, F::WithType<A>, A, _>(gfa, outer, |fa| fa)
    }
}

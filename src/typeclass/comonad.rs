//! Comonad and Bimonad type classes.
//!
//! A [`Comonad`] is the dual of a monad: instead of putting a value into a
//! context (`pure`) it reads the focused value out of one (`extract`), and
//! instead of `flat_map` it extends a context-consuming function over every
//! position (`coflat_map`).
//!
//! # Laws
//!
//! ```text
//! comonad.extract(comonad.coflat_map(w, f)) == f(w)
//! comonad.coflat_map(w, |x| comonad.extract(x)) == w
//! comonad.coflat_map(comonad.coflat_map(w, f), g)
//!     == comonad.coflat_map(w, |x| g(comonad.coflat_map(x, f)))
//! ```
//!
//! A [`Bimonad`] is both, with the entwining laws
//!
//! ```text
//! extract(pure(a)) == a
//! extract(flatten(ffa)) == extract(fmap(ffa, extract))
//! coflatten(pure(a)) == fmap(pure(a), pure)
//! ```

use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// A witness that `F` has a focused value and can be extended.
pub trait Comonad<F: TypeConstructor>: Functor<F> {
    /// Reads the focused value.
    fn extract<A>(&self, fa: F::WithType<A>) -> A
    where
        A: Clone + 'static;

    /// Applies `function` to every re-focused view of `fa`.
    fn coflat_map<A, B, Extender>(&self, fa: F::WithType<A>, function: Extender) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Extender: Fn(F::WithType<A>) -> B + 'static;

    /// Replaces every position with the view of `fa` focused there.
    #[inline]
    fn coflatten<A>(&self, fa: F::WithType<A>) -> F::WithType<F::WithType<A>>
    where
        A: Clone + 'static,
    {
        self.coflat_map(fa, |view| view)
    }
}

/// A witness that `F` is both a [`Monad`] and a [`Comonad`].
///
/// There are no additional operations; the trait only records that the two
/// structures are compatible (see the module-level laws).
pub trait Bimonad<F: TypeConstructor>: Monad<F> + Comonad<F> {}

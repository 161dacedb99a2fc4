//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! monad.flat_map(monad.pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! monad.flat_map(m, |a| monad.pure(a)) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! monad.flat_map(monad.flat_map(m, f), g) == monad.flat_map(m, |x| monad.flat_map(f(x), g))
//! ```
//!
//! ## Tail Recursion Consistency
//!
//! `tail_rec_m` must agree with the equivalent chain of `flat_map` calls,
//! and must run in constant stack space regardless of how many steps the
//! loop takes.

use super::functor::Functor;
use super::higher::TypeConstructor;
use crate::control::Either;

/// A witness that `F` supports dependent sequencing of computations.
///
/// `tail_rec_m` is part of the required interface rather than a derived
/// operation: a naive definition in terms of `flat_map` recurses once per
/// step, and every implementation must instead loop.
///
/// # Examples
///
/// ```rust
/// use tabula::derivation::derive_monad;
/// use tabula::typeclass::{Monad, PairKind};
///
/// let monad = derive_monad(PairKind);
/// assert_eq!(monad.pure(7), (7, 7));
/// assert_eq!(monad.flat_map((1, 2), |n: i32| (n * 10, n * 100)), (10, 200));
/// ```
pub trait Monad<F: TypeConstructor>: Functor<F> {
    /// Lifts a value into the context.
    fn pure<A>(&self, value: A) -> F::WithType<A>
    where
        A: Clone + 'static;

    /// Applies `function` to the value(s) inside `fa` and flattens the result.
    fn flat_map<A, B, Binder>(&self, fa: F::WithType<A>, function: Binder) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Binder: Fn(A) -> F::WithType<B> + 'static;

    /// Runs `step` repeatedly, starting from `initial`, until it produces
    /// `Either::Right`.
    ///
    /// `Either::Left(next)` continues the loop with `next`. Implementations
    /// must use constant stack space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::control::Either;
    /// use tabula::derivation::derive_monad;
    /// use tabula::typeclass::{Monad, PairKind};
    ///
    /// let monad = derive_monad(PairKind);
    /// let counted = monad.tail_rec_m(100_000_u32, |n| {
    ///     if n == 0 { (Either::Right("done"), Either::Right("done")) }
    ///     else { (Either::Left(n - 1), Either::Left(n - 1)) }
    /// });
    /// assert_eq!(counted, ("done", "done"));
    /// ```
    fn tail_rec_m<A, B, Step>(&self, initial: A, step: Step) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Step: Fn(A) -> F::WithType<Either<A, B>> + 'static;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<A, B, Binder>(&self, fa: F::WithType<A>, function: Binder) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Binder: Fn(A) -> F::WithType<B> + 'static,
    {
        self.flat_map(fa, function)
    }

    /// Removes one level of nesting.
    #[inline]
    fn flatten<A>(&self, ffa: F::WithType<F::WithType<A>>) -> F::WithType<A>
    where
        A: Clone + 'static,
    {
        self.flat_map(ffa, |fa| fa)
    }
}

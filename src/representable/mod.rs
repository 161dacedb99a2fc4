//! Representable functors.
//!
//! A functor `F` is *representable* by a type `R` when `F<A>` is isomorphic
//! to the function type `R -> A`. The isomorphism is given by two
//! operations:
//!
//! - `index`: turns a structure into the function that looks up each
//!   position,
//! - `tabulate`: builds a structure by evaluating a function at every
//!   position.
//!
//! A [`Representable`] witness is the only input the
//! [`derivation`](crate::derivation) engine needs to produce Monad,
//! Bimonad and Distributive instances.
//!
//! # Laws
//!
//! ```text
//! tabulate(index(fa)) == fa
//! index(tabulate(g))(r) == g(r)
//! ```
//!
//! Nothing is validated at construction: a witness that breaks these laws
//! is only detected by the law suites in [`laws`](crate::laws).
//!
//! # Built-in witnesses
//!
//! | Witness            | `F<A>`           | Representation |
//! |--------------------|------------------|----------------|
//! | [`IdentityKind`]   | `Identity<A>`    | `()`           |
//! | [`PairKind`]       | `(A, A)`         | `bool`         |
//! | [`FunctionKind<R>`]| `Function<R, A>` | `R`            |
//!
//! Witnesses compose: [`Representable::compose`] turns witnesses for `F`
//! (by `R1`) and `G` (by `R2`) into a witness for `F<G<_>>` by `(R1, R2)`.
//!
//! # Examples
//!
//! ```rust
//! use tabula::representable::Representable;
//! use tabula::typeclass::PairKind;
//!
//! let pair = PairKind.tabulate(|first: bool| if first { "foo" } else { "bar" });
//! assert_eq!(pair, ("foo", "bar"));
//! assert_eq!(PairKind.index(pair).apply(false), "bar");
//! ```
//!
//! [`IdentityKind`]: crate::typeclass::IdentityKind
//! [`PairKind`]: crate::typeclass::PairKind
//! [`FunctionKind<R>`]: crate::typeclass::FunctionKind

mod compose;
mod instances;

pub use compose::{ComposeFunctor, ComposeKind, Composed};

use crate::typeclass::{Function, Functor, TypeConstructor};

/// A witness that the type constructor `F` is representable by `R`.
///
/// Implementors supply [`index`](Representable::index),
/// [`tabulate`](Representable::tabulate) and the [`Functor`] capability of
/// `F`; everything else is provided.
///
/// Witnesses are immutable values, cheap to clone and freely shared.
///
/// # Examples
///
/// A hand-written witness for a three-slot structure indexed by `u8`:
///
/// ```rust
/// use tabula::representable::Representable;
/// use tabula::typeclass::{Function, Functor, TypeConstructor};
///
/// #[derive(Clone, Copy)]
/// struct TripleKind;
///
/// impl TypeConstructor for TripleKind {
///     type WithType<A: Clone + 'static> = [A; 3];
/// }
///
/// impl Functor<TripleKind> for TripleKind {
///     fn fmap<A, B, Mapper>(&self, fa: [A; 3], function: Mapper) -> [B; 3]
///     where
///         A: Clone + 'static,
///         B: Clone + 'static,
///         Mapper: Fn(A) -> B + 'static,
///     {
///         fa.map(function)
///     }
/// }
///
/// impl Representable<TripleKind, u8> for TripleKind {
///     type Functor = TripleKind;
///
///     fn functor(&self) -> TripleKind {
///         TripleKind
///     }
///
///     fn index<A: Clone + 'static>(&self, fa: [A; 3]) -> Function<u8, A> {
///         Function::new(move |position: u8| fa[usize::from(position % 3)].clone())
///     }
///
///     fn tabulate<A, Body>(&self, body: Body) -> [A; 3]
///     where
///         A: Clone + 'static,
///         Body: Fn(u8) -> A + 'static,
///     {
///         [body(0), body(1), body(2)]
///     }
/// }
///
/// assert_eq!(TripleKind.positions(), [0, 1, 2]);
/// assert_eq!(TripleKind.index_at(['a', 'b', 'c'], 1), 'b');
/// ```
pub trait Representable<F: TypeConstructor, R: Clone + 'static>: Clone + 'static {
    /// The functor capability of `F`.
    type Functor: Functor<F> + Clone + 'static;

    /// Returns the functor capability of `F`.
    fn functor(&self) -> Self::Functor;

    /// Turns a structure into its lookup function.
    fn index<A>(&self, fa: F::WithType<A>) -> Function<R, A>
    where
        A: Clone + 'static;

    /// Builds a structure by evaluating `body` at every position.
    fn tabulate<A, Body>(&self, body: Body) -> F::WithType<A>
    where
        A: Clone + 'static,
        Body: Fn(R) -> A + 'static;

    /// Looks up a single position.
    #[inline]
    fn index_at<A>(&self, fa: F::WithType<A>, position: R) -> A
    where
        A: Clone + 'static,
    {
        self.index(fa).apply(position)
    }

    /// The structure holding, at every position, that position itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::representable::Representable;
    /// use tabula::typeclass::PairKind;
    ///
    /// assert_eq!(PairKind.positions(), (true, false));
    /// ```
    #[inline]
    fn positions(&self) -> F::WithType<R> {
        self.tabulate(|position| position)
    }

    /// Composes this witness (the outer layer) with `inner`.
    ///
    /// The result represents `F<G<_>>` by the pair `(R, R2)` of outer and
    /// inner positions. Nested compositions keep their nesting:
    /// `a.compose(b).compose(c)` is indexed by `((R1, R2), R3)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::representable::Representable;
    /// use tabula::typeclass::PairKind;
    ///
    /// let grid = PairKind.compose(PairKind);
    /// let table = grid.tabulate(|(row, column): (bool, bool)| (row, column));
    /// assert_eq!(table, (((true, true), (true, false)), ((false, true), (false, false))));
    /// assert_eq!(grid.index_at(table, (false, true)), (false, true));
    /// ```
    #[inline]
    fn compose<Inner>(self, inner: Inner) -> Composed<Self, Inner>
    where
        Self: Sized,
    {
        Composed::new(self, inner)
    }
}

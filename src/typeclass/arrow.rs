//! Category, Arrow, Choice and ArrowChoice type classes.
//!
//! These capabilities range over a binary type constructor `P`
//! ([`TypeConstructor2`]), where `P<A, B>` is an arrow from `A` to `B`.
//! Plain functions ([`FunctionArrowKind`]) are the reference instance.
//!
//! - [`Category`]: identity arrows and composition.
//! - [`Arrow`]: lifting functions, and running an arrow on the first
//!   component of a pair.
//! - [`Choice`]: merging two arrows on the branches of an [`Either`].
//! - [`ArrowChoice`]: running arrows on either branch of a sum.
//!
//! # Examples
//!
//! ```rust
//! use tabula::control::Either;
//! use tabula::typeclass::{Arrow, ArrowChoice, Category, FunctionArrowKind};
//!
//! let arrows = FunctionArrowKind;
//! let increment = arrows.lift(|n: i32| n + 1);
//! let describe = arrows.lift(|n: i32| format!("#{n}"));
//! let pipeline = arrows.and_then(increment.clone(), describe);
//! assert_eq!(pipeline.apply(1), "#2");
//!
//! let on_left = arrows.left::<i32, i32, char>(increment);
//! assert_eq!(on_left.apply(Either::Left(1)), Either::Left(2));
//! assert_eq!(on_left.apply(Either::Right('c')), Either::Right('c'));
//! ```

use super::function::Function;
use super::higher::TypeConstructor2;
use crate::control::Either;

/// Identity arrows and associative composition.
///
/// # Laws
///
/// ```text
/// and_then(identity(), f) == f
/// and_then(f, identity()) == f
/// and_then(and_then(f, g), h) == and_then(f, and_then(g, h))
/// ```
pub trait Category<P: TypeConstructor2> {
    /// The identity arrow on `A`.
    fn identity<A>(&self) -> P::WithTypes<A, A>
    where
        A: Clone + 'static;

    /// Runs `first`, then `second` (`first >>> second`).
    fn and_then<A, B, C>(
        &self,
        first: P::WithTypes<A, B>,
        second: P::WithTypes<B, C>,
    ) -> P::WithTypes<A, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static;

    /// Runs `first`, then `second`, written right to left (`second <<< first`).
    #[inline]
    fn compose<A, B, C>(
        &self,
        second: P::WithTypes<B, C>,
        first: P::WithTypes<A, B>,
    ) -> P::WithTypes<A, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        self.and_then(first, second)
    }
}

/// A category into which plain functions embed and whose arrows act on
/// pairs.
pub trait Arrow<P: TypeConstructor2>: Category<P> {
    /// Embeds a plain function.
    fn lift<A, B, Body>(&self, function: Body) -> P::WithTypes<A, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Body: Fn(A) -> B + 'static;

    /// Runs `arrow` on the first component, passing the second through.
    fn first<A, B, C>(&self, arrow: P::WithTypes<A, B>) -> P::WithTypes<(A, C), (B, C)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static;

    /// Runs `arrow` on the second component, passing the first through.
    fn second<A, B, C>(&self, arrow: P::WithTypes<A, B>) -> P::WithTypes<(C, A), (C, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        let swap_in = self.lift(|(c, a): (C, A)| (a, c));
        let swap_out = self.lift(|(b, c): (B, C)| (c, b));
        self.and_then(self.and_then(swap_in, self.first::<A, B, C>(arrow)), swap_out)
    }

    /// Runs two arrows side by side (`f *** g`).
    fn split<A, B, C, D>(
        &self,
        left: P::WithTypes<A, B>,
        right: P::WithTypes<C, D>,
    ) -> P::WithTypes<(A, C), (B, D)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
    {
        self.and_then(self.first::<A, B, C>(left), self.second::<C, D, B>(right))
    }

    /// Feeds one input to two arrows (`f &&& g`).
    fn merge<A, B, C>(
        &self,
        left: P::WithTypes<A, B>,
        right: P::WithTypes<A, C>,
    ) -> P::WithTypes<A, (B, C)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        let duplicate = self.lift(|a: A| (a.clone(), a));
        self.and_then(duplicate, self.split(left, right))
    }

    /// Pre-composes `before` and post-composes `after` (profunctor `dimap`).
    fn dimap<A, B, C, D, Before, After>(
        &self,
        arrow: P::WithTypes<A, B>,
        before: Before,
        after: After,
    ) -> P::WithTypes<C, D>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        Before: Fn(C) -> A + 'static,
        After: Fn(B) -> D + 'static,
    {
        self.and_then(self.and_then(self.lift(before), arrow), self.lift(after))
    }
}

/// A category whose arrows can be merged on the branches of a sum.
///
/// # Laws
///
/// ```text
/// choice(identity(), identity()) == codiagonal()
/// and_then(choice(f, g), h) == choice(and_then(f, h), and_then(g, h))
/// ```
pub trait Choice<P: TypeConstructor2>: Category<P> {
    /// Runs `on_left` on `Left` inputs and `on_right` on `Right` inputs
    /// (`f ||| g`).
    fn choice<A, B, C>(
        &self,
        on_left: P::WithTypes<A, C>,
        on_right: P::WithTypes<B, C>,
    ) -> P::WithTypes<Either<A, B>, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static;

    /// Collapses `Either<A, A>` to `A`.
    fn codiagonal<A>(&self) -> P::WithTypes<Either<A, A>, A>
    where
        A: Clone + 'static,
    {
        self.choice(self.identity(), self.identity())
    }
}

/// An arrow that can act on one branch of a sum.
///
/// # Laws
///
/// ```text
/// left(lift(f)) == lift(|e| e.map_left(f))
/// left(and_then(f, g)) == and_then(left(f), left(g))
/// right(lift(f)) == dimap(left(lift(f)), swap, swap)
/// and_then(f, lift(Left)) == and_then(lift(Left), left(f))
/// and_then(left(f), lift(identity +++ g)) == and_then(lift(identity +++ g), left(f))
/// and_then(left(left(f)), lift(sum_assoc)) == and_then(lift(sum_assoc), left(f))
/// ```
pub trait ArrowChoice<P: TypeConstructor2>: Arrow<P> + Choice<P> {
    /// Runs `on_left` on `Left` inputs and `on_right` on `Right` inputs,
    /// keeping the branch (`f +++ g`).
    fn choose<A, B, C, D>(
        &self,
        on_left: P::WithTypes<A, C>,
        on_right: P::WithTypes<B, D>,
    ) -> P::WithTypes<Either<A, B>, Either<C, D>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static;

    /// Runs `arrow` on `Left` inputs, passing `Right` inputs through.
    fn left<A, B, C>(&self, arrow: P::WithTypes<A, B>) -> P::WithTypes<Either<A, C>, Either<B, C>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        self.choose(arrow, self.identity::<C>())
    }

    /// Runs `arrow` on `Right` inputs, passing `Left` inputs through.
    fn right<A, B, C>(&self, arrow: P::WithTypes<A, B>) -> P::WithTypes<Either<C, A>, Either<C, B>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        self.choose(self.identity::<C>(), arrow)
    }
}

/// Marker and witness for plain functions as arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionArrowKind;

impl TypeConstructor2 for FunctionArrowKind {
    type WithTypes<A: Clone + 'static, B: Clone + 'static> = Function<A, B>;
}

impl Category<FunctionArrowKind> for FunctionArrowKind {
    fn identity<A>(&self) -> Function<A, A>
    where
        A: Clone + 'static,
    {
        Function::identity()
    }

    fn and_then<A, B, C>(&self, first: Function<A, B>, second: Function<B, C>) -> Function<A, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        first.and_then(move |b| second.apply(b))
    }
}

impl Arrow<FunctionArrowKind> for FunctionArrowKind {
    fn lift<A, B, Body>(&self, function: Body) -> Function<A, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Body: Fn(A) -> B + 'static,
    {
        Function::new(function)
    }

    fn first<A, B, C>(&self, arrow: Function<A, B>) -> Function<(A, C), (B, C)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        Function::new(move |(a, c)| (arrow.apply(a), c))
    }
}

impl Choice<FunctionArrowKind> for FunctionArrowKind {
    fn choice<A, B, C>(
        &self,
        on_left: Function<A, C>,
        on_right: Function<B, C>,
    ) -> Function<Either<A, B>, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        Function::new(move |input: Either<A, B>| match input {
            Either::Left(a) => on_left.apply(a),
            Either::Right(b) => on_right.apply(b),
        })
    }
}

impl ArrowChoice<FunctionArrowKind> for FunctionArrowKind {
    fn choose<A, B, C, D>(
        &self,
        on_left: Function<A, C>,
        on_right: Function<B, D>,
    ) -> Function<Either<A, B>, Either<C, D>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
    {
        Function::new(move |input: Either<A, B>| {
            input.bimap(|a| on_left.apply(a), |b| on_right.apply(b))
        })
    }
}

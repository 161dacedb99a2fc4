//! First-class functions as values.
//!
//! [`Function<A, B>`] is a reference-counted `Fn(A) -> B`. It is the
//! element type of the reader functor [`FunctionKind<R>`] (functions out of
//! a fixed domain `R`, the canonical representable functor) and the arrow
//! type of [`FunctionArrowKind`](super::FunctionArrowKind).
//!
//! Functions cannot be compared or printed, so `Debug` renders an opaque
//! placeholder and law checks compare them pointwise.

use std::fmt;
use std::rc::Rc;

use super::functor::Functor;
use super::higher::TypeConstructor;

/// A shareable function from `A` to `B`.
///
/// Cloning is cheap: clones share the same closure.
///
/// # Examples
///
/// ```rust
/// use tabula::typeclass::Function;
///
/// let double = Function::new(|n: i32| n * 2);
/// let describe = double.and_then(|n: i32| format!("got {n}"));
/// assert_eq!(describe.apply(21), "got 42");
/// ```
pub struct Function<A, B>(Rc<dyn Fn(A) -> B>);

impl<A, B> Function<A, B> {
    /// Wraps a closure.
    pub fn new<Body>(body: Body) -> Self
    where
        Body: Fn(A) -> B + 'static,
    {
        Self(Rc::new(body))
    }

    /// Calls the function.
    #[inline]
    pub fn apply(&self, argument: A) -> B {
        (self.0)(argument)
    }
}

impl<A: 'static> Function<A, A> {
    /// The identity function.
    pub fn identity() -> Self {
        Self::new(|value| value)
    }
}

impl<A: 'static, B: 'static> Function<A, B> {
    /// Runs `self`, then `next` on its result.
    pub fn and_then<C, Next>(&self, next: Next) -> Function<A, C>
    where
        Next: Fn(B) -> C + 'static,
    {
        let first = Rc::clone(&self.0);
        Function::new(move |argument| next(first(argument)))
    }
}

impl<A, B> Clone for Function<A, B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, B> fmt::Debug for Function<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Function<{}, {}>",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        )
    }
}

/// Marker and witness for functions out of the fixed domain `R`
/// (the reader functor `R -> _`).
///
/// # Examples
///
/// ```rust
/// use tabula::typeclass::{Function, FunctionKind, Functor};
///
/// let length = Function::new(|text: &'static str| text.len());
/// let doubled = FunctionKind::new().fmap(length, |n: usize| n * 2);
/// assert_eq!(doubled.apply("abc"), 6);
/// ```
pub struct FunctionKind<R>(std::marker::PhantomData<fn(R)>);

impl<R> FunctionKind<R> {
    /// Creates the witness.
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<R> Default for FunctionKind<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for FunctionKind<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FunctionKind<R> {}

impl<R> fmt::Debug for FunctionKind<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "FunctionKind<{}>", std::any::type_name::<R>())
    }
}

impl<R: 'static> TypeConstructor for FunctionKind<R> {
    type WithType<A: Clone + 'static> = Function<R, A>;
}

impl<R: 'static> Functor<FunctionKind<R>> for FunctionKind<R> {
    #[inline]
    fn fmap<A, B, Mapper>(&self, fa: Function<R, A>, function: Mapper) -> Function<R, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        fa.and_then(function)
    }
}

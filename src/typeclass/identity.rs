//! Identity wrapper type - the identity functor.
//!
//! `Identity<A>` wraps a single value and adds no behaviour. It is the
//! trivial representable functor (its representation is `()`), and the
//! law suites use it as the outer container when checking that
//! `distribute` over a single value reduces to `fmap`.

use super::functor::Functor;
use super::higher::TypeConstructor;

/// The identity functor - wraps a value without adding any behaviour.
///
/// # Examples
///
/// ```rust
/// use tabula::typeclass::Identity;
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

/// Marker and witness for [`Identity`].
///
/// # Examples
///
/// ```rust
/// use tabula::typeclass::{Functor, Identity, IdentityKind};
///
/// assert_eq!(IdentityKind.fmap(Identity(2), |n: i32| n + 1), Identity(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityKind;

impl TypeConstructor for IdentityKind {
    type WithType<A: Clone + 'static> = Identity<A>;
}

impl Functor<IdentityKind> for IdentityKind {
    #[inline]
    fn fmap<A, B, Mapper>(&self, fa: Identity<A>, function: Mapper) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no higher-kinded types: a trait cannot abstract over `Option<_>`
//! or `(_, _)` as type constructors. This module emulates them with
//! zero-sized marker types whose generic associated type applies the
//! constructor to an element type.
//!
//! Capabilities such as [`Functor`](super::Functor) are then expressed as
//! traits over the marker (`Functor<PairKind>`), implemented by *witness*
//! values that are always passed explicitly.
//!
//! # Example
//!
//! ```rust
//! use tabula::typeclass::{PairKind, TypeConstructor};
//!
//! fn duplicate<F: TypeConstructor>(value: F::WithType<i32>) -> (F::WithType<i32>, F::WithType<i32>) {
//!     (value.clone(), value)
//! }
//!
//! let pair: <PairKind as TypeConstructor>::WithType<i32> = (1, 2);
//! assert_eq!(duplicate::<PairKind>(pair), ((1, 2), (1, 2)));
//! ```

/// A unary type constructor, represented by a marker type.
///
/// `WithType<A>` is the constructor applied to `A`; for example
/// `<PairKind as TypeConstructor>::WithType<String>` is `(String, String)`.
///
/// Element types and applied types are `Clone + 'static`. Derived
/// instances store structures inside closures and read them back many
/// times, so every applied type must be cheaply duplicable and own its
/// data.
pub trait TypeConstructor: 'static {
    /// The constructor applied to the element type `A`.
    type WithType<A: Clone + 'static>: Clone + 'static;
}

/// A binary type constructor, represented by a marker type.
///
/// Used for arrow-like capabilities ([`Category`](super::Category),
/// [`Arrow`](super::Arrow), [`Choice`](super::Choice)), where
/// `WithTypes<A, B>` is an arrow from `A` to `B`.
pub trait TypeConstructor2: 'static {
    /// The constructor applied to the input type `A` and output type `B`.
    type WithTypes<A: Clone + 'static, B: Clone + 'static>: Clone + 'static;
}

/// Marker for `Option<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionKind;

impl TypeConstructor for OptionKind {
    type WithType<A: Clone + 'static> = Option<A>;
}

/// Marker for `Vec<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VecKind;

impl TypeConstructor for VecKind {
    type WithType<A: Clone + 'static> = Vec<A>;
}

/// Marker for the homogeneous pair `(_, _)`.
///
/// The pair is the smallest interesting representable functor: it is
/// isomorphic to functions `bool -> A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairKind;

impl TypeConstructor for PairKind {
    type WithType<A: Clone + 'static> = (A, A);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_applies_to<F: TypeConstructor, A: Clone + 'static, Expected>()
    where
        F::WithType<A>: Into<Expected>,
    {
    }

    #[rstest]
    fn option_kind_applies_to_option() {
        assert_applies_to::<OptionKind, i32, Option<i32>>();
    }

    #[rstest]
    fn vec_kind_applies_to_vec() {
        assert_applies_to::<VecKind, String, Vec<String>>();
    }

    #[rstest]
    fn pair_kind_applies_to_tuple() {
        let pair: <PairKind as TypeConstructor>::WithType<char> = ('a', 'b');
        assert_eq!(pair, ('a', 'b'));
    }

    #[rstest]
    fn nested_application_is_well_formed() {
        type Nested = <PairKind as TypeConstructor>::WithType<Option<u8>>;
        let nested: Nested = (Some(1), None);
        assert_eq!(nested.clone(), (Some(1), None));
    }

    static_assertions::assert_impl_all!(PairKind: Clone, Copy, Default, Send, Sync);
    static_assertions::assert_impl_all!(OptionKind: Clone, Copy, Default);
}

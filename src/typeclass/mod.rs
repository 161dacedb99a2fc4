//! Type class traits for functional programming abstractions.
//!
//! Every capability in this module is a *witness trait*: a value
//! implementing `Functor<F>` is the evidence that the type constructor `F`
//! is a functor, and generic code receives that value as an explicit
//! argument instead of resolving it from the element type.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Comonad`]: Extracting and extending focused values
//! - [`Bimonad`]: Compatible monad and comonad
//! - [`Distributive`]: Pulling a functor out of any other functor
//! - [`Semigroup`], [`Monoid`]: Associative combination with identity
//! - [`Category`], [`Arrow`], [`Choice`], [`ArrowChoice`]: Arrow-like
//!   binary type constructors
//!
//! ## Higher-Kinded Types Emulation
//!
//! Type constructors are zero-sized marker types implementing
//! [`TypeConstructor`] (or [`TypeConstructor2`]) with a generic associated
//! type. The built-in markers ([`PairKind`], [`IdentityKind`],
//! [`FunctionKind`], [`OptionKind`], [`VecKind`], [`FunctionArrowKind`]) are
//! also their own capability witnesses.
//!
//! # Examples
//!
//! ```rust
//! use tabula::typeclass::{Additive, Functor, Monoid, PairKind};
//!
//! assert_eq!(PairKind.fmap((1, 2), |n: i32| n + 1), (2, 3));
//! assert_eq!(Additive.combine_all(vec![1_u16, 2, 3]), 6);
//! ```

mod arrow;
mod comonad;
mod distributive;
mod function;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;

pub use arrow::{Arrow, ArrowChoice, Category, Choice, FunctionArrowKind};
pub use comonad::{Bimonad, Comonad};
pub use distributive::Distributive;
pub use function::{Function, FunctionKind};
pub use functor::Functor;
pub use higher::{OptionKind, PairKind, TypeConstructor, TypeConstructor2, VecKind};
pub use identity::{Identity, IdentityKind};
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::{
    Additive, All, Any, Concatenation, Multiplicative, ProductMonoid, Semigroup, Trivial,
};

//! Type class instances derived from a [`Representable`] witness.
//!
//! Every structure of a representable functor `F` is a function `R -> A`
//! in disguise, so the reader monad, comonad and distributive instances of
//! functions carry over to `F` through `index` and `tabulate`:
//!
//! - [`derive_monad`]: a [`Monad`](crate::typeclass::Monad) for any
//!   witness
//! - [`derive_bimonad`]: a [`Bimonad`](crate::typeclass::Bimonad) when the
//!   representation type carries a [`Monoid`](crate::typeclass::Monoid)
//! - [`derive_distributive`]: a
//!   [`Distributive`](crate::typeclass::Distributive) for any witness
//!
//! The derived instances only compose closures over the witness; they
//! never inspect or validate it. A witness that breaks the representable
//! laws yields instances that break the corresponding type class laws.
//!
//! # Examples
//!
//! ```rust
//! use tabula::derivation::{derive_bimonad, derive_monad};
//! use tabula::typeclass::{All, Comonad, Monad, PairKind};
//!
//! let monad = derive_monad(PairKind);
//! assert_eq!(monad.pure(1), (1, 1));
//!
//! let bimonad = derive_bimonad(PairKind, All);
//! assert_eq!(bimonad.extract(("first", "second")), "first");
//! ```
//!
//! [`Representable`]: crate::representable::Representable

mod bimonad;
mod distributive;
mod monad;

pub use bimonad::{RepresentableBimonad, derive_bimonad};
pub use distributive::{RepresentableDistributive, derive_distributive};
pub use monad::{RepresentableMonad, derive_monad};

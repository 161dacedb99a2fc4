//! # tabula
//!
//! Representable functors for Rust, and the type classes they give rise to.
//!
//! ## Overview
//!
//! A *representable* functor `F` is one whose values are, up to
//! isomorphism, functions out of a fixed representation type `R`: a pair
//! `(A, A)` is a function `bool -> A`, a wrapped value is a function
//! `() -> A`. Given only that isomorphism (`index` and `tabulate`) this
//! library derives:
//!
//! - **Monad**: `pure`, `flat_map` and a stack-safe `tail_rec_m`
//! - **Bimonad**: Monad plus Comonad, when `R` carries a Monoid
//! - **Distributive**: `distribute` and `cosequence`
//!
//! and ships property-based **law suites** that check any implementation
//! of these type classes, built on `proptest`.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, Comonad, Arrow, etc.)
//! - `control`: Control structures (Either)
//! - `representable`: Representable witnesses and the derivation engine
//! - `laws`: Law suites and the property-test harness
//! - `serde`: Serializable law reports
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let monad = derive_monad(PairKind);
//! assert_eq!(monad.pure("x"), ("x", "x"));
//! assert_eq!(
//!     monad.flat_map(("a", "b"), |s: &str| (s.repeat(2), s.repeat(3))),
//!     ("aa".to_string(), "bbb".to_string())
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use tabula::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "representable")]
    pub use crate::representable::*;

    #[cfg(feature = "representable")]
    pub use crate::derivation::*;

    #[cfg(feature = "laws")]
    pub use crate::laws::{
        Equality, Law, LawConfig, LawContext, LawError, LawOutcome, LawReport, LawViolation,
        RuleSet, assert_laws,
    };
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "representable")]
pub mod representable;

#[cfg(feature = "representable")]
pub mod derivation;

#[cfg(feature = "laws")]
pub mod laws;

//! Property-based law suites.
//!
//! Every type-class instance in this crate, hand-written or derived, is
//! expected to satisfy a set of algebraic laws. This module packages those
//! laws as [`RuleSet`]s that can be checked with `proptest`:
//!
//! 1. Fill a [`LawContext`] with sample strategies and equalities for the
//!    types the suite quantifies over.
//! 2. Build the suite, e.g. [`monad_laws`]. A missing provider or equality
//!    surfaces here as a [`LawError`].
//! 3. Run it with [`RuleSet::check`] for a [`LawReport`], or with
//!    [`assert_laws`] inside a test.
//!
//! Rule sets nest: a suite lists the suites it refines as parents, and
//! checking it checks the parents first.
//!
//! # Examples
//!
//! ```rust
//! use proptest::prelude::*;
//! use tabula::derivation::derive_monad;
//! use tabula::laws::{Equality, LawConfig, LawContext, assert_laws, monad_laws};
//! use tabula::typeclass::{Function, PairKind};
//!
//! fn functions() -> impl Strategy<Value = Function<i32, i32>> {
//!     any::<i32>().prop_map(|offset| Function::new(move |n: i32| n.wrapping_add(offset)))
//! }
//!
//! fn pairs() -> impl Strategy<Value = Function<i32, (i32, i32)>> {
//!     any::<(i32, i32)>().prop_map(|(x, y)| {
//!         Function::new(move |n: i32| (n.wrapping_mul(x), n.wrapping_sub(y)))
//!     })
//! }
//!
//! let points = vec![i32::MIN, -1, 0, 1, i32::MAX];
//! let context = LawContext::new()
//!     .with_arbitrary::<i32>()
//!     .with_arbitrary::<(i32, i32)>()
//!     .with_samples::<Function<i32, i32>, _>(functions())
//!     .with_samples::<Function<i32, (i32, i32)>, _>(pairs())
//!     .with_equality(Equality::<i32>::natural().pointwise(points));
//!
//! let laws = monad_laws::<PairKind, _, i32, i32, i32>(derive_monad(PairKind), &context).unwrap();
//! assert_laws(&laws, &LawConfig::default().with_cases(32));
//! ```

mod arrow;
mod comonad;
mod config;
mod context;
mod distributive;
mod error;
mod functor;
mod monad;
mod monoid;
mod report;
mod representable;
mod rule_set;

pub use arrow::{arrow_choice_laws, arrow_laws, category_laws, choice_laws};
pub use comonad::{bimonad_laws, comonad_laws};
pub use config::LawConfig;
pub use context::{Equality, LawContext, Sample};
pub use distributive::distributive_laws;
pub use error::LawError;
pub use functor::functor_laws;
pub use monad::{STACK_SAFETY_STEPS, monad_laws};
pub use monoid::{monoid_laws, semigroup_laws};
pub use report::{LawOutcome, LawReport, LawViolation};
pub use representable::representable_laws;
pub use rule_set::{Law, Property, RuleSet, assert_laws};

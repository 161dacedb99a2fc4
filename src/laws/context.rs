//! Sample providers and equalities, looked up by type.
//!
//! Law suites are generic over the types they quantify over, so they cannot
//! know how to generate an `F<A>` or decide whether two `F<A>` are equal.
//! A [`LawContext`] carries both, keyed by [`TypeId`]: a suite asks the
//! context for what it needs when it is built, and fails with
//! [`LawError::MissingProvider`] or [`LawError::MissingEquality`] if
//! something is absent.
//!
//! # Examples
//!
//! ```rust
//! use proptest::prelude::*;
//! use tabula::laws::{Equality, LawContext};
//! use tabula::typeclass::Function;
//!
//! let context = LawContext::new()
//!     .with_arbitrary::<i32>()
//!     .with_samples::<Function<i32, i32>, _>(
//!         any::<i32>().prop_map(|offset| Function::new(move |n: i32| n.wrapping_add(offset))),
//!     )
//!     .with_equality(Equality::<i32>::natural().pointwise(vec![-1, 0, 1]));
//!
//! assert!(context.samples::<i32>().is_ok());
//! assert!(context.equality::<Function<i32, i32>>().is_ok());
//! assert!(context.samples::<String>().is_err());
//! ```

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::rc::Rc;

use proptest::arbitrary::{Arbitrary, any};
use proptest::strategy::{BoxedStrategy, Strategy};
use rustc_hash::FxHashMap;

use super::error::LawError;
use crate::representable::Representable;
use crate::typeclass::{Function, TypeConstructor};

// =============================================================================
// Sample
// =============================================================================

/// A generated value, printable whether or not the suite knows `T: Debug`.
///
/// The rendering function is captured when the provider is registered,
/// where the concrete type is known.
pub struct Sample<T> {
    value: T,
    render: fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
}

impl<T> Sample<T> {
    /// Wraps a value that can be printed with `Debug`.
    pub fn new(value: T) -> Self
    where
        T: fmt::Debug,
    {
        Self {
            value,
            render: <T as fmt::Debug>::fmt,
        }
    }

    /// Borrows the value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Clone for Sample<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            render: self.render,
        }
    }
}

impl<T> fmt::Debug for Sample<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.render)(&self.value, formatter)
    }
}

// =============================================================================
// Equality
// =============================================================================

/// A decision procedure for "these two values are the same".
///
/// Values such as [`Function`] have no `PartialEq`; laws about them compare
/// at a fixed set of sample points instead.
pub struct Equality<T>(Rc<dyn Fn(&T, &T) -> bool>);

impl<T> Equality<T> {
    /// An equality from an arbitrary predicate.
    pub fn by<Predicate>(predicate: Predicate) -> Self
    where
        Predicate: Fn(&T, &T) -> bool + 'static,
    {
        Self(Rc::new(predicate))
    }

    /// `PartialEq` equality.
    #[must_use]
    pub fn natural() -> Self
    where
        T: PartialEq,
    {
        Self::by(|left: &T, right: &T| left == right)
    }

    /// Decides whether `left` and `right` are equal.
    #[must_use]
    pub fn test(&self, left: &T, right: &T) -> bool {
        (self.0)(left, right)
    }
}

impl<B: 'static> Equality<B> {
    /// Compares functions by their results at every point of `points`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::laws::Equality;
    /// use tabula::typeclass::Function;
    ///
    /// let equality = Equality::<i32>::natural().pointwise(vec![0, 1, 2]);
    /// let doubled = Function::new(|n: i32| n * 2);
    /// let summed = Function::new(|n: i32| n + n);
    /// assert!(equality.test(&doubled, &summed));
    /// ```
    #[must_use]
    pub fn pointwise<A>(self, points: Vec<A>) -> Equality<Function<A, B>>
    where
        A: Clone + 'static,
    {
        Equality::by(move |left: &Function<A, B>, right: &Function<A, B>| {
            points
                .iter()
                .all(|point| self.test(&left.apply(point.clone()), &right.apply(point.clone())))
        })
    }

    /// Compares representable structures element by element at every
    /// position in `positions`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::laws::Equality;
    /// use tabula::typeclass::{Function, FunctionKind};
    ///
    /// let equality = Equality::<u8>::natural().through_index(FunctionKind::<u8>::new(), vec![0, 255]);
    /// let saturating = Function::new(|n: u8| n.saturating_add(0));
    /// let identity = Function::new(|n: u8| n);
    /// assert!(equality.test(&saturating, &identity));
    /// ```
    #[must_use]
    pub fn through_index<F, R, W>(self, witness: W, positions: Vec<R>) -> Equality<F::WithType<B>>
    where
        F: TypeConstructor,
        R: Clone + 'static,
        W: Representable<F, R>,
        B: Clone,
    {
        Equality::by(move |left: &F::WithType<B>, right: &F::WithType<B>| {
            let left = witness.index(left.clone());
            let right = witness.index(right.clone());
            positions.iter().all(|position| {
                self.test(&left.apply(position.clone()), &right.apply(position.clone()))
            })
        })
    }
}

impl<T> Clone for Equality<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Equality<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Equality<{}>", type_name::<T>())
    }
}

// =============================================================================
// LawContext
// =============================================================================

struct Entry {
    type_name: &'static str,
    value: Rc<dyn Any>,
}

impl Clone for Entry {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            value: Rc::clone(&self.value),
        }
    }
}

/// Sample strategies and equalities for the types law suites quantify over.
#[derive(Clone, Default)]
pub struct LawContext {
    providers: FxHashMap<TypeId, Entry>,
    equalities: FxHashMap<TypeId, Entry>,
}

impl LawContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the sample strategy for `T`, replacing any earlier one.
    #[must_use]
    pub fn with_samples<T, S>(mut self, strategy: S) -> Self
    where
        T: Clone + fmt::Debug + 'static,
        S: Strategy<Value = T> + 'static,
    {
        let samples: BoxedStrategy<Sample<T>> = strategy.prop_map(Sample::new).boxed();
        self.providers.insert(
            TypeId::of::<T>(),
            Entry {
                type_name: type_name::<T>(),
                value: Rc::new(samples),
            },
        );
        self
    }

    /// Registers the equality for `T`, replacing any earlier one.
    #[must_use]
    pub fn with_equality<T: 'static>(mut self, equality: Equality<T>) -> Self {
        self.equalities.insert(
            TypeId::of::<T>(),
            Entry {
                type_name: type_name::<T>(),
                value: Rc::new(equality),
            },
        );
        self
    }

    /// Registers `PartialEq` as the equality for `T`.
    #[must_use]
    pub fn with_natural_equality<T: PartialEq + 'static>(self) -> Self {
        self.with_equality(Equality::<T>::natural())
    }

    /// Registers `proptest`'s `any::<T>()` and `PartialEq` for `T`.
    #[must_use]
    pub fn with_arbitrary<T>(self) -> Self
    where
        T: Arbitrary + Clone + PartialEq + 'static,
    {
        self.with_samples::<T, _>(any::<T>())
            .with_natural_equality::<T>()
    }

    /// The sample strategy for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`LawError::MissingProvider`] if none is registered.
    pub fn samples<T: 'static>(&self) -> Result<BoxedStrategy<Sample<T>>, LawError> {
        self.providers
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast_ref::<BoxedStrategy<Sample<T>>>())
            .cloned()
            .ok_or(LawError::MissingProvider {
                type_name: type_name::<T>(),
            })
    }

    /// The equality for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`LawError::MissingEquality`] if none is registered.
    pub fn equality<T: 'static>(&self) -> Result<Equality<T>, LawError> {
        self.equalities
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast_ref::<Equality<T>>())
            .cloned()
            .ok_or(LawError::MissingEquality {
                type_name: type_name::<T>(),
            })
    }
}

impl fmt::Debug for LawContext {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut providers: Vec<_> = self.providers.values().map(|entry| entry.type_name).collect();
        let mut equalities: Vec<_> = self.equalities.values().map(|entry| entry.type_name).collect();
        providers.sort_unstable();
        equalities.sort_unstable();
        formatter
            .debug_struct("LawContext")
            .field("providers", &providers)
            .field("equalities", &equalities)
            .finish()
    }
}

static_assertions::assert_not_impl_any!(LawContext: Send, Sync);
static_assertions::assert_not_impl_any!(Equality<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::PairKind;
    use proptest::strategy::{Just, ValueTree};
    use proptest::test_runner::TestRunner;
    use rstest::rstest;

    #[rstest]
    fn missing_provider_names_the_type() {
        let error = LawContext::new().samples::<(u8, u8)>().err();
        assert_eq!(error, Some(LawError::MissingProvider { type_name: "(u8, u8)" }));
    }

    #[rstest]
    fn missing_equality_names_the_type() {
        let error = LawContext::new().equality::<bool>().err();
        assert_eq!(error, Some(LawError::MissingEquality { type_name: "bool" }));
    }

    #[rstest]
    fn registered_samples_are_generated() {
        let context = LawContext::new().with_samples::<u8, _>(Just(7_u8));
        let strategy = context.samples::<u8>().unwrap();
        let mut runner = TestRunner::deterministic();
        let sample = strategy.new_tree(&mut runner).unwrap().current();
        assert_eq!(*sample.value(), 7);
        assert_eq!(format!("{sample:?}"), "7");
    }

    #[rstest]
    fn later_registration_replaces_earlier() {
        let context = LawContext::new()
            .with_equality(Equality::<i32>::by(|_, _| false))
            .with_natural_equality::<i32>();
        assert!(context.equality::<i32>().unwrap().test(&1, &1));
    }

    #[rstest]
    #[case(vec![0, 1], true)]
    #[case(vec![0, 1, 2], false)]
    fn pointwise_only_checks_given_points(#[case] points: Vec<i32>, #[case] expected: bool) {
        let equality = Equality::<i32>::natural().pointwise(points);
        let clamp = Function::new(|n: i32| n.min(1));
        let identity = Function::new(|n: i32| n);
        assert_eq!(equality.test(&clamp, &identity), expected);
    }

    #[rstest]
    fn through_index_compares_every_position() {
        let equality = Equality::<char>::natural().through_index(PairKind, vec![true, false]);
        assert!(equality.test(&('a', 'b'), &('a', 'b')));
        assert!(!equality.test(&('a', 'b'), &('a', 'c')));
    }

    #[rstest]
    fn debug_lists_registered_types() {
        let context = LawContext::new().with_arbitrary::<bool>();
        assert_eq!(
            format!("{context:?}"),
            "LawContext { providers: [\"bool\"], equalities: [\"bool\"] }"
        );
    }
}

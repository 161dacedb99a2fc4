//! Semigroup type class - an associative binary operation.
//!
//! A [`Semigroup<T>`] witness knows how to combine two `T`s. The same type
//! can carry several semigroups (integers add and multiply, booleans
//! conjoin and disjoin), so the witness is a separate value chosen by the
//! caller rather than a property of `T`.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! semigroup.combine(semigroup.combine(a, b), c) == semigroup.combine(a, semigroup.combine(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tabula::typeclass::{Additive, All, Concatenation, Semigroup};
//!
//! assert_eq!(Additive.combine(2_i32, 3), 5);
//! assert!(!All.combine(true, false));
//! assert_eq!(Concatenation.combine(String::from("ab"), String::from("cd")), "abcd");
//! ```

/// A witness of an associative binary operation on `T`.
pub trait Semigroup<T> {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(&self, left: T, right: T) -> T;

    /// Combines a non-empty sequence of values, or returns `None` when the
    /// iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::typeclass::{Additive, Semigroup};
    ///
    /// assert_eq!(Additive.reduce_all(vec![1_u8, 2, 3]), Some(6));
    /// assert_eq!(Additive.reduce_all(Vec::<u8>::new()), None);
    /// ```
    fn reduce_all<I>(&self, values: I) -> Option<T>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .reduce(|accumulator, element| self.combine(accumulator, element))
    }
}

/// Integer addition (wrapping on overflow, so it is total and associative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Additive;

/// Integer multiplication (wrapping on overflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Multiplicative;

/// Boolean conjunction; the identity is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct All;

/// Boolean disjunction; the identity is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Any;

/// Concatenation of strings and vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Concatenation;

/// The only semigroup on `()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trivial;

/// Componentwise combination of pairs.
///
/// Used for composed representations `(R1, R2)`.
///
/// # Examples
///
/// ```rust
/// use tabula::typeclass::{Additive, All, ProductMonoid, Semigroup};
///
/// let both = ProductMonoid::new(Additive, All);
/// assert_eq!(both.combine((1_i32, true), (2, false)), (3, false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductMonoid<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> ProductMonoid<First, Second> {
    /// Pairs two witnesses.
    pub const fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }

    /// The witness for the first component.
    pub const fn first(&self) -> &First {
        &self.first
    }

    /// The witness for the second component.
    pub const fn second(&self) -> &Second {
        &self.second
    }
}

macro_rules! impl_integer_semigroups {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Semigroup<$integer> for Additive {
                #[inline]
                fn combine(&self, left: $integer, right: $integer) -> $integer {
                    left.wrapping_add(right)
                }
            }

            impl Semigroup<$integer> for Multiplicative {
                #[inline]
                fn combine(&self, left: $integer, right: $integer) -> $integer {
                    left.wrapping_mul(right)
                }
            }
        )*
    };
}

impl_integer_semigroups!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Semigroup<bool> for All {
    #[inline]
    fn combine(&self, left: bool, right: bool) -> bool {
        left && right
    }
}

impl Semigroup<bool> for Any {
    #[inline]
    fn combine(&self, left: bool, right: bool) -> bool {
        left || right
    }
}

impl Semigroup<String> for Concatenation {
    #[inline]
    fn combine(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }
}

impl<T> Semigroup<Vec<T>> for Concatenation {
    #[inline]
    fn combine(&self, mut left: Vec<T>, right: Vec<T>) -> Vec<T> {
        left.extend(right);
        left
    }
}

impl Semigroup<()> for Trivial {
    #[inline]
    fn combine(&self, (): (), (): ()) {}
}

impl<A, B, First, Second> Semigroup<(A, B)> for ProductMonoid<First, Second>
where
    First: Semigroup<A>,
    Second: Semigroup<B>,
{
    #[inline]
    fn combine(&self, left: (A, B), right: (A, B)) -> (A, B) {
        (
            self.first.combine(left.0, right.0),
            self.second.combine(left.1, right.1),
        )
    }
}

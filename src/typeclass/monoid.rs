//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` (in addition to associativity):
//!
//! ```text
//! monoid.combine(monoid.empty(), a) == a
//! monoid.combine(a, monoid.empty()) == a
//! ```
//!
//! A representable functor whose representation type carries a monoid is a
//! comonad: `extract` reads the structure at `empty()`, and `coflat_map`
//! shifts every position by `combine`.
//!
//! # Examples
//!
//! ```rust
//! use tabula::typeclass::{Additive, All, Monoid};
//!
//! assert_eq!(Monoid::<u32>::empty(&Additive), 0);
//! assert!(Monoid::<bool>::empty(&All));
//! assert_eq!(Additive.combine_all(vec![1_i64, 2, 3]), 6);
//! ```

use super::semigroup::{
    Additive, All, Any, Concatenation, Multiplicative, ProductMonoid, Semigroup, Trivial,
};

/// A witness of a [`Semigroup`] with an identity element.
pub trait Monoid<T>: Semigroup<T> {
    /// The identity element.
    fn empty(&self) -> T;

    /// Combines every value, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::typeclass::{Concatenation, Monoid};
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(Concatenation.combine_all(empty), "");
    /// ```
    fn combine_all<I>(&self, values: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(self.empty(), |accumulator, element| {
                self.combine(accumulator, element)
            })
    }

    /// Returns whether `value` is the identity element.
    fn is_empty_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        *value == self.empty()
    }
}

macro_rules! impl_integer_monoids {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Monoid<$integer> for Additive {
                #[inline]
                fn empty(&self) -> $integer {
                    0
                }
            }

            impl Monoid<$integer> for Multiplicative {
                #[inline]
                fn empty(&self) -> $integer {
                    1
                }
            }
        )*
    };
}

impl_integer_monoids!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Monoid<bool> for All {
    #[inline]
    fn empty(&self) -> bool {
        true
    }
}

impl Monoid<bool> for Any {
    #[inline]
    fn empty(&self) -> bool {
        false
    }
}

impl Monoid<String> for Concatenation {
    #[inline]
    fn empty(&self) -> String {
        String::new()
    }
}

impl<T> Monoid<Vec<T>> for Concatenation {
    #[inline]
    fn empty(&self) -> Vec<T> {
        Vec::new()
    }
}

impl Monoid<()> for Trivial {
    #[inline]
    fn empty(&self) {}
}

impl<A, B, First, Second> Monoid<(A, B)> for ProductMonoid<First, Second>
where
    First: Monoid<A>,
    Second: Monoid<B>,
{
    #[inline]
    fn empty(&self) -> (A, B) {
        (self.first().empty(), self.second().empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-17)]
    #[case(i16::MAX)]
    fn additive_identity(#[case] value: i16) {
        assert_eq!(Additive.combine(Additive.empty(), value), value);
        assert_eq!(Additive.combine(value, Additive.empty()), value);
    }

    #[rstest]
    #[case(7_u64)]
    #[case(u64::MAX)]
    fn multiplicative_identity(#[case] value: u64) {
        assert_eq!(Multiplicative.combine(Multiplicative.empty(), value), value);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn boolean_identities(#[case] value: bool) {
        assert_eq!(All.combine(All.empty(), value), value);
        assert_eq!(Any.combine(value, Any.empty()), value);
    }

    #[rstest]
    fn product_identity_is_pair_of_identities() {
        let witness = ProductMonoid::new(All, Additive);
        assert_eq!(Monoid::<(bool, u8)>::empty(&witness), (true, 0));
    }

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        assert_eq!(Additive.combine_all(Vec::<i32>::new()), 0);
        assert_eq!(Concatenation.combine_all(Vec::<Vec<u8>>::new()), Vec::<u8>::new());
    }

    #[rstest]
    fn is_empty_value_detects_identity() {
        assert!(Any.is_empty_value(&false));
        assert!(!Any.is_empty_value(&true));
        assert!(Trivial.is_empty_value(&()));
    }
}

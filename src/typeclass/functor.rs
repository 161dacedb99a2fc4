//! Functor type class - mapping over container values.
//!
//! A [`Functor`] witness for a type constructor `F` knows how to apply a
//! function to every element of an `F<A>` while preserving its shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! functor.fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! functor.fmap(functor.fmap(fa, f), g) == functor.fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tabula::typeclass::{Functor, OptionKind, PairKind};
//!
//! assert_eq!(PairKind.fmap((1, 2), |n: i32| n * 10), (10, 20));
//! assert_eq!(OptionKind.fmap(Some(5), |n: i32| n.to_string()), Some("5".to_string()));
//! ```

use super::higher::{OptionKind, PairKind, TypeConstructor, VecKind};

/// A witness that `F` can have a function mapped over its elements.
///
/// Unlike a method-style functor, the witness is a value: generic code
/// receives it as an argument and calls `functor.fmap(fa, function)`.
///
/// The mapping function is `Fn` rather than `FnOnce` because containers
/// such as pairs and functions apply it more than once, and `'static`
/// because lazily evaluated containers keep it inside their own closures.
pub trait Functor<F: TypeConstructor> {
    /// Applies `function` to every element of `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::typeclass::{Functor, VecKind};
    ///
    /// assert_eq!(VecKind.fmap(vec![1, 2, 3], |n: i32| n + 1), vec![2, 3, 4]);
    /// ```
    fn fmap<A, B, Mapper>(&self, fa: F::WithType<A>, function: Mapper) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static;

    /// Replaces every element of `fa` with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::typeclass::{Functor, PairKind};
    ///
    /// assert_eq!(PairKind.replace((1, 2), "x"), ("x", "x"));
    /// ```
    #[inline]
    fn replace<A, B>(&self, fa: F::WithType<A>, value: B) -> F::WithType<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.fmap(fa, move |_| value.clone())
    }

    /// Turns a plain function into a function between containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::typeclass::{Functor, OptionKind};
    ///
    /// let length = OptionKind.lift(|text: String| text.len());
    /// assert_eq!(length(Some("four".to_string())), Some(4));
    /// ```
    fn lift<A, B, Mapper>(self, function: Mapper) -> impl Fn(F::WithType<A>) -> F::WithType<B>
    where
        Self: Sized,
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + Clone + 'static,
    {
        move |fa| self.fmap(fa, function.clone())
    }
}

impl Functor<OptionKind> for OptionKind {
    #[inline]
    fn fmap<A, B, Mapper>(&self, fa: Option<A>, function: Mapper) -> Option<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Functor<VecKind> for VecKind {
    #[inline]
    fn fmap<A, B, Mapper>(&self, fa: Vec<A>, function: Mapper) -> Vec<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Functor<PairKind> for PairKind {
    #[inline]
    fn fmap<A, B, Mapper>(&self, (first, second): (A, A), function: Mapper) -> (B, B)
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Mapper: Fn(A) -> B + 'static,
    {
        (function(first), function(second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap_doubles(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionKind.fmap(input, |n: i32| n * 2), expected);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1, 2, 3], vec!["1".to_string(), "2".to_string(), "3".to_string()])]
    fn vec_fmap_preserves_length(#[case] input: Vec<i32>, #[case] expected: Vec<String>) {
        assert_eq!(VecKind.fmap(input, |n: i32| n.to_string()), expected);
    }

    #[rstest]
    fn pair_fmap_applies_to_both_components() {
        assert_eq!(PairKind.fmap(("ab", "cde"), |text: &str| text.len()), (2, 3));
    }

    #[rstest]
    fn pair_identity_law() {
        let pair = (String::from("left"), String::from("right"));
        assert_eq!(PairKind.fmap(pair.clone(), |x| x), pair);
    }

    #[rstest]
    fn pair_composition_law() {
        let first = |n: i32| n.wrapping_add(1);
        let second = |n: i32| n.wrapping_mul(3);
        let composed = PairKind.fmap(PairKind.fmap((4, -7), first), second);
        let fused = PairKind.fmap((4, -7), move |n| second(first(n)));
        assert_eq!(composed, fused);
    }

    #[rstest]
    fn replace_overwrites_every_element() {
        assert_eq!(VecKind.replace(vec![1, 2], 'z'), vec!['z', 'z']);
        assert_eq!(OptionKind.replace(None::<i32>, 'z'), None);
    }

    #[rstest]
    fn lift_can_be_reused() {
        let increment = PairKind.lift(|n: u8| n.saturating_add(1));
        assert_eq!(increment((1, 2)), (2, 3));
        assert_eq!(increment((254, 255)), (255, 255));
    }
}

//! A two-way sum type.
//!
//! `Either<L, R>` plays two roles in this crate:
//!
//! - the loop state of [`Monad::tail_rec_m`](crate::typeclass::Monad::tail_rec_m):
//!   `Left` carries the next input and continues, `Right` carries the
//!   result and stops;
//! - the sum type on which [`Choice`](crate::typeclass::Choice) and
//!   [`ArrowChoice`](crate::typeclass::ArrowChoice) arrows act.
//!
//! # Examples
//!
//! ```rust
//! use tabula::control::Either;
//!
//! let step = |n: u32| if n == 0 { Either::Right("landed") } else { Either::Left(n - 1) };
//!
//! assert_eq!(step(2), Either::Left(1));
//! assert_eq!(step(0).map_right(str::len), Either::Right(6));
//! ```

use std::fmt;

/// A value that is either a `Left(L)` or a `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use tabula::control::Either;
///
/// let done: Either<u32, &str> = Either::Right("done");
/// let next: Either<u32, &str> = Either::Left(3);
/// assert_eq!(done.swap(), Either::Left("done"));
/// assert_eq!(next.map_left(|n| n - 1), Either::Left(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant; in a tail-recursive loop, "continue with this".
    Left(L),
    /// The right variant; in a tail-recursive loop, "finished with this".
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `left_function` to a `Left` and `right_function` to a
    /// `Right`, keeping the branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<A, B, C> Either<Either<A, B>, C> {
    /// Re-associates a nested sum to the right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabula::control::Either;
    ///
    /// let nested: Either<Either<i32, char>, bool> = Either::Left(Either::Right('x'));
    /// assert_eq!(nested.reassociate(), Either::Right(Either::Left('x')));
    /// ```
    #[inline]
    pub fn reassociate(self) -> Either<A, Either<B, C>> {
        match self {
            Self::Left(Either::Left(a)) => Either::Left(a),
            Self::Left(Either::Right(b)) => Either::Right(Either::Left(b)),
            Self::Right(c) => Either::Right(Either::Right(c)),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

//! Control structures for functional programming.
//!
//! - [`Either`]: A value that can be one of two types; the loop state of
//!   `tail_rec_m` and the sum type of arrow choice.
//!
//! # Examples
//!
//! ```rust
//! use tabula::control::Either;
//!
//! fn step(n: u32) -> Either<u32, &'static str> {
//!     if n == 0 { Either::Right("liftoff") } else { Either::Left(n - 1) }
//! }
//!
//! let mut state = 3;
//! let result = loop {
//!     match step(state) {
//!         Either::Left(next) => state = next,
//!         Either::Right(done) => break done,
//!     }
//! };
//! assert_eq!(result, "liftoff");
//! ```

mod either;

pub use either::Either;

//! Law harness error types.
//!
//! # Error Categories
//!
//! - [`LawError::MissingProvider`] / [`LawError::MissingEquality`]: a suite
//!   needs a sample strategy or an equality the [`LawContext`] lacks
//! - [`LawError::DuplicateLaw`] / [`LawError::DuplicateParent`]: a rule set
//!   was declared with clashing names
//! - [`LawError::Violation`]: a law was falsified
//! - [`LawError::Aborted`]: the property runner gave up before reaching a
//!   verdict
//!
//! [`LawContext`]: super::LawContext

use thiserror::Error;

use super::report::LawViolation;

/// Errors raised while building or checking law suites.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawError {
    /// No sample strategy is registered for a type a suite needs.
    #[error("no sample provider registered for `{type_name}`")]
    MissingProvider {
        /// The type lacking a provider.
        type_name: &'static str,
    },

    /// No equality is registered for a type a suite compares.
    #[error("no equality registered for `{type_name}`")]
    MissingEquality {
        /// The type lacking an equality.
        type_name: &'static str,
    },

    /// A rule set declares the same law name twice.
    #[error("rule set `{rule_set}` declares law `{law}` more than once")]
    DuplicateLaw {
        /// The offending rule set.
        rule_set: String,
        /// The repeated law name.
        law: String,
    },

    /// A rule set declares two parents with the same name.
    #[error("rule set `{rule_set}` declares parent `{parent}` more than once")]
    DuplicateParent {
        /// The offending rule set.
        rule_set: String,
        /// The repeated parent name.
        parent: String,
    },

    /// A law was falsified.
    #[error("{0}")]
    Violation(LawViolation),

    /// A law check was aborted before a verdict.
    #[error("law `{law}` of `{suite}` aborted: {reason}")]
    Aborted {
        /// The rule set declaring the law.
        suite: String,
        /// The law name.
        law: String,
        /// Why the runner gave up.
        reason: String,
    },
}

impl LawError {
    /// Returns `true` if the error reports a falsified law.
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }
}

//! Results of checking a rule set.

use std::fmt;

use super::error::LawError;

/// A falsified law, with the shrunk counterexample.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LawViolation {
    /// The rule set declaring the law.
    pub suite: String,
    /// The law name.
    pub law: String,
    /// The failure message of the property.
    pub reason: String,
    /// The `Debug` rendering of the minimal failing input.
    pub counterexample: String,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} / {} falsified: {}; minimal failing input: {}",
            self.suite, self.law, self.reason, self.counterexample
        )
    }
}

/// The verdict on a single law.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum LawOutcome {
    /// Every case held.
    Passed {
        /// The rule set declaring the law.
        suite: String,
        /// The law name.
        law: String,
    },
    /// A counterexample was found.
    Violated(LawViolation),
    /// The runner gave up, typically after too many rejected cases.
    Aborted {
        /// The rule set declaring the law.
        suite: String,
        /// The law name.
        law: String,
        /// Why the runner gave up.
        reason: String,
    },
}

impl LawOutcome {
    /// The rule set declaring the law.
    #[must_use]
    pub fn suite(&self) -> &str {
        match self {
            Self::Passed { suite, .. } | Self::Aborted { suite, .. } => suite,
            Self::Violated(violation) => &violation.suite,
        }
    }

    /// The law name.
    #[must_use]
    pub fn law(&self) -> &str {
        match self {
            Self::Passed { law, .. } | Self::Aborted { law, .. } => law,
            Self::Violated(violation) => &violation.law,
        }
    }

    /// Returns `true` if the law held.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

/// The outcome of every law of a flattened rule set, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LawReport {
    rule_set: String,
    outcomes: Vec<LawOutcome>,
}

impl LawReport {
    pub(crate) const fn new(rule_set: String, outcomes: Vec<LawOutcome>) -> Self {
        Self { rule_set, outcomes }
    }

    /// The name of the checked rule set.
    #[must_use]
    pub fn rule_set(&self) -> &str {
        &self.rule_set
    }

    /// Every outcome, parents' laws first.
    #[must_use]
    pub fn outcomes(&self) -> &[LawOutcome] {
        &self.outcomes
    }

    /// Returns `true` if every law held.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(LawOutcome::is_passed)
    }

    /// The falsified laws.
    pub fn violations(&self) -> impl Iterator<Item = &LawViolation> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            LawOutcome::Violated(violation) => Some(violation),
            _ => None,
        })
    }

    /// Converts the first failure, if any, into an error.
    ///
    /// # Errors
    ///
    /// Returns [`LawError::Violation`] or [`LawError::Aborted`] for the first
    /// law that did not pass.
    pub fn into_result(self) -> Result<(), LawError> {
        self.outcomes
            .into_iter()
            .find_map(|outcome| match outcome {
                LawOutcome::Passed { .. } => None,
                LawOutcome::Violated(violation) => Some(LawError::Violation(violation)),
                LawOutcome::Aborted { suite, law, reason } => {
                    Some(LawError::Aborted { suite, law, reason })
                }
            })
            .map_or(Ok(()), Err)
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "rule set `{}`:", self.rule_set)?;
        for outcome in &self.outcomes {
            match outcome {
                LawOutcome::Passed { suite, law } => {
                    writeln!(formatter, "  {suite} / {law} ... ok")?;
                }
                LawOutcome::Violated(violation) => {
                    writeln!(
                        formatter,
                        "  {} / {} ... FAILED\n    {}\n    minimal failing input: {}",
                        violation.suite, violation.law, violation.reason, violation.counterexample
                    )?;
                }
                LawOutcome::Aborted { suite, law, reason } => {
                    writeln!(formatter, "  {suite} / {law} ... aborted\n    {reason}")?;
                }
            }
        }
        let passed = self.outcomes.iter().filter(|outcome| outcome.is_passed()).count();
        write!(formatter, "{passed} of {} laws held", self.outcomes.len())
    }
}

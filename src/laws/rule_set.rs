//! Named laws grouped into rule sets with parents.

use std::fmt;
use std::rc::Rc;

use proptest::strategy::Strategy;
use proptest::test_runner::{TestCaseError, TestError, TestRunner};
use rustc_hash::FxHashSet;

use super::config::LawConfig;
use super::context::Equality;
use super::error::LawError;
use super::report::{LawOutcome, LawReport, LawViolation};

enum Verdict {
    Passed,
    Violated { reason: String, counterexample: String },
    Aborted { reason: String },
}

/// A named property, checked against freshly generated samples.
pub struct Law {
    name: String,
    check: Rc<dyn Fn(&mut TestRunner) -> Verdict>,
}

impl Law {
    /// Declares a law that must hold for every value `strategy` generates.
    ///
    /// `property` returns `Err` with a diagnostic when the law fails for the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use proptest::prelude::*;
    /// use tabula::laws::{Law, LawConfig, RuleSet};
    ///
    /// let commutative = Law::new("addition commutes", (any::<u8>(), any::<u8>()), |(a, b)| {
    ///     prop_assert_eq!(a.wrapping_add(b), b.wrapping_add(a));
    ///     Ok(())
    /// });
    /// let rule_set = RuleSet::new("u8", Vec::new(), vec![commutative]).unwrap();
    /// assert!(rule_set.check(&LawConfig::default()).is_success());
    /// ```
    pub fn new<S, Property>(name: impl Into<String>, strategy: S, property: Property) -> Self
    where
        S: Strategy + 'static,
        Property: Fn(S::Value) -> Result<(), TestCaseError> + 'static,
    {
        let check = move |runner: &mut TestRunner| match runner.run(&strategy, &property) {
            Ok(()) => Verdict::Passed,
            Err(TestError::Fail(reason, value)) => Verdict::Violated {
                reason: reason.message().to_owned(),
                counterexample: format!("{value:?}"),
            },
            Err(TestError::Abort(reason)) => Verdict::Aborted {
                reason: reason.message().to_owned(),
            },
        };
        Self {
            name: name.into(),
            check: Rc::new(check),
        }
    }

    /// The law name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Clone for Law {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            check: Rc::clone(&self.check),
        }
    }
}

impl fmt::Debug for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Law").field("name", &self.name).finish()
    }
}

/// Fails the current case unless `equality` holds between the two sides.
pub(crate) fn ensure_equal<T>(
    equality: &Equality<T>,
    left: &T,
    right: &T,
    statement: &str,
) -> Result<(), TestCaseError> {
    if equality.test(left, right) {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!("expected {statement}")))
    }
}

/// A law together with the rule set that declares it.
#[derive(Debug, Clone, Copy)]
pub struct Property<'a> {
    /// The declaring rule set.
    pub suite: &'a str,
    /// The law.
    pub law: &'a Law,
}

/// A named collection of laws that extends zero or more parent rule sets.
///
/// The effective laws of a rule set are those of its parents, depth first
/// and in declaration order, followed by its own. A law reached through
/// two parents is checked and reported twice.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    parents: Vec<RuleSet>,
    laws: Vec<Law>,
}

impl RuleSet {
    /// Declares a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`LawError::DuplicateLaw`] if two of `laws` share a name and
    /// [`LawError::DuplicateParent`] if two of `parents` do.
    pub fn new(
        name: impl Into<String>,
        parents: Vec<Self>,
        laws: Vec<Law>,
    ) -> Result<Self, LawError> {
        let name = name.into();

        let mut parent_names = FxHashSet::default();
        if let Some(parent) = parents
            .iter()
            .find(|parent| !parent_names.insert(parent.name.as_str()))
        {
            return Err(LawError::DuplicateParent {
                rule_set: name.clone(),
                parent: parent.name.clone(),
            });
        }

        let mut law_names = FxHashSet::default();
        if let Some(law) = laws.iter().find(|law| !law_names.insert(law.name.as_str())) {
            return Err(LawError::DuplicateLaw {
                rule_set: name.clone(),
                law: law.name.clone(),
            });
        }

        Ok(Self {
            name,
            parents,
            laws,
        })
    }

    /// The rule set name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent rule sets.
    #[must_use]
    pub fn parents(&self) -> &[Self] {
        &self.parents
    }

    /// The laws declared by this rule set itself.
    #[must_use]
    pub fn laws(&self) -> &[Law] {
        &self.laws
    }

    /// Every effective law, parents first, for use by an external runner.
    #[must_use]
    pub fn properties(&self) -> Vec<Property<'_>> {
        let mut properties = Vec::new();
        self.collect_properties(&mut properties);
        properties
    }

    fn collect_properties<'a>(&'a self, properties: &mut Vec<Property<'a>>) {
        for parent in &self.parents {
            parent.collect_properties(properties);
        }
        properties.extend(self.laws.iter().map(|law| Property {
            suite: &self.name,
            law,
        }));
    }

    /// Checks every effective law.
    #[must_use]
    pub fn check(&self, config: &LawConfig) -> LawReport {
        let properties = self.properties();
        tracing::debug!(
            rule_set = %self.name,
            properties = properties.len(),
            cases = config.cases(),
            "checking rule set"
        );

        let outcomes = properties
            .into_iter()
            .enumerate()
            .map(|(position, property)| check_property(property, config, position))
            .collect();

        LawReport::new(self.name.clone(), outcomes)
    }
}

fn check_property(property: Property<'_>, config: &LawConfig, position: usize) -> LawOutcome {
    let suite = property.suite.to_owned();
    let law = property.law.name.clone();
    let mut runner = config.runner_for(position);

    match (property.law.check)(&mut runner) {
        Verdict::Passed => {
            tracing::trace!(%suite, %law, "law satisfied");
            LawOutcome::Passed { suite, law }
        }
        Verdict::Violated {
            reason,
            counterexample,
        } => {
            tracing::warn!(%suite, %law, %reason, "law violated");
            LawOutcome::Violated(LawViolation {
                suite,
                law,
                reason,
                counterexample,
            })
        }
        Verdict::Aborted { reason } => {
            tracing::warn!(%suite, %law, %reason, "law check aborted");
            LawOutcome::Aborted { suite, law, reason }
        }
    }
}

/// Checks `rule_set` and panics with the rendered report if any law fails.
///
/// Meant to be called from `#[test]` functions.
///
/// # Panics
///
/// Panics if a law is violated or its check is aborted.
pub fn assert_laws(rule_set: &RuleSet, config: &LawConfig) {
    let report = rule_set.check(config);
    assert!(report.is_success(), "{report}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn always_holds(name: &str) -> Law {
        Law::new(name, any::<u8>(), |_| Ok(()))
    }

    fn never_holds(name: &str) -> Law {
        Law::new(name, 0_u8..10, |value| {
            prop_assert!(value > 200, "value {} is small", value);
            Ok(())
        })
    }

    #[fixture]
    fn diamond() -> RuleSet {
        let root = RuleSet::new("root", Vec::new(), vec![always_holds("root law")]).unwrap();
        let left = RuleSet::new("left", vec![root.clone()], vec![always_holds("left law")]).unwrap();
        let right = RuleSet::new("right", vec![root], vec![always_holds("right law")]).unwrap();
        RuleSet::new("bottom", vec![left, right], vec![always_holds("bottom law")]).unwrap()
    }

    #[rstest]
    fn properties_flatten_parents_first(diamond: RuleSet) {
        let names: Vec<_> = diamond
            .properties()
            .iter()
            .map(|property| (property.suite, property.law.name()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("root", "root law"),
                ("left", "left law"),
                ("root", "root law"),
                ("right", "right law"),
                ("bottom", "bottom law"),
            ]
        );
    }

    #[rstest]
    fn duplicates_through_parents_are_reported_twice(diamond: RuleSet) {
        let report = diamond.check(&LawConfig::default().with_cases(4));
        assert!(report.is_success());
        let root_reports = report
            .outcomes()
            .iter()
            .filter(|outcome| outcome.law() == "root law")
            .count();
        assert_eq!(root_reports, 2);
    }

    #[rstest]
    fn duplicate_own_law_is_rejected() {
        let result = RuleSet::new("twice", Vec::new(), vec![always_holds("x"), always_holds("x")]);
        assert_eq!(
            result.err(),
            Some(LawError::DuplicateLaw {
                rule_set: "twice".into(),
                law: "x".into()
            })
        );
    }

    #[rstest]
    fn duplicate_parent_is_rejected() {
        let parent = RuleSet::new("parent", Vec::new(), Vec::new()).unwrap();
        let result = RuleSet::new("child", vec![parent.clone(), parent], Vec::new());
        assert_eq!(
            result.err(),
            Some(LawError::DuplicateParent {
                rule_set: "child".into(),
                parent: "parent".into()
            })
        );
    }

    #[rstest]
    fn violation_carries_reason_and_counterexample() {
        let rule_set = RuleSet::new("broken", Vec::new(), vec![never_holds("too small")]).unwrap();
        let report = rule_set.check(&LawConfig::default().with_seed([3; 32]));
        let violation = report.violations().next().unwrap();
        assert_eq!(violation.suite, "broken");
        assert_eq!(violation.law, "too small");
        assert!(violation.reason.contains("is small"));
        assert_eq!(violation.counterexample, "0");
    }

    #[rstest]
    fn rejecting_every_case_aborts() {
        let picky = Law::new("picky", any::<u8>(), |_| Err(TestCaseError::reject("never")));
        let rule_set = RuleSet::new("picky", Vec::new(), vec![picky]).unwrap();
        let report = rule_set.check(&LawConfig::default());
        assert!(matches!(report.outcomes()[0], LawOutcome::Aborted { .. }));
    }

    #[rstest]
    #[should_panic(expected = "too small ... FAILED")]
    fn assert_laws_panics_with_report() {
        let rule_set = RuleSet::new("broken", Vec::new(), vec![never_holds("too small")]).unwrap();
        assert_laws(&rule_set, &LawConfig::default());
    }

    #[rstest]
    fn ensure_equal_fails_with_statement() {
        let natural = Equality::<i32>::natural();
        assert!(ensure_equal(&natural, &1, &1, "one is one").is_ok());
        let failure = ensure_equal(&natural, &1, &2, "one is two").unwrap_err();
        assert!(failure.to_string().contains("expected one is two"));
    }
}

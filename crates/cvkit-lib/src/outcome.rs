// ABOUTME: Tri-state validation outcome and its combinators
// ABOUTME: Success, success with non-blocking issues, or failure carrying at least one error

use crate::{CvkitError, Result, Severity, ValidationIssue};
use std::collections::BTreeMap;

/// Outcome of a validation or value-object construction.
///
/// An outcome is in exactly one state. `SuccessWithWarnings` only ever holds
/// warning or info issues; `Failure` holds at least one error and may also
/// carry the non-blocking issues collected alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    SuccessWithWarnings {
        value: T,
        issues: Vec<ValidationIssue>,
    },
    Failure(Vec<ValidationIssue>),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Build a success carrying non-blocking issues.
    ///
    /// Rejects any issue of severity [`Severity::Error`]. An empty list gives
    /// a plain [`Outcome::Success`].
    pub fn success_with_warnings(value: T, issues: Vec<ValidationIssue>) -> Result<Self> {
        if let Some(blocking) = issues.iter().find(|i| i.is_blocking()) {
            return Err(CvkitError::BlockingIssueInWarnings(blocking.code.clone()));
        }
        if issues.is_empty() {
            return Ok(Self::Success(value));
        }
        Ok(Self::SuccessWithWarnings { value, issues })
    }

    /// Build a failure. The list must contain at least one error.
    pub fn failure(issues: Vec<ValidationIssue>) -> Result<Self> {
        if !issues.iter().any(ValidationIssue::is_blocking) {
            return Err(CvkitError::FailureWithoutError);
        }
        Ok(Self::Failure(issues))
    }

    /// Aggregate collected issues: any error gives a failure holding every
    /// issue, otherwise the value survives with whatever hints were found.
    pub fn from_issues(value: T, issues: Vec<ValidationIssue>) -> Self {
        if issues.iter().any(ValidationIssue::is_blocking) {
            Self::Failure(issues)
        } else if issues.is_empty() {
            Self::Success(value)
        } else {
            Self::SuccessWithWarnings { value, issues }
        }
    }

    /// True for both success states
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// True when the outcome carries any non-blocking issue
    pub fn has_warnings(&self) -> bool {
        self.issues().iter().any(|i| !i.is_blocking())
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) | Self::SuccessWithWarnings { value, .. } => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the value, failing loudly on a failure
    pub fn get_value(&self) -> Result<&T> {
        match self {
            Self::Success(value) | Self::SuccessWithWarnings { value, .. } => Ok(value),
            Self::Failure(issues) => Err(CvkitError::ValueOfFailure(issues.len())),
        }
    }

    pub fn into_value(self) -> Result<T> {
        match self {
            Self::Success(value) | Self::SuccessWithWarnings { value, .. } => Ok(value),
            Self::Failure(issues) => Err(CvkitError::ValueOfFailure(issues.len())),
        }
    }

    /// Take the value, panicking on a failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn expect_value(self, msg: &str) -> T {
        match self {
            Self::Success(value) | Self::SuccessWithWarnings { value, .. } => value,
            Self::Failure(issues) => panic!("{msg}: outcome failed with {} issue(s)", issues.len()),
        }
    }

    /// Every issue, blocking or not
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Success(_) => &[],
            Self::SuccessWithWarnings { issues, .. } | Self::Failure(issues) => issues,
        }
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        match self {
            Self::Success(_) => Vec::new(),
            Self::SuccessWithWarnings { issues, .. } | Self::Failure(issues) => issues,
        }
    }

    /// Error-severity issues
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues().iter().filter(|i| i.is_blocking()).collect()
    }

    /// Warning and info issues
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues().iter().filter(|i| !i.is_blocking()).collect()
    }

    pub fn issues_with_severity(&self, severity: Severity) -> Vec<&ValidationIssue> {
        self.issues().iter().filter(|i| i.severity == severity).collect()
    }

    /// Issues of a failure whose field is exactly `field`; empty for successes.
    pub fn errors_for_field(&self, field: &str) -> Vec<&ValidationIssue> {
        match self {
            Self::Failure(issues) => issues.iter().filter(|i| i.field == field).collect(),
            _ => Vec::new(),
        }
    }

    /// Transform the value of a success. Non-blocking issues are kept.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::SuccessWithWarnings { value, issues } => Outcome::SuccessWithWarnings {
                value: f(value),
                issues,
            },
            Self::Failure(issues) => Outcome::Failure(issues),
        }
    }

    /// Chain a dependent validation. Issues already carried by `self` are
    /// placed ahead of the ones produced by `f`.
    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => f(value),
            Self::SuccessWithWarnings { value, issues } => f(value).with_leading_issues(issues),
            Self::Failure(issues) => Outcome::Failure(issues),
        }
    }

    /// Rewrite every issue's field path, e.g. to re-root it under `work[0]`.
    #[must_use]
    pub fn nested_under(self, prefix: &str) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::SuccessWithWarnings { value, issues } => Self::SuccessWithWarnings {
                value,
                issues: issues.into_iter().map(|i| i.nested_under(prefix)).collect(),
            },
            Self::Failure(issues) => {
                Self::Failure(issues.into_iter().map(|i| i.nested_under(prefix)).collect())
            }
        }
    }

    fn with_leading_issues(self, mut leading: Vec<ValidationIssue>) -> Self {
        if leading.is_empty() {
            return self;
        }
        match self {
            Self::Success(value) => Self::SuccessWithWarnings {
                value,
                issues: leading,
            },
            Self::SuccessWithWarnings { value, issues } => {
                leading.extend(issues);
                Self::SuccessWithWarnings {
                    value,
                    issues: leading,
                }
            }
            Self::Failure(issues) => {
                leading.extend(issues);
                Self::Failure(leading)
            }
        }
    }
}

/// Combine keyed outcomes into one, all or nothing.
///
/// If any input failed, the values are discarded and the result is a single
/// failure listing the issues of every failed input in iteration order.
/// Otherwise the values are collected under their keys and the non-blocking
/// issues of the inputs are kept.
pub fn combine<K, T, I>(results: I) -> Outcome<BTreeMap<K, T>>
where
    K: Ord,
    I: IntoIterator<Item = (K, Outcome<T>)>,
{
    let mut values = BTreeMap::new();
    let mut hints = Vec::new();
    let mut failed = Vec::new();
    let mut any_failure = false;

    for (key, outcome) in results {
        match outcome {
            Outcome::Success(value) => {
                values.insert(key, value);
            }
            Outcome::SuccessWithWarnings { value, issues } => {
                values.insert(key, value);
                hints.extend(issues);
            }
            Outcome::Failure(issues) => {
                any_failure = true;
                failed.extend(issues);
            }
        }
    }

    if any_failure {
        Outcome::Failure(failed)
    } else {
        Outcome::from_issues(values, hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(code: &str, field: &str) -> ValidationIssue {
        ValidationIssue::error(code, field)
    }

    fn warn(code: &str, field: &str) -> ValidationIssue {
        ValidationIssue::warning(code, field)
    }

    #[test]
    fn test_success_with_warnings_rejects_errors() {
        let result = Outcome::success_with_warnings(1, vec![err("missing_name", "name")]);
        assert!(matches!(result, Err(CvkitError::BlockingIssueInWarnings(code)) if code == "missing_name"));

        let ok = Outcome::success_with_warnings(1, vec![warn("brief_name", "name")]).unwrap();
        assert!(ok.is_success());
        assert!(ok.has_warnings());

        let plain = Outcome::success_with_warnings(1, Vec::new()).unwrap();
        assert_eq!(plain, Outcome::Success(1));
    }

    #[test]
    fn test_failure_requires_an_error() {
        assert!(matches!(
            Outcome::<()>::failure(vec![warn("brief_name", "name")]),
            Err(CvkitError::FailureWithoutError)
        ));
        assert!(matches!(
            Outcome::<()>::failure(Vec::new()),
            Err(CvkitError::FailureWithoutError)
        ));
        let failure = Outcome::<()>::failure(vec![err("missing_name", "name")]).unwrap();
        assert!(failure.is_failure());
    }

    #[test]
    fn test_from_issues_picks_state() {
        assert_eq!(Outcome::from_issues(1, Vec::new()), Outcome::Success(1));
        assert!(matches!(
            Outcome::from_issues(1, vec![warn("a", "x")]),
            Outcome::SuccessWithWarnings { value: 1, .. }
        ));
        let failure = Outcome::from_issues(1, vec![warn("a", "x"), err("b", "y")]);
        assert!(failure.is_failure());
        assert_eq!(failure.issues().len(), 2);
        assert_eq!(failure.errors().len(), 1);
        assert_eq!(failure.warnings().len(), 1);
    }

    #[test]
    fn test_value_of_failure_is_an_error() {
        let failure: Outcome<i32> = Outcome::Failure(vec![err("x", "y")]);
        assert!(matches!(failure.get_value(), Err(CvkitError::ValueOfFailure(1))));
        assert!(failure.value().is_none());
        assert!(failure.into_value().is_err());
    }

    #[test]
    #[should_panic(expected = "need a value")]
    fn test_expect_value_panics_on_failure() {
        let failure: Outcome<i32> = Outcome::Failure(vec![err("x", "y")]);
        failure.expect_value("need a value");
    }

    #[test]
    fn test_map_preserves_warnings() {
        let outcome = Outcome::from_issues(2, vec![warn("brief", "summary")]);
        let mapped = outcome.map(|v| v * 10);
        assert_eq!(mapped.value(), Some(&20));
        assert_eq!(mapped.warnings().len(), 1);

        let failure: Outcome<i32> = Outcome::Failure(vec![err("x", "y")]);
        assert_eq!(failure.clone().map(|v| v + 1), failure);
    }

    #[test]
    fn test_flat_map_chains_and_short_circuits() {
        let first = Outcome::from_issues(3, vec![warn("first", "a")]);
        let chained = first.flat_map(|v| Outcome::from_issues(v + 1, vec![warn("second", "b")]));
        assert_eq!(chained.value(), Some(&4));
        let codes: Vec<_> = chained.issues().iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, ["first", "second"]);

        let failed: Outcome<i32> = Outcome::Failure(vec![err("x", "y")]);
        let mut called = false;
        let after = failed.flat_map(|v| {
            called = true;
            Outcome::Success(v)
        });
        assert!(!called);
        assert!(after.is_failure());
    }

    #[test]
    fn test_flat_map_into_failure_keeps_earlier_warnings() {
        let first = Outcome::from_issues(3, vec![warn("first", "a")]);
        let chained: Outcome<i32> = first.flat_map(|_| Outcome::Failure(vec![err("second", "b")]));
        assert!(chained.is_failure());
        assert_eq!(chained.issues().len(), 2);
    }

    #[test]
    fn test_errors_for_field_is_exact() {
        let failure: Outcome<()> = Outcome::Failure(vec![
            err("end_before_start", "endDate"),
            err("missing_start_date", "startDate"),
            warn("future_date", "endDate"),
        ]);
        assert_eq!(failure.errors_for_field("endDate").len(), 2);
        assert_eq!(failure.errors_for_field("end").len(), 0);
        assert!(Outcome::Success(()).errors_for_field("endDate").is_empty());
    }

    #[test]
    fn test_combine_all_success() {
        let combined = combine(vec![("a", Outcome::Success(1)), ("b", Outcome::Success(2))]);
        let expected: BTreeMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(combined, Outcome::Success(expected));
    }

    #[test]
    fn test_combine_any_failure_discards_values() {
        let issue_x = err("invalid_email", "email");
        let combined = combine(vec![
            ("a", Outcome::Success(1)),
            ("b", Outcome::Failure(vec![issue_x.clone()])),
        ]);
        assert_eq!(combined, Outcome::Failure(vec![issue_x]));
    }

    #[test]
    fn test_combine_concatenates_in_iteration_order() {
        let combined: Outcome<BTreeMap<&str, i32>> = combine(vec![
            ("z", Outcome::Failure(vec![err("first", "z")])),
            ("a", Outcome::from_issues(1, vec![warn("ignored", "a")])),
            ("m", Outcome::Failure(vec![err("second", "m")])),
        ]);
        let codes: Vec<_> = combined.issues().iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, ["first", "second"]);
    }

    #[test]
    fn test_combine_keeps_hints_of_successes() {
        let combined = combine(vec![
            ("a", Outcome::from_issues(1, vec![warn("brief", "a")])),
            ("b", Outcome::Success(2)),
        ]);
        assert!(combined.is_success());
        assert!(combined.has_warnings());
    }
}

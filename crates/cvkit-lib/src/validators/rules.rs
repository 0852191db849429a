// ABOUTME: Declarative per-field rule tables and the context rules report into
// ABOUTME: Shared helpers for required text, length hints, dates and URLs

use crate::codes::date as date_codes;
use crate::i18n::{localize, Params, Translator};
use crate::value::{parse_date, DateContext, DateRange, Url};
use crate::{Outcome, RuleConfig, ValidationIssue};
use chrono::NaiveDate;

/// A check over one entity, reporting issues into the context
pub type Check<E> = fn(&E, &mut RuleContext<'_>);

/// One rule and the fields it reports on.
///
/// A rule that spans several fields (a start/end date pair) lists all of
/// them and always runs in full.
pub struct Rule<E> {
    fields: &'static [&'static str],
    check: Check<E>,
}

impl<E> Rule<E> {
    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub fn covers(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    pub fn run(&self, entity: &E, ctx: &mut RuleContext<'_>) {
        (self.check)(entity, ctx);
    }
}

/// Ordered rule table shared by whole-entity and single-field validation
pub struct RuleSet<E> {
    rules: Vec<Rule<E>>,
}

impl<E> Default for RuleSet<E> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<E> RuleSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule(mut self, fields: &'static [&'static str], check: Check<E>) -> Self {
        self.rules.push(Rule { fields, check });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<E>> {
        self.rules.iter()
    }

    /// Rules that report on `field`
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Rule<E>> + 'a {
        self.rules.iter().filter(move |rule| rule.covers(field))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Everything a rule can see while it runs, plus the issues found so far
pub struct RuleContext<'a> {
    translator: &'a dyn Translator,
    config: &'a RuleConfig,
    today: NaiveDate,
    namespace: &'static str,
    issues: Vec<ValidationIssue>,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        translator: &'a dyn Translator,
        config: &'a RuleConfig,
        today: NaiveDate,
        namespace: &'static str,
    ) -> Self {
        Self {
            translator,
            config,
            today,
            namespace,
            issues: Vec::new(),
        }
    }

    pub fn config(&self) -> &RuleConfig {
        self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// Record an issue, translated under this entity's namespace
    pub fn report(&mut self, issue: ValidationIssue) {
        self.report_with(issue, &[]);
    }

    pub fn report_with(&mut self, issue: ValidationIssue, params: &Params<'_>) {
        let issue = localize(self.translator, self.namespace, issue, params);
        self.issues.push(issue);
    }

    /// Keep the issues of a value-object outcome (already translated) and
    /// hand back its value if it succeeded.
    pub fn absorb<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        match outcome {
            Outcome::Success(value) => Some(value),
            Outcome::SuccessWithWarnings { value, issues } => {
                self.issues.extend(issues);
                Some(value)
            }
            Outcome::Failure(issues) => {
                self.issues.extend(issues);
                None
            }
        }
    }

    /// Report `code` as an error on `field` when the text is absent or blank
    pub fn require<'v>(
        &mut self,
        value: &'v Option<String>,
        code: &str,
        field: &str,
    ) -> Option<&'v str> {
        let text = present(value);
        if text.is_none() {
            self.report(ValidationIssue::error(code, field));
        }
        text
    }

    /// Report `issue` when `text` is shorter than `min` characters
    pub fn min_length(&mut self, text: &str, min: usize, issue: ValidationIssue) -> bool {
        let length = text.chars().count();
        if length < min {
            self.report_with(
                issue,
                &[("length", length.to_string()), ("min", min.to_string())],
            );
            return false;
        }
        true
    }

    /// Validate a start/end pair through [`DateRange`]
    pub fn date_range(
        &mut self,
        start: &Option<String>,
        end: &Option<String>,
        context: DateContext,
    ) -> Option<DateRange> {
        let outcome = DateRange::create_with(
            start.as_deref().unwrap_or_default(),
            end.as_deref(),
            context,
            self.today,
            self.translator,
        );
        self.absorb(outcome)
    }

    /// Format check for a standalone optional date
    pub fn date_format(&mut self, value: &Option<String>, field: &str) {
        if let Some(raw) = present(value) {
            if parse_date(raw).is_none() {
                self.report_with(
                    ValidationIssue::error(date_codes::INVALID_DATE, field)
                        .with_suggestion("YYYY-MM-DD"),
                    &[("value", raw.to_string())],
                );
            }
        }
    }

    /// Validate an optional URL through [`Url`], reporting on `field`
    pub fn optional_url(&mut self, value: &Option<String>, field: &str) -> Option<Url> {
        let raw = present(value)?;
        let outcome = Url::create_with(raw, self.translator);
        let outcome = relabel(outcome, field);
        self.absorb(outcome)
    }
}

/// Trimmed text, or `None` when absent or blank
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Move the issues of a value-object outcome onto a different field name
pub fn relabel<T>(outcome: Outcome<T>, field: &str) -> Outcome<T> {
    let rename = |issues: Vec<ValidationIssue>| -> Vec<ValidationIssue> {
        issues
            .into_iter()
            .map(|mut issue| {
                issue.field = field.to_string();
                issue
            })
            .collect()
    };
    match outcome {
        Outcome::Success(value) => Outcome::Success(value),
        Outcome::SuccessWithWarnings { value, issues } => Outcome::SuccessWithWarnings {
            value,
            issues: rename(issues),
        },
        Outcome::Failure(issues) => Outcome::Failure(rename(issues)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::IdentityTranslator;

    struct Pair {
        a: Option<String>,
        b: Option<String>,
    }

    fn check_a(p: &Pair, ctx: &mut RuleContext<'_>) {
        ctx.require(&p.a, "missing_a", "a");
    }

    fn check_both(p: &Pair, ctx: &mut RuleContext<'_>) {
        if p.a.is_some() && p.b.is_none() {
            ctx.report(ValidationIssue::warning("b_without_a", "b"));
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_for_field_selects_covering_rules() {
        let rules = RuleSet::new()
            .rule(&["a"], check_a)
            .rule(&["a", "b"], check_both);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.for_field("a").count(), 2);
        assert_eq!(rules.for_field("b").count(), 1);
        assert_eq!(rules.for_field("c").count(), 0);
    }

    #[test]
    fn test_require_reports_blank_text() {
        let config = RuleConfig::default();
        let mut ctx = RuleContext::new(&IdentityTranslator, &config, today(), "demo");
        let pair = Pair {
            a: Some("   ".to_string()),
            b: None,
        };
        check_a(&pair, &mut ctx);
        let issues = ctx.into_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "missing_a");
        assert_eq!(issues[0].i18n_key.as_deref(), Some("validation.demo.missing_a"));
    }

    #[test]
    fn test_min_length_counts_chars() {
        let config = RuleConfig::default();
        let mut ctx = RuleContext::new(&IdentityTranslator, &config, today(), "demo");
        assert!(ctx.min_length("éèà", 3, ValidationIssue::warning("short", "x")));
        assert!(!ctx.min_length("éè", 3, ValidationIssue::warning("short", "x")));
        assert_eq!(ctx.issues().len(), 1);
    }

    #[test]
    fn test_optional_url_relabels_field() {
        let config = RuleConfig::default();
        let mut ctx = RuleContext::new(&IdentityTranslator, &config, today(), "demo");
        assert!(ctx.optional_url(&None, "website").is_none());
        assert!(ctx.issues().is_empty());

        ctx.optional_url(&Some("http://acme.io".to_string()), "website");
        assert_eq!(ctx.issues()[0].field, "website");
        assert_eq!(ctx.issues()[0].code, "insecure_url");
    }

    #[test]
    fn test_date_format() {
        let config = RuleConfig::default();
        let mut ctx = RuleContext::new(&IdentityTranslator, &config, today(), "demo");
        ctx.date_format(&Some("2020-04".to_string()), "date");
        ctx.date_format(&None, "date");
        assert!(ctx.issues().is_empty());
        ctx.date_format(&Some("April 2020".to_string()), "awards[0].date");
        assert_eq!(ctx.issues()[0].code, "invalid_date");
        assert_eq!(ctx.issues()[0].field, "awards[0].date");
    }
}

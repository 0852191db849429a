// ABOUTME: Rules for side and professional projects
// ABOUTME: Required name and description; a malformed project URL is only a warning

use super::rules::{present, RuleContext, RuleSet};
use super::Entity;
use crate::codes::project as codes;
use crate::model::Project;
use crate::ValidationIssue;
use regex_lite::Regex;
use std::sync::OnceLock;

fn loose_url() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(https?://)?([\w-]+\.)+[\w-]+(/\S*)?$").expect("valid project url regex")
    })
}

impl Entity for Project {
    const NAMESPACE: &'static str = "projects";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "description",
        "highlights",
        "keywords",
        "startDate",
        "endDate",
        "url",
    ];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["name"], name)
            .rule(&["description"], description)
            .rule(&["keywords"], keywords)
            .rule(&["startDate", "endDate"], dates)
            .rule(&["url"], url)
    }
}

fn name(project: &Project, ctx: &mut RuleContext<'_>) {
    ctx.require(&project.name, codes::MISSING_NAME, "name");
}

fn description(project: &Project, ctx: &mut RuleContext<'_>) {
    if let Some(text) = ctx.require(&project.description, codes::MISSING_DESCRIPTION, "description")
    {
        let min = ctx.config().description_min_length;
        ctx.min_length(
            text,
            min,
            ValidationIssue::warning(codes::BRIEF_DESCRIPTION, "description")
                .with_suggestion("Say what the project does, for whom, and your part in it"),
        );
    }
}

fn keywords(project: &Project, ctx: &mut RuleContext<'_>) {
    if project.keywords.iter().all(|k| k.trim().is_empty()) {
        ctx.report(ValidationIssue::warning(codes::MISSING_KEYWORDS, "keywords"));
    }
}

fn dates(project: &Project, ctx: &mut RuleContext<'_>) {
    ctx.date_format(&project.start_date, "startDate");
    ctx.date_format(&project.end_date, "endDate");
}

fn url(project: &Project, ctx: &mut RuleContext<'_>) {
    if let Some(raw) = present(&project.url) {
        if !loose_url().is_match(raw) {
            ctx.report_with(
                ValidationIssue::warning(codes::INVALID_URL, "url"),
                &[("value", raw.to_string())],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::ProjectValidator;
    use super::*;
    use crate::{Outcome, Severity};

    fn complete() -> Project {
        Project {
            name: Some("cvkit".to_string()),
            description: Some(long_text(150)),
            highlights: vec!["Used by 3 recruiting teams".to_string()],
            keywords: vec!["rust".to_string(), "validation".to_string()],
            start_date: Some("2023-02".to_string()),
            end_date: None,
            url: Some("github.com/cvkit/cvkit".to_string()),
        }
    }

    #[test]
    fn test_complete_project() {
        let validator = ProjectValidator::with_settings(settings());
        let project = complete();
        assert_eq!(validator.validate(&project), Outcome::Success(project));
    }

    #[test]
    fn test_required_fields() {
        let validator = ProjectValidator::with_settings(settings());
        let outcome = validator.validate(&Project::default());
        assert!(outcome.is_failure());
        assert_eq!(
            codes(outcome.issues()),
            [codes::MISSING_NAME, codes::MISSING_DESCRIPTION, codes::MISSING_KEYWORDS]
        );
    }

    #[test]
    fn test_bad_url_is_only_a_warning() {
        let validator = ProjectValidator::with_settings(settings());
        let outcome = validator.validate(&Project {
            url: Some("my project site".to_string()),
            ..complete()
        });
        assert!(outcome.is_success());
        assert_eq!(codes(outcome.issues()), [codes::INVALID_URL]);
        assert_eq!(outcome.issues()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_loose_url_accepts_common_forms() {
        for raw in ["https://cvkit.dev", "http://www.acme.io/p?x=1", "acme.io", "sub.acme-corp.co.uk/path"] {
            assert!(loose_url().is_match(raw), "{raw}");
        }
        for raw in ["localhost", "ftp://acme.io", "acme .io"] {
            assert!(!loose_url().is_match(raw), "{raw}");
        }
    }

    #[test]
    fn test_brief_description() {
        let validator = ProjectValidator::with_settings(settings());
        let outcome = validator.validate(&Project {
            description: Some("A CLI.".to_string()),
            ..complete()
        });
        assert_eq!(codes(outcome.issues()), [codes::BRIEF_DESCRIPTION]);
    }

    #[test]
    fn test_malformed_dates_block() {
        let validator = ProjectValidator::with_settings(settings());
        let outcome = validator.validate(&Project {
            start_date: Some("spring 2023".to_string()),
            ..complete()
        });
        assert!(outcome.is_failure());
        assert_eq!(outcome.errors_for_field("startDate")[0].code, "invalid_date");
    }

    #[test]
    fn test_field_validation_matches_whole_entity() {
        let validator = ProjectValidator::with_settings(settings());
        assert_field_issues_match(&validator, &complete());
        assert_field_issues_match(&validator, &Project::default());
        assert_field_issues_match(
            &validator,
            &Project {
                url: Some("nope".to_string()),
                end_date: Some("bad".to_string()),
                ..complete()
            },
        );
    }
}

// ABOUTME: Rules for awards
// ABOUTME: Required title, missing-awarder hint, date format

use super::rules::{present, RuleContext, RuleSet};
use super::Entity;
use crate::codes::award as codes;
use crate::model::Award;
use crate::ValidationIssue;

impl Entity for Award {
    const NAMESPACE: &'static str = "awards";
    const FIELDS: &'static [&'static str] = &["title", "date", "awarder", "summary"];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["title"], title)
            .rule(&["date"], date)
            .rule(&["awarder"], awarder)
    }
}

fn title(award: &Award, ctx: &mut RuleContext<'_>) {
    ctx.require(&award.title, codes::MISSING_TITLE, "title");
}

fn date(award: &Award, ctx: &mut RuleContext<'_>) {
    ctx.date_format(&award.date, "date");
}

fn awarder(award: &Award, ctx: &mut RuleContext<'_>) {
    if present(&award.awarder).is_none() {
        ctx.report(ValidationIssue::warning(codes::MISSING_AWARDER, "awarder"));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::AwardValidator;
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_award_rules() {
        let validator = AwardValidator::with_settings(settings());
        let award = Award {
            title: Some("Best paper".to_string()),
            date: Some("2022-11-04".to_string()),
            awarder: Some("RustConf".to_string()),
            summary: None,
        };
        assert_eq!(validator.validate(&award), Outcome::Success(award.clone()));

        let outcome = validator.validate(&Award {
            awarder: None,
            date: Some("04/11/2022".to_string()),
            ..award
        });
        assert!(outcome.is_failure());
        assert_eq!(codes(outcome.issues()), ["invalid_date", codes::MISSING_AWARDER]);
    }

    #[test]
    fn test_field_validation_matches_whole_entity() {
        let validator = AwardValidator::with_settings(settings());
        assert_field_issues_match(&validator, &Award::default());
    }
}

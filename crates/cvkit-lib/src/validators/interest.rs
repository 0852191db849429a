// ABOUTME: Rules for interests
// ABOUTME: Required name, hint when no keywords are given

use super::rules::{RuleContext, RuleSet};
use super::Entity;
use crate::codes::interest as codes;
use crate::model::Interest;
use crate::ValidationIssue;

impl Entity for Interest {
    const NAMESPACE: &'static str = "interests";
    const FIELDS: &'static [&'static str] = &["name", "keywords"];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["name"], name)
            .rule(&["keywords"], keywords)
    }
}

fn name(interest: &Interest, ctx: &mut RuleContext<'_>) {
    ctx.require(&interest.name, codes::MISSING_NAME, "name");
}

fn keywords(interest: &Interest, ctx: &mut RuleContext<'_>) {
    if interest.keywords.iter().all(|k| k.trim().is_empty()) {
        ctx.report(ValidationIssue::info(codes::MISSING_KEYWORDS, "keywords"));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::InterestValidator;
    use super::*;

    #[test]
    fn test_interest_rules() {
        let validator = InterestValidator::with_settings(settings());
        let climbing = Interest {
            name: Some("Climbing".to_string()),
            keywords: vec!["bouldering".to_string()],
        };
        assert!(!validator.validate(&climbing).has_warnings());

        let bare = validator.validate(&Interest {
            name: Some("Chess".to_string()),
            keywords: Vec::new(),
        });
        assert!(bare.is_success());
        assert_eq!(codes(bare.issues()), [codes::MISSING_KEYWORDS]);

        assert!(validator.validate(&Interest::default()).is_failure());
    }

    #[test]
    fn test_field_validation_matches_whole_entity() {
        let validator = InterestValidator::with_settings(settings());
        assert_field_issues_match(&validator, &Interest::default());
    }
}

// ABOUTME: Rules for spoken languages
// ABOUTME: Required language name; fluency should be present and recognisable

use super::rules::{present, RuleContext, RuleSet};
use super::Entity;
use crate::codes::language as codes;
use crate::model::Language;
use crate::ValidationIssue;

/// CEFR levels and common descriptive fluency labels, lowercase
pub const FLUENCIES: &[&str] = &[
    "a1",
    "a2",
    "b1",
    "b2",
    "c1",
    "c2",
    "native",
    "native speaker",
    "bilingual",
    "fluent",
    "professional",
    "professional working proficiency",
    "full professional proficiency",
    "limited working proficiency",
    "elementary",
    "elementary proficiency",
    "intermediate",
    "advanced",
    "beginner",
    "langue maternelle",
    "bilingue",
    "courant",
    "intermédiaire",
    "débutant",
];

impl Entity for Language {
    const NAMESPACE: &'static str = "languages";
    const FIELDS: &'static [&'static str] = &["language", "fluency"];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["language"], language)
            .rule(&["fluency"], fluency)
    }
}

fn language(language: &Language, ctx: &mut RuleContext<'_>) {
    ctx.require(&language.language, codes::MISSING_LANGUAGE, "language");
}

fn fluency(language: &Language, ctx: &mut RuleContext<'_>) {
    match present(&language.fluency) {
        None => ctx.report(ValidationIssue::warning(codes::MISSING_FLUENCY, "fluency")),
        Some(fluency) if !FLUENCIES.contains(&fluency.to_lowercase().as_str()) => ctx.report_with(
            ValidationIssue::info(codes::UNKNOWN_FLUENCY, "fluency")
                .with_suggestion("Use a CEFR level (A1 to C2) or Native"),
            &[("fluency", fluency.to_string())],
        ),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::LanguageValidator;
    use super::*;
    use crate::Outcome;

    fn language(name: Option<&str>, fluency: Option<&str>) -> Language {
        Language {
            language: name.map(str::to_string),
            fluency: fluency.map(str::to_string),
        }
    }

    #[test]
    fn test_language_rules() {
        let validator = LanguageValidator::with_settings(settings());
        let french = language(Some("French"), Some("Native"));
        assert_eq!(validator.validate(&french), Outcome::Success(french));

        let english = validator.validate(&language(Some("English"), Some("C1")));
        assert!(!english.has_warnings());

        let unknown = validator.validate(&language(Some("German"), Some("pretty good")));
        assert_eq!(codes(unknown.issues()), [codes::UNKNOWN_FLUENCY]);

        let missing = validator.validate(&language(None, None));
        assert!(missing.is_failure());
        assert_eq!(codes(missing.issues()), [codes::MISSING_LANGUAGE, codes::MISSING_FLUENCY]);
    }

    #[test]
    fn test_field_validation_matches_whole_entity() {
        let validator = LanguageValidator::with_settings(settings());
        assert_field_issues_match(&validator, &language(None, Some("so-so")));
    }
}

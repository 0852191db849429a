// ABOUTME: Rules for skills
// ABOUTME: Required name, hints on generic names, undefined levels and empty keyword lists

use super::rules::{present, RuleContext, RuleSet};
use super::Entity;
use crate::codes::skill as codes;
use crate::model::Skill;
use crate::ValidationIssue;

/// Names too broad to tell a reader anything
pub const GENERIC_TERMS: &[&str] = &[
    "programmation",
    "programming",
    "gestion",
    "management",
    "communication",
    "informatique",
    "développement",
    "development",
    "bureautique",
    "office",
];

/// Recognised proficiency levels
pub const LEVELS: &[&str] = &[
    "beginner",
    "intermediate",
    "advanced",
    "expert",
    "master",
    "débutant",
    "intermédiaire",
    "avancé",
];

impl Entity for Skill {
    const NAMESPACE: &'static str = "skills";
    const FIELDS: &'static [&'static str] = &["name", "level", "keywords"];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["name"], name)
            .rule(&["level"], level)
            .rule(&["keywords"], keywords)
    }
}

fn name(skill: &Skill, ctx: &mut RuleContext<'_>) {
    let Some(name) = ctx.require(&skill.name, codes::MISSING_NAME, "name") else {
        return;
    };
    let min = ctx.config().skill_name_min_length;
    ctx.min_length(name, min, ValidationIssue::warning(codes::BRIEF_NAME, "name"));

    let lowered = name.to_lowercase();
    if GENERIC_TERMS.contains(&lowered.as_str()) {
        ctx.report_with(
            ValidationIssue::info(codes::GENERIC_SKILL, "name")
                .with_suggestion("Name the specific tool or technique"),
            &[("name", name.to_string())],
        );
    }
}

fn level(skill: &Skill, ctx: &mut RuleContext<'_>) {
    let known = present(&skill.level)
        .map(str::to_lowercase)
        .is_some_and(|level| LEVELS.contains(&level.as_str()));
    if !known {
        ctx.report(
            ValidationIssue::warning(codes::UNDEFINED_LEVEL, "level")
                .with_suggestion("Beginner, Intermediate, Advanced or Expert"),
        );
    }
}

fn keywords(skill: &Skill, ctx: &mut RuleContext<'_>) {
    if skill.keywords.iter().all(|k| k.trim().is_empty()) {
        ctx.report(ValidationIssue::info(codes::MISSING_KEYWORDS, "keywords"));
    }
}

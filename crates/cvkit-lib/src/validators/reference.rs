// ABOUTME: Rules for references
// ABOUTME: Required referee name and text, hint when the text is too short to be useful

use super::rules::{RuleContext, RuleSet};
use super::Entity;
use crate::codes::reference as codes;
use crate::model::Reference;
use crate::ValidationIssue;

impl Entity for Reference {
    const NAMESPACE: &'static str = "references";
    const FIELDS: &'static [&'static str] = &["name", "reference"];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["name"], name)
            .rule(&["reference"], reference)
    }
}

fn name(reference: &Reference, ctx: &mut RuleContext<'_>) {
    ctx.require(&reference.name, codes::MISSING_NAME, "name");
}

fn reference(reference: &Reference, ctx: &mut RuleContext<'_>) {
    if let Some(text) = ctx.require(&reference.reference, codes::MISSING_REFERENCE, "reference") {
        let min = ctx.config().reference_min_length;
        ctx.min_length(
            text,
            min,
            ValidationIssue::warning(codes::BRIEF_REFERENCE, "reference"),
        );
    }
}

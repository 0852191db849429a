// ABOUTME: Rules for volunteer engagements
// ABOUTME: Required organization and position, brief summary hint, date range

use super::rules::{present, RuleContext, RuleSet};
use super::Entity;
use crate::codes::volunteer as codes;
use crate::model::Volunteer;
use crate::value::DateContext;
use crate::ValidationIssue;

impl Entity for Volunteer {
    const NAMESPACE: &'static str = "volunteer";
    const FIELDS: &'static [&'static str] = &[
        "organization",
        "position",
        "url",
        "startDate",
        "endDate",
        "summary",
        "highlights",
    ];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["organization"], organization)
            .rule(&["position"], position)
            .rule(&["url"], url)
            .rule(&["startDate", "endDate"], dates)
            .rule(&["summary"], summary)
    }
}

fn organization(volunteer: &Volunteer, ctx: &mut RuleContext<'_>) {
    ctx.require(&volunteer.organization, codes::MISSING_ORGANIZATION, "organization");
}

fn position(volunteer: &Volunteer, ctx: &mut RuleContext<'_>) {
    ctx.require(&volunteer.position, codes::MISSING_POSITION, "position");
}

fn url(volunteer: &Volunteer, ctx: &mut RuleContext<'_>) {
    ctx.optional_url(&volunteer.url, "url");
}

fn dates(volunteer: &Volunteer, ctx: &mut RuleContext<'_>) {
    ctx.date_range(&volunteer.start_date, &volunteer.end_date, DateContext::Work);
}

fn summary(volunteer: &Volunteer, ctx: &mut RuleContext<'_>) {
    if let Some(text) = present(&volunteer.summary) {
        let min = ctx.config().summary_min_length;
        ctx.min_length(text, min, ValidationIssue::warning(codes::BRIEF_SUMMARY, "summary"));
    }
}

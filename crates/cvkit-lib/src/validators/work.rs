// ABOUTME: Rules for work experience entries
// ABOUTME: Required company and position, quality hints on summary and highlights, date range

use super::rules::{RuleContext, RuleSet};
use super::Entity;
use crate::codes::work as codes;
use crate::model::Work;
use crate::value::DateContext;
use crate::ValidationIssue;

impl Entity for Work {
    const NAMESPACE: &'static str = "work";
    const FIELDS: &'static [&'static str] = &[
        "company",
        "position",
        "url",
        "startDate",
        "endDate",
        "summary",
        "highlights",
    ];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["company"], company)
            .rule(&["position"], position)
            .rule(&["url"], url)
            .rule(&["startDate", "endDate"], dates)
            .rule(&["summary"], summary)
            .rule(&["highlights"], highlights)
    }
}

fn company(work: &Work, ctx: &mut RuleContext<'_>) {
    ctx.require(&work.company, codes::MISSING_COMPANY, "company");
}

fn position(work: &Work, ctx: &mut RuleContext<'_>) {
    if let Some(position) = ctx.require(&work.position, codes::MISSING_POSITION, "position") {
        let min = ctx.config().position_min_length;
        ctx.min_length(
            position,
            min,
            ValidationIssue::warning(codes::VAGUE_POSITION, "position")
                .with_suggestion("Senior Backend Engineer"),
        );
    }
}

fn url(work: &Work, ctx: &mut RuleContext<'_>) {
    ctx.optional_url(&work.url, "url");
}

fn dates(work: &Work, ctx: &mut RuleContext<'_>) {
    ctx.date_range(&work.start_date, &work.end_date, DateContext::Work);
}

fn summary(work: &Work, ctx: &mut RuleContext<'_>) {
    if let Some(summary) = ctx.require(&work.summary, codes::MISSING_SUMMARY, "summary") {
        let min = ctx.config().summary_min_length;
        ctx.min_length(
            summary,
            min,
            ValidationIssue::warning(codes::BRIEF_SUMMARY, "summary"),
        );
    }
}

fn highlights(work: &Work, ctx: &mut RuleContext<'_>) {
    if work.highlights.iter().all(|h| h.trim().is_empty()) {
        ctx.report(
            ValidationIssue::warning(codes::MISSING_HIGHLIGHTS, "highlights")
                .with_suggestion("List two or three concrete achievements"),
        );
        return;
    }
    let min = ctx.config().highlight_min_length;
    for (i, highlight) in work.highlights.iter().enumerate() {
        let text = highlight.trim();
        if !text.is_empty() {
            ctx.min_length(
                text,
                min,
                ValidationIssue::info(codes::VAGUE_HIGHLIGHT, format!("highlights[{i}]")),
            );
        }
    }
}

// ABOUTME: Rules for education entries
// ABOUTME: Required institution, area and degree; hints on missing GPA and vague course names

use super::rules::{RuleContext, RuleSet};
use super::Entity;
use crate::codes::education as codes;
use crate::model::Education;
use crate::value::DateContext;
use crate::ValidationIssue;
use regex_lite::Regex;
use std::sync::OnceLock;

fn placeholder_course() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(course|projet|module) \d+$").expect("valid course regex")
    })
}

impl Entity for Education {
    const NAMESPACE: &'static str = "education";
    const FIELDS: &'static [&'static str] = &[
        "institution",
        "url",
        "area",
        "studyType",
        "startDate",
        "endDate",
        "score",
        "courses",
    ];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["institution"], institution)
            .rule(&["url"], url)
            .rule(&["area"], area)
            .rule(&["studyType"], study_type)
            .rule(&["startDate", "endDate"], dates)
            .rule(&["score"], score)
            .rule(&["courses"], courses)
    }
}

fn institution(education: &Education, ctx: &mut RuleContext<'_>) {
    ctx.require(&education.institution, codes::MISSING_INSTITUTION, "institution");
}

fn url(education: &Education, ctx: &mut RuleContext<'_>) {
    ctx.optional_url(&education.url, "url");
}

fn area(education: &Education, ctx: &mut RuleContext<'_>) {
    ctx.require(&education.area, codes::MISSING_AREA, "area");
}

fn study_type(education: &Education, ctx: &mut RuleContext<'_>) {
    ctx.require(&education.study_type, codes::MISSING_STUDY_TYPE, "studyType");
}

fn dates(education: &Education, ctx: &mut RuleContext<'_>) {
    ctx.date_range(
        &education.start_date,
        &education.end_date,
        DateContext::Education,
    );
}

fn score(education: &Education, ctx: &mut RuleContext<'_>) {
    if education.score.as_deref().map_or(true, |s| s.trim().is_empty()) {
        ctx.report(ValidationIssue::info(codes::MISSING_GPA, "score"));
    }
}

fn courses(education: &Education, ctx: &mut RuleContext<'_>) {
    let min = ctx.config().course_min_length;
    for (i, course) in education.courses.iter().enumerate() {
        let name = course.trim();
        if name.chars().count() < min || placeholder_course().is_match(name) {
            ctx.report_with(
                ValidationIssue::info(codes::VAGUE_COURSE, format!("courses[{i}]"))
                    .with_suggestion("Use the course's actual title"),
                &[("course", name.to_string())],
            );
        }
    }
}

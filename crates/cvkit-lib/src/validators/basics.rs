// ABOUTME: Rules for the basics section (identity and contact details)
// ABOUTME: Email, phone and URL go through their value objects; profiles need network and username

use super::rules::{present, relabel, RuleContext, RuleSet};
use super::Entity;
use crate::codes::basics as codes;
use crate::model::Basics;
use crate::value::{Email, Phone, Url};
use crate::ValidationIssue;

impl Entity for Basics {
    const NAMESPACE: &'static str = "basics";
    const FIELDS: &'static [&'static str] = &[
        "name", "label", "image", "email", "phone", "url", "summary", "location", "profiles",
    ];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["name"], name)
            .rule(&["label"], label)
            .rule(&["email"], email)
            .rule(&["phone"], phone)
            .rule(&["url"], url)
            .rule(&["summary"], summary)
            .rule(&["profiles"], profiles)
    }
}

fn name(basics: &Basics, ctx: &mut RuleContext<'_>) {
    ctx.require(&basics.name, codes::MISSING_NAME, "name");
}

fn label(basics: &Basics, ctx: &mut RuleContext<'_>) {
    if present(&basics.label).is_none() {
        ctx.report(
            ValidationIssue::warning(codes::MISSING_LABEL, "label")
                .with_suggestion("A one-line headline such as \"Backend Engineer\""),
        );
    }
}

/// Email is required: an absent address reports `missing_email`
fn email(basics: &Basics, ctx: &mut RuleContext<'_>) {
    let outcome = Email::create_with(
        basics.email.as_deref().unwrap_or_default(),
        ctx.translator(),
    );
    ctx.absorb(outcome);
}

fn phone(basics: &Basics, ctx: &mut RuleContext<'_>) {
    if let Some(raw) = present(&basics.phone) {
        let outcome = Phone::create_with(raw, ctx.translator());
        ctx.absorb(outcome);
    }
}

fn url(basics: &Basics, ctx: &mut RuleContext<'_>) {
    ctx.optional_url(&basics.url, "url");
}

fn summary(basics: &Basics, ctx: &mut RuleContext<'_>) {
    if let Some(text) = present(&basics.summary) {
        let min = ctx.config().summary_min_length;
        ctx.min_length(text, min, ValidationIssue::warning(codes::BRIEF_SUMMARY, "summary"));
    }
}

fn profiles(basics: &Basics, ctx: &mut RuleContext<'_>) {
    for (i, profile) in basics.profiles.iter().enumerate() {
        let field = format!("profiles[{i}]");
        if present(&profile.network).is_none() || present(&profile.username).is_none() {
            ctx.report(ValidationIssue::warning(codes::INCOMPLETE_PROFILE, field.clone()));
        }
        if let Some(raw) = present(&profile.url) {
            let outcome = Url::create_with(raw, ctx.translator());
            ctx.absorb(relabel(outcome, &format!("{field}.url")));
        }
    }
}

// ABOUTME: Rules for certificates
// ABOUTME: Required name, missing-issuer hint, date format and URL checks

use super::rules::{present, RuleContext, RuleSet};
use super::Entity;
use crate::codes::certificate as codes;
use crate::model::Certificate;
use crate::ValidationIssue;

impl Entity for Certificate {
    const NAMESPACE: &'static str = "certificates";
    const FIELDS: &'static [&'static str] = &["name", "date", "issuer", "url"];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["name"], name)
            .rule(&["date"], date)
            .rule(&["issuer"], issuer)
            .rule(&["url"], url)
    }
}

fn name(certificate: &Certificate, ctx: &mut RuleContext<'_>) {
    ctx.require(&certificate.name, codes::MISSING_NAME, "name");
}

fn date(certificate: &Certificate, ctx: &mut RuleContext<'_>) {
    ctx.date_format(&certificate.date, "date");
}

fn issuer(certificate: &Certificate, ctx: &mut RuleContext<'_>) {
    if present(&certificate.issuer).is_none() {
        ctx.report(ValidationIssue::warning(codes::MISSING_ISSUER, "issuer"));
    }
}

fn url(certificate: &Certificate, ctx: &mut RuleContext<'_>) {
    ctx.optional_url(&certificate.url, "url");
}

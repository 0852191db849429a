// ABOUTME: Rules for publications
// ABOUTME: Required name, missing-publisher hint, release date format and URL checks

use super::rules::{present, RuleContext, RuleSet};
use super::Entity;
use crate::codes::publication as codes;
use crate::model::Publication;
use crate::ValidationIssue;

impl Entity for Publication {
    const NAMESPACE: &'static str = "publications";
    const FIELDS: &'static [&'static str] = &["name", "publisher", "releaseDate", "url", "summary"];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["name"], name)
            .rule(&["publisher"], publisher)
            .rule(&["releaseDate"], release_date)
            .rule(&["url"], url)
    }
}

fn name(publication: &Publication, ctx: &mut RuleContext<'_>) {
    ctx.require(&publication.name, codes::MISSING_NAME, "name");
}

fn publisher(publication: &Publication, ctx: &mut RuleContext<'_>) {
    if present(&publication.publisher).is_none() {
        ctx.report(ValidationIssue::warning(codes::MISSING_PUBLISHER, "publisher"));
    }
}

fn release_date(publication: &Publication, ctx: &mut RuleContext<'_>) {
    ctx.date_format(&publication.release_date, "releaseDate");
}

fn url(publication: &Publication, ctx: &mut RuleContext<'_>) {
    ctx.optional_url(&publication.url, "url");
}

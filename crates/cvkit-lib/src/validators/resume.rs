// ABOUTME: Whole-résumé checks and the full audit across every section
// ABOUTME: Structural rules on basics plus date format checks on every dated item

use super::rules::{present, RuleContext, RuleSet};
use super::{Entity, Validator, ValidatorSettings};
use crate::codes::{basics as basics_codes, resume as codes};
use crate::i18n::localize;
use crate::model::{
    Award, Basics, Certificate, Education, Project, Publication, Resume, Volunteer, Work,
};
use crate::value::{Email, Phone};
use crate::{Outcome, ValidationIssue};
use tracing::debug;

impl Entity for Resume {
    const NAMESPACE: &'static str = "resume";
    const FIELDS: &'static [&'static str] = &[
        "basics",
        "work",
        "volunteer",
        "education",
        "awards",
        "certificates",
        "publications",
        "skills",
        "languages",
        "interests",
        "references",
        "projects",
    ];

    fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .rule(&["basics"], basics)
            .rule(&["work"], |r, ctx| item_dates(ctx, &r.work))
            .rule(&["volunteer"], |r, ctx| item_dates(ctx, &r.volunteer))
            .rule(&["education"], |r, ctx| item_dates(ctx, &r.education))
            .rule(&["awards"], |r, ctx| item_dates(ctx, &r.awards))
            .rule(&["certificates"], |r, ctx| item_dates(ctx, &r.certificates))
            .rule(&["publications"], |r, ctx| item_dates(ctx, &r.publications))
            .rule(&["projects"], |r, ctx| item_dates(ctx, &r.projects))
    }
}

fn basics(resume: &Resume, ctx: &mut RuleContext<'_>) {
    let Some(basics) = &resume.basics else {
        ctx.report(ValidationIssue::error(codes::MISSING_BASICS, "basics"));
        return;
    };
    ctx.require(&basics.name, basics_codes::MISSING_NAME, "basics.name");

    let email = Email::create_with(
        basics.email.as_deref().unwrap_or_default(),
        ctx.translator(),
    );
    ctx.absorb(email.nested_under("basics"));

    if let Some(raw) = present(&basics.phone) {
        let phone = Phone::create_with(raw, ctx.translator());
        ctx.absorb(phone.nested_under("basics"));
    }
}

/// An item whose date fields are format-checked at résumé level
trait Dated: Entity {
    fn dates(&self) -> Vec<(&'static str, &Option<String>)>;
}

impl Dated for Work {
    fn dates(&self) -> Vec<(&'static str, &Option<String>)> {
        vec![("startDate", &self.start_date), ("endDate", &self.end_date)]
    }
}

impl Dated for Volunteer {
    fn dates(&self) -> Vec<(&'static str, &Option<String>)> {
        vec![("startDate", &self.start_date), ("endDate", &self.end_date)]
    }
}

impl Dated for Education {
    fn dates(&self) -> Vec<(&'static str, &Option<String>)> {
        vec![("startDate", &self.start_date), ("endDate", &self.end_date)]
    }
}

impl Dated for Project {
    fn dates(&self) -> Vec<(&'static str, &Option<String>)> {
        vec![("startDate", &self.start_date), ("endDate", &self.end_date)]
    }
}

impl Dated for Award {
    fn dates(&self) -> Vec<(&'static str, &Option<String>)> {
        vec![("date", &self.date)]
    }
}

impl Dated for Certificate {
    fn dates(&self) -> Vec<(&'static str, &Option<String>)> {
        vec![("date", &self.date)]
    }
}

impl Dated for Publication {
    fn dates(&self) -> Vec<(&'static str, &Option<String>)> {
        vec![("releaseDate", &self.release_date)]
    }
}

fn item_dates<T: Dated>(ctx: &mut RuleContext<'_>, items: &[T]) {
    for (i, item) in items.iter().enumerate() {
        for (field, value) in item.dates() {
            ctx.date_format(value, &format!("{}[{i}].{field}", T::NAMESPACE));
        }
    }
}

impl Validator<Resume> {
    /// Full audit: every section validator over every item, see [`audit`]
    pub fn audit(&self, resume: &Resume) -> Outcome<Resume> {
        audit(resume, self.settings())
    }
}

/// Run every section's validator over every item of a résumé.
///
/// Issues are re-rooted under their item (`work[2].summary`) and aggregated
/// into one outcome, so a caller can show every problem at once.
pub fn audit(resume: &Resume, settings: &ValidatorSettings) -> Outcome<Resume> {
    let mut issues = Vec::new();

    match &resume.basics {
        Some(basics) => {
            let found = Validator::<Basics>::with_settings(settings.clone()).collect(basics);
            issues.extend(found.into_iter().map(|i| i.nested_under("basics")));
        }
        None => issues.push(localize(
            settings.translator.as_ref(),
            Resume::NAMESPACE,
            ValidationIssue::error(codes::MISSING_BASICS, "basics"),
            &[],
        )),
    }

    audit_section(&mut issues, settings, &resume.work);
    audit_section(&mut issues, settings, &resume.volunteer);
    audit_section(&mut issues, settings, &resume.education);
    audit_section(&mut issues, settings, &resume.awards);
    audit_section(&mut issues, settings, &resume.certificates);
    audit_section(&mut issues, settings, &resume.publications);
    audit_section(&mut issues, settings, &resume.skills);
    audit_section(&mut issues, settings, &resume.languages);
    audit_section(&mut issues, settings, &resume.interests);
    audit_section(&mut issues, settings, &resume.references);
    audit_section(&mut issues, settings, &resume.projects);

    debug!(
        issues = issues.len(),
        blocking = issues.iter().filter(|i| i.is_blocking()).count(),
        "audited resume"
    );
    Outcome::from_issues(resume.clone(), issues)
}

fn audit_section<E: Entity>(
    issues: &mut Vec<ValidationIssue>,
    settings: &ValidatorSettings,
    items: &[E],
) {
    if items.is_empty() {
        return;
    }
    let validator = Validator::<E>::with_settings(settings.clone());
    for (i, item) in items.iter().enumerate() {
        let prefix = format!("{}[{i}]", E::NAMESPACE);
        issues.extend(
            validator
                .collect(item)
                .into_iter()
                .map(|issue| issue.nested_under(&prefix)),
        );
    }
}

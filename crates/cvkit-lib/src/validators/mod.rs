// ABOUTME: Entity validators built on declarative rule tables
// ABOUTME: validate() and validate_field() run the same rules and aggregate into an Outcome

pub mod rules;

mod award;
mod basics;
mod certificate;
mod education;
mod interest;
mod language;
mod project;
mod publication;
mod reference;
mod resume;
mod skill;
mod volunteer;
mod work;

pub use resume::audit;
pub use rules::{RuleContext, RuleSet};

use crate::i18n::{IdentityTranslator, Translator};
use crate::model::{
    Award, Basics, Certificate, Education, Interest, Language, Project, Publication, Reference,
    Resume, Skill, Volunteer, Work,
};
use crate::{CvkitError, Outcome, Result, RuleConfig, ValidationIssue};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A résumé record that has a rule table
pub trait Entity: Serialize + Clone {
    /// Message namespace and name used in logs and errors
    const NAMESPACE: &'static str;
    /// JSON field names accepted by field-level validation
    const FIELDS: &'static [&'static str];

    fn rules() -> RuleSet<Self>;
}

/// Dependencies shared by every validator
#[derive(Clone)]
pub struct ValidatorSettings {
    pub translator: Arc<dyn Translator>,
    pub config: RuleConfig,
    /// Fixed reference date for future-date checks; the current date when unset
    pub today: Option<NaiveDate>,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            translator: Arc::new(IdentityTranslator),
            config: RuleConfig::default(),
            today: None,
        }
    }
}

impl fmt::Debug for ValidatorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorSettings")
            .field("config", &self.config)
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}

impl ValidatorSettings {
    #[must_use]
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: RuleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Validator for one entity type
pub struct Validator<E: Entity> {
    rules: RuleSet<E>,
    settings: ValidatorSettings,
}

pub type BasicsValidator = Validator<Basics>;
pub type WorkValidator = Validator<Work>;
pub type VolunteerValidator = Validator<Volunteer>;
pub type EducationValidator = Validator<Education>;
pub type AwardValidator = Validator<Award>;
pub type CertificateValidator = Validator<Certificate>;
pub type PublicationValidator = Validator<Publication>;
pub type SkillValidator = Validator<Skill>;
pub type LanguageValidator = Validator<Language>;
pub type InterestValidator = Validator<Interest>;
pub type ReferenceValidator = Validator<Reference>;
pub type ProjectValidator = Validator<Project>;
pub type ResumeValidator = Validator<Resume>;

impl<E: Entity> Default for Validator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Validator<E> {
    /// Validator with untranslated messages and default thresholds
    pub fn new() -> Self {
        Self::with_settings(ValidatorSettings::default())
    }

    pub fn with_settings(settings: ValidatorSettings) -> Self {
        Self {
            rules: E::rules(),
            settings,
        }
    }

    pub fn settings(&self) -> &ValidatorSettings {
        &self.settings
    }

    /// Run every rule and aggregate. The entity is returned unchanged on
    /// success.
    pub fn validate(&self, entity: &E) -> Outcome<E> {
        let issues = self.collect(entity);
        Outcome::from_issues(entity.clone(), issues)
    }

    /// Every issue the rule table finds, in rule order
    pub fn collect(&self, entity: &E) -> Vec<ValidationIssue> {
        let issues = self.run(entity, self.rules.iter());
        debug!(
            entity = E::NAMESPACE,
            issues = issues.len(),
            blocking = issues.iter().filter(|i| i.is_blocking()).count(),
            "validated entity"
        );
        issues
    }

    /// Validate a single field for live feedback.
    ///
    /// Runs the rules that report on `field` (paired rules such as date
    /// ranges run in full) and keeps the issues at or below `field`. The
    /// value is the field's JSON value, `null` when absent.
    pub fn validate_field(&self, entity: &E, field: &str) -> Result<Outcome<Value>> {
        if !E::FIELDS.contains(&field) {
            return Err(CvkitError::UnknownField {
                entity: E::NAMESPACE,
                field: field.to_string(),
            });
        }

        let issues: Vec<ValidationIssue> = self
            .run(entity, self.rules.for_field(field))
            .into_iter()
            .filter(|issue| issue.concerns(field))
            .collect();

        let value = serde_json::to_value(entity)?
            .get(field)
            .cloned()
            .unwrap_or(Value::Null);

        debug!(entity = E::NAMESPACE, field, issues = issues.len(), "validated field");
        Ok(Outcome::from_issues(value, issues))
    }

    fn run<'r>(
        &self,
        entity: &E,
        rules: impl Iterator<Item = &'r rules::Rule<E>>,
    ) -> Vec<ValidationIssue>
    where
        E: 'r,
    {
        let mut ctx = RuleContext::new(
            self.settings.translator.as_ref(),
            &self.settings.config,
            self.settings.today(),
            E::NAMESPACE,
        );
        for rule in rules {
            trace!(entity = E::NAMESPACE, fields = ?rule.fields(), "running rule");
            rule.run(entity, &mut ctx);
        }
        ctx.into_issues()
    }
}

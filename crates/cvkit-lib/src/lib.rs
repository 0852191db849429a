// ABOUTME: Core library for cvkit providing résumé validation
// ABOUTME: Includes the outcome type, value objects, entity validators, translation port and document loading

pub mod codes;
pub mod config;
pub mod document;
pub mod error;
pub mod i18n;
pub mod issue;
pub mod model;
pub mod outcome;
pub mod validators;
pub mod value;

pub use config::RuleConfig;
pub use document::{load_resume_from_file, load_resume_from_json};
pub use error::CvkitError;
pub use i18n::{CatalogTranslator, IdentityTranslator, Translator};
pub use issue::{Layer, Severity, ValidationIssue};
pub use model::{Resume, Section};
pub use outcome::{combine, Outcome};
pub use validators::{
    audit, AwardValidator, BasicsValidator, CertificateValidator, EducationValidator, Entity,
    InterestValidator, LanguageValidator, ProjectValidator, PublicationValidator,
    ReferenceValidator, ResumeValidator, SkillValidator, Validator, ValidatorSettings,
    VolunteerValidator, WorkValidator,
};

/// Result type alias using [`CvkitError`]
pub type Result<T> = std::result::Result<T, CvkitError>;

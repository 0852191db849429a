// ABOUTME: 'cvkit field' command implementation
// ABOUTME: Validates one field of one section item, as a form would on blur

use super::{load_settings, print_issues};
use cvkit_lib::model::{Basics, Section};
use cvkit_lib::{
    load_resume_from_file, CvkitError, Entity, Outcome, Result, Validator, ValidatorSettings,
};
use serde_json::Value;
use std::path::PathBuf;
use std::process;

/// Configuration for field command
pub struct FieldConfig {
    pub file: PathBuf,
    pub section: String,
    pub index: usize,
    pub field: String,
    pub messages: Option<PathBuf>,
}

/// Validate a single field; exits 1 when it has an error
pub fn run(config: &FieldConfig) -> Result<()> {
    let settings = load_settings(None, config.messages.as_deref())?;
    let resume = load_resume_from_file(&config.file)?;
    let section: Section = config.section.parse()?;

    let (index, field) = (config.index, config.field.as_str());
    let outcome = match section {
        Section::Basics => {
            let basics = resume.basics.unwrap_or_default();
            Validator::<Basics>::with_settings(settings).validate_field(&basics, field)?
        }
        Section::Work => item_field(&resume.work, index, field, settings)?,
        Section::Volunteer => item_field(&resume.volunteer, index, field, settings)?,
        Section::Education => item_field(&resume.education, index, field, settings)?,
        Section::Awards => item_field(&resume.awards, index, field, settings)?,
        Section::Certificates => item_field(&resume.certificates, index, field, settings)?,
        Section::Publications => item_field(&resume.publications, index, field, settings)?,
        Section::Skills => item_field(&resume.skills, index, field, settings)?,
        Section::Languages => item_field(&resume.languages, index, field, settings)?,
        Section::Interests => item_field(&resume.interests, index, field, settings)?,
        Section::References => item_field(&resume.references, index, field, settings)?,
        Section::Projects => item_field(&resume.projects, index, field, settings)?,
    };

    let path = match section {
        Section::Basics => format!("basics.{field}"),
        _ => format!("{section}[{index}].{field}"),
    };
    print_field(&path, &outcome);

    if outcome.is_failure() {
        process::exit(1);
    }
    Ok(())
}

fn item_field<E: Entity>(
    items: &[E],
    index: usize,
    field: &str,
    settings: ValidatorSettings,
) -> Result<Outcome<Value>> {
    let item = items.get(index).ok_or(CvkitError::ItemOutOfRange {
        section: E::NAMESPACE,
        index,
        len: items.len(),
    })?;
    Validator::<E>::with_settings(settings).validate_field(item, field)
}

fn print_field(path: &str, outcome: &Outcome<Value>) {
    match outcome.value() {
        Some(value) => println!("📋 {path} = {value}"),
        None => println!("📋 {path}"),
    }
    print_issues(outcome.issues());
    if outcome.issues().is_empty() {
        println!("✅ No issues");
    } else if outcome.is_success() {
        println!("✅ Valid with {} note(s)", outcome.warnings().len());
    } else {
        println!("❌ {} error(s)", outcome.errors().len());
    }
}

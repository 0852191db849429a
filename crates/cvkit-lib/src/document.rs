// ABOUTME: Loads résumé documents from JSON text or files
// ABOUTME: Documents are checked against the embedded JSON Schema before deserialization

use crate::model::Resume;
use crate::{CvkitError, Result};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// JSON Schema every résumé document must match
pub const RESUME_SCHEMA: &str = include_str!("../schemas/resume.schema.json");

fn schema() -> &'static JSONSchema {
    static SCHEMA: OnceLock<JSONSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        let schema: Value = serde_json::from_str(RESUME_SCHEMA).expect("valid schema JSON");
        JSONSchema::compile(&schema).expect("valid resume schema")
    })
}

/// Check a parsed document against the résumé schema.
///
/// Every violation is reported in one [`CvkitError::Schema`], each prefixed
/// with its JSON pointer.
pub fn check_schema(document: &Value) -> Result<()> {
    if let Err(errors) = schema().validate(document) {
        let messages: Vec<String> = errors
            .map(|e| {
                let path = e.instance_path.to_string();
                let path = if path.is_empty() { "/".to_string() } else { path };
                format!("{path}: {e}")
            })
            .collect();
        warn!(violations = messages.len(), "document failed schema checks");
        return Err(CvkitError::Schema(messages.join("; ")));
    }
    Ok(())
}

/// Parse, schema-check and deserialize a résumé document
pub fn load_resume_from_json(json: &str) -> Result<Resume> {
    let document: Value = serde_json::from_str(json)?;
    check_schema(&document)?;
    let resume: Resume = serde_json::from_value(document)?;
    debug!(
        has_basics = resume.basics.is_some(),
        work = resume.work.len(),
        education = resume.education.len(),
        skills = resume.skills.len(),
        "loaded resume"
    );
    Ok(resume)
}

/// Read and load a résumé document from disk
pub fn load_resume_from_file(path: impl AsRef<Path>) -> Result<Resume> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading resume");
    let content = fs::read_to_string(path)?;
    load_resume_from_json(&content)
}

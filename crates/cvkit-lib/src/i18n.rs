// ABOUTME: Translation port used to turn message keys into human-readable text
// ABOUTME: Ships the identity fallback and a flat JSON catalog adapter

use crate::{CvkitError, Result, ValidationIssue};
use std::collections::HashMap;
use std::path::Path;

/// Named values substituted into a message template
pub type Params<'a> = [(&'a str, String)];

/// Looks up human-readable text for a message key.
///
/// Implementations must be free of side effects; validators share one
/// translator across threads.
pub trait Translator: Send + Sync {
    /// Resolve `key`, substituting `params`. Unknown keys resolve to
    /// something printable, never an error.
    fn translate(&self, key: &str, params: &Params<'_>) -> String;

    fn exists(&self, key: &str) -> bool;
}

/// Fallback translator: every key translates to itself
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str, _params: &Params<'_>) -> String {
        key.to_string()
    }

    fn exists(&self, _key: &str) -> bool {
        false
    }
}

/// Translator backed by a flat `{ "key": "template" }` catalog.
///
/// Templates reference parameters as `{name}`. Missing keys fall back to the
/// key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTranslator {
    messages: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| CvkitError::Config(format!("message catalog: {e}")))?;
        Ok(Self::new(messages))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, params: &Params<'_>) -> String {
        match self.messages.get(key) {
            Some(template) => interpolate(template, params),
            None => key.to_string(),
        }
    }

    fn exists(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }
}

/// Catalog key for `code` within `namespace`, e.g. `validation.work.missing_company`
pub fn message_key(namespace: &str, code: &str) -> String {
    format!("validation.{namespace}.{code}")
}

/// Attach the catalog key and translated message to an issue
pub fn localize(
    translator: &dyn Translator,
    namespace: &str,
    issue: ValidationIssue,
    params: &Params<'_>,
) -> ValidationIssue {
    let key = message_key(namespace, &issue.code);
    let message = translator.translate(&key, params);
    issue.with_message(message).with_i18n_key(key)
}

fn interpolate(template: &str, params: &Params<'_>) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

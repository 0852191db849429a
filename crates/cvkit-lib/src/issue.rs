// ABOUTME: Validation issue data model
// ABOUTME: Defines ValidationIssue with its severity and owning architectural layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgent an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks persistence or submission of the entity
    Error,
    /// Non-blocking, shown prominently
    Warning,
    /// Advisory hint
    Info,
}

impl Severity {
    /// Whether an issue of this severity blocks the entity
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architectural tier that owns a rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    #[default]
    Domain,
    Application,
    Presentation,
}

/// One problem found during validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Stable machine identifier (e.g. "end_before_start")
    pub code: String,
    /// Resolved human-readable text
    pub message: String,
    /// Dotted path into the entity (e.g. "work[0].startDate")
    pub field: String,
    pub severity: Severity,
    #[serde(default)]
    pub layer: Layer,
    /// Translation lookup key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_key: Option<String>,
    /// Remediation hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a domain-layer issue whose message is the code itself
    pub fn new(code: impl Into<String>, field: impl Into<String>, severity: Severity) -> Self {
        let code = code.into();
        Self {
            message: code.clone(),
            code,
            field: field.into(),
            severity,
            layer: Layer::Domain,
            i18n_key: None,
            suggestion: None,
        }
    }

    pub fn error(code: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(code, field, Severity::Error)
    }

    pub fn warning(code: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(code, field, Severity::Warning)
    }

    pub fn info(code: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(code, field, Severity::Info)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn with_i18n_key(mut self, key: impl Into<String>) -> Self {
        self.i18n_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Re-root the issue under `prefix`, e.g. `summary` under `work[2]`
    /// becomes `work[2].summary`.
    #[must_use]
    pub fn nested_under(mut self, prefix: &str) -> Self {
        self.field = if self.field.is_empty() {
            prefix.to_string()
        } else if self.field.starts_with('[') {
            format!("{prefix}{}", self.field)
        } else {
            format!("{prefix}.{}", self.field)
        };
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity.is_blocking()
    }

    /// Whether this issue reports on `field` or on something nested below it
    /// (`field[0]`, `field.name`).
    pub fn concerns(&self, field: &str) -> bool {
        match self.field.strip_prefix(field) {
            Some(rest) => rest.is_empty() || rest.starts_with('[') || rest.starts_with('.'),
            None => false,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {} ({})", self.severity, self.field, self.message, self.code)
    }
}

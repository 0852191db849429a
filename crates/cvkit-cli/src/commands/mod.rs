// ABOUTME: Command implementations for cvkit CLI
// ABOUTME: Submodules for validate, field and codes, plus shared settings and issue printing

pub mod codes;
pub mod field;
pub mod validate;

use clap::ValueEnum;
use cvkit_lib::{CatalogTranslator, Result, RuleConfig, Severity, ValidationIssue, ValidatorSettings};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Build validator settings from optional rule and message files
pub fn load_settings(config: Option<&Path>, messages: Option<&Path>) -> Result<ValidatorSettings> {
    let mut settings = ValidatorSettings::default();
    if let Some(path) = config {
        settings = settings.with_config(RuleConfig::from_file(path)?);
        debug!(path = %path.display(), "loaded rule config");
    }
    if let Some(path) = messages {
        let catalog = CatalogTranslator::from_file(path)?;
        debug!(path = %path.display(), messages = catalog.len(), "loaded message catalog");
        settings = settings.with_translator(Arc::new(catalog));
    }
    Ok(settings)
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️ ",
        Severity::Info => "💡",
    }
}

/// One issue per line, with its suggestion underneath
pub fn print_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        println!(
            "  {} {:<28} {:<20} {}",
            severity_icon(issue.severity),
            issue.field,
            issue.code,
            issue.message
        );
        if let Some(suggestion) = &issue.suggestion {
            println!("       → {suggestion}");
        }
    }
}

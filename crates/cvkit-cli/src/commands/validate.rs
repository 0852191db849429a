// ABOUTME: 'cvkit validate' command implementation
// ABOUTME: Loads a résumé, audits every section and prints all issues at once

use super::{load_settings, print_issues, OutputFormat};
use cvkit_lib::{audit, load_resume_from_file, Outcome, Resume, Result, Severity, ValidationIssue};
use serde::Serialize;
use std::path::PathBuf;
use std::process;

/// Configuration for validate command
pub struct ValidateConfig {
    pub file: PathBuf,
    pub config: Option<PathBuf>,
    pub messages: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
    pub verbose: bool,
}

/// Machine-readable summary printed with `--format json`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    file: String,
    valid: bool,
    errors: usize,
    warnings: usize,
    infos: usize,
    issues: &'a [ValidationIssue],
}

/// Audit a résumé document; exits 1 when it fails (or warns, with `--strict`)
pub fn run(config: &ValidateConfig) -> Result<()> {
    let settings = load_settings(config.config.as_deref(), config.messages.as_deref())?;
    let resume = load_resume_from_file(&config.file)?;
    let outcome = audit(&resume, &settings);

    let warnings = outcome.issues_with_severity(Severity::Warning).len();
    let passed = outcome.is_success() && !(config.strict && warnings > 0);

    match config.format {
        OutputFormat::Json => print_json(config, &outcome, passed)?,
        OutputFormat::Text => print_text(config, &outcome, passed),
    }

    if !passed {
        process::exit(1);
    }
    Ok(())
}

fn print_json(config: &ValidateConfig, outcome: &Outcome<Resume>, passed: bool) -> Result<()> {
    let report = Report {
        file: config.file.display().to_string(),
        valid: passed,
        errors: outcome.errors().len(),
        warnings: outcome.issues_with_severity(Severity::Warning).len(),
        infos: outcome.issues_with_severity(Severity::Info).len(),
        issues: outcome.issues(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_text(config: &ValidateConfig, outcome: &Outcome<Resume>, passed: bool) {
    println!("📋 {}\n", config.file.display());

    let issues = outcome.issues();
    let shown: Vec<ValidationIssue> = if config.verbose {
        issues.to_vec()
    } else {
        issues
            .iter()
            .filter(|i| i.severity != Severity::Info)
            .cloned()
            .collect()
    };
    print_issues(&shown);

    let errors = outcome.errors().len();
    let warnings = outcome.issues_with_severity(Severity::Warning).len();
    let infos = outcome.issues_with_severity(Severity::Info).len();
    if !shown.is_empty() {
        println!();
    }
    if passed {
        println!("✅ Résumé is valid ({warnings} warning(s), {infos} suggestion(s))");
    } else if errors > 0 {
        println!("❌ Résumé has {errors} error(s) and {warnings} warning(s)");
    } else {
        println!("❌ Résumé has {warnings} warning(s) (strict mode)");
    }
    if infos > 0 && !config.verbose {
        println!("   Run with --verbose to see {infos} suggestion(s)");
    }
}

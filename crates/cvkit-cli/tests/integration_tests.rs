// ABOUTME: Integration tests for cvkit CLI commands
// ABOUTME: Tests validate, field and codes against résumé files in temp directories

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const VALID_RESUME: &str = r#"{
    "basics": {
        "name": "Jane Doe",
        "label": "Backend Engineer",
        "email": "jane@doe.dev",
        "phone": "+33 6 12 34 56 78"
    },
    "work": [
        {
            "name": "Acme",
            "position": "Staff Engineer",
            "startDate": "2019-03",
            "endDate": "2023-06",
            "summary": "Owned the billing platform end to end, from the ledger service to the invoicing pipeline and its on-call rotation.",
            "highlights": ["Cut invoice generation time from 4 hours to 12 minutes"]
        }
    ],
    "skills": [{"name": "Rust", "level": "Expert", "keywords": ["tokio", "serde"]}]
}"#;

const BROKEN_RESUME: &str = r#"{
    "basics": {"name": "Jane Doe", "email": "not-an-email"},
    "work": [
        {"name": "Acme", "position": "Staff Engineer", "startDate": "2019-03", "summary": "Billing."},
        {"name": "Initech", "position": "Engineer", "startDate": "2022-01", "endDate": "2020-01"}
    ]
}"#;

fn cvkit_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cvkit"))
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_cvkit_help() {
    let output = cvkit_binary().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validate"));
    assert!(stdout.contains("field"));
    assert!(stdout.contains("codes"));
}

#[test]
fn test_cvkit_version() {
    let output = cvkit_binary().arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cvkit"));
}

#[test]
fn test_validate_valid_resume() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", VALID_RESUME);

    let output = cvkit_binary().arg("validate").arg(&path).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Résumé is valid"));
}

#[test]
fn test_validate_reports_every_failing_item() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", BROKEN_RESUME);

    let output = cvkit_binary().arg("validate").arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("basics.email"));
    assert!(stdout.contains("invalid_email"));
    assert!(stdout.contains("work[1].endDate"));
    assert!(stdout.contains("end_before_start"));
    assert!(stdout.contains("work[1].summary"));
}

#[test]
fn test_validate_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", BROKEN_RESUME);

    let output = cvkit_binary()
        .args(["validate", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    // invalid email, end before start, missing summary on the second job
    assert_eq!(report["errors"], 3);
    let issues = report["issues"].as_array().unwrap();
    assert!(issues
        .iter()
        .any(|i| i["field"] == "work[1].endDate" && i["severity"] == "error"));
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "resume.json",
        r#"{"basics": {"name": "Jane Doe", "email": "jane@doe.dev"}}"#,
    );

    let relaxed = cvkit_binary().arg("validate").arg(&path).output().unwrap();
    assert!(relaxed.status.success());

    let strict = cvkit_binary()
        .args(["validate", "--strict"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(strict.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&strict.stdout);
    assert!(stdout.contains("missing_label"));
}

#[test]
fn test_validate_with_config_and_messages() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", VALID_RESUME);
    let config = write_file(&temp, "rules.json", r#"{"summaryMinLength": 500}"#);
    let messages = write_file(
        &temp,
        "messages.json",
        r#"{"validation.work.brief_summary": "Summary is {length} characters, aim for {min}"}"#,
    );

    let output = cvkit_binary()
        .arg("validate")
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .arg("--messages")
        .arg(&messages)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("work[0].summary"));
    assert!(stdout.contains("aim for 500"));
}

#[test]
fn test_validate_rejects_bad_config() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", VALID_RESUME);
    let config = write_file(&temp, "rules.json", r#"{"summaryMinLenght": 10}"#);

    let output = cvkit_binary()
        .arg("validate")
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn test_validate_rejects_schema_violations() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", r#"{"work": {"name": "Acme"}}"#);

    let output = cvkit_binary().arg("validate").arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Schema error"));
    assert!(stderr.contains("/work"));
}

#[test]
fn test_validate_missing_file() {
    let temp = TempDir::new().unwrap();

    let output = cvkit_binary()
        .arg("validate")
        .arg(temp.path().join("nope.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌ Error"));
}

#[test]
fn test_field_reports_only_that_field() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", BROKEN_RESUME);

    let output = cvkit_binary()
        .arg("field")
        .arg(&path)
        .args(["--section", "work", "--index", "1", "--field", "endDate"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("work[1].endDate"));
    assert!(stdout.contains("end_before_start"));
    assert!(!stdout.contains("missing_summary"));
}

#[test]
fn test_field_passing_value() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", VALID_RESUME);

    let output = cvkit_binary()
        .arg("field")
        .arg(&path)
        .args(["--section", "basics", "--field", "email"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("jane@doe.dev"));
    assert!(stdout.contains("No issues"));
}

#[test]
fn test_field_unknown_field_and_section() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", VALID_RESUME);

    let unknown_field = cvkit_binary()
        .arg("field")
        .arg(&path)
        .args(["--section", "work", "--field", "salary"])
        .output()
        .unwrap();
    assert_eq!(unknown_field.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&unknown_field.stderr).contains("Unknown field 'salary'"));

    let unknown_section = cvkit_binary()
        .arg("field")
        .arg(&path)
        .args(["--section", "hobbies", "--field", "name"])
        .output()
        .unwrap();
    assert_eq!(unknown_section.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&unknown_section.stderr).contains("Unknown section"));
}

#[test]
fn test_field_index_past_end_of_section() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "resume.json", VALID_RESUME);

    let output = cvkit_binary()
        .arg("field")
        .arg(&path)
        .args(["--section", "work", "--index", "5", "--field", "name"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Section 'work' has no item at index 5 (1 item(s))"));
    assert!(!stderr.contains("Unknown section"));
}

#[test]
fn test_codes_lists_message_keys() {
    let output = cvkit_binary().arg("codes").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("end_before_start"));
    assert!(stdout.contains("validation.email.personal_email"));
    assert!(stdout.contains("validation.resume.missing_basics"));
    assert!(stdout.contains("validation.work.end_before_start"));
    assert!(stdout.contains("validation.awards.invalid_date"));
    assert!(!stdout.contains("validation.date."));
}

// ABOUTME: Url value object
// ABOUTME: Normalizes missing schemes to https and flags insecure or placeholder hosts

use crate::codes::url as codes;
use crate::i18n::{localize, IdentityTranslator, Translator};
use crate::{Outcome, ValidationIssue};
use regex_lite::Regex;
use std::fmt;
use std::sync::OnceLock;

const FIELD: &str = "url";
const NAMESPACE: &str = "url";

/// Hosts that only ever appear in placeholder content
pub const PLACEHOLDER_DOMAINS: &[&str] = &["example.com", "test.com", "localhost"];

/// A leading `scheme:`. A colon followed by a digit is a port
/// (`acme.io:8080`), not a scheme.
fn scheme() -> &'static Regex {
    static SCHEME: OnceLock<Regex> = OnceLock::new();
    SCHEME.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:(?:$|[^0-9])").expect("valid scheme regex")
    })
}

/// A web address with an http(s) scheme and a plausible hostname
#[derive(Debug, Clone)]
pub struct Url {
    value: String,
    parsed: url::Url,
}

impl Url {
    pub fn create(raw: &str) -> Outcome<Self> {
        Self::create_with(raw, &IdentityTranslator)
    }

    pub fn create_with(raw: &str, translator: &dyn Translator) -> Outcome<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Outcome::Failure(vec![localize(
                translator,
                NAMESPACE,
                ValidationIssue::error(codes::MISSING_URL, FIELD),
                &[],
            )]);
        }

        let value = if scheme().is_match(trimmed) {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        let Some(parsed) = parse(&value) else {
            return Outcome::Failure(vec![localize(
                translator,
                NAMESPACE,
                ValidationIssue::error(codes::INVALID_URL, FIELD)
                    .with_suggestion("https://www.company.com"),
                &[("value", trimmed.to_string())],
            )]);
        };

        let url = Self { value, parsed };
        let mut issues = Vec::new();
        if !url.is_secure() {
            issues.push(localize(
                translator,
                NAMESPACE,
                ValidationIssue::warning(codes::INSECURE_URL, FIELD)
                    .with_suggestion(url.to_secure().as_str()),
                &[],
            ));
        } else if url.is_placeholder() {
            issues.push(localize(
                translator,
                NAMESPACE,
                ValidationIssue::warning(codes::TEMPORARY_DOMAIN, FIELD),
                &[("domain", url.domain().to_string())],
            ));
        }
        Outcome::from_issues(url, issues)
    }

    /// The address with its scheme, as entered otherwise
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn domain(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }

    /// The address without its scheme or trailing slash
    pub fn display_url(&self) -> &str {
        self.after_scheme().trim_end_matches('/')
    }

    pub fn is_secure(&self) -> bool {
        self.parsed.scheme() == "https"
    }

    /// Same address over https; secure URLs are returned unchanged
    pub fn to_secure(&self) -> Self {
        if self.is_secure() {
            return self.clone();
        }
        let value = format!("https://{}", self.after_scheme());
        match parse(&value) {
            Some(parsed) => Self { value, parsed },
            None => self.clone(),
        }
    }

    fn is_placeholder(&self) -> bool {
        let host = self.domain();
        PLACEHOLDER_DOMAINS
            .iter()
            .any(|d| host == *d || host.ends_with(&format!(".{d}")))
    }

    fn after_scheme(&self) -> &str {
        self.value
            .split_once("://")
            .map_or(self.value.as_str(), |(_, rest)| rest)
    }
}

/// Parse and check the structural rules: http(s) only, no credentials, and a
/// hostname made of alphanumerics, dots and dashes containing at least one dot.
fn parse(value: &str) -> Option<url::Url> {
    let parsed = url::Url::parse(value).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    if !parsed.username().is_empty() || parsed.password().is_some() {
        return None;
    }
    let host = parsed.host_str()?;
    let well_formed = host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if !well_formed || (!host.contains('.') && host != "localhost") {
        return None;
    }
    Some(parsed)
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.parsed.as_str() == other.parsed.as_str()
    }
}

impl Eq for Url {}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

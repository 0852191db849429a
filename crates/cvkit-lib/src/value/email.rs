// ABOUTME: Email value object
// ABOUTME: Validated address with a warning for personal mail providers

use crate::codes::email as codes;
use crate::i18n::{localize, IdentityTranslator, Translator};
use crate::{Outcome, ValidationIssue};
use regex_lite::Regex;
use std::fmt;
use std::sync::OnceLock;

const FIELD: &str = "email";
const NAMESPACE: &str = "email";

/// Providers whose addresses are flagged as personal
pub const PERSONAL_DOMAINS: &[&str] = &[
    "gmail.com",
    "hotmail.com",
    "outlook.com",
    "yahoo.com",
    "aol.com",
    "icloud.com",
];

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// An email address that always contains `@` and a dotted domain
#[derive(Debug, Clone)]
pub struct Email {
    value: String,
}

impl Email {
    /// Validate `raw` with message keys left untranslated
    pub fn create(raw: &str) -> Outcome<Self> {
        Self::create_with(raw, &IdentityTranslator)
    }

    pub fn create_with(raw: &str, translator: &dyn Translator) -> Outcome<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return Outcome::Failure(vec![localize(
                translator,
                NAMESPACE,
                ValidationIssue::error(codes::MISSING_EMAIL, FIELD),
                &[],
            )]);
        }

        if !pattern().is_match(value) {
            return Outcome::Failure(vec![localize(
                translator,
                NAMESPACE,
                ValidationIssue::error(codes::INVALID_EMAIL, FIELD)
                    .with_suggestion("name@company.com"),
                &[("value", value.to_string())],
            )]);
        }

        let email = Self {
            value: value.to_string(),
        };
        if email.is_personal() {
            let issue = localize(
                translator,
                NAMESPACE,
                ValidationIssue::warning(codes::PERSONAL_EMAIL, FIELD),
                &[("domain", email.domain().to_string())],
            );
            return Outcome::from_issues(email, vec![issue]);
        }
        Outcome::Success(email)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn local_part(&self) -> &str {
        self.value.rsplit_once('@').map_or("", |(local, _)| local)
    }

    pub fn domain(&self) -> &str {
        self.value.rsplit_once('@').map_or("", |(_, domain)| domain)
    }

    /// Whether the address belongs to a personal mail provider
    pub fn is_personal(&self) -> bool {
        let domain = self.domain();
        PERSONAL_DOMAINS.iter().any(|d| d.eq_ignore_ascii_case(domain))
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_lowercase() == other.value.to_lowercase()
    }
}

impl Eq for Email {}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

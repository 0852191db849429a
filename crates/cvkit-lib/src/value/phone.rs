// ABOUTME: Phone value object
// ABOUTME: Accepts French-style local numbers, international numbers and plain digit runs

use crate::codes::phone as codes;
use crate::i18n::{localize, IdentityTranslator, Translator};
use crate::{Outcome, ValidationIssue};
use std::fmt;

const FIELD: &str = "phone";
const NAMESPACE: &str = "phone";

/// A phone number stored without separators
#[derive(Debug, Clone)]
pub struct Phone {
    value: String,
}

impl Phone {
    pub fn create(raw: &str) -> Outcome<Self> {
        Self::create_with(raw, &IdentityTranslator)
    }

    pub fn create_with(raw: &str, translator: &dyn Translator) -> Outcome<Self> {
        let invalid = |reason: &str| {
            Outcome::Failure(vec![localize(
                translator,
                NAMESPACE,
                ValidationIssue::error(codes::INVALID_PHONE, FIELD),
                &[("value", raw.trim().to_string()), ("reason", reason.to_string())],
            )])
        };

        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '-' | '(' | ')'))
            .collect();

        if cleaned.is_empty() {
            return Outcome::Failure(vec![localize(
                translator,
                NAMESPACE,
                ValidationIssue::error(codes::MISSING_PHONE, FIELD),
                &[],
            )]);
        }
        if cleaned.chars().any(char::is_alphabetic) {
            return invalid("letters");
        }
        if cleaned.len() <= 5 {
            return invalid("too_short");
        }

        if let Some(digits) = cleaned.strip_prefix('+') {
            if !all_digits(digits) || !(8..=15).contains(&cleaned.len()) {
                return invalid("international_length");
            }
        } else if cleaned.starts_with('0') {
            if !all_digits(&cleaned) || cleaned.len() != 10 {
                return invalid("local_length");
            }
        } else if !all_digits(&cleaned) || !(7..=12).contains(&cleaned.len()) {
            return invalid("length");
        }

        Outcome::Success(Self { value: cleaned })
    }

    /// The number without separators
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_international(&self) -> bool {
        self.value.starts_with('+')
    }

    /// Group digits for display: `+33 6 12 34 56 78` or `06 12 34 56 78`.
    /// Numbers outside those shapes come back unchanged.
    pub fn format(&self) -> String {
        if let Some(digits) = self.value.strip_prefix('+') {
            if digits.len() == 11 && all_digits(digits) {
                return format!(
                    "+{} {} {}",
                    &digits[..2],
                    &digits[2..3],
                    pairs(&digits[3..])
                );
            }
        } else if self.value.len() == 10 && all_digits(&self.value) {
            return pairs(&self.value);
        }
        self.value.clone()
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn pairs(digits: &str) -> String {
    digits
        .as_bytes()
        .chunks(2)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        strip(&self.value) == strip(&other.value)
    }
}

impl Eq for Phone {}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

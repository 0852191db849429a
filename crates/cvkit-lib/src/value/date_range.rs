// ABOUTME: DateRange value object for work and education periods
// ABOUTME: Checks both ends together and derives ongoing status and duration in months

use crate::codes::date as codes;
use crate::i18n::{localize, IdentityTranslator, Translator};
use crate::{Outcome, ValidationIssue};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const START_FIELD: &str = "startDate";
pub const END_FIELD: &str = "endDate";

/// Which message namespace date issues are reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateContext {
    Work,
    Education,
}

impl DateContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
        }
    }
}

/// Parse a résumé date: `YYYY-MM-DD`, `YYYY-MM` (first of the month) or
/// `YYYY` (first of January).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [_, _, _] => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
        [year, month] if is_number(year, 4, 4) && is_number(month, 1, 2) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        [year] if is_number(year, 4, 4) => NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1),
        _ => None,
    }
}

fn is_number(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// A validated period. The end, when present, never precedes the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: Option<NaiveDate>,
    context: DateContext,
}

impl DateRange {
    /// Validate against today's date with untranslated messages
    pub fn create(start: &str, end: Option<&str>, context: DateContext) -> Outcome<Self> {
        Self::create_at(start, end, context, Utc::now().date_naive())
    }

    pub fn create_at(
        start: &str,
        end: Option<&str>,
        context: DateContext,
        today: NaiveDate,
    ) -> Outcome<Self> {
        Self::create_with(start, end, context, today, &IdentityTranslator)
    }

    /// Validate both ends together so every problem is reported at once.
    ///
    /// A future start is an error; a future end is only a warning. A blank
    /// end counts as absent (ongoing).
    pub fn create_with(
        start: &str,
        end: Option<&str>,
        context: DateContext,
        today: NaiveDate,
        translator: &dyn Translator,
    ) -> Outcome<Self> {
        let namespace = context.as_str();
        let mut issues = Vec::new();

        let start_date = if start.trim().is_empty() {
            issues.push(ValidationIssue::error(codes::MISSING_START_DATE, START_FIELD));
            None
        } else {
            match parse_date(start) {
                Some(date) => {
                    if date > today {
                        issues.push(ValidationIssue::error(codes::FUTURE_START_DATE, START_FIELD));
                    }
                    Some(date)
                }
                None => {
                    issues.push(
                        ValidationIssue::error(codes::INVALID_START_DATE, START_FIELD)
                            .with_suggestion("YYYY-MM-DD"),
                    );
                    None
                }
            }
        };

        let end_date = match end.map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => match parse_date(raw) {
                Some(date) => {
                    if date > today {
                        issues.push(ValidationIssue::warning(codes::FUTURE_DATE, END_FIELD));
                    }
                    Some(date)
                }
                None => {
                    issues.push(
                        ValidationIssue::error(codes::INVALID_END_DATE, END_FIELD)
                            .with_suggestion("YYYY-MM-DD"),
                    );
                    None
                }
            },
        };

        if let (Some(s), Some(e)) = (start_date, end_date) {
            if e < s {
                issues.push(ValidationIssue::error(codes::END_BEFORE_START, END_FIELD));
            }
        }

        let issues: Vec<ValidationIssue> = issues
            .into_iter()
            .map(|issue| localize(translator, namespace, issue, &[]))
            .collect();

        match start_date {
            Some(start) if !issues.iter().any(ValidationIssue::is_blocking) => Outcome::from_issues(
                Self {
                    start,
                    end: end_date,
                    context,
                },
                issues,
            ),
            _ => Outcome::Failure(issues),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn context(&self) -> DateContext {
        self.context
    }

    /// True when no end date was given
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    pub fn duration_in_months(&self) -> u32 {
        self.duration_in_months_at(Utc::now().date_naive())
    }

    /// Whole calendar months between start and end (or `today` when
    /// ongoing), ignoring the day of month, never negative.
    pub fn duration_in_months_at(&self, today: NaiveDate) -> u32 {
        let end = self.end.unwrap_or(today);
        let months = (end.year() - self.start.year()) * 12 + end.month() as i32
            - self.start.month() as i32;
        u32::try_from(months).unwrap_or(0)
    }
}

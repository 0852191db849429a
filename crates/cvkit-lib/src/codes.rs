// ABOUTME: Stable issue codes grouped by résumé section and value object
// ABOUTME: Codes are a versioned contract shared with UIs and translation catalogs

pub mod email {
    pub const MISSING_EMAIL: &str = "missing_email";
    pub const INVALID_EMAIL: &str = "invalid_email";
    pub const PERSONAL_EMAIL: &str = "personal_email";
}

pub mod phone {
    pub const MISSING_PHONE: &str = "missing_phone";
    pub const INVALID_PHONE: &str = "invalid_phone";
}

pub mod url {
    pub const MISSING_URL: &str = "missing_url";
    pub const INVALID_URL: &str = "invalid_url";
    pub const INSECURE_URL: &str = "insecure_url";
    pub const TEMPORARY_DOMAIN: &str = "temporary_domain";
}

pub mod date {
    pub const MISSING_START_DATE: &str = "missing_start_date";
    pub const INVALID_START_DATE: &str = "invalid_start_date";
    pub const FUTURE_START_DATE: &str = "future_start_date";
    pub const INVALID_END_DATE: &str = "invalid_end_date";
    pub const FUTURE_DATE: &str = "future_date";
    pub const END_BEFORE_START: &str = "end_before_start";
    /// Format check on a standalone date field
    pub const INVALID_DATE: &str = "invalid_date";
}

pub mod basics {
    pub const MISSING_NAME: &str = "missing_name";
    pub const MISSING_LABEL: &str = "missing_label";
    pub const BRIEF_SUMMARY: &str = "brief_summary";
    pub const INCOMPLETE_PROFILE: &str = "incomplete_profile";
}

pub mod work {
    pub const MISSING_COMPANY: &str = "missing_company";
    pub const MISSING_POSITION: &str = "missing_position";
    pub const VAGUE_POSITION: &str = "vague_position";
    pub const MISSING_SUMMARY: &str = "missing_summary";
    pub const BRIEF_SUMMARY: &str = "brief_summary";
    pub const MISSING_HIGHLIGHTS: &str = "missing_highlights";
    pub const VAGUE_HIGHLIGHT: &str = "vague_highlight";
}

pub mod education {
    pub const MISSING_INSTITUTION: &str = "missing_institution";
    pub const MISSING_AREA: &str = "missing_area";
    pub const MISSING_STUDY_TYPE: &str = "missing_study_type";
    pub const MISSING_GPA: &str = "missing_gpa";
    pub const VAGUE_COURSE: &str = "vague_course";
}

pub mod skill {
    pub const MISSING_NAME: &str = "missing_name";
    pub const BRIEF_NAME: &str = "brief_name";
    pub const GENERIC_SKILL: &str = "generic_skill";
    pub const UNDEFINED_LEVEL: &str = "undefined_level";
    pub const MISSING_KEYWORDS: &str = "missing_keywords";
}

pub mod project {
    pub const MISSING_NAME: &str = "missing_name";
    pub const MISSING_DESCRIPTION: &str = "missing_description";
    pub const BRIEF_DESCRIPTION: &str = "brief_description";
    pub const MISSING_KEYWORDS: &str = "missing_keywords";
    pub const INVALID_URL: &str = "invalid_url";
}

pub mod award {
    pub const MISSING_TITLE: &str = "missing_title";
    pub const MISSING_AWARDER: &str = "missing_awarder";
}

pub mod certificate {
    pub const MISSING_NAME: &str = "missing_name";
    pub const MISSING_ISSUER: &str = "missing_issuer";
}

pub mod publication {
    pub const MISSING_NAME: &str = "missing_name";
    pub const MISSING_PUBLISHER: &str = "missing_publisher";
}

pub mod volunteer {
    pub const MISSING_ORGANIZATION: &str = "missing_organization";
    pub const MISSING_POSITION: &str = "missing_position";
    pub const BRIEF_SUMMARY: &str = "brief_summary";
}

pub mod language {
    pub const MISSING_LANGUAGE: &str = "missing_language";
    pub const MISSING_FLUENCY: &str = "missing_fluency";
    pub const UNKNOWN_FLUENCY: &str = "unknown_fluency";
}

pub mod interest {
    pub const MISSING_NAME: &str = "missing_name";
    pub const MISSING_KEYWORDS: &str = "missing_keywords";
}

pub mod reference {
    pub const MISSING_NAME: &str = "missing_name";
    pub const MISSING_REFERENCE: &str = "missing_reference";
    pub const BRIEF_REFERENCE: &str = "brief_reference";
}

pub mod resume {
    pub const MISSING_BASICS: &str = "missing_basics";
}

/// Every `(namespace, code)` pair a validator can emit, in declaration order.
///
/// Date range codes are reported under the range's context (`work` or
/// `education`) and format checks under the owning section.
pub const ALL: &[(&str, &str)] = &[
    ("email", email::MISSING_EMAIL),
    ("email", email::INVALID_EMAIL),
    ("email", email::PERSONAL_EMAIL),
    ("phone", phone::MISSING_PHONE),
    ("phone", phone::INVALID_PHONE),
    ("url", url::MISSING_URL),
    ("url", url::INVALID_URL),
    ("url", url::INSECURE_URL),
    ("url", url::TEMPORARY_DOMAIN),
    ("basics", basics::MISSING_NAME),
    ("basics", basics::MISSING_LABEL),
    ("basics", basics::BRIEF_SUMMARY),
    ("basics", basics::INCOMPLETE_PROFILE),
    ("work", work::MISSING_COMPANY),
    ("work", work::MISSING_POSITION),
    ("work", work::VAGUE_POSITION),
    ("work", work::MISSING_SUMMARY),
    ("work", work::BRIEF_SUMMARY),
    ("work", work::MISSING_HIGHLIGHTS),
    ("work", work::VAGUE_HIGHLIGHT),
    ("work", date::MISSING_START_DATE),
    ("work", date::INVALID_START_DATE),
    ("work", date::FUTURE_START_DATE),
    ("work", date::INVALID_END_DATE),
    ("work", date::FUTURE_DATE),
    ("work", date::END_BEFORE_START),
    ("education", education::MISSING_INSTITUTION),
    ("education", education::MISSING_AREA),
    ("education", education::MISSING_STUDY_TYPE),
    ("education", education::MISSING_GPA),
    ("education", education::VAGUE_COURSE),
    ("education", date::MISSING_START_DATE),
    ("education", date::INVALID_START_DATE),
    ("education", date::FUTURE_START_DATE),
    ("education", date::INVALID_END_DATE),
    ("education", date::FUTURE_DATE),
    ("education", date::END_BEFORE_START),
    ("skills", skill::MISSING_NAME),
    ("skills", skill::BRIEF_NAME),
    ("skills", skill::GENERIC_SKILL),
    ("skills", skill::UNDEFINED_LEVEL),
    ("skills", skill::MISSING_KEYWORDS),
    ("projects", project::MISSING_NAME),
    ("projects", project::MISSING_DESCRIPTION),
    ("projects", project::BRIEF_DESCRIPTION),
    ("projects", project::MISSING_KEYWORDS),
    ("projects", project::INVALID_URL),
    ("projects", date::INVALID_DATE),
    ("awards", award::MISSING_TITLE),
    ("awards", award::MISSING_AWARDER),
    ("awards", date::INVALID_DATE),
    ("certificates", certificate::MISSING_NAME),
    ("certificates", certificate::MISSING_ISSUER),
    ("certificates", date::INVALID_DATE),
    ("publications", publication::MISSING_NAME),
    ("publications", publication::MISSING_PUBLISHER),
    ("publications", date::INVALID_DATE),
    ("volunteer", volunteer::MISSING_ORGANIZATION),
    ("volunteer", volunteer::MISSING_POSITION),
    ("volunteer", volunteer::BRIEF_SUMMARY),
    ("languages", language::MISSING_LANGUAGE),
    ("languages", language::MISSING_FLUENCY),
    ("languages", language::UNKNOWN_FLUENCY),
    ("interests", interest::MISSING_NAME),
    ("interests", interest::MISSING_KEYWORDS),
    ("references", reference::MISSING_NAME),
    ("references", reference::MISSING_REFERENCE),
    ("references", reference::BRIEF_REFERENCE),
    ("resume", resume::MISSING_BASICS),
    ("resume", basics::MISSING_NAME),
    ("resume", date::INVALID_DATE),
];

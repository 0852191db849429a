// ABOUTME: Rule threshold configuration for the section validators
// ABOUTME: Loaded from JSON; every threshold falls back to its default when omitted

use crate::{CvkitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Length thresholds below which a field is reported as vague or brief
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Work position
    pub position_min_length: usize,
    /// Work, volunteer and basics summaries
    pub summary_min_length: usize,
    /// Each work highlight
    pub highlight_min_length: usize,
    pub skill_name_min_length: usize,
    /// Each education course
    pub course_min_length: usize,
    /// Project description
    pub description_min_length: usize,
    /// Reference text
    pub reference_min_length: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            position_min_length: 5,
            summary_min_length: 100,
            highlight_min_length: 30,
            skill_name_min_length: 3,
            course_min_length: 3,
            description_min_length: 100,
            reference_min_length: 20,
        }
    }
}

impl RuleConfig {
    /// Load rule config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse rule config from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CvkitError::Config(format!("rule config: {e}")))
    }
}

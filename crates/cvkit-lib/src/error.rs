// ABOUTME: Error types for cvkit operations
// ABOUTME: Defines CvkitError covering I/O, parsing and API misuse; validation problems are not errors

use thiserror::Error;

/// Errors that can occur while loading documents or driving the validators.
///
/// Expected validation problems never surface here: they are reported as
/// [`crate::ValidationIssue`]s inside an [`crate::Outcome`].
#[derive(Error, Debug)]
pub enum CvkitError {
    /// I/O error reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document does not match the résumé schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Rule or message catalog configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Field-level validation was asked for a field the entity does not have
    #[error("Unknown field '{field}' for {entity}")]
    UnknownField { entity: &'static str, field: String },

    /// Section name not recognised
    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    /// Field-level validation was asked for an item past the end of a section
    #[error("Section '{section}' has no item at index {index} ({len} item(s))")]
    ItemOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },

    /// The value of a failed outcome was requested
    #[error("Cannot read the value of a failed outcome ({0} issue(s))")]
    ValueOfFailure(usize),

    /// An error-severity issue was passed where only warnings are allowed
    #[error("Success with warnings cannot carry error issue '{0}'")]
    BlockingIssueInWarnings(String),

    /// A failure was built without any error-severity issue
    #[error("A failure needs at least one error issue")]
    FailureWithoutError,
}

use thiserror::Error;

/// Errors that can occur while parsing or re-serializing survey documents.
///
/// The rule evaluator itself has no error channel: malformed rules degrade to
/// "condition not met" and missing rule sets degrade to "visible". Errors only
/// surface at the document boundary, where the builder saves or loads JSON.
#[derive(Error, Debug)]
pub enum SurveyParseError {
    #[error("Failed to parse survey JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize rules for question '{question_id}': {message}")]
    RuleSerialization { question_id: String, message: String },
}

/// Errors raised by the authoring draft when an edit references a group or
/// condition row that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("No condition group at index {0}")]
    GroupNotFound(usize),

    #[error("No condition row at index {row} in group {group}")]
    RowNotFound { group: usize, row: usize },
}

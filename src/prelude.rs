//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the bunki crate.
//! Import this module to get access to the core functionality without having
//! to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use bunki::prelude::*;
//!
//! # fn run_example() -> Result<(), Box<dyn std::error::Error>> {
//! let survey_json = std::fs::read_to_string("path/to/survey.json")?;
//! let survey = Survey::from_json(&survey_json)?;
//!
//! let mut session = SurveySession::new(survey);
//! for question in session.visible_questions() {
//!     println!("show: {}", question.id);
//! }
//!
//! if let Some(action) = session.record_answer("q1", "yes") {
//!     println!("branching fired: {:?}", action);
//! }
//! # Ok(())
//! # }
//! ```

// Core evaluation
pub use crate::evaluator::{ResolvedAction, is_visible, resolve_action};

// Rule data model
pub use crate::rules::{
    BranchingAction, Condition, ConditionOperator, ConditionValue, LogicalOperator, Rule, RuleSet,
};

// Runtime answers
pub use crate::answer::{AnswerSheet, AnswerValue};

// Survey document and rule storage locations
pub use crate::survey::{Page, Question, Survey, extract_rules, store_rules};

// Authoring
pub use crate::draft::{DraftGroup, DraftRow, RuleSetDraft};

// Respondent runner
pub use crate::runner::SurveySession;

// Error types
pub use crate::error::{DraftError, SurveyParseError};

//! # Bunki - Survey Visibility and Branching Rule Engine
//!
//! **Bunki** evaluates the conditional-display and branching rules attached to
//! survey questions. Given the answers a respondent has provided so far, it
//! decides which questions on a page should be shown, and whether a freshly
//! recorded answer should jump the respondent to another page or end the
//! survey early.
//!
//! The engine operates on a canonical rule model (`Rule` / `RuleSet`) that is
//! read out of UI-authored survey documents. Persistence and rendering are the
//! job of the surrounding application; bunki only owns the semantics.
//!
//! ## Core Workflow
//!
//! 1. **Load the survey document**: parse the stored JSON into [`survey::Survey`].
//!    Rule sets may live in one of several legacy locations on each question;
//!    [`survey::extract_rules`] resolves them in precedence order.
//! 2. **Evaluate visibility**: call [`evaluator::is_visible`] with a question's
//!    [`rules::RuleSet`] and the current [`answer::AnswerSheet`]. This is a pure
//!    function and is meant to be re-run on every answer change.
//! 3. **Resolve branching**: after recording an answer, call
//!    [`evaluator::resolve_action`] to find out whether a page skip or an
//!    early termination fires.
//! 4. **Drive a session**: [`runner::SurveySession`] wires the above together
//!    for a respondent-facing runner, tracking the active page, the answer
//!    sheet and the visited-page history.
//!
//! Authoring-side code edits rules through [`draft::RuleSetDraft`], which
//! flattens back into the canonical `Rule` array on save.
//!
//! ## Quick Start
//!
//! ```rust
//! use bunki::prelude::*;
//!
//! // Two rules in one group: visible when q1 equals "yes" OR q2 equals "no".
//! let rules: RuleSet = serde_json::from_str(
//!     r#"[
//!         {"questionId": "q1", "condition": {"operator": "equals", "value": "yes"}, "logical": "OR"},
//!         {"questionId": "q2", "condition": {"operator": "equals", "value": "no"}}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let mut answers = AnswerSheet::new();
//! assert!(!is_visible(&rules, &answers)); // nothing answered yet
//!
//! answers.record("q1", "yes");
//! assert!(is_visible(&rules, &answers));
//! ```

pub mod answer;
pub mod draft;
pub mod error;
pub mod evaluator;
pub mod prelude;
pub mod rules;
pub mod runner;
pub mod survey;

//! The visibility and branching evaluation core.
//!
//! Both entry points are pure functions of their inputs and never fail:
//! malformed or missing data degrades to "not met" at the condition level and
//! "visible" at the rule-set level. They are designed to be re-invoked on
//! every answer change for every question on the active page; answer sets are
//! small, so correctness wins over caching.

use crate::answer::{AnswerSheet, AnswerValue};
use crate::rules::{BranchingAction, RuleSet};

mod engine;

/// Decides whether a question is currently visible.
///
/// An empty rule set means always visible. Otherwise the rules are
/// partitioned into groups, each group is left-folded with its trailing
/// AND/OR combinators, and the groups are OR'd together: the question shows
/// as soon as any group is satisfied.
pub fn is_visible(rules: &RuleSet, answers: &AnswerSheet) -> bool {
    if rules.is_empty() {
        return true;
    }

    for (_, group) in engine::partition_groups(rules.rules()) {
        if engine::group_satisfied(&group, answers) {
            return true;
        }
    }
    false
}

/// A branching action with its target page index already resolved against the
/// survey's page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedAction {
    /// Jump to the given (clamped) page index.
    SkipToPage(usize),
    /// Terminate the survey; the payload is the last page index, where the
    /// runner parks the session.
    EndSurvey(usize),
}

impl ResolvedAction {
    pub fn page_index(&self) -> usize {
        match self {
            ResolvedAction::SkipToPage(index) | ResolvedAction::EndSurvey(index) => *index,
        }
    }

    pub fn ends_survey(&self) -> bool {
        matches!(self, ResolvedAction::EndSurvey(_))
    }
}

/// Determines whether a just-recorded answer fires a page skip or an early
/// termination.
///
/// Scans the answered question's own rule set for rules referencing itself
/// and returns the first action whose condition is met by `new_answer`.
/// Unlike visibility, this is a first-match policy: later satisfied rules do
/// not fire. Rules without an attached action are skipped so that a
/// visibility-only rule on the same question cannot swallow the branch.
///
/// `target_page_index` is clamped into `[0, page_count - 1]`; `end_survey`
/// resolves to the last page index.
pub fn resolve_action(
    question_id: &str,
    rules: &RuleSet,
    new_answer: &AnswerValue,
    page_count: usize,
) -> Option<ResolvedAction> {
    let last_page = page_count.saturating_sub(1);

    rules
        .iter()
        .filter(|rule| rule.question_id == question_id)
        .find_map(|rule| {
            let action = rule.action.as_ref()?;
            if !rule.condition.matches(new_answer) {
                return None;
            }
            Some(match action {
                BranchingAction::SkipToPage { target_page_index } => {
                    let clamped = (*target_page_index).clamp(0, last_page as i64) as usize;
                    ResolvedAction::SkipToPage(clamped)
                }
                BranchingAction::EndSurvey => ResolvedAction::EndSurvey(last_page),
            })
        })
}

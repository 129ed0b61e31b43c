use super::condition::Condition;
use serde::{Deserialize, Serialize};

/// How a rule combines with the *next* rule in its group.
///
/// This is a trailing operator: rule *i*'s `logical` joins rule *i* with rule
/// *i+1*. The last rule of a group carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// A navigation side effect attached to a rule, fired when the referenced
/// answer changes and the condition is met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BranchingAction {
    SkipToPage {
        #[serde(rename = "targetPageIndex", alias = "target_page_index")]
        target_page_index: i64,
    },
    EndSurvey,
}

/// One visibility/branching rule: the condition is checked against the answer
/// of `question_id`, which must reference a question appearing strictly
/// earlier in the survey. The authoring UI enforces that invariant; the
/// evaluator trusts its input, and a reference that never resolves simply
/// never matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(alias = "question_id")]
    pub question_id: String,

    pub condition: Condition,

    /// Trailing combinator toward the next rule of the same group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical: Option<LogicalOperator>,

    /// Group membership; absent means group 0. Groups are OR'd together.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "group_index")]
    pub group_index: Option<u32>,

    /// Optional branching action, consulted by the respondent runner only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<BranchingAction>,
}

impl Rule {
    pub fn new(question_id: impl Into<String>, condition: Condition) -> Self {
        Self {
            question_id: question_id.into(),
            condition,
            logical: None,
            group_index: None,
            action: None,
        }
    }

    pub fn with_logical(mut self, logical: LogicalOperator) -> Self {
        self.logical = Some(logical);
        self
    }

    pub fn with_group(mut self, group_index: u32) -> Self {
        self.group_index = Some(group_index);
        self
    }

    pub fn with_action(mut self, action: BranchingAction) -> Self {
        self.action = Some(action);
        self
    }
}

//! The builder-side editing model for a question's rule set.
//!
//! [`RuleSetDraft`] is an explicit value object for an editing session:
//! groups of condition rows that the authoring UI adds to, removes from and
//! mutates through plain methods, with no hidden component state. Saving
//! flattens the draft back into the canonical `Rule` array; loading
//! reconstructs a draft from persisted rules, tolerating legacy data saved
//! without group indices.
//!
//! Every group and row carries an ephemeral random key for stable list
//! rendering. Keys never appear in flattened output and are regenerated on
//! every reconstruction.

use crate::error::DraftError;
use crate::rules::{BranchingAction, Condition, ConditionOperator, ConditionValue, LogicalOperator, Rule};
use itertools::Itertools;

fn fresh_key() -> u64 {
    rand::random()
}

/// One editable condition row.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRow {
    key: u64,
    pub question_id: String,
    pub operator: ConditionOperator,
    /// `None` or an empty string never persists; such rows are dropped on
    /// flatten so authors cannot save empty filters.
    pub value: Option<ConditionValue>,
    /// Trailing combinator toward the next row; only meaningful on rows
    /// before the last of their group.
    pub logical: LogicalOperator,
    pub action: Option<BranchingAction>,
}

impl DraftRow {
    pub fn new(
        question_id: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            key: fresh_key(),
            question_id: question_id.into(),
            operator,
            value: Some(value.into()),
            logical: LogicalOperator::Or,
            action: None,
        }
    }

    /// A row with no value yet, as created by the UI's "add condition".
    pub fn blank(question_id: impl Into<String>) -> Self {
        Self {
            key: fresh_key(),
            question_id: question_id.into(),
            operator: ConditionOperator::Equals,
            value: None,
            logical: LogicalOperator::Or,
            action: None,
        }
    }

    pub fn with_logical(mut self, logical: LogicalOperator) -> Self {
        self.logical = logical;
        self
    }

    pub fn with_action(mut self, action: BranchingAction) -> Self {
        self.action = Some(action);
        self
    }

    /// The ephemeral render key. UI-only; never serialized.
    pub fn key(&self) -> u64 {
        self.key
    }

    fn persistable_value(&self) -> Option<&ConditionValue> {
        self.value.as_ref().filter(|v| !v.is_empty())
    }
}

/// One editable group of condition rows. Groups are OR'd at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftGroup {
    key: u64,
    rows: Vec<DraftRow>,
}

impl DraftGroup {
    fn new() -> Self {
        Self {
            key: fresh_key(),
            rows: Vec::new(),
        }
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }
}

/// An in-progress edit of a question's rule set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSetDraft {
    groups: Vec<DraftGroup>,
}

impl RuleSetDraft {
    /// An empty draft with no groups, as shown for a question without rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[DraftGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.rows.is_empty())
    }

    /// Appends a new empty group and returns its index.
    pub fn add_group(&mut self) -> usize {
        self.groups.push(DraftGroup::new());
        self.groups.len() - 1
    }

    pub fn remove_group(&mut self, group: usize) -> Result<(), DraftError> {
        if group >= self.groups.len() {
            return Err(DraftError::GroupNotFound(group));
        }
        self.groups.remove(group);
        Ok(())
    }

    /// Appends a row to an existing group.
    pub fn add_row(&mut self, group: usize, row: DraftRow) -> Result<(), DraftError> {
        self.groups
            .get_mut(group)
            .ok_or(DraftError::GroupNotFound(group))?
            .rows
            .push(row);
        Ok(())
    }

    pub fn remove_row(&mut self, group: usize, row: usize) -> Result<(), DraftError> {
        let rows = &mut self
            .groups
            .get_mut(group)
            .ok_or(DraftError::GroupNotFound(group))?
            .rows;
        if row >= rows.len() {
            return Err(DraftError::RowNotFound { group, row });
        }
        rows.remove(row);
        Ok(())
    }

    pub fn row_mut(&mut self, group: usize, row: usize) -> Result<&mut DraftRow, DraftError> {
        self.groups
            .get_mut(group)
            .ok_or(DraftError::GroupNotFound(group))?
            .rows
            .get_mut(row)
            .ok_or(DraftError::RowNotFound { group, row })
    }

    /// Flattens the draft into the canonical rule array for persistence.
    ///
    /// Rows without a persistable value are dropped. Surviving groups are
    /// renumbered densely from 0 so that the stamped `group_index` values
    /// stay stable across repeated flatten/reconstruct cycles. Within a
    /// group, every rule but the last carries its trailing `logical`.
    pub fn flatten(&self) -> Vec<Rule> {
        let mut out = Vec::new();
        let mut next_group = 0u32;

        for group in &self.groups {
            let surviving: Vec<(&DraftRow, &ConditionValue)> = group
                .rows
                .iter()
                .filter_map(|row| row.persistable_value().map(|value| (row, value)))
                .collect();
            if surviving.is_empty() {
                continue;
            }

            let last = surviving.len() - 1;
            for (i, (row, value)) in surviving.iter().enumerate() {
                out.push(Rule {
                    question_id: row.question_id.clone(),
                    condition: Condition {
                        operator: row.operator.clone(),
                        value: (*value).clone(),
                    },
                    logical: (i != last).then_some(row.logical),
                    group_index: Some(next_group),
                    action: row.action.clone(),
                });
            }
            next_group += 1;
        }

        out
    }

    /// Rebuilds an editable draft from persisted rules.
    ///
    /// Rules are grouped by `group_index` (absent means 0) after a stable
    /// sort on `(group_index, original position)`, which tolerates legacy
    /// data saved without explicit indices. Ephemeral keys are regenerated,
    /// so reconstruction is an inverse of [`flatten`](Self::flatten) only up
    /// to those keys.
    pub fn reconstruct(rules: &[Rule]) -> Self {
        let ordered: Vec<(u32, &Rule)> = rules
            .iter()
            .enumerate()
            .sorted_by_key(|(position, rule)| (rule.group_index.unwrap_or(0), *position))
            .map(|(_, rule)| (rule.group_index.unwrap_or(0), rule))
            .collect();

        let mut draft = RuleSetDraft::new();
        for (_, chunk) in &ordered.into_iter().chunk_by(|(group, _)| *group) {
            let index = draft.add_group();
            for (_, rule) in chunk {
                draft.groups[index].rows.push(DraftRow {
                    key: fresh_key(),
                    question_id: rule.question_id.clone(),
                    operator: rule.condition.operator.clone(),
                    value: Some(rule.condition.value.clone()),
                    logical: rule.logical.unwrap_or(LogicalOperator::Or),
                    action: rule.action.clone(),
                });
            }
        }
        draft
    }
}

use crate::answer::AnswerSheet;
use crate::rules::{LogicalOperator, Rule};
use itertools::Itertools;

/// Partitions rules into their groups, keyed by `group_index` (default 0),
/// preserving encounter order within each group. Groups come back in
/// ascending key order; since groups are OR'd this only affects
/// short-circuit timing, not the result.
pub(super) fn partition_groups(rules: &[Rule]) -> Vec<(u32, Vec<&Rule>)> {
    rules
        .iter()
        .map(|rule| (rule.group_index.unwrap_or(0), rule))
        .into_group_map()
        .into_iter()
        .sorted_by_key(|(key, _)| *key)
        .collect()
}

/// Left-folds one group's rules using each rule's *trailing* `logical`
/// operator: the combinator between rule *i-1* and rule *i* is rule *i-1*'s
/// `logical`, defaulting to OR when unspecified.
///
/// This is strictly evaluation-order combination, not algebraic precedence:
/// `A OR B AND C` folds as `(A OR B) AND C`.
pub(super) fn group_satisfied(rules: &[&Rule], answers: &AnswerSheet) -> bool {
    let mut combined = false;
    let mut joiner: Option<LogicalOperator> = None;

    for (i, rule) in rules.iter().enumerate() {
        // An unanswered referenced question means the condition is not met.
        let met = answers
            .get(&rule.question_id)
            .is_some_and(|answer| rule.condition.matches(answer));

        combined = if i == 0 {
            met
        } else {
            match joiner {
                Some(LogicalOperator::And) => combined && met,
                _ => combined || met,
            }
        };
        joiner = rule.logical;
    }

    combined
}

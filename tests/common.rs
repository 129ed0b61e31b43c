//! Common test utilities for building rules, questions and survey documents.
use bunki::prelude::*;

/// A rule with the given condition and no group/logical/action metadata.
#[allow(dead_code)]
pub fn rule(
    question_id: &str,
    operator: ConditionOperator,
    value: impl Into<ConditionValue>,
) -> Rule {
    Rule::new(question_id, Condition::new(operator, value))
}

/// An `equals` rule, the most common authoring case.
#[allow(dead_code)]
pub fn equals_rule(question_id: &str, value: impl Into<ConditionValue>) -> Rule {
    rule(question_id, ConditionOperator::Equals, value)
}

/// A question whose rules are persisted in the canonical location.
#[allow(dead_code)]
pub fn question_with_rules(id: &str, rules: &[Rule]) -> Question {
    let mut question = Question::new(id);
    store_rules(&mut question, rules).unwrap();
    question
}

/// A three-page survey:
///
/// - page 0: q1 (free), q2 (visible when q1 equals "yes")
/// - page 1: q3 (free)
/// - page 2: q4 (free)
///
/// q1 additionally branches: answering "skip" jumps to page 99 (clamped),
/// answering "done" ends the survey.
#[allow(dead_code)]
pub fn branching_survey() -> Survey {
    let q1 = question_with_rules(
        "q1",
        &[
            equals_rule("q1", "skip").with_action(BranchingAction::SkipToPage {
                target_page_index: 99,
            }),
            equals_rule("q1", "done").with_action(BranchingAction::EndSurvey),
        ],
    );
    let q2 = question_with_rules("q2", &[equals_rule("q1", "yes")]);

    Survey::new(vec![
        Page::new(vec![q1, q2]),
        Page::new(vec![Question::new("q3")]),
        Page::new(vec![Question::new("q4")]),
    ])
}

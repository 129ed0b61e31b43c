//! Tests for rule extraction from legacy storage locations and canonical
//! write-back.
mod common;
use bunki::prelude::*;
use common::*;
use serde_json::json;

fn question_from_json(value: serde_json::Value) -> Question {
    serde_json::from_value(value).unwrap()
}

#[test]
fn extracts_from_canonical_location() {
    let question = question_from_json(json!({
        "id": "q2",
        "settings": {
            "visibleWhen": [
                {"questionId": "q1", "condition": {"operator": "equals", "value": "yes"}}
            ]
        }
    }));

    let rules = extract_rules(&question);
    assert_eq!(rules.len(), 1);
    assert_eq!(rules.rules()[0].question_id, "q1");
}

#[test]
fn extracts_from_nested_visibility_rules() {
    let question = question_from_json(json!({
        "id": "q2",
        "settings": {
            "visibility": {
                "rules": [
                    {"questionId": "q1", "condition": {"operator": "equals", "value": "no"}}
                ]
            }
        }
    }));

    assert_eq!(extract_rules(&question).len(), 1);
}

#[test]
fn extracts_from_top_level_locations() {
    let question = question_from_json(json!({
        "id": "q2",
        "visibilityRules": [
            {"questionId": "q1", "condition": {"operator": "contains", "value": "a"}}
        ]
    }));
    assert_eq!(extract_rules(&question).len(), 1);

    let question = question_from_json(json!({
        "id": "q2",
        "visibleWhen": [
            {"questionId": "q1", "condition": {"operator": "equals", "value": 5}}
        ]
    }));
    assert_eq!(extract_rules(&question).len(), 1);
}

#[test]
fn precedence_order_is_fixed() {
    // All four locations populated; settings.visibleWhen wins.
    let question = question_from_json(json!({
        "id": "q2",
        "settings": {
            "visibleWhen": [
                {"questionId": "canonical", "condition": {"operator": "equals", "value": "a"}}
            ],
            "visibility": {
                "rules": [
                    {"questionId": "nested", "condition": {"operator": "equals", "value": "b"}}
                ]
            }
        },
        "visibilityRules": [
            {"questionId": "legacy1", "condition": {"operator": "equals", "value": "c"}}
        ],
        "visibleWhen": [
            {"questionId": "legacy2", "condition": {"operator": "equals", "value": "d"}}
        ]
    }));

    let rules = extract_rules(&question);
    assert_eq!(rules.rules()[0].question_id, "canonical");
}

#[test]
fn present_empty_array_halts_the_chain() {
    // An empty canonical array is a real (empty) rule set; the populated
    // legacy location behind it must not resurrect old rules.
    let question = question_from_json(json!({
        "id": "q2",
        "settings": {"visibleWhen": []},
        "visibilityRules": [
            {"questionId": "legacy", "condition": {"operator": "equals", "value": "x"}}
        ]
    }));

    assert!(extract_rules(&question).is_empty());
}

#[test]
fn malformed_location_falls_through() {
    let question = question_from_json(json!({
        "id": "q2",
        "settings": {"visibleWhen": "not an array"},
        "visibilityRules": [
            {"questionId": "q1", "condition": {"operator": "equals", "value": "x"}}
        ]
    }));

    let rules = extract_rules(&question);
    assert_eq!(rules.len(), 1);
    assert_eq!(rules.rules()[0].question_id, "q1");
}

#[test]
fn missing_everywhere_means_empty() {
    let question = question_from_json(json!({"id": "q2"}));
    assert!(extract_rules(&question).is_empty());

    let answers = AnswerSheet::new();
    assert!(is_visible(&extract_rules(&question), &answers));
}

#[test]
fn store_writes_canonical_and_strips_legacy() {
    let mut question = question_from_json(json!({
        "id": "q2",
        "settings": {
            "visibility": {"rules": [], "mode": "conditional"},
            "placeholder": "pick one"
        },
        "visibilityRules": [],
        "visibleWhen": []
    }));

    let rules = vec![equals_rule("q1", "yes")];
    store_rules(&mut question, &rules).unwrap();

    assert!(question.settings.get("visibleWhen").is_some());
    assert!(question.visibility_rules.is_none());
    assert!(question.visible_when.is_none());
    // Unrelated settings survive; only the rules key is stripped.
    assert_eq!(
        question.settings.pointer("/visibility/mode"),
        Some(&json!("conditional"))
    );
    assert_eq!(question.settings.get("placeholder"), Some(&json!("pick one")));

    let extracted = extract_rules(&question);
    assert_eq!(extracted.rules(), rules.as_slice());
}

#[test]
fn store_drops_emptied_visibility_container() {
    let mut question = question_from_json(json!({
        "id": "q2",
        "settings": {"visibility": {"rules": []}}
    }));

    store_rules(&mut question, &[]).unwrap();
    assert!(question.settings.get("visibility").is_none());
}

#[test]
fn store_initializes_missing_settings() {
    let mut question = Question::new("q2");
    store_rules(&mut question, &[equals_rule("q1", "yes")]).unwrap();
    assert_eq!(extract_rules(&question).len(), 1);
}

#[test]
fn serialized_rules_use_wire_field_names() {
    let rules = vec![
        equals_rule("q1", "yes")
            .with_group(1)
            .with_logical(LogicalOperator::And)
            .with_action(BranchingAction::SkipToPage {
                target_page_index: 2,
            }),
    ];

    let json = serde_json::to_value(&rules).unwrap();
    let rule = &json[0];
    assert_eq!(rule["questionId"], "q1");
    assert_eq!(rule["groupIndex"], 1);
    assert_eq!(rule["logical"], "AND");
    assert_eq!(rule["condition"]["operator"], "equals");
    assert_eq!(rule["action"]["type"], "skip_to_page");
    assert_eq!(rule["action"]["targetPageIndex"], 2);
}

#[test]
fn optional_fields_are_omitted_when_absent() {
    let json = serde_json::to_value(vec![equals_rule("q1", "yes")]).unwrap();
    let rule = &json[0];
    assert!(rule.get("logical").is_none());
    assert!(rule.get("groupIndex").is_none());
    assert!(rule.get("action").is_none());
}

#[test]
fn unknown_operator_survives_load_and_save() {
    let question = question_from_json(json!({
        "id": "q2",
        "settings": {
            "visibleWhen": [
                {"questionId": "q1", "condition": {"operator": "matches_regex", "value": "a.*"}}
            ]
        }
    }));

    let rules = extract_rules(&question);
    assert_eq!(
        rules.rules()[0].condition.operator,
        ConditionOperator::Other("matches_regex".to_owned())
    );

    let json = serde_json::to_value(rules.rules()).unwrap();
    assert_eq!(json[0]["condition"]["operator"], "matches_regex");
}

//! Rule-set extraction from, and canonical write-back into, the survey
//! document.
//!
//! Historic versions of the builder persisted rules in four different spots.
//! Reads try them in fixed precedence order; the first location holding a
//! parseable rule array wins, even when that array is empty. Writes always go
//! to the single canonical location (`settings.visibleWhen`) and strip the
//! legacy ones, so documents converge on first save.

use super::document::Question;
use crate::error::SurveyParseError;
use crate::rules::{Rule, RuleSet};

type RuleLocation = fn(&Question) -> Option<&serde_json::Value>;

/// The legacy storage locations, in precedence order.
const RULE_LOCATIONS: &[RuleLocation] = &[
    |q| q.settings.get("visibleWhen"),
    |q| q.settings.get("visibility").and_then(|v| v.get("rules")),
    |q| q.visibility_rules.as_ref(),
    |q| q.visible_when.as_ref(),
];

/// Reads a question's rule set, trying each legacy location in turn and
/// falling back to an empty set. A location that fails to parse as a rule
/// array is treated as absent rather than raising.
pub fn extract_rules(question: &Question) -> RuleSet {
    for location in RULE_LOCATIONS {
        if let Some(raw) = location(question)
            && let Ok(rules) = serde_json::from_value::<Vec<Rule>>(raw.clone())
        {
            return RuleSet::from(rules);
        }
    }
    RuleSet::default()
}

/// Writes a normalized rule array into the canonical location and removes
/// every legacy one.
pub fn store_rules(question: &mut Question, rules: &[Rule]) -> Result<(), SurveyParseError> {
    let value =
        serde_json::to_value(rules).map_err(|e| SurveyParseError::RuleSerialization {
            question_id: question.id.clone(),
            message: e.to_string(),
        })?;

    if !question.settings.is_object() {
        question.settings = serde_json::json!({});
    }
    let settings = question
        .settings
        .as_object_mut()
        .ok_or_else(|| SurveyParseError::RuleSerialization {
            question_id: question.id.clone(),
            message: "settings is not an object".to_owned(),
        })?;

    settings.insert("visibleWhen".to_owned(), value);

    // Strip the legacy nested location, dropping the container when it holds
    // nothing else.
    let mut drop_visibility = false;
    if let Some(obj) = settings
        .get_mut("visibility")
        .and_then(|v| v.as_object_mut())
    {
        obj.remove("rules");
        drop_visibility = obj.is_empty();
    }
    if drop_visibility {
        settings.remove("visibility");
    }

    question.visibility_rules = None;
    question.visible_when = None;

    Ok(())
}

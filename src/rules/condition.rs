use crate::answer::{AnswerValue, parse_loose_number};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a single condition.
///
/// Operator strings the engine does not recognize are preserved as
/// `Other` and never match anything. A rule that cannot be understood must
/// not satisfy a visibility condition, but it must not fail the load either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionOperator {
    Equals,
    Contains,
    GreaterThan,
    LessThan,
    Other(String),
}

impl From<String> for ConditionOperator {
    fn from(s: String) -> Self {
        match s.as_str() {
            "equals" => ConditionOperator::Equals,
            "contains" => ConditionOperator::Contains,
            "greater_than" => ConditionOperator::GreaterThan,
            "less_than" => ConditionOperator::LessThan,
            _ => ConditionOperator::Other(s),
        }
    }
}

impl From<ConditionOperator> for String {
    fn from(op: ConditionOperator) -> Self {
        match op {
            ConditionOperator::Equals => "equals".to_owned(),
            ConditionOperator::Contains => "contains".to_owned(),
            ConditionOperator::GreaterThan => "greater_than".to_owned(),
            ConditionOperator::LessThan => "less_than".to_owned(),
            ConditionOperator::Other(s) => s,
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionOperator::Equals => write!(f, "equals"),
            ConditionOperator::Contains => write!(f, "contains"),
            ConditionOperator::GreaterThan => write!(f, "greater_than"),
            ConditionOperator::LessThan => write!(f, "less_than"),
            ConditionOperator::Other(s) => write!(f, "{}", s),
        }
    }
}

/// The comparison value authored into a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ConditionValue {
    /// Empty-string values are falsy filters; the draft drops them on save.
    pub fn is_empty(&self) -> bool {
        matches!(self, ConditionValue::Text(s) if s.is_empty())
    }

    /// Returns the value as a finite number, if it coerces to one.
    pub fn as_finite_number(&self) -> Option<f64> {
        let n = self.to_number();
        n.is_finite().then_some(n)
    }

    pub fn to_number(&self) -> f64 {
        match self {
            ConditionValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            ConditionValue::Number(n) => *n,
            ConditionValue::Text(s) => parse_loose_number(s),
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Bool(b) => write!(f, "{}", b),
            ConditionValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            ConditionValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(v: &str) -> Self {
        ConditionValue::Text(v.to_owned())
    }
}

impl From<String> for ConditionValue {
    fn from(v: String) -> Self {
        ConditionValue::Text(v)
    }
}

impl From<f64> for ConditionValue {
    fn from(v: f64) -> Self {
        ConditionValue::Number(v)
    }
}

impl From<i64> for ConditionValue {
    fn from(v: i64) -> Self {
        ConditionValue::Number(v as f64)
    }
}

impl From<bool> for ConditionValue {
    fn from(v: bool) -> Self {
        ConditionValue::Bool(v)
    }
}

/// A single authored condition: operator plus comparison value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub operator: ConditionOperator,
    pub value: ConditionValue,
}

impl Condition {
    pub fn new(operator: ConditionOperator, value: impl Into<ConditionValue>) -> Self {
        Self {
            operator,
            value: value.into(),
        }
    }

    /// Evaluates this condition against a recorded answer.
    ///
    /// Callers must treat a missing answer as "not met" before ever reaching
    /// this method; `matches` assumes the answer exists.
    ///
    /// - `equals` compares numerically when the answer is a number or the
    ///   condition value coerces to a finite one; otherwise it compares the
    ///   case-sensitive string forms. Numeric-looking strings ("5") therefore
    ///   equal their numbers (5).
    /// - `contains` is case-insensitive: element equality for multi-select
    ///   answers, substring match for everything else.
    /// - `greater_than` / `less_than` coerce both sides to numbers; NaN never
    ///   compares true.
    pub fn matches(&self, answer: &AnswerValue) -> bool {
        match &self.operator {
            ConditionOperator::Equals => {
                if answer.is_number() || self.value.as_finite_number().is_some() {
                    answer.to_number() == self.value.to_number()
                } else {
                    answer.to_string() == self.value.to_string()
                }
            }
            ConditionOperator::Contains => {
                let needle = self.value.to_string().to_lowercase();
                match answer {
                    AnswerValue::Selection(items) => {
                        items.iter().any(|item| item.to_lowercase() == needle)
                    }
                    other => other.to_string().to_lowercase().contains(&needle),
                }
            }
            ConditionOperator::GreaterThan => answer.to_number() > self.value.to_number(),
            ConditionOperator::LessThan => answer.to_number() < self.value.to_number(),
            ConditionOperator::Other(_) => false,
        }
    }
}

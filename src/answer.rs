//! Runtime answer values and the incrementally-built answer sheet.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// A single recorded answer: a primitive or a multi-select list.
///
/// Answers arrive from the respondent UI as loosely-typed JSON, so the
/// condition evaluator coerces between numeric and string forms rather than
/// demanding exact types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Selection(Vec<String>),
}

impl AnswerValue {
    pub fn is_number(&self) -> bool {
        matches!(self, AnswerValue::Number(_))
    }

    /// Coerces the answer to a number the way loosely-typed survey frontends
    /// do: booleans become 0/1, strings are trimmed and parsed (empty string
    /// is 0), multi-selects are joined with "," first. Anything that does not
    /// parse becomes NaN, which no comparison operator matches.
    pub fn to_number(&self) -> f64 {
        match self {
            AnswerValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            AnswerValue::Number(n) => *n,
            AnswerValue::Text(s) => parse_loose_number(s),
            AnswerValue::Selection(items) => parse_loose_number(&items.join(",")),
        }
    }
}

/// Shared string-to-number coercion for answers and condition values.
pub(crate) fn parse_loose_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Bool(b) => write!(f, "{}", b),
            AnswerValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            AnswerValue::Text(s) => write!(f, "{}", s),
            AnswerValue::Selection(items) => write!(f, "{}", items.join(",")),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(v: &str) -> Self {
        AnswerValue::Text(v.to_owned())
    }
}

impl From<String> for AnswerValue {
    fn from(v: String) -> Self {
        AnswerValue::Text(v)
    }
}

impl From<f64> for AnswerValue {
    fn from(v: f64) -> Self {
        AnswerValue::Number(v)
    }
}

impl From<i64> for AnswerValue {
    fn from(v: i64) -> Self {
        AnswerValue::Number(v as f64)
    }
}

impl From<bool> for AnswerValue {
    fn from(v: bool) -> Self {
        AnswerValue::Bool(v)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(v: Vec<String>) -> Self {
        AnswerValue::Selection(v)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(v: Vec<&str>) -> Self {
        AnswerValue::Selection(v.into_iter().map(str::to_owned).collect())
    }
}

/// The answers collected so far, keyed by question id.
///
/// Owned by the session controller; the evaluator only reads it. Recording an
/// answer replaces the previous value wholesale so evaluations within one
/// render cycle always see a consistent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: AHashMap<String, AnswerValue>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a saved answer sheet from a JSON file (e.g. a resumed session).
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let sheet = serde_json::from_str(&content)?;
        Ok(sheet)
    }

    /// Record an answer, replacing any previous value for the question.
    pub fn record(&mut self, question_id: &str, value: impl Into<AnswerValue>) {
        self.answers.insert(question_id.to_owned(), value.into());
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.answers.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.answers.iter()
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerSheet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

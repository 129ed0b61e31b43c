//! Serde model of the survey document as the external storage service ships
//! it. The shape is tolerant: `settings` stays a free-form JSON object owned
//! by the storage schema, and camelCase field spellings are accepted via
//! aliases.

use crate::error::SurveyParseError;
use serde::{Deserialize, Serialize};

/// A question as stored in the survey document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "question_type")]
    pub question_type: Option<String>,

    /// Free-form per-question settings object; rule sets usually live under
    /// `settings.visibleWhen` (see the storage module for the legacy spots).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub settings: serde_json::Value,

    /// Legacy top-level rule location, kept raw until extraction.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "visibility_rules")]
    pub visibility_rules: Option<serde_json::Value>,

    /// Legacy top-level rule location, kept raw until extraction.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "visible_when")]
    pub visible_when: Option<serde_json::Value>,
}

impl Question {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            question_type: None,
            settings: serde_json::Value::Null,
            visibility_rules: None,
            visible_when: None,
        }
    }
}

/// One page of questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Page {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            title: String::new(),
            questions,
        }
    }
}

/// The full survey document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Survey {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Survey {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            title: String::new(),
            pages,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SurveyParseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SurveyParseError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Looks a question up by id across all pages.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.pages
            .iter()
            .flat_map(|page| page.questions.iter())
            .find(|question| question.id == question_id)
    }

    pub fn question_mut(&mut self, question_id: &str) -> Option<&mut Question> {
        self.pages
            .iter_mut()
            .flat_map(|page| page.questions.iter_mut())
            .find(|question| question.id == question_id)
    }

    /// The page index a question lives on, if it exists.
    pub fn page_index_of(&self, question_id: &str) -> Option<usize> {
        self.pages.iter().position(|page| {
            page.questions
                .iter()
                .any(|question| question.id == question_id)
        })
    }
}

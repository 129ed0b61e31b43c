//! The respondent-facing survey session.
//!
//! `SurveySession` owns the answers map and the navigation state (current
//! page, visited-page history, finished flag) and re-runs the pure evaluator
//! on every interaction. It performs no I/O; persistence of in-progress
//! sessions belongs to the surrounding application.

use crate::answer::{AnswerSheet, AnswerValue};
use crate::evaluator::{ResolvedAction, is_visible, resolve_action};
use crate::survey::{Page, Question, Survey, extract_rules};

/// A running respondent session over one survey.
#[derive(Debug, Clone)]
pub struct SurveySession {
    survey: Survey,
    answers: AnswerSheet,
    current_page: usize,
    visited: Vec<usize>,
    finished: bool,
}

impl SurveySession {
    pub fn new(survey: Survey) -> Self {
        let finished = survey.pages.is_empty();
        let visited = if finished { Vec::new() } else { vec![0] };
        Self {
            survey,
            answers: AnswerSheet::new(),
            current_page: 0,
            visited,
            finished,
        }
    }

    /// Resume a session with previously collected answers.
    pub fn with_answers(survey: Survey, answers: AnswerSheet) -> Self {
        let mut session = Self::new(survey);
        session.answers = answers;
        session
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.survey.pages.get(self.current_page)
    }

    /// The pages navigated through so far, in visit order. Drives the
    /// progress-dot rendering in the UI.
    pub fn visited(&self) -> &[usize] {
        &self.visited
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The active page's questions that are visible under the current
    /// answers. Rule sets are re-extracted and re-evaluated on every call;
    /// no visibility is cached across renders.
    pub fn visible_questions(&self) -> Vec<&Question> {
        self.current_page()
            .map(|page| {
                page.questions
                    .iter()
                    .filter(|question| is_visible(&extract_rules(question), &self.answers))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Records an answer and applies any branching action it triggers.
    ///
    /// The answer replaces the previous value for the question. Branching is
    /// resolved against the just-answered question's own rule set; when an
    /// action fires, the session navigates (or finishes) and the action is
    /// returned so the caller can react.
    pub fn record_answer(
        &mut self,
        question_id: &str,
        value: impl Into<AnswerValue>,
    ) -> Option<ResolvedAction> {
        let value = value.into();
        self.answers.record(question_id, value.clone());

        let question = self.survey.question(question_id)?;
        let rules = extract_rules(question);
        let action = resolve_action(question_id, &rules, &value, self.survey.page_count())?;

        self.goto(action.page_index());
        if action.ends_survey() {
            self.finished = true;
        }
        Some(action)
    }

    /// Moves to the next page, finishing the session when already on the
    /// last one. Returns whether a page change happened.
    pub fn advance(&mut self) -> bool {
        if self.current_page + 1 < self.survey.page_count() {
            self.goto(self.current_page + 1);
            true
        } else {
            self.finished = true;
            false
        }
    }

    /// Moves back one page, if possible.
    pub fn retreat(&mut self) -> bool {
        if self.current_page > 0 {
            self.goto(self.current_page - 1);
            true
        } else {
            false
        }
    }

    fn goto(&mut self, page_index: usize) {
        self.current_page = page_index;
        if self.visited.last() != Some(&page_index) {
            self.visited.push(page_index);
        }
    }
}

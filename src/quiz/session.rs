//! Quiz session state machine.
//!
//! A session owns a fixed, non-empty sequence of questions, a cursor into
//! it and the outcome of every question. Starting another quiz means
//! building another session; a session is never re-targeted.

use log::debug;

use super::error::UsageError;
use super::outcome::{AnswerResult, Outcome, ResultTracker};
use crate::models::QuestionRecord;

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    current: usize,
    results: ResultTracker,
}

impl QuizSession {
    /// Starts a session at the first question with every outcome unanswered.
    pub fn start(questions: Vec<QuestionRecord>) -> Result<Self, UsageError> {
        if questions.is_empty() {
            return Err(UsageError::EmptyQuestionSet);
        }

        debug!("session started with {} questions", questions.len());
        let results = ResultTracker::new(questions.len());
        Ok(Self {
            questions,
            current: 0,
            results,
        })
    }

    pub fn current(&self) -> &QuestionRecord {
        &self.questions[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Jumps to `index`. Outcomes are left untouched.
    pub fn go_to(&mut self, index: usize) -> Result<(), UsageError> {
        if index >= self.questions.len() {
            return Err(UsageError::OutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        if !self.is_first() {
            self.current -= 1;
        }
    }

    /// Checks `selected` against the current question's answer.
    ///
    /// The returned result always reflects the comparison; a question that
    /// is already correct stays correct either way.
    pub fn submit_answer(&mut self, selected: &str) -> AnswerResult {
        let result = if self.current().is_correct(selected) {
            AnswerResult::Correct
        } else {
            AnswerResult::Wrong
        };

        let outcome = self.results.record(self.current, result);
        debug!(
            "question {} answered {:?}: {:?} -> {:?}",
            self.current + 1,
            selected,
            result,
            outcome
        );
        result
    }

    pub fn result_for(&self, index: usize) -> Outcome {
        self.results.get(index)
    }

    pub fn all_results(&self) -> &[Outcome] {
        self.results.outcomes()
    }

    /// Whether the current question has been answered correctly.
    pub fn is_locked(&self) -> bool {
        self.results.get(self.current).is_locked()
    }

    /// Questions answered correctly. Wrong answers never count as completed.
    pub fn completed_count(&self) -> usize {
        self.results.count(Outcome::Correct)
    }

    /// `(current + 1) / len`, for progress display.
    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / self.questions.len() as f64
    }
}

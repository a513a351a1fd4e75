//! Per-question answering status.

/// Result of comparing one answer with the correct label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerResult {
    Correct,
    Wrong,
}

/// Answering status of one question.
///
/// `Correct` is absorbing: once reached it is never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Unanswered,
    /// Answered wrongly at least once; the learner may retry.
    Wrong,
    /// Answered correctly; the question is locked.
    Correct,
}

impl Outcome {
    /// Applies an answer result to this outcome.
    pub fn apply(self, result: AnswerResult) -> Outcome {
        match (self, result) {
            (Outcome::Correct, _) => Outcome::Correct,
            (_, AnswerResult::Correct) => Outcome::Correct,
            (_, AnswerResult::Wrong) => Outcome::Wrong,
        }
    }

    pub fn is_locked(self) -> bool {
        self == Outcome::Correct
    }
}

/// Outcomes for every question of a session, indexed by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTracker {
    outcomes: Vec<Outcome>,
}

impl ResultTracker {
    pub fn new(len: usize) -> Self {
        Self {
            outcomes: vec![Outcome::Unanswered; len],
        }
    }

    /// Outcome at `index`; positions past the end read as unanswered.
    pub fn get(&self, index: usize) -> Outcome {
        self.outcomes.get(index).copied().unwrap_or_default()
    }

    /// Records an answer and returns the resulting outcome.
    pub fn record(&mut self, index: usize, result: AnswerResult) -> Outcome {
        let slot = &mut self.outcomes[index];
        *slot = slot.apply(result);
        *slot
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|o| **o == outcome).count()
    }

    pub fn reset(&mut self) {
        self.outcomes.fill(Outcome::Unanswered);
    }
}

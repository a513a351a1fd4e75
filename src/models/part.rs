use super::QuestionRecord;

/// Contiguous slice of a module's questions used as one study unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// 1-based sequence number.
    pub number: usize,
    pub label: String,
    pub questions: Vec<QuestionRecord>,
}

impl Part {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

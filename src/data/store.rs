use crate::models::{Part, QuestionRecord};
use crate::quiz::partition;

/// Flat, ordered records of one module or custom test.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<QuestionRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    /// Concatenates several loaded sources, keeping their order.
    pub fn concat<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Vec<QuestionRecord>>,
    {
        Self {
            records: sources.into_iter().flatten().collect(),
        }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn partition(&self, chunk_size: usize) -> Vec<Part> {
        partition(&self.records, chunk_size)
    }

    pub fn into_records(self) -> Vec<QuestionRecord> {
        self.records
    }
}

use thiserror::Error;

/// Invalid use of the quiz core. The UI is expected to prevent these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("cannot start a quiz without questions")]
    EmptyQuestionSet,
    #[error("question index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
    #[error("no question source selected")]
    NoSelection,
    #[error("question count must be a positive integer")]
    InvalidCount,
}

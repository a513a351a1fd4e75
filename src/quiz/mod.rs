//! Quiz core: partitioning, shuffling and the session state machine.

mod custom_test;
mod error;
mod outcome;
mod partition;
mod session;
mod shuffle;

pub use custom_test::{
    assemble_custom_test, load_pool, parse_count, sample, CustomTestRequest,
};
pub use error::UsageError;
pub use outcome::{AnswerResult, Outcome, ResultTracker};
pub use partition::partition;
pub use session::QuizSession;
pub use shuffle::shuffle;

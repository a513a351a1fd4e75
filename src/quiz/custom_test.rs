//! Custom tests: a random sample drawn across several modules.

use std::path::PathBuf;

use futures_util::future::try_join_all;
use log::info;
use rand::Rng;

use super::error::UsageError;
use super::shuffle::shuffle;
use crate::data::{LoadError, QuestionSource, RecordStore};
use crate::models::QuestionRecord;
use crate::QuizError;

/// Which sources to sample from and how many questions to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTestRequest {
    pub sources: Vec<PathBuf>,
    pub count: usize,
}

impl CustomTestRequest {
    pub fn new(sources: Vec<PathBuf>, count: usize) -> Result<Self, UsageError> {
        if sources.is_empty() {
            return Err(UsageError::NoSelection);
        }
        if count == 0 {
            return Err(UsageError::InvalidCount);
        }
        Ok(Self { sources, count })
    }
}

/// Parses a user-typed question count.
pub fn parse_count(input: &str) -> Result<usize, UsageError> {
    match input.trim().parse::<usize>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(UsageError::InvalidCount),
    }
}

/// Loads every source concurrently. The first failure aborts the whole load.
pub async fn load_pool(
    source: &dyn QuestionSource,
    paths: &[PathBuf],
) -> Result<RecordStore, LoadError> {
    let loaded = try_join_all(paths.iter().map(|path| source.load(path))).await?;
    Ok(RecordStore::concat(loaded))
}

/// Shuffles the pool and keeps at most `count` questions.
pub fn sample<R: Rng + ?Sized>(
    pool: RecordStore,
    count: usize,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    let mut questions = pool.into_records();
    shuffle(&mut questions, rng);
    questions.truncate(count);
    questions
}

/// Builds the question list of a custom test.
pub async fn assemble_custom_test(
    source: &dyn QuestionSource,
    request: &CustomTestRequest,
) -> Result<Vec<QuestionRecord>, QuizError> {
    let pool = load_pool(source, &request.sources).await?;
    let pool_size = pool.len();
    let questions = sample(pool, request.count, &mut rand::rng());

    info!(
        "Custom test assembled: {} of {} questions from {} sources",
        questions.len(),
        pool_size,
        request.sources.len()
    );
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionLabel;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pool(n: usize) -> RecordStore {
        RecordStore::new(
            (0..n)
                .map(|i| {
                    QuestionRecord::new(
                        format!("Q{}", i),
                        [Some("x".into()), Some("y".into()), None, None],
                        OptionLabel::A,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_request_validation() {
        assert_eq!(
            CustomTestRequest::new(Vec::new(), 10),
            Err(UsageError::NoSelection)
        );
        assert_eq!(
            CustomTestRequest::new(vec![PathBuf::from("a.csv")], 0),
            Err(UsageError::InvalidCount)
        );
        assert!(CustomTestRequest::new(vec![PathBuf::from("a.csv")], 1).is_ok());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("50"), Ok(50));
        assert_eq!(parse_count(" 7 "), Ok(7));
        assert_eq!(parse_count("0"), Err(UsageError::InvalidCount));
        assert_eq!(parse_count("-3"), Err(UsageError::InvalidCount));
        assert_eq!(parse_count(""), Err(UsageError::InvalidCount));
        assert_eq!(parse_count("ten"), Err(UsageError::InvalidCount));
    }

    #[test]
    fn test_sample_truncates_to_unique_subset() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = pool(200);
        let questions = sample(original.clone(), 50, &mut rng);

        assert_eq!(questions.len(), 50);
        let prompts: HashSet<_> = questions.iter().map(|q| q.prompt.clone()).collect();
        assert_eq!(prompts.len(), 50);
        assert!(questions.iter().all(|q| original.records().contains(q)));
        assert_ne!(questions.as_slice(), &original.records()[..50]);
    }

    #[test]
    fn test_sample_larger_than_pool() {
        let mut rng = StdRng::seed_from_u64(9);
        let questions = sample(pool(20), 100, &mut rng);

        assert_eq!(questions.len(), 20);
        let prompts: HashSet<_> = questions.iter().map(|q| q.prompt.clone()).collect();
        assert_eq!(prompts.len(), 20);
    }
}

//! Question sources.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::info;
use thiserror::Error;

use super::loader::{parse_questions_str, ParseError};
use crate::models::QuestionRecord;

/// Failure to produce the records of one source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read at all.
    #[error("failed to read {}: {source}", .path.display())]
    Fetch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The source was read but contains malformed rows.
    #[error("malformed data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Fetch { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Something that turns a source identifier into question records.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn load(&self, path: &Path) -> Result<Vec<QuestionRecord>, LoadError>;
}

/// Reads CSV question banks from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvFileSource;

#[async_trait]
impl QuestionSource for CsvFileSource {
    async fn load(&self, path: &Path) -> Result<Vec<QuestionRecord>, LoadError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Fetch {
                path: path.to_path_buf(),
                source,
            })?;

        let questions = parse_questions_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded {} questions from {}", questions.len(), path.display());
        Ok(questions)
    }
}

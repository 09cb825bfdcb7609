use std::path::Path;

use thiserror::Error;

/// Failures raised by the loading and recommendation stages
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("personal ratings share no titles with the critic ratings")]
    InsufficientOverlap,

    #[error("need {required} critics with comparable ratings, found {available}")]
    NotEnoughCritics { required: usize, available: usize },

    #[error("movie catalog has no entries")]
    EmptyCatalog,

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type RecommendResult<T> = Result<T, RecommendError>;

impl RecommendError {
    pub fn malformed(message: impl Into<String>) -> Self {
        RecommendError::MalformedInput(message.into())
    }
}

/// Add context to file open errors
pub fn open_context(table: &str, path: &Path) -> String {
    format!("Failed to open {} file: {}", table, path.display())
}

/// Add context to table parse errors
pub fn parse_context(table: &str, path: &Path) -> String {
    format!("Failed to parse {} file: {}", table, path.display())
}
